//! The compilation pipeline.
//!
//! ```text
//! text -> tokens -> AST -> (variables, validated AST) -> simplified AST
//!      -> { truth table, connector count, negation count }
//! ```
//!
//! Every stage is a pure function; nothing here performs I/O.
//!
//! # Examples
//!
//! ```
//! use lgc_rs::compile::compile;
//!
//! let c = compile("a => b").unwrap();
//! assert_eq!(c.variables, ["a", "b"]);
//! assert_eq!(c.truth_table.results(), [true, false, true, true]);
//! assert_eq!(c.connector_count, 1);
//! ```

use log::debug;

use crate::ast::Expr;
use crate::debug::dump;
use crate::error::CompileError;
use crate::eval::evaluate;
use crate::metrics::{connector_count, negation_count};
use crate::parser::{Parser, DEFAULT_MAX_DEPTH};
use crate::simplify::simplify;
use crate::table::TruthTable;
use crate::transpile::transpile;
use crate::validate::validate;

/// Options for [`compile_with`].
///
/// ```
/// use lgc_rs::compile::{compile_with, CompileOptions};
///
/// let options = CompileOptions {
///     simplify: false,
///     ..CompileOptions::default()
/// };
/// let c = compile_with("!!a", &options).unwrap();
/// assert_eq!(c.connector_count, 2);
/// ```
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Run the simplification pass before evaluating (default: true)
    pub simplify: bool,
    /// Deepest nesting the parser accepts (default: [`DEFAULT_MAX_DEPTH`])
    pub max_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            simplify: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Everything produced by a successful compilation.
#[derive(Debug, Clone)]
pub struct Compilation {
    /// Variables in truth-table bit order.
    pub variables: Vec<String>,
    /// Table of the evaluated (possibly simplified) tree.
    pub truth_table: TruthTable,
    /// Connectors in the evaluated tree.
    pub connector_count: usize,
    /// Negations in the tree as parsed.
    pub negation_count: usize,
    /// Constructor notation of the tree as parsed.
    pub transpiled: String,
    /// Indented dump of the tree as parsed.
    pub ast_dump: String,
    /// The tree as parsed.
    pub original: Expr,
    /// The tree that was evaluated.
    pub simplified: Expr,
}

/// Compiles a formula with default options.
pub fn compile(expression: &str) -> Result<Compilation, CompileError> {
    compile_with(expression, &CompileOptions::default())
}

pub fn compile_with(expression: &str, options: &CompileOptions) -> Result<Compilation, CompileError> {
    let original = Parser::with_max_depth(expression, options.max_depth)?.parse()?;
    let variables = validate(&original)?;
    debug!("compile: variables = {:?}", variables);

    let negation_count = negation_count(&original);
    let transpiled = transpile(&original);
    let ast_dump = dump(&original);

    let simplified = if options.simplify {
        simplify(original.clone())
    } else {
        original.clone()
    };
    debug!("compile: evaluating {}", simplified);

    let truth_table = evaluate(&simplified, &variables);
    let connector_count = connector_count(&simplified);

    Ok(Compilation {
        variables,
        truth_table,
        connector_count,
        negation_count,
        transpiled,
        ast_dump,
        original,
        simplified,
    })
}
