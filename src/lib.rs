//! # lgc-rs: a propositional logic compiler
//!
//! **`lgc-rs`** turns a propositional formula written in a small textual
//! language into its complete truth table, along with a few structural
//! metrics and alternative renderings of the formula.
//!
//! ## The language
//!
//! | Syntax    | Meaning                   | Precedence |
//! |-----------|---------------------------|------------|
//! | `!a`      | negation                  | highest    |
//! | `a * b`   | conjunction               |            |
//! | `a + b`   | disjunction               |            |
//! | `a => b`  | material implication      | lowest     |
//! | `a <=> b` | biconditional             | lowest     |
//!
//! Variables are runs of letters and digits. Parentheses group, whitespace
//! (including newlines) is ignored. Binary operators associate to the left.
//!
//! ## Basic Usage
//!
//! ```rust
//! use lgc_rs::compile::compile;
//!
//! let c = compile("!(p * q) => r").unwrap();
//!
//! assert_eq!(c.variables, ["p", "q", "r"]);
//! assert_eq!(c.truth_table.len(), 8);
//! assert_eq!(c.connector_count, 3);
//! assert_eq!(c.negation_count, 1);
//! ```
//!
//! ## Pipeline
//!
//! - **[`scanner`]**: text to [`Token`][crate::token::Token]s.
//! - **[`parser`]**: recursive descent from tokens to an [`Expr`][crate::ast::Expr].
//! - **[`validate`]**: checks variable names and collects the sorted variable set.
//! - **[`simplify`]**: one bottom-up pass of local rewrites.
//! - **[`eval`]**: brute-force evaluation into a [`TruthTable`][crate::table::TruthTable].
//! - **[`metrics`]**: connector and negation counts.
//! - **[`compile`]**: runs all of the above.
//!
//! Output helpers live in [`render`], [`transpile`] and [`debug`].

pub mod ast;
pub mod compile;
pub mod debug;
pub mod error;
pub mod eval;
pub mod metrics;
pub mod parser;
pub mod render;
pub mod scanner;
pub mod simplify;
pub mod table;
pub mod token;
pub mod transpile;
pub mod validate;

pub use ast::Expr;
pub use compile::{compile, compile_with, Compilation, CompileOptions};
pub use error::CompileError;
pub use table::TruthTable;
