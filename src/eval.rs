//! Brute-force truth-table evaluation.
//!
//! The evaluator enumerates all 2ⁿ assignments and walks the whole tree for
//! each of them, O(2ⁿ·|AST|) in total. There is no memoization.

use log::debug;

use crate::ast::{Expr, Layer};
use crate::table::{assignment, Assignment, TruthTable};

/// Most variables whose 2ⁿ rows can be indexed by `usize`.
pub const MAX_VARIABLES: usize = usize::BITS as usize - 1;

impl Expr {
    /// Evaluates the formula under a single assignment.
    ///
    /// Variables missing from the assignment are false.
    pub fn eval(&self, values: &Assignment) -> bool {
        self.fold(&mut |layer: Layer<'_, bool>| match layer {
            Layer::Var(name) => values.get(name).copied().unwrap_or(false),
            Layer::Const(value) => value,
            Layer::Not(a) => !a,
            Layer::And(a, b) => a && b,
            Layer::Or(a, b) => a || b,
            Layer::Implies(a, b) => !a || b,
            Layer::Iff(a, b) => a == b,
        })
    }
}

/// Computes the full truth table of `expr` over `variables`.
///
/// `variables` fixes the bit order: the variable at position `j` takes bit `j`
/// of the row index.
///
/// # Panics
///
/// Panics if there are more than [`MAX_VARIABLES`] variables.
/// [`validate`][crate::validate::validate] rejects such formulas first.
pub fn evaluate(expr: &Expr, variables: &[String]) -> TruthTable {
    let n = variables.len();
    assert!(n <= MAX_VARIABLES, "Cannot enumerate 2^{} assignments", n);
    let combinations = 1usize << n;
    debug!("evaluate: {} variables, {} rows", n, combinations);

    let mut rows = Vec::with_capacity(combinations);
    let mut results = Vec::with_capacity(combinations);
    for i in 0..combinations {
        let row = assignment(variables, i);
        results.push(expr.eval(&row));
        rows.push(row);
    }

    TruthTable::new(variables.to_vec(), rows, results)
}
