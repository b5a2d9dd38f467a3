//! Structural metrics of a formula.

use crate::ast::{Expr, Layer};

/// Counts connector nodes: every `And`, `Or`, `Not`, `Implies` and `Iff`.
/// Variable and literal leaves count zero.
pub fn connector_count(expr: &Expr) -> usize {
    expr.fold(&mut |layer: Layer<'_, usize>| match layer {
        Layer::Var(_) | Layer::Const(_) => 0,
        Layer::Not(a) => 1 + a,
        Layer::And(a, b) | Layer::Or(a, b) | Layer::Implies(a, b) | Layer::Iff(a, b) => 1 + a + b,
    })
}

/// Counts `Not` nodes.
pub fn negation_count(expr: &Expr) -> usize {
    expr.fold(&mut |layer: Layer<'_, usize>| match layer {
        Layer::Var(_) | Layer::Const(_) => 0,
        Layer::Not(a) => 1 + a,
        Layer::And(a, b) | Layer::Or(a, b) | Layer::Implies(a, b) | Layer::Iff(a, b) => a + b,
    })
}
