//! Single bottom-up simplification pass.
//!
//! Children are rewritten before their parent, so a parent rule always sees
//! already-reduced operands. Rules:
//!
//! ```text
//! x * x    => x
//! x + x    => x
//! x => x   => x      (not the usual identity, which would give `true`)
//! x <=> x  => true
//! !!e      => e
//! ```
//!
//! The binary rules fire only when both operands are variable leaves with the
//! same name. No other identities are applied.

use log::debug;

use crate::ast::Expr;

/// Simplifies the tree, consuming it and returning the new root.
pub fn simplify(expr: Expr) -> Expr {
    match expr {
        Expr::Var(_) | Expr::Const(_) => expr,
        Expr::Not(e) => simplify_not(simplify(*e)),
        Expr::And(l, r) => simplify_binary(Expr::And(Box::new(simplify(*l)), Box::new(simplify(*r)))),
        Expr::Or(l, r) => simplify_binary(Expr::Or(Box::new(simplify(*l)), Box::new(simplify(*r)))),
        Expr::Implies(l, r) => simplify_binary(Expr::Implies(Box::new(simplify(*l)), Box::new(simplify(*r)))),
        Expr::Iff(l, r) => simplify_binary(Expr::Iff(Box::new(simplify(*l)), Box::new(simplify(*r)))),
    }
}

fn simplify_not(operand: Expr) -> Expr {
    match operand {
        Expr::Not(inner) => {
            debug!("!!{} => {}", inner, inner);
            *inner
        }
        _ => Expr::not(operand),
    }
}

/// Applies the same-variable rules to a node whose operands are already simplified.
fn simplify_binary(node: Expr) -> Expr {
    let name = match &node {
        Expr::And(l, r) | Expr::Or(l, r) | Expr::Implies(l, r) | Expr::Iff(l, r) => same_variable(l, r),
        _ => None,
    };
    let Some(name) = name else {
        return node;
    };

    let result = if matches!(node, Expr::Iff(_, _)) {
        Expr::Const(true)
    } else {
        Expr::Var(name)
    };
    debug!("{} => {}", node, result);
    result
}

fn same_variable(lhs: &Expr, rhs: &Expr) -> Option<String> {
    match (lhs.as_var(), rhs.as_var()) {
        (Some(a), Some(b)) if a == b => Some(a.to_string()),
        _ => None,
    }
}
