//! Debug utilities for inspecting formula trees.
//!
//! This module provides the indented AST dump reported by the compiler and a
//! few helpers that are mostly useful in tests.

use std::fmt;

use crate::ast::Expr;
use crate::table::assignment;

/// Information about a single AST node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    /// Distance from the root
    pub depth: usize,
    /// Node kind name, e.g. `And`
    pub kind: &'static str,
    /// Variable name, operator symbol, or literal value
    pub value: String,
}

impl fmt::Display for NodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}: {}", "  ".repeat(self.depth), self.kind, self.value)
    }
}

impl NodeInfo {
    fn of(expr: &Expr, depth: usize) -> Self {
        let value = match expr {
            Expr::Var(name) => name.clone(),
            Expr::Const(value) => value.to_string(),
            _ => expr.symbol().unwrap_or_default().to_string(),
        };
        NodeInfo {
            depth,
            kind: expr.kind_name(),
            value,
        }
    }
}

/// Flattened pre-order view of an AST.
#[derive(Debug, Clone)]
pub struct AstTree {
    pub nodes: Vec<NodeInfo>,
}

impl fmt::Display for AstTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{}", node)?;
        }
        Ok(())
    }
}

/// Collects all nodes in pre-order (parent, then children left to right).
pub fn debug_tree(root: &Expr) -> AstTree {
    let mut nodes = Vec::new();
    let mut stack = vec![(root, 0)];

    while let Some((expr, depth)) = stack.pop() {
        nodes.push(NodeInfo::of(expr, depth));
        // Push in reverse so the left child is visited first.
        for child in expr.children().into_iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    AstTree { nodes }
}

/// Indented listing of the tree, one `Kind: value` line per node.
///
/// ```text
/// And: *
///   Variable: a
///   Not: !
///     Variable: b
/// ```
pub fn dump(root: &Expr) -> String {
    debug_tree(root).to_string()
}

/// Checks `expr` against a reference function for every assignment of `variables`.
///
/// The reference function receives the values in `variables` order.
/// Returns the failing `(assignment, expected, actual)` triples.
pub fn verify_truth_table(
    expr: &Expr,
    variables: &[String],
    expected_fn: impl Fn(&[bool]) -> bool,
) -> Vec<(Vec<bool>, bool, bool)> {
    let mut failures = Vec::new();
    let n = variables.len();

    for bits in 0..(1usize << n) {
        let values: Vec<bool> = (0..n).map(|i| (bits >> i) & 1 == 1).collect();
        let actual = expr.eval(&assignment(variables, bits));
        let expected = expected_fn(&values);

        if actual != expected {
            failures.push((values, expected, actual));
        }
    }

    failures
}
