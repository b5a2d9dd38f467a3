//! Abstract syntax tree of propositional formulas.
//!
//! [`Expr`] is a closed enum: every variant holds exactly the children it
//! logically has, so there is no such thing as a missing operand.
//! [`Expr::Const`] never comes out of the parser; it is introduced by the
//! [simplifier][crate::simplify].

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::str::FromStr;

use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Var(String),
    Const(bool),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Implies(Box<Expr>, Box<Expr>),
    Iff(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn constant(value: bool) -> Self {
        Expr::Const(value)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: Self) -> Self {
        Expr::Not(Box::new(operand))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Expr::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Expr::Iff(Box::new(lhs), Box::new(rhs))
    }
}

impl Expr {
    /// Human-readable name of the node kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Var(_) => "Variable",
            Expr::Const(_) => "Literal",
            Expr::Not(_) => "Not",
            Expr::And(_, _) => "And",
            Expr::Or(_, _) => "Or",
            Expr::Implies(_, _) => "Implies",
            Expr::Iff(_, _) => "Iff",
        }
    }

    /// Operator symbol of a connective, `None` for leaves.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Expr::Var(_) | Expr::Const(_) => None,
            Expr::Not(_) => Some("!"),
            Expr::And(_, _) => Some("*"),
            Expr::Or(_, _) => Some("+"),
            Expr::Implies(_, _) => Some("=>"),
            Expr::Iff(_, _) => Some("<=>"),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Var(_) | Expr::Const(_))
    }

    /// Returns the variable name if this is a [`Expr::Var`] leaf.
    pub fn as_var(&self) -> Option<&str> {
        match self {
            Expr::Var(name) => Some(name),
            _ => None,
        }
    }

    /// Children in left-to-right order.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Var(_) | Expr::Const(_) => vec![],
            Expr::Not(e) => vec![e],
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Implies(l, r) | Expr::Iff(l, r) => vec![l, r],
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        self.fold(&mut |layer: Layer<'_, usize>| match layer {
            Layer::Var(_) | Layer::Const(_) => 1,
            Layer::Not(e) => 1 + e,
            Layer::And(l, r) | Layer::Or(l, r) | Layer::Implies(l, r) | Layer::Iff(l, r) => 1 + l + r,
        })
    }

    /// Depth of the tree (0 for leaves).
    pub fn depth(&self) -> usize {
        self.fold(&mut |layer: Layer<'_, usize>| match layer {
            Layer::Var(_) | Layer::Const(_) => 0,
            Layer::Not(e) => 1 + e,
            Layer::And(l, r) | Layer::Or(l, r) | Layer::Implies(l, r) | Layer::Iff(l, r) => 1 + l.max(r),
        })
    }
}

/// One layer of an [`Expr`] whose children were already reduced to `A`.
#[derive(Debug)]
pub enum Layer<'a, A> {
    Var(&'a str),
    Const(bool),
    Not(A),
    And(A, A),
    Or(A, A),
    Implies(A, A),
    Iff(A, A),
}

impl<'a, A> Layer<'a, A> {
    #[inline(always)]
    pub fn fmap<B, F>(self, mut f: F) -> Layer<'a, B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Layer::Var(name) => Layer::Var(name),
            Layer::Const(value) => Layer::Const(value),
            Layer::Not(a) => Layer::Not(f(a)),
            Layer::And(a, b) => Layer::And(f(a), f(b)),
            Layer::Or(a, b) => Layer::Or(f(a), f(b)),
            Layer::Implies(a, b) => Layer::Implies(f(a), f(b)),
            Layer::Iff(a, b) => Layer::Iff(f(a), f(b)),
        }
    }
}

impl Expr {
    fn layer(&self) -> Layer<'_, &Expr> {
        match self {
            Expr::Var(name) => Layer::Var(name),
            Expr::Const(value) => Layer::Const(*value),
            Expr::Not(e) => Layer::Not(e),
            Expr::And(l, r) => Layer::And(l, r),
            Expr::Or(l, r) => Layer::Or(l, r),
            Expr::Implies(l, r) => Layer::Implies(l, r),
            Expr::Iff(l, r) => Layer::Iff(l, r),
        }
    }

    /// Bottom-up fold: children are collapsed first, then `collapse` sees the
    /// current node with its children replaced by their results.
    pub fn fold<'a, R, F>(&'a self, collapse: &mut F) -> R
    where
        F: FnMut(Layer<'a, R>) -> R,
    {
        let layer = self.layer().fmap(|child| child.fold(collapse));
        collapse(layer)
    }
}

/// Binding strength used for printing with minimal parentheses.
fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Implies(_, _) | Expr::Iff(_, _) => 1,
        Expr::Or(_, _) => 2,
        Expr::And(_, _) => 3,
        Expr::Not(_) | Expr::Var(_) | Expr::Const(_) => 4,
    }
}

struct Operand<'a> {
    expr: &'a Expr,
    parens: bool,
}

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parens {
            write!(f, "({})", self.expr)
        } else {
            write!(f, "{}", self.expr)
        }
    }
}

/// Prints the formula in input notation.
///
/// For trees produced by the parser the output parses back to the same tree.
/// [`Expr::Const`] prints as `true`/`false`, which the parser reads as a
/// (reserved) variable name, so trees containing literals do not round-trip.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = precedence(self);
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Const(value) => write!(f, "{}", value),
            Expr::Not(e) => {
                let operand = Operand {
                    expr: e,
                    parens: precedence(e) < prec,
                };
                write!(f, "!{}", operand)
            }
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Implies(l, r) | Expr::Iff(l, r) => {
                // Left-associative: a right operand on the same level needs parentheses.
                let lhs = Operand {
                    expr: l,
                    parens: precedence(l) < prec,
                };
                let rhs = Operand {
                    expr: r,
                    parens: precedence(r) <= prec,
                };
                let op = self.symbol().unwrap_or_default();
                write!(f, "{} {} {}", lhs, op, rhs)
            }
        }
    }
}

impl FromStr for Expr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::and(self, rhs)
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::or(self, rhs)
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::Not(Box::new(self))
    }
}
