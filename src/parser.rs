//! Recursive-descent parser.
//!
//! Grammar, from the loosest to the tightest binding level:
//!
//! ```text
//! Expression  := Term (("=>" | "<=>") Term)*
//! Term        := Conjunction ("+" Conjunction)*
//! Conjunction := Factor ("*" Factor)*
//! Factor      := Variable | "!" Factor | "(" Expression ")"
//! ```
//!
//! Every level folds to the left, including `=>`: `a => b => c` is `(a => b) => c`.
//! `*` and `+` sit on separate levels, so `a + b * c` is `a + (b * c)`. Readers
//! that keep both on one level and fold left give `(a + b) * c` instead, so
//! formulas written for them may evaluate differently here.
//! The whole input must form a single expression.
//!
//! Both the tree depth and the nesting of `(` and `!` are capped at
//! [`Parser::max_depth`], so later recursive passes cannot exhaust the stack.

use log::debug;

use crate::ast::Expr;
use crate::error::ParseError;
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

/// Default limit on formula depth and nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// A parsed subtree with its depth.
struct Node {
    expr: Expr,
    depth: usize,
}

pub struct Parser<'a> {
    scanner: Scanner<'a>,
    current: Token,
    max_depth: usize,
    /// Open `(` and `!` around the current token.
    nesting: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the first token.
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        Self::with_max_depth(input, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(input: &'a str, max_depth: usize) -> Result<Self, ParseError> {
        let mut scanner = Scanner::new(input);
        let current = scanner.next_token()?;
        Ok(Self {
            scanner,
            current,
            max_depth,
            nesting: 0,
        })
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parses the whole input into a single expression.
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let node = self.expression()?;
        if !self.current.is_end() {
            return Err(ParseError::TrailingInput { found: self.current });
        }
        debug!("parsed tree of depth {}", node.depth);
        Ok(node.expr)
    }

    /// Moves to the next token and returns the previous one.
    fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.scanner.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn too_deep(&self) -> ParseError {
        ParseError::MaxDepthExceeded {
            limit: self.max_depth,
            position: self.current.position,
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.nesting += 1;
        if self.nesting > self.max_depth {
            return Err(self.too_deep());
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    fn binary(&self, make: fn(Expr, Expr) -> Expr, lhs: Node, rhs: Node) -> Result<Node, ParseError> {
        let depth = 1 + lhs.depth.max(rhs.depth);
        if depth > self.max_depth {
            return Err(self.too_deep());
        }
        Ok(Node {
            expr: make(lhs.expr, rhs.expr),
            depth,
        })
    }

    fn expression(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.term()?;
        loop {
            let make: fn(Expr, Expr) -> Expr = match self.current.kind {
                TokenKind::Implies => Expr::implies,
                TokenKind::Iff => Expr::iff,
                _ => return Ok(lhs),
            };
            self.advance()?;
            let rhs = self.term()?;
            lhs = self.binary(make, lhs, rhs)?;
        }
    }

    fn term(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.conjunction()?;
        while self.current.kind == TokenKind::Or {
            self.advance()?;
            let rhs = self.conjunction()?;
            lhs = self.binary(Expr::or, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn conjunction(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.factor()?;
        while self.current.kind == TokenKind::And {
            self.advance()?;
            let rhs = self.factor()?;
            lhs = self.binary(Expr::and, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Node, ParseError> {
        match self.current.kind {
            TokenKind::Variable => {
                let token = self.advance()?;
                Ok(Node {
                    expr: Expr::Var(token.text),
                    depth: 0,
                })
            }
            TokenKind::Not => {
                self.enter()?;
                self.advance()?;
                let operand = self.factor()?;
                self.leave();
                let depth = operand.depth + 1;
                if depth > self.max_depth {
                    return Err(self.too_deep());
                }
                Ok(Node {
                    expr: Expr::not(operand.expr),
                    depth,
                })
            }
            TokenKind::LeftParen => {
                self.enter()?;
                self.advance()?;
                let inner = self.expression()?;
                if self.current.kind != TokenKind::RightParen {
                    return Err(ParseError::ExpectedClosingParen {
                        found: self.current.clone(),
                    });
                }
                self.advance()?;
                self.leave();
                Ok(inner)
            }
            _ => Err(ParseError::UnexpectedToken {
                found: self.current.clone(),
            }),
        }
    }
}

/// Parses a formula with the default depth limit.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    Parser::new(input)?.parse()
}
