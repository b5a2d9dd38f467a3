//! Error types for every stage of the compilation pipeline.
//!
//! Each stage has its own error enum, so callers can tell a bad character
//! apart from a bad token or a malformed tree. [`CompileError`] wraps them all
//! for the [`compile`][crate::compile::compile] entry point.

use thiserror::Error;

use crate::token::Token;

/// Errors produced by the [`Scanner`][crate::scanner::Scanner].
///
/// Positions are zero-based character indices into the scanned text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },

    /// A multi-character operator (`=>` or `<=>`) that was started but not finished.
    ///
    /// `found` is the text actually read from the start of the operator,
    /// including the offending character if there was one.
    #[error("incomplete operator at position {position}: expected '{expected}', found '{found}'")]
    IncompleteOperator {
        expected: &'static str,
        found: String,
        position: usize,
    },
}

impl LexError {
    /// Position of the offending input.
    pub fn position(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { position, .. } => *position,
            LexError::IncompleteOperator { position, .. } => *position,
        }
    }
}

/// Errors produced by the [`Parser`][crate::parser::Parser].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    /// An opening parenthesis without its matching `)`.
    #[error("expected closing parenthesis at position {}, found {}", .found.position, .found)]
    ExpectedClosingParen { found: Token },

    /// A token that cannot start a factor (variable, `!` or `(`).
    #[error("unexpected token {} at position {}", .found, .found.position)]
    UnexpectedToken { found: Token },

    /// Tokens left over after a complete formula.
    #[error("unexpected trailing input {} at position {}", .found, .found.position)]
    TrailingInput { found: Token },

    /// The formula nests deeper than the parser's depth limit.
    #[error("formula nested deeper than {limit} levels at position {position}")]
    MaxDepthExceeded { limit: usize, position: usize },
}

impl ParseError {
    /// Position of the offending character or token.
    pub fn position(&self) -> usize {
        match self {
            ParseError::Lex(e) => e.position(),
            ParseError::ExpectedClosingParen { found }
            | ParseError::UnexpectedToken { found }
            | ParseError::TrailingInput { found } => found.position,
            ParseError::MaxDepthExceeded { position, .. } => *position,
        }
    }
}

/// Errors produced by the [validator][crate::validate::validate].
///
/// Malformed names only come from trees assembled by hand through the
/// [`Expr`][crate::ast::Expr] constructors; the parser never produces them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SemanticError {
    /// A variable whose name is empty or not a run of letters and digits.
    #[error("malformed variable name {0:?}")]
    MalformedVariable(String),

    /// A variable named like a boolean literal.
    #[error("variable name {0:?} is reserved for boolean literals")]
    ReservedName(String),

    /// More variables than a truth table can enumerate.
    #[error("too many variables ({count}), at most {limit} are supported")]
    TooManyVariables { count: usize, limit: usize },
}

/// The pipeline stage that rejected the input.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    Lex,
    Parse,
    Semantic,
}

/// Any error that aborts a compilation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("semantic error: {0}")]
    Semantic(#[from] SemanticError),
}

impl From<LexError> for CompileError {
    fn from(e: LexError) -> Self {
        CompileError::Parse(ParseError::Lex(e))
    }
}

impl CompileError {
    /// Returns the stage that failed.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::Parse(ParseError::Lex(_)) => ErrorKind::Lex,
            CompileError::Parse(_) => ErrorKind::Parse,
            CompileError::Semantic(_) => ErrorKind::Semantic,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn test_compile_error_kind() {
        let lex: CompileError = LexError::UnexpectedCharacter { found: '#', position: 2 }.into();
        assert_eq!(lex.kind(), ErrorKind::Lex);

        let token = Token::new(TokenKind::RightParen, ")", 4);
        let parse: CompileError = ParseError::UnexpectedToken { found: token }.into();
        assert_eq!(parse.kind(), ErrorKind::Parse);

        let semantic: CompileError = SemanticError::ReservedName("true".to_string()).into();
        assert_eq!(semantic.kind(), ErrorKind::Semantic);
    }

    #[test]
    fn test_messages_carry_position() {
        let e = LexError::UnexpectedCharacter { found: '#', position: 2 };
        assert_eq!(e.to_string(), "unexpected character '#' at position 2");

        let e = LexError::IncompleteOperator {
            expected: "=>",
            found: "= ".to_string(),
            position: 5,
        };
        assert_eq!(e.position(), 5);
        assert!(e.to_string().contains("expected '=>'"));

        let e = ParseError::ExpectedClosingParen {
            found: Token::end_of_input(3),
        };
        assert_eq!(e.position(), 3);
        assert_eq!(e.to_string(), "expected closing parenthesis at position 3, found end of input");

        let e = ParseError::MaxDepthExceeded { limit: 8, position: 9 };
        assert_eq!(e.position(), 9);
        assert_eq!(e.to_string(), "formula nested deeper than 8 levels at position 9");
    }
}
