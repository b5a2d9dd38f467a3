//! Tokens of the formula language.

use std::fmt;

/// The kind of a [`Token`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// A maximal run of letters and digits.
    Variable,
    /// `*`
    And,
    /// `+`
    Or,
    /// `!`
    Not,
    /// `=>`
    Implies,
    /// `<=>`
    Iff,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    EndOfInput,
}

impl TokenKind {
    /// Returns the fixed spelling of operator and punctuation kinds.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            TokenKind::And => Some("*"),
            TokenKind::Or => Some("+"),
            TokenKind::Not => Some("!"),
            TokenKind::Implies => Some("=>"),
            TokenKind::Iff => Some("<=>"),
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::Variable | TokenKind::EndOfInput => None,
        }
    }

    /// Checks if this kind is a binary connective.
    pub fn is_binary_operator(self) -> bool {
        matches!(
            self,
            TokenKind::And | TokenKind::Or | TokenKind::Implies | TokenKind::Iff
        )
    }
}

/// A scanned token.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// The source text of the token (empty for [`TokenKind::EndOfInput`]).
    pub text: String,
    /// Zero-based character index of the first character.
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Creates an operator or punctuation token with its fixed spelling.
    pub fn symbol(kind: TokenKind, position: usize) -> Self {
        let text = kind.symbol().unwrap_or_default();
        Self::new(kind, text, position)
    }

    pub fn end_of_input(position: usize) -> Self {
        Self::new(TokenKind::EndOfInput, "", position)
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "end of input"),
            TokenKind::Variable => write!(f, "variable '{}'", self.text),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_tokens() {
        let t = Token::symbol(TokenKind::Iff, 3);
        assert_eq!(t.text, "<=>");
        assert_eq!(t.position, 3);
        assert!(t.kind.is_binary_operator());
        assert!(!TokenKind::Not.is_binary_operator());
        assert_eq!(TokenKind::Variable.symbol(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::new(TokenKind::Variable, "foo", 0).to_string(), "variable 'foo'");
        assert_eq!(Token::symbol(TokenKind::RightParen, 1).to_string(), "')'");
        assert_eq!(Token::end_of_input(7).to_string(), "end of input");
        assert!(Token::end_of_input(7).is_end());
    }
}
