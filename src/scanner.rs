//! Lexical scanner: turns formula text into a lazy sequence of [`Token`]s.
//!
//! | Input          | Token                    |
//! |----------------|--------------------------|
//! | letters/digits | [`TokenKind::Variable`]  |
//! | `*`            | [`TokenKind::And`]       |
//! | `+`            | [`TokenKind::Or`]        |
//! | `!`            | [`TokenKind::Not`]       |
//! | `=>`           | [`TokenKind::Implies`]   |
//! | `<=>`          | [`TokenKind::Iff`]       |
//! | `(` `)`        | parentheses              |
//!
//! Whitespace is skipped. An `=` or `<` that does not complete its operator
//! is an [`LexError::IncompleteOperator`]; no character is ever dropped silently.

use log::trace;

use crate::error::LexError;
use crate::token::{Token, TokenKind};

pub struct Scanner<'a> {
    rest: &'a str,
    /// Character index of the next unread character.
    position: usize,
    /// Set once the iterator has yielded its last item.
    done: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            position: 0,
            done: false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        self.position += 1;
        Some(c)
    }

    /// Scans the next token.
    ///
    /// After the input is exhausted, every call returns [`TokenKind::EndOfInput`].
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            let start = self.position;
            let Some(c) = self.bump() else {
                return Ok(Token::end_of_input(start));
            };

            let kind = match c {
                c if c.is_whitespace() => continue,
                c if c.is_alphanumeric() => return Ok(self.variable(c, start)),
                '*' => TokenKind::And,
                '+' => TokenKind::Or,
                '!' => TokenKind::Not,
                '(' => TokenKind::LeftParen,
                ')' => TokenKind::RightParen,
                '=' => {
                    self.finish_operator("=>", start)?;
                    TokenKind::Implies
                }
                '<' => {
                    self.finish_operator("<=>", start)?;
                    TokenKind::Iff
                }
                found => return Err(LexError::UnexpectedCharacter { found, position: start }),
            };

            let token = Token::symbol(kind, start);
            trace!("token {:?} at {}", token.kind, start);
            return Ok(token);
        }
    }

    fn variable(&mut self, first: char, start: usize) -> Token {
        let mut name = String::from(first);
        while let Some(c) = self.peek() {
            if !c.is_alphanumeric() {
                break;
            }
            name.push(c);
            self.bump();
        }
        trace!("token Variable({}) at {}", name, start);
        Token::new(TokenKind::Variable, name, start)
    }

    /// Consumes the rest of a multi-character operator whose first character was already read.
    fn finish_operator(&mut self, expected: &'static str, start: usize) -> Result<(), LexError> {
        let mut chars = expected.chars();
        let mut found: String = chars.next().into_iter().collect();

        for want in chars {
            match self.peek() {
                Some(c) if c == want => {
                    found.push(c);
                    self.bump();
                }
                other => {
                    found.extend(other);
                    return Err(LexError::IncompleteOperator {
                        expected,
                        found,
                        position: start,
                    });
                }
            }
        }

        Ok(())
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to, but not including, [`TokenKind::EndOfInput`].
    /// Stops after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_end() => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Scans the whole input, including the final [`TokenKind::EndOfInput`] token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        let end = token.is_end();
        tokens.push(token);
        if end {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_all_token_kinds() {
        use TokenKind::*;
        assert_eq!(
            kinds("a * b + !c => (d <=> e)"),
            vec![
                Variable, And, Variable, Or, Not, Variable, Implies, LeftParen, Variable, Iff, Variable, RightParen,
                EndOfInput
            ]
        );
    }

    #[test]
    fn test_variables_are_maximal_runs() {
        let tokens = tokenize("foo12*x  9bar").unwrap();
        assert_eq!(tokens[0].text, "foo12");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].kind, TokenKind::And);
        assert_eq!(tokens[2].text, "x");
        assert_eq!(tokens[3].text, "9bar");
        assert_eq!(tokens[3].position, 9);
        assert!(tokens[4].is_end());
        assert_eq!(tokens[4].position, 13);
    }

    #[test]
    fn test_operators_without_spaces() {
        let tokens = tokenize("a=>b<=>c").unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "=>", "b", "<=>", "c", ""]);
        assert_eq!(tokens[3].position, 4);
    }

    #[test]
    fn test_unicode_positions_count_characters() {
        let tokens = tokenize("ä * β").unwrap();
        assert_eq!(tokens[0].text, "ä");
        assert_eq!(tokens[1].position, 2);
        assert_eq!(tokens[2].text, "β");
        assert_eq!(tokens[2].position, 4);
    }

    #[test]
    fn test_whitespace_and_newlines() {
        assert_eq!(kinds("  \n\t a \r\n"), vec![TokenKind::Variable, TokenKind::EndOfInput]);
        assert_eq!(kinds(""), vec![TokenKind::EndOfInput]);
    }

    #[test]
    fn test_end_of_input_repeats() {
        let mut scanner = Scanner::new("a");
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Variable);
        assert!(scanner.next_token().unwrap().is_end());
        assert!(scanner.next_token().unwrap().is_end());
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(
            tokenize("a # b"),
            Err(LexError::UnexpectedCharacter { found: '#', position: 2 })
        );
        assert_eq!(
            tokenize("a > b"),
            Err(LexError::UnexpectedCharacter { found: '>', position: 2 })
        );
    }

    #[test]
    fn test_incomplete_implies() {
        assert_eq!(
            tokenize("a = b"),
            Err(LexError::IncompleteOperator {
                expected: "=>",
                found: "= ".to_string(),
                position: 2,
            })
        );
        assert_eq!(
            tokenize("a ="),
            Err(LexError::IncompleteOperator {
                expected: "=>",
                found: "=".to_string(),
                position: 2,
            })
        );
    }

    #[test]
    fn test_incomplete_iff() {
        assert_eq!(
            tokenize("a < b"),
            Err(LexError::IncompleteOperator {
                expected: "<=>",
                found: "< ".to_string(),
                position: 2,
            })
        );
        assert_eq!(
            tokenize("a <=b"),
            Err(LexError::IncompleteOperator {
                expected: "<=>",
                found: "<=b".to_string(),
                position: 2,
            })
        );
        assert_eq!(
            tokenize("a<="),
            Err(LexError::IncompleteOperator {
                expected: "<=>",
                found: "<=".to_string(),
                position: 1,
            })
        );
    }

    #[test]
    fn test_iterator_is_lazy_and_stops_on_error() {
        let mut scanner = Scanner::new("a * # b");
        assert_eq!(scanner.next().unwrap().unwrap().text, "a");
        assert_eq!(scanner.next().unwrap().unwrap().kind, TokenKind::And);
        assert!(scanner.next().unwrap().is_err());
        assert!(scanner.next().is_none());

        let tokens: Result<Vec<_>, _> = Scanner::new("x + y").collect();
        assert_eq!(tokens.unwrap().len(), 3);
    }
}
