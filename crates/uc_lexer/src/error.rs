//! Lexical errors reported through the handler, and scanner misuse errors.

use crate::token::quote_lexeme;
use std::fmt;
use thiserror::Error;
use uc_core::text::{LineCol, TextSpan};

/// The kind of malformed input the scanner ran into.
///
/// The `Display` text is the message handed to error handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// No rule matches at the cursor.
    #[error("Illegal character {}", quote_char(.0))]
    IllegalCharacter(char),
    /// Opening `"` with no closing `"` before the end of input.
    #[error("Unterminated string")]
    UnterminatedString,
    /// Opening `/*` with no closing `*/` before the end of input.
    #[error("Unterminated comment")]
    UnterminatedComment,
}

/// A lexical error anchored at the start of the offending span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Bytes skipped to resynchronize.
    pub span: TextSpan,
    pub line: u32,
    pub column: u32,
}

impl LexError {
    pub fn position(&self) -> LineCol {
        LineCol::new(self.line, self.column)
    }
}

fn quote_char(ch: &char) -> String {
    quote_lexeme(ch.encode_utf8(&mut [0; 4]))
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lexical error: {} at {}:{}", self.kind, self.line, self.column)
    }
}

impl std::error::Error for LexError {}

/// Misuse of the scanner API or an unusable rule table.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scanner used before build()")]
    NotBuilt,
    #[error("build() called more than once")]
    AlreadyBuilt,
    #[error("rule `{rule}` has an empty pattern")]
    EmptyPattern { rule: &'static str },
    #[error("rule `{rule}` has an invalid pattern")]
    InvalidPattern {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("fallback rule `{rule}` refers to unknown rule `{target}`")]
    UnknownFallback {
        rule: &'static str,
        target: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_character_message() {
        assert_eq!(LexErrorKind::IllegalCharacter('@').to_string(), "Illegal character '@'");
        assert_eq!(LexErrorKind::IllegalCharacter('\'').to_string(), "Illegal character \"'\"");
        assert_eq!(LexErrorKind::IllegalCharacter('\\').to_string(), "Illegal character '\\\\'");
    }

    #[test]
    fn test_lex_error_display() {
        let error = LexError {
            kind: LexErrorKind::UnterminatedComment,
            span: TextSpan::new(3, 9),
            line: 2,
            column: 4,
        };
        assert_eq!(error.to_string(), "Lexical error: Unterminated comment at 2:4");
        assert_eq!(error.position(), LineCol::new(2, 4));
    }
}
