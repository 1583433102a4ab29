//! Receivers for lexical errors.
//!
//! The scanner never fails on malformed input; it hands each problem to a
//! [`LexErrorHandler`] and keeps going. Any `FnMut(&str, u32, u32)` closure
//! receiving `(message, line, column)` is a handler.

use crate::error::{LexError, LexErrorKind};
use crate::token::quote_lexeme;
use uc_diagnostics::{messages, Diagnostic, DiagnosticCollection};

/// Called synchronously from inside `next_token` for every lexical error.
pub trait LexErrorHandler {
    fn report(&mut self, error: &LexError);
}

impl<F> LexErrorHandler for F
where
    F: FnMut(&str, u32, u32),
{
    fn report(&mut self, error: &LexError) {
        self(&error.kind.to_string(), error.line, error.column)
    }
}

/// Collects lexical errors as diagnostics.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticSink {
    file: Option<String>,
    errors: Vec<LexError>,
    diagnostics: DiagnosticCollection,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every collected diagnostic with `file`.
    pub fn for_file(file: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            ..Self::default()
        }
    }

    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> DiagnosticCollection {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
        self.diagnostics.clear();
    }
}

impl LexErrorHandler for DiagnosticSink {
    fn report(&mut self, error: &LexError) {
        let mut diagnostic = to_diagnostic(error);
        if let Some(file) = &self.file {
            diagnostic = diagnostic.with_file(file.clone());
        }
        self.errors.push(error.clone());
        self.diagnostics.add(diagnostic);
    }
}

/// The diagnostic for a lexical error.
pub fn to_diagnostic(error: &LexError) -> Diagnostic {
    match error.kind {
        LexErrorKind::IllegalCharacter(ch) => Diagnostic::at(
            error.span,
            error.position(),
            &messages::ILLEGAL_CHARACTER_0,
            &[&quote_lexeme(&ch.to_string())],
        ),
        LexErrorKind::UnterminatedString => {
            Diagnostic::at(error.span, error.position(), &messages::UNTERMINATED_STRING, &[])
        }
        LexErrorKind::UnterminatedComment => {
            Diagnostic::at(error.span, error.position(), &messages::UNTERMINATED_COMMENT, &[])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uc_core::text::TextSpan;

    fn illegal_at(ch: char, line: u32, column: u32) -> LexError {
        LexError {
            kind: LexErrorKind::IllegalCharacter(ch),
            span: TextSpan::new(0, ch.len_utf8() as u32),
            line,
            column,
        }
    }

    #[test]
    fn test_closure_receives_message_line_column() {
        let mut seen = Vec::new();
        {
            let mut handler = |message: &str, line: u32, column: u32| {
                seen.push(format!("{message} at {line}:{column}"));
            };
            handler.report(&illegal_at('$', 3, 7));
        }
        assert_eq!(seen, vec!["Illegal character '$' at 3:7".to_string()]);
    }

    #[test]
    fn test_diagnostic_sink_message_matches_kind_display() {
        let mut sink = DiagnosticSink::for_file("prog.uc");
        let error = illegal_at('@', 1, 5);
        sink.report(&error);

        assert_eq!(sink.errors(), &[error.clone()]);
        let diagnostic = &sink.diagnostics().diagnostics()[0];
        assert_eq!(diagnostic.message_text, error.kind.to_string());
        assert_eq!(diagnostic.code, 1001);
        assert_eq!(diagnostic.to_string(), "prog.uc:1:5: error UC1001: Illegal character '@'");
    }

    #[test]
    fn test_unterminated_codes() {
        let string = LexError {
            kind: LexErrorKind::UnterminatedString,
            span: TextSpan::new(2, 4),
            line: 1,
            column: 3,
        };
        let comment = LexError {
            kind: LexErrorKind::UnterminatedComment,
            ..string.clone()
        };
        assert_eq!(to_diagnostic(&string).code, 1002);
        assert_eq!(to_diagnostic(&comment).code, 1003);
        assert_eq!(to_diagnostic(&comment).message_text, "Unterminated comment");
    }
}
