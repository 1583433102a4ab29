//! uc_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! This crate defines the diagnostic messages used by the uC toolchain.
//! Diagnostics carry structured information about errors and warnings:
//! a numeric code, a category, the resolved message text and, when known,
//! the file and source location they refer to.

use std::fmt;
use uc_core::text::{LineCol, TextSpan};

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1001).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The file path where this diagnostic occurred, if any.
    pub file: Option<String>,
    /// The source text span where this diagnostic occurred, if any.
    pub span: Option<TextSpan>,
    /// 1-based line and column of the span start, if any.
    pub position: Option<LineCol>,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic code.
    pub code: u32,
    /// The category.
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic without location info (global diagnostic).
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            position: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a new diagnostic anchored at a span and its line/column.
    pub fn at(
        span: TextSpan,
        position: LineCol,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            span: Some(span),
            position: Some(position),
            ..Self::new(message, args)
        }
    }

    /// Attach the file this diagnostic belongs to.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(position) = self.position {
                write!(f, ":{}", position)?;
            }
            write!(f, ": ")?;
        }
        write!(f, "{} UC{}: {}", self.category, self.code, self.message_text)
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated during a scan.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }

    /// Sort diagnostics by file and position.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            a.file
                .cmp(&b.file)
                .then_with(|| a.span.map(|s| s.start).cmp(&b.span.map(|s| s.start)))
        });
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // ========================================================================
    // Lexical errors (1000-1099)
    // ========================================================================
    pub const ILLEGAL_CHARACTER_0: DiagnosticMessage = diag!(1001, Error, "Illegal character {0}");
    pub const UNTERMINATED_STRING: DiagnosticMessage = diag!(1002, Error, "Unterminated string");
    pub const UNTERMINATED_COMMENT: DiagnosticMessage = diag!(1003, Error, "Unterminated comment");

    // ========================================================================
    // Driver errors (6000-6099)
    // ========================================================================
    pub const INPUT_0_NOT_FOUND: DiagnosticMessage = diag!(6001, Error, "Input {0} not found");
    pub const CANNOT_READ_FILE_0_1: DiagnosticMessage = diag!(6002, Error, "Cannot read file '{0}': {1}.");
    pub const INTERNAL_ERROR_0: DiagnosticMessage = diag!(6003, Error, "Internal error: {0}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        let msg = format_message("Cannot read file '{0}': {1}.", &["a.uc", "denied"]);
        assert_eq!(msg, "Cannot read file 'a.uc': denied.");
    }

    #[test]
    fn test_format_message_no_args() {
        let msg = format_message("Unterminated string", &[]);
        assert_eq!(msg, "Unterminated string");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::at(
            TextSpan::new(4, 1),
            LineCol::new(1, 5),
            &messages::ILLEGAL_CHARACTER_0,
            &["'@'"],
        )
        .with_file("test.uc");
        assert_eq!(diag.to_string(), "test.uc:1:5: error UC1001: Illegal character '@'");
    }

    #[test]
    fn test_diagnostic_without_location() {
        let diag = Diagnostic::new(&messages::INPUT_0_NOT_FOUND, &["missing.uc"]);
        assert!(diag.file.is_none());
        assert!(diag.span.is_none());
        assert_eq!(diag.code, 6001);
        assert!(diag.is_error());
        assert_eq!(diag.to_string(), "error UC6001: Input missing.uc not found");
    }

    #[test]
    fn test_diagnostic_collection() {
        let mut collection = DiagnosticCollection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);

        collection.add(Diagnostic::new(&messages::UNTERMINATED_STRING, &[]));
        assert!(collection.has_errors());
        assert_eq!(collection.error_count(), 1);
        assert_eq!(collection.len(), 1);

        collection.clear();
        assert!(!collection.has_errors());
    }

    #[test]
    fn test_diagnostic_collection_sort() {
        let mut collection = DiagnosticCollection::new();
        collection.add(
            Diagnostic::at(TextSpan::new(10, 1), LineCol::new(2, 3), &messages::UNTERMINATED_STRING, &[])
                .with_file("b.uc"),
        );
        collection.add(
            Diagnostic::at(TextSpan::new(9, 2), LineCol::new(1, 10), &messages::UNTERMINATED_COMMENT, &[])
                .with_file("a.uc"),
        );
        collection.add(
            Diagnostic::at(TextSpan::new(0, 1), LineCol::new(1, 1), &messages::ILLEGAL_CHARACTER_0, &["'$'"])
                .with_file("a.uc"),
        );
        collection.sort();
        let codes: Vec<u32> = collection.diagnostics().iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![1001, 1003, 1002]);
    }
}
