//! Property-based tests for the scanner.
//!
//! Inputs are drawn from an alphabet rich in quote, comment and numeric
//! characters so that malformed and unterminated input is common.

use proptest::prelude::*;
use uc_core::text::{column_at, count_line_breaks};
use uc_lexer::{DiagnosticSink, LexError, Scanner, Token};

fn scan(source: &str) -> (Vec<Token>, Vec<LexError>, usize) {
    let mut scanner = Scanner::new(DiagnosticSink::new());
    scanner.build().expect("uC rule table compiles");
    let tokens = scanner.scan(source).expect("scanner is built");
    let cursor = scanner.cursor();
    (tokens, scanner.into_handler().errors().to_vec(), cursor)
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#"[a-z0-9_ \t\n"'/*.+\-=<>!&|;,(){}\[\]\\@$eé]{0,80}"#)
        .expect("valid regex")
}

proptest! {
    #[test]
    fn scan_consumes_whole_input(source in source_strategy()) {
        let (_, _, cursor) = scan(&source);
        prop_assert_eq!(cursor, source.len());
    }

    #[test]
    fn scan_is_idempotent(source in source_strategy()) {
        let first = scan(&source);
        let second = scan(&source);
        prop_assert_eq!(first.0, second.0);
        prop_assert_eq!(first.1, second.1);
    }

    #[test]
    fn positions_agree_with_spans(source in source_strategy()) {
        let (tokens, errors, _) = scan(&source);
        for token in &tokens {
            let start = token.span.start as usize;
            prop_assert_eq!(token.line, 1 + count_line_breaks(&source[..start]));
            prop_assert_eq!(token.column, column_at(&source, start));
        }
        for error in &errors {
            let start = error.span.start as usize;
            prop_assert_eq!(error.line, 1 + count_line_breaks(&source[..start]));
            prop_assert_eq!(error.column, column_at(&source, start));
        }
    }

    #[test]
    fn tokens_and_errors_do_not_overlap(source in source_strategy()) {
        let (tokens, errors, _) = scan(&source);
        let mut spans: Vec<_> = tokens
            .iter()
            .map(|t| t.span)
            .chain(errors.iter().map(|e| e.span))
            .collect();
        spans.sort_by_key(|span| span.start);
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start);
        }
        for span in &spans {
            prop_assert!(!span.is_empty());
        }
    }

    #[test]
    fn identifiers_keep_their_text(name in "[a-z_][a-z0-9_]{0,12}") {
        let (tokens, errors, _) = scan(&name);
        prop_assert!(errors.is_empty());
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].lexeme, &name);
    }
}
