//! uc_lexer: Lexical analyzer for uC source code.
//!
//! The scanner is driven by an explicit, ordered [`RuleTable`]. At every
//! cursor position the longest match wins and ties go to the rule listed
//! first. Malformed input never stops a scan: it is reported to a
//! [`LexErrorHandler`] and skipped.
//!
//! ```no_run
//! use uc_lexer::Scanner;
//!
//! let mut scanner = Scanner::new(|message: &str, line: u32, column: u32| {
//!     println!("Lexical error: {message} at {line}:{column}");
//! });
//! scanner.build()?;
//! for token in scanner.scan("int x = 1 + 2;")? {
//!     println!("{token}");
//! }
//! # Ok::<(), uc_lexer::ScanError>(())
//! ```

mod error;
mod handler;
mod keywords;
mod matcher;
mod rules;
mod scanner;
mod session;
mod token;

pub use error::{LexError, LexErrorKind, ScanError};
pub use handler::{to_diagnostic, DiagnosticSink, LexErrorHandler};
pub use keywords::KeywordTable;
pub use matcher::{Matcher, RuleMatch};
pub use rules::{Pattern, Rule, RuleAction, RuleTable};
pub use scanner::{Scanner, Tokens};
pub use session::ScanSession;
pub use token::{quote_lexeme, Token, TokenKind};
