//! uc_core: Core utilities for the uC toolchain.
//!
//! Provides source text primitives shared by the lexer and diagnostics.

pub mod text;

// Re-export commonly used types
pub use text::{column_at, count_line_breaks, LineCol, TextPos, TextSpan};
