//! Per-scan cursor state.

use uc_core::text::{column_at, count_line_breaks};

/// The buffer being scanned, the cursor into it, and the current line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSession {
    text: String,
    cursor: usize,
    line: u32,
}

impl ScanSession {
    /// A session over `text`, starting at offset 0 on line 1.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
            line: 1,
        }
    }

    /// Replace the buffer and rewind the cursor. The line counter is kept.
    pub fn load(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = 0;
    }

    pub fn reset_line(&mut self) {
        self.line = 1;
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the next unscanned character.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.text.len()
    }

    /// The unscanned remainder of the buffer.
    #[inline]
    pub fn rest(&self) -> &str {
        self.text.get(self.cursor..).unwrap_or_default()
    }

    /// 1-based column of a byte offset in the buffer.
    pub fn column_at(&self, offset: usize) -> u32 {
        column_at(&self.text, offset)
    }

    /// Move the cursor forward by `len` bytes, counting the newlines passed.
    pub(crate) fn advance(&mut self, len: usize) {
        let end = (self.cursor + len).min(self.text.len());
        self.line += count_line_breaks(&self.text[self.cursor..end]);
        self.cursor = end;
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new(String::new())
    }
}
