//! Reserved word lookup.
//!
//! Identifiers and reserved words share one rule; the matched text is looked
//! up here afterwards and the identifier kind is replaced on a hit.

use crate::token::TokenKind;
use rustc_hash::FxHashMap;

/// Map from reserved spelling to its token kind.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    map: FxHashMap<&'static str, TokenKind>,
}

impl KeywordTable {
    /// Build the table from [`TokenKind::KEYWORDS`].
    pub fn new() -> Self {
        let map = TokenKind::KEYWORDS
            .into_iter()
            .filter_map(|kind| kind.keyword_text().map(|text| (text, kind)))
            .collect();
        Self { map }
    }

    #[inline]
    pub fn get(&self, text: &str) -> Option<TokenKind> {
        self.map.get(text).copied()
    }

    /// Kind for an identifier-shaped lexeme: the reserved kind, or `Identifier`.
    #[inline]
    pub fn resolve(&self, text: &str) -> TokenKind {
        self.get(text).unwrap_or(TokenKind::Identifier)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_all_keywords() {
        let table = KeywordTable::new();
        assert_eq!(table.len(), 16);
        assert_eq!(table.resolve("while"), TokenKind::WhileKeyword);
        assert_eq!(table.resolve("assert"), TokenKind::AssertKeyword);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = KeywordTable::new();
        assert_eq!(table.resolve("If"), TokenKind::Identifier);
        assert_eq!(table.resolve("INT"), TokenKind::Identifier);
        assert_eq!(table.get("integer"), None);
    }
}
