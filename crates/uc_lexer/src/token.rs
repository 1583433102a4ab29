//! Token kinds and token values produced by the scanner.

use std::fmt;
use uc_core::text::{LineCol, TextSpan};

/// The kind of a uC token. This is a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // ========================================================================
    // Reserved words
    // ========================================================================
    AssertKeyword,
    BoolKeyword,
    BreakKeyword,
    CharKeyword,
    ElseKeyword,
    FalseKeyword,
    FloatKeyword,
    ForKeyword,
    IfKeyword,
    IntKeyword,
    PrintKeyword,
    ReadKeyword,
    ReturnKeyword,
    TrueKeyword,
    VoidKeyword,
    WhileKeyword,

    // ========================================================================
    // Identifiers and constants
    // ========================================================================
    Identifier,
    IntegerConstant,
    FloatConstant,
    CharConstant,
    StringLiteral,

    // Delimiters
    OpenParenToken,
    CloseParenToken,
    OpenBraceToken,
    CloseBraceToken,
    OpenBracketToken,
    CloseBracketToken,

    // Comparators
    EqualsEqualsToken,
    ExclamationEqualsToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,

    // Operators
    EqualsToken,
    PlusToken,
    PercentToken,
    MinusToken,
    AsteriskToken,
    SlashToken,
    AmpersandAmpersandToken,
    BarBarToken,
    ExclamationToken,
    AmpersandToken,

    // Punctuation
    SemicolonToken,
    CommaToken,
}

impl TokenKind {
    /// Every reserved word kind, in alphabetical order of spelling.
    pub const KEYWORDS: [TokenKind; 16] = [
        TokenKind::AssertKeyword,
        TokenKind::BoolKeyword,
        TokenKind::BreakKeyword,
        TokenKind::CharKeyword,
        TokenKind::ElseKeyword,
        TokenKind::FalseKeyword,
        TokenKind::FloatKeyword,
        TokenKind::ForKeyword,
        TokenKind::IfKeyword,
        TokenKind::IntKeyword,
        TokenKind::PrintKeyword,
        TokenKind::ReadKeyword,
        TokenKind::ReturnKeyword,
        TokenKind::TrueKeyword,
        TokenKind::VoidKeyword,
        TokenKind::WhileKeyword,
    ];

    /// Whether this kind is a reserved word.
    pub fn is_keyword(self) -> bool {
        self.keyword_text().is_some()
    }

    /// The source spelling of a reserved word kind.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            TokenKind::AssertKeyword => Some("assert"),
            TokenKind::BoolKeyword => Some("bool"),
            TokenKind::BreakKeyword => Some("break"),
            TokenKind::CharKeyword => Some("char"),
            TokenKind::ElseKeyword => Some("else"),
            TokenKind::FalseKeyword => Some("false"),
            TokenKind::FloatKeyword => Some("float"),
            TokenKind::ForKeyword => Some("for"),
            TokenKind::IfKeyword => Some("if"),
            TokenKind::IntKeyword => Some("int"),
            TokenKind::PrintKeyword => Some("print"),
            TokenKind::ReadKeyword => Some("read"),
            TokenKind::ReturnKeyword => Some("return"),
            TokenKind::TrueKeyword => Some("true"),
            TokenKind::VoidKeyword => Some("void"),
            TokenKind::WhileKeyword => Some("while"),
            _ => None,
        }
    }

    /// Reverse of [`TokenKind::keyword_text`].
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        Self::KEYWORDS
            .into_iter()
            .find(|kind| kind.keyword_text() == Some(text))
    }

    /// The fixed spelling of delimiter, comparator, operator and punctuation kinds.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            TokenKind::OpenParenToken => Some("("),
            TokenKind::CloseParenToken => Some(")"),
            TokenKind::OpenBraceToken => Some("{"),
            TokenKind::CloseBraceToken => Some("}"),
            TokenKind::OpenBracketToken => Some("["),
            TokenKind::CloseBracketToken => Some("]"),
            TokenKind::EqualsEqualsToken => Some("=="),
            TokenKind::ExclamationEqualsToken => Some("!="),
            TokenKind::LessThanToken => Some("<"),
            TokenKind::GreaterThanToken => Some(">"),
            TokenKind::LessThanEqualsToken => Some("<="),
            TokenKind::GreaterThanEqualsToken => Some(">="),
            TokenKind::EqualsToken => Some("="),
            TokenKind::PlusToken => Some("+"),
            TokenKind::PercentToken => Some("%"),
            TokenKind::MinusToken => Some("-"),
            TokenKind::AsteriskToken => Some("*"),
            TokenKind::SlashToken => Some("/"),
            TokenKind::AmpersandAmpersandToken => Some("&&"),
            TokenKind::BarBarToken => Some("||"),
            TokenKind::ExclamationToken => Some("!"),
            TokenKind::AmpersandToken => Some("&"),
            TokenKind::SemicolonToken => Some(";"),
            TokenKind::CommaToken => Some(","),
            _ => None,
        }
    }

    /// The token-type name used in the printed token stream (`ID`, `INT_CONST`, `LPAREN`, ...).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::AssertKeyword => "ASSERT",
            TokenKind::BoolKeyword => "BOOL",
            TokenKind::BreakKeyword => "BREAK",
            TokenKind::CharKeyword => "CHAR",
            TokenKind::ElseKeyword => "ELSE",
            TokenKind::FalseKeyword => "FALSE",
            TokenKind::FloatKeyword => "FLOAT",
            TokenKind::ForKeyword => "FOR",
            TokenKind::IfKeyword => "IF",
            TokenKind::IntKeyword => "INT",
            TokenKind::PrintKeyword => "PRINT",
            TokenKind::ReadKeyword => "READ",
            TokenKind::ReturnKeyword => "RETURN",
            TokenKind::TrueKeyword => "TRUE",
            TokenKind::VoidKeyword => "VOID",
            TokenKind::WhileKeyword => "WHILE",
            TokenKind::Identifier => "ID",
            TokenKind::IntegerConstant => "INT_CONST",
            TokenKind::FloatConstant => "FLOAT_CONST",
            TokenKind::CharConstant => "CHAR_CONST",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::OpenParenToken => "LPAREN",
            TokenKind::CloseParenToken => "RPAREN",
            TokenKind::OpenBraceToken => "LBRACE",
            TokenKind::CloseBraceToken => "RBRACE",
            TokenKind::OpenBracketToken => "LBRACKET",
            TokenKind::CloseBracketToken => "RBRACKET",
            TokenKind::EqualsEqualsToken => "EQ",
            TokenKind::ExclamationEqualsToken => "NE",
            TokenKind::LessThanToken => "LT",
            TokenKind::GreaterThanToken => "GT",
            TokenKind::LessThanEqualsToken => "LE",
            TokenKind::GreaterThanEqualsToken => "GE",
            TokenKind::EqualsToken => "EQUALS",
            TokenKind::PlusToken => "PLUS",
            TokenKind::PercentToken => "MOD",
            TokenKind::MinusToken => "MINUS",
            TokenKind::AsteriskToken => "TIMES",
            TokenKind::SlashToken => "DIVIDE",
            TokenKind::AmpersandAmpersandToken => "AND",
            TokenKind::BarBarToken => "OR",
            TokenKind::ExclamationToken => "NOT",
            TokenKind::AmpersandToken => "ADDRESS",
            TokenKind::SemicolonToken => "SEMI",
            TokenKind::CommaToken => "COMMA",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token.
///
/// For string and character literals `lexeme` holds the content between the
/// quotes with escape sequences left as written; `span` always covers the
/// full matched text, quotes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
    pub span: TextSpan,
}

impl Token {
    pub fn position(&self) -> LineCol {
        LineCol::new(self.line, self.column)
    }
}

/// Printed as `LexToken(<KIND>,<quoted lexeme>,<line>,<column>)`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LexToken({},{},{},{})",
            self.kind.name(),
            quote_lexeme(&self.lexeme),
            self.line,
            self.column
        )
    }
}

/// Quote text for the printed token stream.
///
/// Single quotes are used unless the text contains `'` and no `"`. Backslash,
/// the chosen quote, and control characters are escaped.
pub fn quote_lexeme(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() && (c as u32) < 0x100 => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
