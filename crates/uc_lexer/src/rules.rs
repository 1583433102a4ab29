//! The ordered lexical rule table.
//!
//! A rule pairs a pattern with what to do with the text it matches. Position
//! in the table is the rule's priority: when two rules match the same number
//! of bytes, the one listed first wins. Longer matches always beat shorter
//! ones regardless of position.

use crate::error::{LexErrorKind, ScanError};
use crate::matcher::Matcher;
use crate::token::TokenKind;

/// How a rule recognizes text at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Fixed text, compared byte for byte.
    Exact(&'static str),
    /// A regular expression, anchored at the cursor when compiled.
    Regex(&'static str),
}

/// What the scanner does with a rule's match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Emit a token of this kind with the matched text as lexeme.
    Emit(TokenKind),
    /// Emit a reserved-word token if the text is reserved, else `Identifier`.
    IdentifierOrKeyword,
    /// Emit a token of this kind with the first and last character stripped.
    Quoted(TokenKind),
    /// Consume silently (whitespace, newlines, comments).
    Skip,
    /// Report the error at the start of the match and consume the match.
    Report(LexErrorKind),
}

/// A single entry of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub name: &'static str,
    pub pattern: Pattern,
    pub action: RuleAction,
    /// Only eligible when the named rule does not match at the cursor.
    ///
    /// Used by the unterminated-literal rules: their patterns run to the end
    /// of input and would otherwise outlast every well-formed match.
    pub fallback_for: Option<&'static str>,
}

impl Rule {
    pub const fn exact(name: &'static str, text: &'static str, kind: TokenKind) -> Self {
        Self {
            name,
            pattern: Pattern::Exact(text),
            action: RuleAction::Emit(kind),
            fallback_for: None,
        }
    }

    pub const fn regex(name: &'static str, pattern: &'static str, action: RuleAction) -> Self {
        Self {
            name,
            pattern: Pattern::Regex(pattern),
            action,
            fallback_for: None,
        }
    }

    pub const fn fallback_for(mut self, rule: &'static str) -> Self {
        self.fallback_for = Some(rule);
        self
    }
}

/// An ordered collection of rules, compiled into a [`Matcher`] by [`RuleTable::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

/// `digit (digit | _digit)*`
const DIGITS: &str = r"\d(\d|_\d)*";

/// Integer part, fraction and exponent are built from the same digit run.
/// Either a decimal point with a digit on at least one side (optionally
/// followed by an exponent), or digits followed by a mandatory exponent.
const FLOAT_CONST: &str = concat!(
    r"(",
    r"(\d(\d|_\d)*\.(\d(\d|_\d)*)?|(\d(\d|_\d)*)?\.\d(\d|_\d)*)",
    r"([eE][+-]?\d(\d|_\d)*)?",
    r"|\d(\d|_\d)*[eE][+-]?\d(\d|_\d)*",
    r")",
);

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The uC rule table.
    pub fn uc() -> Self {
        use RuleAction::*;
        use TokenKind::*;

        Self::new(vec![
            // Ignored
            Rule::regex("whitespace", r"[ \t\r]+", Skip),
            Rule::regex("newline", r"\n+", Skip),
            Rule::regex("comment", r"/\*(.|\n)*?\*/|//.*", Skip),
            // Constants
            Rule::regex("float_const", FLOAT_CONST, Emit(FloatConstant)),
            Rule::regex("int_const", DIGITS, Emit(IntegerConstant)),
            Rule::regex("char_const", r"'(\\.|.)+?'", Quoted(CharConstant)),
            Rule::regex("string_literal", r#""(\\.|.|\n)*?""#, Quoted(StringLiteral)),
            // Identifiers and reserved words
            Rule::regex("id", r"[^\d\W]\w*", IdentifierOrKeyword),
            // Delimiters
            Rule::exact("lparen", "(", OpenParenToken),
            Rule::exact("rparen", ")", CloseParenToken),
            Rule::exact("lbrace", "{", OpenBraceToken),
            Rule::exact("rbrace", "}", CloseBraceToken),
            Rule::exact("lbracket", "[", OpenBracketToken),
            Rule::exact("rbracket", "]", CloseBracketToken),
            // Comparators
            Rule::exact("eq", "==", EqualsEqualsToken),
            Rule::exact("ne", "!=", ExclamationEqualsToken),
            Rule::exact("le", "<=", LessThanEqualsToken),
            Rule::exact("ge", ">=", GreaterThanEqualsToken),
            Rule::exact("lt", "<", LessThanToken),
            Rule::exact("gt", ">", GreaterThanToken),
            // Operators
            Rule::exact("equals", "=", EqualsToken),
            Rule::exact("plus", "+", PlusToken),
            Rule::exact("mod", "%", PercentToken),
            Rule::exact("minus", "-", MinusToken),
            Rule::exact("times", "*", AsteriskToken),
            Rule::exact("divide", "/", SlashToken),
            Rule::exact("and", "&&", AmpersandAmpersandToken),
            Rule::exact("or", "||", BarBarToken),
            Rule::exact("not", "!", ExclamationToken),
            Rule::exact("address", "&", AmpersandToken),
            // Punctuation
            Rule::exact("semi", ";", SemicolonToken),
            Rule::exact("comma", ",", CommaToken),
            // Unterminated literals
            Rule::regex("unterminated_string", r#""(\\.|.|\n)*"#, Report(LexErrorKind::UnterminatedString))
                .fallback_for("string_literal"),
            Rule::regex("unterminated_comment", r"/\*(.|\n)*", Report(LexErrorKind::UnterminatedComment))
                .fallback_for("comment"),
        ])
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Index of the rule called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.name == name)
    }

    /// Compile every pattern and resolve fallback references.
    pub fn build(&self) -> Result<Matcher, ScanError> {
        Matcher::compile(self)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::uc()
    }
}
