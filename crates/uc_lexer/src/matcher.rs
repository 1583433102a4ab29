//! The matching engine.
//!
//! At each cursor position every eligible rule is tried against the rest of
//! the buffer. The longest match wins; among matches of equal length the rule
//! earlier in the table wins. Zero-length matches never count, so every
//! step consumes input.

use crate::error::{LexError, LexErrorKind, ScanError};
use crate::handler::LexErrorHandler;
use crate::keywords::KeywordTable;
use crate::rules::{Pattern, RuleAction, RuleTable};
use crate::session::ScanSession;
use crate::token::Token;
use regex::Regex;
use uc_core::text::TextSpan;

#[derive(Debug, Clone)]
enum CompiledPattern {
    Exact(&'static str),
    Regex(Regex),
}

impl CompiledPattern {
    /// Length in bytes of the match at the start of `rest`, if non-empty.
    #[inline]
    fn match_len(&self, rest: &str) -> Option<usize> {
        let len = match self {
            CompiledPattern::Exact(text) => rest.starts_with(text).then_some(text.len()),
            CompiledPattern::Regex(regex) => regex.find(rest).map(|m| m.end()),
        };
        len.filter(|&len| len > 0)
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    name: &'static str,
    pattern: CompiledPattern,
    action: RuleAction,
    fallback_for: Option<usize>,
}

/// The best rule at a cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    /// Index of the rule in its table.
    pub rule: usize,
    /// Length of the match in bytes.
    pub len: usize,
}

/// A compiled rule table plus the keyword table.
///
/// Immutable once built; all cursor state lives in the [`ScanSession`]
/// passed to [`Matcher::next_token`], so one matcher can serve any number of
/// sessions, including from several threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    rules: Vec<CompiledRule>,
    keywords: KeywordTable,
}

impl Matcher {
    pub(crate) fn compile(table: &RuleTable) -> Result<Self, ScanError> {
        let mut rules = Vec::with_capacity(table.len());
        for rule in table.rules() {
            let pattern = match rule.pattern {
                Pattern::Exact("") | Pattern::Regex("") => {
                    return Err(ScanError::EmptyPattern { rule: rule.name });
                }
                Pattern::Exact(text) => CompiledPattern::Exact(text),
                Pattern::Regex(source) => {
                    let regex = Regex::new(&format!("^(?:{source})")).map_err(|source| {
                        ScanError::InvalidPattern {
                            rule: rule.name,
                            source,
                        }
                    })?;
                    CompiledPattern::Regex(regex)
                }
            };
            let fallback_for = match rule.fallback_for {
                Some(target) => Some(table.position(target).ok_or(ScanError::UnknownFallback {
                    rule: rule.name,
                    target,
                })?),
                None => None,
            };
            rules.push(CompiledRule {
                name: rule.name,
                pattern,
                action: rule.action,
                fallback_for,
            });
        }
        tracing::debug!(rules = rules.len(), "compiled rule table");
        Ok(Self {
            rules,
            keywords: KeywordTable::new(),
        })
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn rule_name(&self, index: usize) -> Option<&'static str> {
        self.rules.get(index).map(|rule| rule.name)
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Select the rule that applies at the start of `rest`.
    ///
    /// A rule with `fallback_for` set is only considered when the rule it
    /// backs up does not match here.
    pub fn longest_match(&self, rest: &str) -> Option<RuleMatch> {
        let mut best: Option<RuleMatch> = None;
        for (index, rule) in self.rules.iter().enumerate() {
            let Some(len) = rule.pattern.match_len(rest) else {
                continue;
            };
            if best.is_some_and(|best| best.len >= len) {
                continue;
            }
            if let Some(guard) = rule.fallback_for {
                if self.rules[guard].pattern.match_len(rest).is_some() {
                    continue;
                }
            }
            best = Some(RuleMatch { rule: index, len });
        }
        best
    }

    /// Produce the next token of `session`, or `None` at end of input.
    ///
    /// Whitespace and comments are consumed silently. Malformed input is
    /// reported to `handler` and skipped: one character when nothing
    /// matches, the whole span for unterminated literals.
    pub fn next_token<H>(&self, session: &mut ScanSession, handler: &mut H) -> Option<Token>
    where
        H: LexErrorHandler + ?Sized,
    {
        loop {
            let rest = session.rest();
            let Some(first) = rest.chars().next() else {
                return None;
            };

            let start = session.cursor();
            let line = session.line();

            let Some(found) = self.longest_match(rest) else {
                let column = session.column_at(start);
                session.advance(first.len_utf8());
                report(
                    handler,
                    LexError {
                        kind: LexErrorKind::IllegalCharacter(first),
                        span: TextSpan::from_range(start..start + first.len_utf8()),
                        line,
                        column,
                    },
                );
                continue;
            };

            let rule = &self.rules[found.rule];
            let span = TextSpan::from_range(start..start + found.len);
            let lexeme = match rule.action {
                RuleAction::Skip => {
                    session.advance(found.len);
                    tracing::trace!(rule = rule.name, ?span, "skipped");
                    continue;
                }
                RuleAction::Report(kind) => {
                    let column = session.column_at(start);
                    session.advance(found.len);
                    report(
                        handler,
                        LexError {
                            kind,
                            span,
                            line,
                            column,
                        },
                    );
                    continue;
                }
                RuleAction::Quoted(_) => {
                    let text = &rest[..found.len];
                    let inner_start = text.chars().next().map_or(0, char::len_utf8);
                    let inner_end = text.chars().next_back().map_or(0, char::len_utf8);
                    text.get(inner_start..found.len - inner_end)
                        .unwrap_or_default()
                        .to_string()
                }
                RuleAction::Emit(_) | RuleAction::IdentifierOrKeyword => rest[..found.len].to_string(),
            };
            let kind = match rule.action {
                RuleAction::Emit(kind) | RuleAction::Quoted(kind) => kind,
                _ => self.keywords.resolve(&lexeme),
            };

            let column = session.column_at(start);
            session.advance(found.len);
            let token = Token {
                kind,
                lexeme,
                line,
                column,
                span,
            };
            tracing::trace!(kind = %token.kind, line, column, "token");
            return Some(token);
        }
    }
}

fn report<H: LexErrorHandler + ?Sized>(handler: &mut H, error: LexError) {
    tracing::debug!(%error, "lexical error");
    handler.report(&error);
}
