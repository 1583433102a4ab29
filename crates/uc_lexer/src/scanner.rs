//! The uC scanner.
//!
//! Create it with an error handler, call [`Scanner::build`] once, then
//! [`Scanner::load`] source text and pull tokens with
//! [`Scanner::next_token`] until it returns `None`.

use crate::error::ScanError;
use crate::handler::LexErrorHandler;
use crate::matcher::Matcher;
use crate::rules::RuleTable;
use crate::session::ScanSession;
use crate::token::Token;

/// Stateful scanner: rule table, error handler and one scan session.
pub struct Scanner<H> {
    handler: H,
    rules: RuleTable,
    matcher: Option<Matcher>,
    session: ScanSession,
    last_token: Option<Token>,
}

impl<H: LexErrorHandler> Scanner<H> {
    /// A scanner for the uC rule table. Errors go to `handler`.
    pub fn new(handler: H) -> Self {
        Self::with_rules(handler, RuleTable::uc())
    }

    /// A scanner for a custom rule table.
    pub fn with_rules(handler: H, rules: RuleTable) -> Self {
        Self {
            handler,
            rules,
            matcher: None,
            session: ScanSession::default(),
            last_token: None,
        }
    }

    /// Compile the rule table. Must be called exactly once before scanning.
    pub fn build(&mut self) -> Result<(), ScanError> {
        if self.matcher.is_some() {
            return Err(ScanError::AlreadyBuilt);
        }
        self.matcher = Some(self.rules.build()?);
        Ok(())
    }

    pub fn is_built(&self) -> bool {
        self.matcher.is_some()
    }

    /// Set the line counter back to 1. The buffer and cursor are untouched.
    pub fn reset_line_counter(&mut self) {
        self.session.reset_line();
    }

    /// Install a new source buffer with the cursor at its start.
    ///
    /// The line counter carries over from the previous buffer; call
    /// [`Scanner::reset_line_counter`] to restart numbering.
    pub fn load(&mut self, text: impl Into<String>) {
        self.session.load(text);
        self.last_token = None;
    }

    /// The next token, or `Ok(None)` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        let matcher = self.matcher.as_ref().ok_or(ScanError::NotBuilt)?;
        let token = matcher.next_token(&mut self.session, &mut self.handler);
        self.last_token.clone_from(&token);
        Ok(token)
    }

    /// Iterate over the remaining tokens of the loaded buffer.
    pub fn tokens(&mut self) -> Result<Tokens<'_, H>, ScanError> {
        let matcher = self.matcher.as_ref().ok_or(ScanError::NotBuilt)?;
        Ok(Tokens {
            matcher,
            session: &mut self.session,
            handler: &mut self.handler,
            last_token: &mut self.last_token,
        })
    }

    /// Load `text` and scan it to the end.
    pub fn scan(&mut self, text: impl Into<String>) -> Result<Vec<Token>, ScanError> {
        self.load(text);
        Ok(self.tokens()?.collect())
    }

    /// 1-based column of `token` within its line of the loaded buffer.
    pub fn find_column(&self, token: &Token) -> u32 {
        self.session.column_at(token.span.start as usize)
    }

    /// The token most recently returned for the loaded buffer.
    pub fn last_token(&self) -> Option<&Token> {
        self.last_token.as_ref()
    }

    pub fn line(&self) -> u32 {
        self.session.line()
    }

    pub fn cursor(&self) -> usize {
        self.session.cursor()
    }

    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    pub fn matcher(&self) -> Option<&Matcher> {
        self.matcher.as_ref()
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }
}

/// Iterator returned by [`Scanner::tokens`].
pub struct Tokens<'a, H> {
    matcher: &'a Matcher,
    session: &'a mut ScanSession,
    handler: &'a mut H,
    last_token: &'a mut Option<Token>,
}

impl<H: LexErrorHandler> Iterator for Tokens<'_, H> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.matcher.next_token(&mut *self.session, &mut *self.handler);
        self.last_token.clone_from(&token);
        token
    }
}
