//! Recursive descent parsing of a token sequence into a [Program]

use std::result;
use tiny_ast::program::Program;
use tiny_tokens::spanned::{Span, Spanned};
use tiny_tokens::token::{Token, TokenKind};
use tracing::{debug, trace};

mod config;
mod error;
mod expr;
mod statement;

pub use config::*;
pub use error::*;

/// The result of a grammar production
pub type Result<T> = result::Result<T, SyntaxError>;

/// Creates the syntax tree from a token sequence, with one token of lookahead.
///
/// The parser borrows the tokens and only ever moves forward. Parsing stops at the first error.
///
/// # Example
/// ```
/// # use tiny_parsing::parser::SyntacticParser;
/// let tokens = tiny_parsing::tokenize("read x; write x");
/// let program = SyntacticParser::new(&tokens).parse_program().unwrap();
/// assert_eq!(program.body.len(), 2);
/// ```
#[derive(Debug)]
pub struct SyntacticParser<'t> {
    tokens: &'t [Token],
    cursor: usize,
    last_span: Option<Span>,
    non_terminals: Vec<&'static str>,
    config: ParserConfig,
}

impl<'t> SyntacticParser<'t> {
    /// Creates a new parser with the default configuration
    pub fn new(tokens: &'t [Token]) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    pub fn with_config(tokens: &'t [Token], config: ParserConfig) -> Self {
        Self {
            tokens,
            cursor: 0,
            last_span: None,
            non_terminals: vec![],
            config,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a whole program. All tokens up to the end of input must be used.
    pub fn parse_program(mut self) -> Result<Program> {
        let program = self.parse("program", |parser| {
            let body = statement::parse_stmt_sequence(parser)?;
            if parser.peek_kind() != TokenKind::Eof {
                return Err(parser.unexpected(|found| {
                    ErrorKind::expected_token([TokenKind::Semicolon, TokenKind::Eof], found)
                }));
            }
            Ok(Program::new(body))
        })?;
        debug!(
            "parsed program with {} top level statements",
            program.body.len()
        );
        Ok(program)
    }

    /// Wrapper function for parsing a grammar production, tracking it on the non-terminal stack
    pub(crate) fn parse<O, F>(&mut self, non_terminal: &'static str, production: F) -> Result<O>
    where
        F: FnOnce(&mut Self) -> Result<O>,
    {
        trace!("starting parsing {non_terminal} at {:?}", self.peek());
        self.enter(non_terminal)?;
        let r = production(self);
        if r.is_ok() {
            self.leave(1);
            trace!("finished parsing {non_terminal}");
        }
        r
    }

    /// Pushes onto the non-terminal stack, failing once it holds [ParserConfig::max_depth]
    /// entries. Every level of the syntax tree under construction holds at least one entry, so
    /// the bound also limits how deep the finished tree is.
    pub(crate) fn enter(&mut self, non_terminal: &'static str) -> Result<()> {
        if self.non_terminals.len() >= self.config.max_depth() {
            return Err(self.error(ErrorKind::NestingTooDeep(self.config.max_depth())));
        }
        self.non_terminals.push(non_terminal);
        Ok(())
    }

    /// Pops `count` entries pushed with [enter](Self::enter)
    pub(crate) fn leave(&mut self, count: usize) {
        let len = self.non_terminals.len().saturating_sub(count);
        self.non_terminals.truncate(len);
    }

    /// peek the current lookahead. `None` past the end of a token slice with no [TokenKind::Eof].
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.cursor)
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek().map_or(TokenKind::Eof, Token::kind)
    }

    /// Consumes the lookahead if the predicate matches. The end of input is never consumed.
    pub(crate) fn consume_if<F>(&mut self, predicate: F) -> Option<&'t Token>
    where
        F: FnOnce(&Token) -> bool,
    {
        let token = self
            .peek()
            .filter(|token| !token.is(TokenKind::Eof) && predicate(token))?;
        self.cursor += 1;
        self.last_span = Some(token.span());
        trace!("consumed {token:?}");
        Some(token)
    }

    /// Consumes a token of the given kind, or fails
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<&'t Token> {
        match self.consume_if(|token| token.is(kind)) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(|found| ErrorKind::expected_token([kind], found))),
        }
    }

    /// The lookahead, with a synthesized end of input token when the slice has run out
    fn found(&self) -> Token {
        match self.peek() {
            Some(token) => token.clone(),
            None => {
                let at = self.eof_span();
                Token::eof(at.offset(), at.start())
            }
        }
    }

    /// Where errors at the end of input are reported
    fn eof_span(&self) -> Span {
        self.last_span
            .map(|span| span.end())
            .or_else(|| self.peek().map(Spanned::span))
            .unwrap_or_default()
    }

    /// The location of the lookahead for errors
    fn error_location(&self) -> Span {
        match self.peek() {
            Some(token) if !token.is(TokenKind::Eof) => token.span(),
            _ => self.eof_span(),
        }
    }

    /// Creates an error about the lookahead not being what the current production needs.
    ///
    /// An [TokenKind::Error] lookahead is reported as the lexical problem it stands for instead.
    pub(crate) fn unexpected<F>(&self, kind: F) -> SyntaxError
    where
        F: FnOnce(Token) -> ErrorKind,
    {
        let found = self.found();
        let kind = if found.is(TokenKind::Error) {
            ErrorKind::invalid_token(&found)
        } else {
            kind(found)
        };
        self.error(kind)
    }

    /// Creates an error at the lookahead
    pub(crate) fn error(&self, kind: ErrorKind) -> SyntaxError {
        self.error_with_span(kind, self.error_location())
    }

    pub(crate) fn error_with_span(&self, kind: ErrorKind, span: Span) -> SyntaxError {
        let error = SyntaxError::new(kind, span, self.non_terminals.clone());
        debug!("{error}");
        error
    }
}
