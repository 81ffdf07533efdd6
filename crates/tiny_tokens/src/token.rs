//! A lexical token from a TINY source

use crate::spanned::{Position, Span, Spanned};
use std::fmt::{Debug, Formatter};
use strum::{Display, EnumIter, EnumString};

/// A lexical token from a source
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    span: Span,
    kind: TokenKind,
    lexeme: String,
}

impl Token {
    /// Creates a new token
    pub fn new(span: Span, kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            span,
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Creates the end of input token at a given point
    pub fn eof(offset: usize, at: Position) -> Self {
        Self::new(Span::point(offset, at), TokenKind::Eof, "")
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The source text of this token
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The line of the first character of this token, starting at 1
    pub fn line(&self) -> usize {
        self.span.line()
    }

    /// The column of the first character of this token, starting at 1
    pub fn column(&self) -> usize {
        self.span.column()
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})@{}", self.kind, self.lexeme, self.span)
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

/// The kind for this token.
///
/// Displays and parses as the upper case name used in token listings, eg `LESSTHAN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum TokenKind {
    /// ;
    Semicolon,
    If,
    Then,
    End,
    Repeat,
    Until,
    Identifier,
    /// :=
    Assign,
    Read,
    Write,
    /// <
    LessThan,
    /// =
    Equal,
    Plus,
    Minus,
    /// *
    Mult,
    /// /
    Div,
    /// (
    OpenBracket,
    /// )
    ClosedBracket,
    Number,
    /// EOF, will only appear at the end of a token sequence
    Eof,
    /// A character the scanner does not recognize
    Error,
}

impl TokenKind {
    /// Gets the keyword kind for a word, ignoring case
    pub fn keyword(word: &str) -> Option<TokenKind> {
        const KEYWORDS: [(&str, TokenKind); 7] = [
            ("if", TokenKind::If),
            ("then", TokenKind::Then),
            ("end", TokenKind::End),
            ("repeat", TokenKind::Repeat),
            ("until", TokenKind::Until),
            ("read", TokenKind::Read),
            ("write", TokenKind::Write),
        ];
        KEYWORDS
            .iter()
            .find(|(keyword, _)| keyword.eq_ignore_ascii_case(word))
            .map(|(_, kind)| *kind)
    }
}
