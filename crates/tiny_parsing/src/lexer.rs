//! Responsible for converting TINY source text into a token stream

use crate::lexer::token_parsing::parse_token;
use tiny_tokens::spanned::{Position, Span};
use tiny_tokens::token::{Token, TokenKind};
use tracing::{trace, warn};

mod token_parsing;

/// Converts source text into tokens.
///
/// The lexer never fails: characters that start no token become [TokenKind::Error] tokens. The
/// last token yielded is always a single [TokenKind::Eof].
///
/// # Example
/// ```
/// # use tiny_parsing::lexer::Lexer;
/// # use tiny_tokens::token::TokenKind;
/// let kinds = Lexer::new("x := 1").map(|t| t.kind()).collect::<Vec<_>>();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::Assign, TokenKind::Number, TokenKind::Eof]
/// );
/// ```
#[derive(Debug)]
pub struct Lexer<'s> {
    source: &'s str,
    offset: usize,
    position: Position,
    finished: bool,
}

impl<'s> Lexer<'s> {
    /// Creates a new lexer
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            offset: 0,
            position: Position::START,
            finished: false,
        }
    }

    /// Moves past `len` bytes of the source, tracking lines and columns
    fn advance(&mut self, len: usize) {
        let end = (self.offset + len).min(self.source.len());
        for c in self.source[self.offset..end].chars() {
            if c == '\n' {
                self.position.line += 1;
                self.position.column = 1;
            } else {
                self.position.column += 1;
            }
        }
        self.offset = end;
    }

    fn next_token(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let remaining = &self.source[self.offset..];
        let (l, len, r, kind) = match parse_token(remaining) {
            Ok((_, lexed)) => lexed,
            Err(e) => {
                // every character starts some token, so this only guards against a broken grammar
                warn!("could not lex at {}: {e}", self.position);
                let len = remaining.chars().next().map_or(0, char::len_utf8);
                let kind = if len == 0 {
                    TokenKind::Eof
                } else {
                    TokenKind::Error
                };
                (0, len, 0, kind)
            }
        };

        self.advance(l);
        let offset = self.offset;
        let start = self.position;
        self.advance(len);
        let span = Span::new(offset, len, start, self.position);
        let token = Token::new(span, kind, &self.source[offset..self.offset]);
        self.advance(r);

        if kind == TokenKind::Eof {
            self.finished = true;
        }
        trace!("lexed {token:?}");
        Some(token)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;
    use tiny_tokens::spanned::Spanned;

    fn lex(src: &str) -> Vec<Token> {
        Lexer::new(src).collect()
    }

    #[test]
    fn test_lexer() {
        let tokens = lex("read x; { input }\nwrite x * 2");
        let summary = tokens
            .iter()
            .map(|t| (t.kind(), t.lexeme(), t.line(), t.column()))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            [
                (TokenKind::Read, "read", 1, 1),
                (TokenKind::Identifier, "x", 1, 6),
                (TokenKind::Semicolon, ";", 1, 7),
                (TokenKind::Write, "write", 2, 1),
                (TokenKind::Identifier, "x", 2, 7),
                (TokenKind::Mult, "*", 2, 9),
                (TokenKind::Number, "2", 2, 11),
                (TokenKind::Eof, "", 2, 12),
            ]
        );
    }

    #[test]
    fn test_keywords_keep_spelling() {
        let tokens = lex("If x THEN");
        assert_eq!(tokens[0].kind(), TokenKind::If);
        assert_eq!(tokens[0].lexeme(), "If");
        assert_eq!(tokens[2].kind(), TokenKind::Then);
        assert_eq!(tokens[2].lexeme(), "THEN");
    }

    #[test]
    fn test_empty_source() {
        let tokens = lex("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is(TokenKind::Eof));
        assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
    }

    #[test]
    fn test_eof_after_trailing_newline() {
        let tokens = lex("write 1\n");
        let eof = tokens.last().unwrap();
        assert!(eof.is(TokenKind::Eof));
        assert_eq!((eof.line(), eof.column()), (2, 1));
    }

    #[test]
    fn test_invalid_characters() {
        let tokens = lex("x : 1 ! y");
        let kinds = tokens.iter().map(|t| t.kind()).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            [
                TokenKind::Identifier,
                TokenKind::Error,
                TokenKind::Number,
                TokenKind::Error,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[1].lexeme(), ":");
        assert_eq!(tokens[3].lexeme(), "!");
    }

    #[test]
    fn test_unterminated_comment_discards_rest() {
        let tokens = lex("write 1 { oops\nwrite 2");
        let kinds = tokens.iter().map(|t| t.kind()).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            [
                TokenKind::Write,
                TokenKind::Number,
                TokenKind::Error,
                TokenKind::Eof
            ]
        );
        assert_eq!(tokens[2].lexeme(), "{");
        assert_eq!((tokens[2].line(), tokens[2].column()), (1, 9));
        assert_eq!((tokens[3].line(), tokens[3].column()), (2, 8));
    }

    #[test]
    fn test_columns_count_characters() {
        let tokens = lex("{é} x");
        assert_eq!(tokens[0].lexeme(), "x");
        assert_eq!(tokens[0].column(), 5);
        assert_eq!(tokens[0].span().offset(), 5);
    }

    #[test]
    fn test_fused_after_eof() {
        let mut lexer = Lexer::new("x");
        assert!(lexer.next().is_some());
        assert!(lexer.next().is_some_and(|t| t.is(TokenKind::Eof)));
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }
}
