//! Saving and loading token sequences as text.
//!
//! A listing holds one token per line as `lexeme,KIND`, eg `:=,ASSIGN`. The lexeme is everything
//! before the last comma, so `,` itself never needs escaping. Blank lines are skipped.

use std::io;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tiny_tokens::spanned::{Position, Span};
use tiny_tokens::token::{Token, TokenKind};
use tracing::debug;

/// An error reading a token listing
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("line {line}: expected `lexeme,KIND`, found {text:?}")]
    MalformedLine { line: usize, text: String },
    #[error("line {line}: unknown token kind {kind:?}")]
    UnknownKind { line: usize, kind: String },
}

/// Writes tokens as a listing, including the final `EOF`
pub fn write_tokens<W: Write>(tokens: &[Token], mut writer: W) -> io::Result<()> {
    for token in tokens {
        writeln!(writer, "{},{}", token.lexeme(), token.kind())?;
    }
    writer.flush()
}

/// Reads a token listing.
///
/// Tokens are positioned at their listing line, column 1, so errors found by the parser point into
/// the listing. Reading stops at the first `EOF` line, and an `EOF` is supplied if there is none.
pub fn read_tokens<R: BufRead>(reader: R) -> Result<Vec<Token>, ListingError> {
    let mut tokens = vec![];
    let mut offset = 0_usize;
    let mut last_line = 0_usize;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        last_line = line_number;
        let line_offset = offset;
        offset += line.len() + 1;

        let text = line.trim_end_matches('\r');
        if text.trim().is_empty() {
            continue;
        }
        let (lexeme, kind) = text
            .rsplit_once(',')
            .ok_or_else(|| ListingError::MalformedLine {
                line: line_number,
                text: text.to_string(),
            })?;
        let kind = kind.trim();
        let kind = TokenKind::from_str(kind).map_err(|_| ListingError::UnknownKind {
            line: line_number,
            kind: kind.to_string(),
        })?;

        let start = Position::new(line_number, 1);
        if kind == TokenKind::Eof {
            tokens.push(Token::eof(line_offset, start));
            break;
        }
        let end = Position::new(line_number, 1 + lexeme.chars().count());
        let span = Span::new(line_offset, lexeme.len(), start, end);
        tokens.push(Token::new(span, kind, lexeme));
    }

    if !tokens.last().is_some_and(|token| token.is(TokenKind::Eof)) {
        tokens.push(Token::eof(offset, Position::new(last_line + 1, 1)));
    }
    debug!("read {} tokens from listing", tokens.len());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;
    use test_log::test;

    #[test]
    fn test_write_tokens() {
        let tokens = tokenize("x := y < 10;");
        let mut out = vec![];
        write_tokens(&tokens, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "x,IDENTIFIER\n:=,ASSIGN\ny,IDENTIFIER\n<,LESSTHAN\n10,NUMBER\n;,SEMICOLON\n,EOF\n"
        );
    }

    #[test]
    fn test_read_tokens() {
        let listing = "read,READ\n\nx,IDENTIFIER\r\n,EOF\nignored,IDENTIFIER\n";
        let tokens = read_tokens(listing.as_bytes()).unwrap();
        let summary = tokens
            .iter()
            .map(|t| (t.kind(), t.lexeme(), t.line(), t.column()))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            [
                (TokenKind::Read, "read", 1, 1),
                (TokenKind::Identifier, "x", 3, 1),
                (TokenKind::Eof, "", 4, 1),
            ]
        );
    }

    #[test]
    fn test_lexeme_is_before_last_comma() {
        let tokens = read_tokens("a,b,IDENTIFIER".as_bytes()).unwrap();
        assert_eq!(tokens[0].lexeme(), "a,b");
        assert_eq!(tokens[0].kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_eof_is_supplied() {
        let tokens = read_tokens("write,WRITE\n1,NUMBER\n".as_bytes()).unwrap();
        assert_eq!(tokens.len(), 3);
        let eof = &tokens[2];
        assert!(eof.is(TokenKind::Eof));
        assert_eq!((eof.line(), eof.column()), (3, 1));
    }

    #[test]
    fn test_malformed_listing() {
        let error = read_tokens("read,READ\nx IDENTIFIER\n".as_bytes()).unwrap_err();
        assert!(
            matches!(error, ListingError::MalformedLine { line: 2, ref text } if text == "x IDENTIFIER"),
            "{error}"
        );

        let error = read_tokens("x,NAME\n".as_bytes()).unwrap_err();
        assert_eq!(error.to_string(), "line 1: unknown token kind \"NAME\"");
    }
}
