#![doc = include_str!("../README.md")]

use crate::lexer::Lexer;
use crate::parser::{ParserConfig, SyntacticParser, SyntaxError};
use crate::token_listing::{read_tokens, ListingError};
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::Path;
use tiny_ast::program::Program;
use tiny_tokens::token::Token;
use tracing::{debug, instrument};

pub mod lexer;
pub mod parser;
pub mod token_listing;

/// Scans a source into tokens. The result always ends with exactly one EOF token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens = Lexer::new(source).collect::<Vec<_>>();
    debug!("scanned {} tokens", tokens.len());
    tokens
}

/// Reads and scans a source file
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn tokenize_file(path: impl AsRef<Path>) -> io::Result<Vec<Token>> {
    let source = std::fs::read_to_string(path.as_ref())?;
    Ok(tokenize(&source))
}

/// Parses tokens into a program with the default [ParserConfig]
pub fn parse(tokens: &[Token]) -> Result<Program, SyntaxError> {
    SyntacticParser::new(tokens).parse_program()
}

/// Parses tokens into a program
pub fn parse_with(tokens: &[Token], config: &ParserConfig) -> Result<Program, SyntaxError> {
    SyntacticParser::with_config(tokens, config.clone()).parse_program()
}

/// Scans and parses a source
pub fn parse_source(source: &str) -> Result<Program, SyntaxError> {
    parse(&tokenize(source))
}

/// Reads, scans and parses a source file
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn parse_file(path: impl AsRef<Path>) -> Result<Program, Error> {
    let tokens = tokenize_file(path)?;
    Ok(parse(&tokens)?)
}

/// Reads and parses a token listing written by [write_tokens](token_listing::write_tokens).
/// Syntax errors point at lines of the listing.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn parse_listing_file(path: impl AsRef<Path>) -> Result<Program, Error> {
    let file = File::open(path.as_ref())?;
    let tokens = read_tokens(BufReader::new(file))?;
    Ok(parse(&tokens)?)
}

/// Any error from the file level entry points
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Listing(#[from] ListingError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;
    use test_log::test;
    use tiny_tokens::token::TokenKind;

    #[test]
    fn test_parse_file() -> eyre::Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "read x; {{ echo }}\nwrite x")?;
        let program = parse_file(temp_file.path())?;
        assert_eq!(program.body.len(), 2);
        Ok(())
    }

    #[test]
    fn test_parse_file_reports_syntax_error() -> eyre::Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "read")?;
        let error = parse_file(temp_file.path()).unwrap_err();
        let Error::Syntax(error) = error else {
            panic!("expected a syntax error, got {error:?}")
        };
        assert_eq!((error.line(), error.column()), (1, 5));
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let error = parse_file("this/file/does/not/exist.tiny").unwrap_err();
        assert!(matches!(error, Error::Io(_)), "{error:?}");
    }

    #[test]
    fn test_parse_listing_file() -> eyre::Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        write!(temp_file, "read,READ\nx,IDENTIFIER\n;,SEMICOLON\nwrite,WRITE\nx,IDENTIFIER\n")?;
        let program = parse_listing_file(temp_file.path())?;
        assert_eq!(program.body.len(), 2);
        Ok(())
    }

    #[test]
    fn test_parse_listing_file_errors() -> eyre::Result<()> {
        let mut malformed = NamedTempFile::new()?;
        writeln!(malformed, "read,READ\nno kind here")?;
        let error = parse_listing_file(malformed.path()).unwrap_err();
        assert!(
            matches!(error, Error::Listing(ListingError::MalformedLine { line: 2, .. })),
            "{error:?}"
        );

        let mut incomplete = NamedTempFile::new()?;
        writeln!(incomplete, "read,READ\nwrite,WRITE")?;
        let Error::Syntax(error) = parse_listing_file(incomplete.path()).unwrap_err() else {
            panic!("expected a syntax error")
        };
        assert_eq!((error.line(), error.column()), (2, 1));
        Ok(())
    }

    #[test]
    fn test_tokenize_file() -> eyre::Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        write!(temp_file, "x:=1")?;
        let kinds = tokenize_file(temp_file.path())?
            .iter()
            .map(Token::kind)
            .collect::<Vec<_>>();
        assert_eq!(
            kinds,
            [
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Number,
                TokenKind::Eof
            ]
        );
        Ok(())
    }
}
