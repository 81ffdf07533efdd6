use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{anychar, char};
use nom::combinator::{consumed, eof, map, recognize, rest, value};
use nom::error::{context, VerboseError};
use nom::multi::many0;
use nom::sequence::{pair, tuple};
use nom::IResult;
use tiny_common::nom_helpers::{recognize_comment, recognize_identifier, recognize_number};
use tiny_tokens::token::TokenKind;

type Result<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Splits the next token off of `src`.
///
/// Returns the byte lengths of the skipped whitespace and comments before the token, of the token
/// itself, and of any input discarded after it, plus the kind of the token. At the end of input the
/// token is an empty [TokenKind::Eof].
pub fn parse_token(src: &str) -> Result<'_, (usize, usize, usize, TokenKind)> {
    context(
        "token",
        map(
            tuple((
                consumed(parse_insignificant),
                alt((parse_unterminated_comment, parse_significant)),
            )),
            |((l, _), (len, r, kind))| (l.len(), len, r, kind),
        ),
    )(src)
}

/// Whitespace and closed comments
fn parse_insignificant(src: &str) -> Result<'_, ()> {
    context(
        "insignificant",
        value(
            (),
            many0(alt((take_while1(char::is_whitespace), recognize_comment))),
        ),
    )(src)
}

/// A `{` that reaches here has no closing `}`, so the rest of the input is its body
fn parse_unterminated_comment(src: &str) -> Result<'_, (usize, usize, TokenKind)> {
    context(
        "unterminated comment",
        map(pair(tag("{"), rest), |(open, body): (&str, &str)| {
            (open.len(), body.len(), TokenKind::Error)
        }),
    )(src)
}

fn parse_significant(src: &str) -> Result<'_, (usize, usize, TokenKind)> {
    map(
        consumed(alt((
            parse_eof,
            parse_word,
            parse_number,
            parse_operator,
            parse_punctuation,
            parse_invalid,
        ))),
        |(token, kind)| (token.len(), 0, kind),
    )(src)
}

fn parse_eof(src: &str) -> Result<'_, TokenKind> {
    context("eof", value(TokenKind::Eof, eof))(src)
}

/// Keywords and identifiers. Words are taken whole, so `if123` is one identifier.
fn parse_word(src: &str) -> Result<'_, TokenKind> {
    context(
        "word",
        map(recognize_identifier, |word: &str| {
            TokenKind::keyword(word).unwrap_or(TokenKind::Identifier)
        }),
    )(src)
}

fn parse_number(src: &str) -> Result<'_, TokenKind> {
    context("number", value(TokenKind::Number, recognize_number))(src)
}

fn parse_operator(src: &str) -> Result<'_, TokenKind> {
    context(
        "operator",
        alt((
            value(TokenKind::Assign, tag(":=")),
            value(TokenKind::LessThan, char('<')),
            value(TokenKind::Equal, char('=')),
            value(TokenKind::Plus, char('+')),
            value(TokenKind::Minus, char('-')),
            value(TokenKind::Mult, char('*')),
            value(TokenKind::Div, char('/')),
        )),
    )(src)
}

fn parse_punctuation(src: &str) -> Result<'_, TokenKind> {
    context(
        "punctuation",
        alt((
            value(TokenKind::Semicolon, char(';')),
            value(TokenKind::OpenBracket, char('(')),
            value(TokenKind::ClosedBracket, char(')')),
        )),
    )(src)
}

/// Any other single character, including a `:` not followed by `=`
fn parse_invalid(src: &str) -> Result<'_, TokenKind> {
    context("invalid", value(TokenKind::Error, recognize(anychar)))(src)
}
