//! nom helpers

use nom::bytes::complete::take_until;
use nom::character::complete::{alpha1, alphanumeric0, char, digit1};
use nom::combinator::recognize;
use nom::error::ParseError;
use nom::sequence::{delimited, pair};
use nom::IResult;

/// Recognizes `[A-Za-z][A-Za-z0-9]*`
pub fn recognize_identifier<'a, E: ParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, &'a str, E> {
    recognize(pair(alpha1, alphanumeric0))(input)
}

/// Recognizes `[0-9]+`
pub fn recognize_number<'a, E: ParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, &'a str, E> {
    digit1(input)
}

/// Recognizes a closed `{ ... }` comment. Comments do not nest.
pub fn recognize_comment<'a, E: ParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, &'a str, E> {
    recognize(delimited(char('{'), take_until("}"), char('}')))(input)
}
