//! Expression productions, lowest precedence first

use crate::parser::{ErrorKind, Result, SyntacticParser};
use tiny_ast::expr::{BinOp, ConstExpr, Expr, IdExpr, OpExpr};
use tiny_tokens::spanned::Spanned;
use tiny_tokens::token::{Token, TokenKind};

/// `simple_exp [ (< | =) simple_exp ]`. Comparisons do not chain.
pub(crate) fn parse_exp(parser: &mut SyntacticParser<'_>) -> Result<Expr> {
    parser.parse("exp", |parser| {
        let left = parse_simple_exp(parser)?;
        match consume_op(parser, &[BinOp::Lt, BinOp::Eq]) {
            Some((op, token)) => {
                let right = parse_simple_exp(parser)?;
                Ok(OpExpr::new(op, left, right, token.span()).into())
            }
            None => Ok(left),
        }
    })
}

/// `term { (+ | -) term }`
fn parse_simple_exp(parser: &mut SyntacticParser<'_>) -> Result<Expr> {
    parser.parse("simple_exp", |parser| {
        parse_left_assoc(parser, &[BinOp::Plus, BinOp::Minus], parse_term)
    })
}

/// `factor { (* | /) factor }`
fn parse_term(parser: &mut SyntacticParser<'_>) -> Result<Expr> {
    parser.parse("term", |parser| {
        parse_left_assoc(parser, &[BinOp::Mult, BinOp::Div], parse_factor)
    })
}

/// `( exp ) | number | identifier`
fn parse_factor(parser: &mut SyntacticParser<'_>) -> Result<Expr> {
    parser.parse("factor", |parser| match parser.peek_kind() {
        TokenKind::OpenBracket => {
            parser.expect(TokenKind::OpenBracket)?;
            let inner = parse_exp(parser)?;
            parser.expect(TokenKind::ClosedBracket)?;
            Ok(inner)
        }
        TokenKind::Number => {
            let token = parser.expect(TokenKind::Number)?;
            let value = token.lexeme().parse::<i64>().map_err(|_| {
                parser.error_with_span(
                    ErrorKind::InvalidNumber(token.lexeme().to_string()),
                    token.span(),
                )
            })?;
            Ok(ConstExpr::new(value, token.span()).into())
        }
        TokenKind::Identifier => {
            let token = parser.expect(TokenKind::Identifier)?;
            Ok(IdExpr::new(token.lexeme(), token.span()).into())
        }
        _ => Err(parser.unexpected(ErrorKind::ExpectedFactor)),
    })
}

/// Folds `operand { op operand }` to the left.
///
/// Each operator deepens the left spine of the result by one, so each holds an entry on the
/// non-terminal stack until the whole chain is folded.
fn parse_left_assoc<'t, F>(
    parser: &mut SyntacticParser<'t>,
    ops: &[BinOp],
    mut operand: F,
) -> Result<Expr>
where
    F: FnMut(&mut SyntacticParser<'t>) -> Result<Expr>,
{
    let mut left = operand(parser)?;
    let mut links = 0_usize;
    while let Some((op, token)) = consume_op(parser, ops) {
        parser.enter("operation")?;
        links += 1;
        let right = operand(parser)?;
        left = OpExpr::new(op, left, right, token.span()).into();
    }
    parser.leave(links);
    Ok(left)
}

/// Consumes the lookahead if it is one of `ops`
fn consume_op<'t>(parser: &mut SyntacticParser<'t>, ops: &[BinOp]) -> Option<(BinOp, &'t Token)> {
    let op = BinOp::from_token_kind(parser.peek_kind()).filter(|op| ops.contains(op))?;
    parser.consume_if(|_| true).map(|token| (op, token))
}
