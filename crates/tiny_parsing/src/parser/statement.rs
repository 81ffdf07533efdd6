//! Statement productions

use crate::parser::expr::parse_exp;
use crate::parser::{ErrorKind, Result, SyntacticParser};
use tiny_ast::statements::{
    AssignStmt, IfStmt, ReadStmt, RepeatStmt, Stmt, StmtSequence, WriteStmt,
};
use tiny_tokens::spanned::Spanned;
use tiny_tokens::token::TokenKind;

/// `statement { ; statement }`
pub(crate) fn parse_stmt_sequence(parser: &mut SyntacticParser<'_>) -> Result<StmtSequence> {
    parser.parse("stmt_sequence", |parser| {
        let mut statements = vec![parse_statement(parser)?];
        while parser
            .consume_if(|token| token.is(TokenKind::Semicolon))
            .is_some()
        {
            if parser.config().allow_trailing_semicolon()
                && matches!(
                    parser.peek_kind(),
                    TokenKind::End | TokenKind::Until | TokenKind::Eof
                )
            {
                break;
            }
            statements.push(parse_statement(parser)?);
        }
        Ok(StmtSequence::new(statements))
    })
}

fn parse_statement(parser: &mut SyntacticParser<'_>) -> Result<Stmt> {
    parser.parse("statement", |parser| match parser.peek_kind() {
        TokenKind::If => parse_if_stmt(parser).map(Stmt::from),
        TokenKind::Repeat => parse_repeat_stmt(parser).map(Stmt::from),
        TokenKind::Identifier => parse_assign_stmt(parser).map(Stmt::from),
        TokenKind::Read => parse_read_stmt(parser).map(Stmt::from),
        TokenKind::Write => parse_write_stmt(parser).map(Stmt::from),
        _ => Err(parser.unexpected(ErrorKind::ExpectedStatement)),
    })
}

/// `if exp then stmt_sequence end`
fn parse_if_stmt(parser: &mut SyntacticParser<'_>) -> Result<IfStmt> {
    parser.parse("if_stmt", |parser| {
        let keyword = parser.expect(TokenKind::If)?;
        let condition = parse_exp(parser)?;
        parser.expect(TokenKind::Then)?;
        let then_branch = parse_stmt_sequence(parser)?;
        parser.expect(TokenKind::End)?;
        Ok(IfStmt {
            condition,
            then_branch,
            span: keyword.span(),
        })
    })
}

/// `repeat stmt_sequence until exp`
fn parse_repeat_stmt(parser: &mut SyntacticParser<'_>) -> Result<RepeatStmt> {
    parser.parse("repeat_stmt", |parser| {
        let keyword = parser.expect(TokenKind::Repeat)?;
        let body = parse_stmt_sequence(parser)?;
        parser.expect(TokenKind::Until)?;
        let until = parse_exp(parser)?;
        Ok(RepeatStmt {
            body,
            until,
            span: keyword.span(),
        })
    })
}

/// `identifier := exp`
fn parse_assign_stmt(parser: &mut SyntacticParser<'_>) -> Result<AssignStmt> {
    parser.parse("assign_stmt", |parser| {
        let target = parser.expect(TokenKind::Identifier)?;
        parser.expect(TokenKind::Assign)?;
        let value = parse_exp(parser)?;
        Ok(AssignStmt {
            target: target.lexeme().to_string(),
            value,
            span: target.span(),
        })
    })
}

/// `read identifier`
fn parse_read_stmt(parser: &mut SyntacticParser<'_>) -> Result<ReadStmt> {
    parser.parse("read_stmt", |parser| {
        let keyword = parser.expect(TokenKind::Read)?;
        let target = parser.expect(TokenKind::Identifier)?;
        Ok(ReadStmt {
            target: target.lexeme().to_string(),
            span: keyword.span(),
        })
    })
}

/// `write exp`
fn parse_write_stmt(parser: &mut SyntacticParser<'_>) -> Result<WriteStmt> {
    parser.parse("write_stmt", |parser| {
        let keyword = parser.expect(TokenKind::Write)?;
        let value = parse_exp(parser)?;
        Ok(WriteStmt {
            value,
            span: keyword.span(),
        })
    })
}
