//! Draws a syntax tree as indented text

use crate::expr::{ConstExpr, Expr, IdExpr, OpExpr};
use crate::program::Program;
use crate::statements::{Stmt, StmtSequence};
use crate::visitor::{self, Visitor};
use std::fmt;
use std::fmt::Write as _;

/// Draws a syntax tree as one node label per line, children indented under their parent.
///
/// # Example
/// ```text
/// program
///   sequence
///     read (x)
///     write
///       id (x)
/// ```
#[derive(Debug)]
pub struct TreePrinter {
    out: String,
    depth: usize,
    indent: usize,
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreePrinter {
    pub fn new() -> Self {
        Self::with_indent(2)
    }

    /// Creates a printer indenting each level by `indent` spaces
    pub fn with_indent(indent: usize) -> Self {
        Self {
            out: String::new(),
            depth: 0,
            indent,
        }
    }

    /// Draws a program
    pub fn print(mut self, program: &Program) -> Result<String, fmt::Error> {
        self.visit_program(program)?;
        Ok(self.out)
    }

    /// Draws a single expression
    pub fn print_expr(mut self, expr: &Expr) -> Result<String, fmt::Error> {
        self.visit_expr(expr)?;
        Ok(self.out)
    }

    fn node<F>(&mut self, label: &str, walk: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        writeln!(self.out, "{:width$}{label}", "", width = self.depth * self.indent)?;
        self.depth += 1;
        let result = walk(self);
        self.depth -= 1;
        result
    }
}

impl Visitor for TreePrinter {
    type Err = fmt::Error;

    fn visit_program(&mut self, program: &Program) -> fmt::Result {
        self.node("program", |p| visitor::visit_program(p, program))
    }

    fn visit_stmt_sequence(&mut self, stmt_sequence: &StmtSequence) -> fmt::Result {
        self.node("sequence", |p| visitor::visit_stmt_sequence(p, stmt_sequence))
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> fmt::Result {
        self.node(&stmt.label(), |p| visitor::visit_stmt(p, stmt))
    }

    fn visit_op_expr(&mut self, op_expr: &OpExpr) -> fmt::Result {
        self.node(&op_expr.label(), |p| visitor::visit_op_expr(p, op_expr))
    }

    fn visit_const_expr(&mut self, const_expr: &ConstExpr) -> fmt::Result {
        self.node(&const_expr.label(), |_| Ok(()))
    }

    fn visit_id_expr(&mut self, id_expr: &IdExpr) -> fmt::Result {
        self.node(&id_expr.label(), |_| Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::BinOp;
    use crate::statements::{IfStmt, ReadStmt, WriteStmt};
    use tiny_tokens::spanned::Span;

    #[test]
    fn test_print_program() {
        let span = Span::default();
        let program = Program::new(StmtSequence::new(vec![
            ReadStmt {
                target: "x".to_string(),
                span,
            }
            .into(),
            IfStmt {
                condition: OpExpr::new(
                    BinOp::Lt,
                    ConstExpr::new(0, span).into(),
                    IdExpr::new("x", span).into(),
                    span,
                )
                .into(),
                then_branch: StmtSequence::new(vec![WriteStmt {
                    value: IdExpr::new("x", span).into(),
                    span,
                }
                .into()]),
                span,
            }
            .into(),
        ]));
        let printed = TreePrinter::new().print(&program).unwrap();
        let expected = "\
program
  sequence
    read (x)
    if
      op (<)
        const (0)
        id (x)
      sequence
        write
          id (x)
";
        assert_eq!(printed, expected);
        assert_eq!(program.to_string(), expected);
    }

    #[test]
    fn test_print_expr_with_indent() {
        let span = Span::default();
        let expr: Expr = OpExpr::new(
            BinOp::Mult,
            IdExpr::new("a", span).into(),
            ConstExpr::new(2, span).into(),
            span,
        )
        .into();
        let printed = TreePrinter::with_indent(4).print_expr(&expr).unwrap();
        assert_eq!(printed, "op (*)\n    id (a)\n    const (2)\n");
    }
}
