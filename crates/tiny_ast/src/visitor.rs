//! Walks a syntax tree in source order.
//!
//! Overriding a `visit_*` method replaces the walk for that node; call the free function of the
//! same name to continue into its children.

use crate::expr::{ConstExpr, Expr, IdExpr, OpExpr};
use crate::program::Program;
use crate::statements::{AssignStmt, IfStmt, ReadStmt, RepeatStmt, Stmt, StmtSequence, WriteStmt};
use tiny_visitor_gen::visit;

visit! {
    pub trait Visitor {
        pub visit(visitor, program: &Program) -> Result<()> {
            visitor.visit_stmt_sequence(&program.body)
        }
        pub visit(visitor, stmt_sequence: &StmtSequence) -> Result<()> {
            for stmt in stmt_sequence {
                visitor.visit_stmt(stmt)?;
            }
            Ok(())
        }
        pub visit(visitor, stmt: &Stmt) -> Result<()> {
            match stmt {
                Stmt::If(s) => visitor.visit_if_stmt(s),
                Stmt::Repeat(s) => visitor.visit_repeat_stmt(s),
                Stmt::Assign(s) => visitor.visit_assign_stmt(s),
                Stmt::Read(s) => visitor.visit_read_stmt(s),
                Stmt::Write(s) => visitor.visit_write_stmt(s),
            }
        }
        pub visit(visitor, if_stmt: &IfStmt) -> Result<()> {
            visitor.visit_expr(&if_stmt.condition)?;
            visitor.visit_stmt_sequence(&if_stmt.then_branch)
        }
        pub visit(visitor, repeat_stmt: &RepeatStmt) -> Result<()> {
            visitor.visit_stmt_sequence(&repeat_stmt.body)?;
            visitor.visit_expr(&repeat_stmt.until)
        }
        pub visit(visitor, assign_stmt: &AssignStmt) -> Result<()> {
            visitor.visit_expr(&assign_stmt.value)
        }
        pub visit(_visitor, _read_stmt: &ReadStmt) -> Result<()> {
            Ok(())
        }
        pub visit(visitor, write_stmt: &WriteStmt) -> Result<()> {
            visitor.visit_expr(&write_stmt.value)
        }
        pub visit(visitor, expr: &Expr) -> Result<()> {
            match expr {
                Expr::Op(e) => visitor.visit_op_expr(e),
                Expr::Const(e) => visitor.visit_const_expr(e),
                Expr::Id(e) => visitor.visit_id_expr(e),
            }
        }
        pub visit(visitor, op_expr: &OpExpr) -> Result<()> {
            visitor.visit_expr(&op_expr.left)?;
            visitor.visit_expr(&op_expr.right)
        }
        pub visit(_visitor, _const_expr: &ConstExpr) -> Result<()> {
            Ok(())
        }
        pub visit(_visitor, _id_expr: &IdExpr) -> Result<()> {
            Ok(())
        }
    }
}
