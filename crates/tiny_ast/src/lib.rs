#![doc = include_str!("../README.md")]

use strum::Display;

pub mod expr;
pub mod graph;
pub mod printer;
pub mod program;
pub mod statements;
pub mod visitor;

/// The kind of a syntax tree node
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
pub enum NodeKind {
    Program,
    StmtSequence,
    IfStmt,
    RepeatStmt,
    AssignStmt,
    ReadStmt,
    WriteStmt,
    OpExpr,
    ConstExpr,
    IdExpr,
}

impl NodeKind {
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeKind::IfStmt
                | NodeKind::RepeatStmt
                | NodeKind::AssignStmt
                | NodeKind::ReadStmt
                | NodeKind::WriteStmt
        )
    }

    pub fn is_expression(&self) -> bool {
        matches!(self, NodeKind::OpExpr | NodeKind::ConstExpr | NodeKind::IdExpr)
    }
}
