//! statements

use crate::expr::Expr;
use crate::NodeKind;
use tiny_tokens::spanned::{Span, Spanned};

/// A list of statements, in execution order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StmtSequence {
    pub statements: Vec<Stmt>,
}

impl StmtSequence {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }
}

impl<'a> IntoIterator for &'a StmtSequence {
    type Item = &'a Stmt;
    type IntoIter = std::slice::Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// General statement types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    If(IfStmt),
    Repeat(RepeatStmt),
    Assign(AssignStmt),
    Read(ReadStmt),
    Write(WriteStmt),
}

impl Stmt {
    pub fn kind(&self) -> NodeKind {
        match self {
            Stmt::If(_) => NodeKind::IfStmt,
            Stmt::Repeat(_) => NodeKind::RepeatStmt,
            Stmt::Assign(_) => NodeKind::AssignStmt,
            Stmt::Read(_) => NodeKind::ReadStmt,
            Stmt::Write(_) => NodeKind::WriteStmt,
        }
    }

    /// The label of this node when drawn in a tree
    pub fn label(&self) -> String {
        match self {
            Stmt::If(_) => "if".to_string(),
            Stmt::Repeat(_) => "repeat".to_string(),
            Stmt::Assign(assign) => format!("assign ({})", assign.target),
            Stmt::Read(read) => format!("read ({})", read.target),
            Stmt::Write(_) => "write".to_string(),
        }
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        match self {
            Stmt::If(s) => s.span,
            Stmt::Repeat(s) => s.span,
            Stmt::Assign(s) => s.span,
            Stmt::Read(s) => s.span,
            Stmt::Write(s) => s.span,
        }
    }
}

/// `if <condition> then <then_branch> end`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: StmtSequence,
    pub span: Span,
}

/// `repeat <body> until <until>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatStmt {
    pub body: StmtSequence,
    pub until: Expr,
    pub span: Span,
}

/// `<target> := <value>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignStmt {
    pub target: String,
    pub value: Expr,
    pub span: Span,
}

/// `read <target>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadStmt {
    pub target: String,
    pub span: Span,
}

/// `write <value>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteStmt {
    pub value: Expr,
    pub span: Span,
}

impl From<IfStmt> for Stmt {
    fn from(value: IfStmt) -> Self {
        Stmt::If(value)
    }
}

impl From<RepeatStmt> for Stmt {
    fn from(value: RepeatStmt) -> Self {
        Stmt::Repeat(value)
    }
}

impl From<AssignStmt> for Stmt {
    fn from(value: AssignStmt) -> Self {
        Stmt::Assign(value)
    }
}

impl From<ReadStmt> for Stmt {
    fn from(value: ReadStmt) -> Self {
        Stmt::Read(value)
    }
}

impl From<WriteStmt> for Stmt {
    fn from(value: WriteStmt) -> Self {
        Stmt::Write(value)
    }
}
