//! Expressions

use crate::NodeKind;
use std::fmt::{Display, Formatter};
use tiny_tokens::spanned::{Span, Spanned};
use tiny_tokens::token::TokenKind;

/// An expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Op(OpExpr),
    Const(ConstExpr),
    Id(IdExpr),
}

impl Expr {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Op(_) => NodeKind::OpExpr,
            Expr::Const(_) => NodeKind::ConstExpr,
            Expr::Id(_) => NodeKind::IdExpr,
        }
    }

    /// The label of this node when drawn in a tree
    pub fn label(&self) -> String {
        match self {
            Expr::Op(op) => op.label(),
            Expr::Const(c) => c.label(),
            Expr::Id(id) => id.label(),
        }
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::Op(op) => op.span,
            Expr::Const(c) => c.span,
            Expr::Id(id) => id.span,
        }
    }
}

impl From<OpExpr> for Expr {
    fn from(value: OpExpr) -> Self {
        Expr::Op(value)
    }
}

impl From<ConstExpr> for Expr {
    fn from(value: ConstExpr) -> Self {
        Expr::Const(value)
    }
}

impl From<IdExpr> for Expr {
    fn from(value: IdExpr) -> Self {
        Expr::Id(value)
    }
}

/// A binary operation. The span is the span of the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpExpr {
    pub op: BinOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

impl OpExpr {
    pub fn new(op: BinOp, left: Expr, right: Expr, span: Span) -> Self {
        Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }

    pub fn label(&self) -> String {
        format!("op ({})", self.op)
    }
}

/// A number literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstExpr {
    pub value: i64,
    pub span: Span,
}

impl ConstExpr {
    pub fn new(value: i64, span: Span) -> Self {
        Self { value, span }
    }

    pub fn label(&self) -> String {
        format!("const ({})", self.value)
    }
}

/// A variable reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdExpr {
    pub name: String,
    pub span: Span,
}

impl IdExpr {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    pub fn label(&self) -> String {
        format!("id ({})", self.name)
    }
}

/// Binary operators. Displays as the operator's source symbol.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum BinOp {
    #[strum(to_string = "<")]
    Lt,
    #[strum(to_string = "=")]
    Eq,
    #[strum(to_string = "+")]
    Plus,
    #[strum(to_string = "-")]
    Minus,
    #[strum(to_string = "*")]
    Mult,
    #[strum(to_string = "/")]
    Div,
}

impl BinOp {
    /// Gets the operator a token kind stands for
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::LessThan => Some(BinOp::Lt),
            TokenKind::Equal => Some(BinOp::Eq),
            TokenKind::Plus => Some(BinOp::Plus),
            TokenKind::Minus => Some(BinOp::Minus),
            TokenKind::Mult => Some(BinOp::Mult),
            TokenKind::Div => Some(BinOp::Div),
            _ => None,
        }
    }

    pub fn token_kind(&self) -> TokenKind {
        match self {
            BinOp::Lt => TokenKind::LessThan,
            BinOp::Eq => TokenKind::Equal,
            BinOp::Plus => TokenKind::Plus,
            BinOp::Minus => TokenKind::Minus,
            BinOp::Mult => TokenKind::Mult,
            BinOp::Div => TokenKind::Div,
        }
    }
}

/// Writes the expression fully parenthesized, eg `(1 + (2 * 3))`
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Op(op) => write!(f, "({} {} {})", op.left, op.op, op.right),
            Expr::Const(c) => write!(f, "{}", c.value),
            Expr::Id(id) => write!(f, "{}", id.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_op_round_trips_token_kind() {
        for op in [
            BinOp::Lt,
            BinOp::Eq,
            BinOp::Plus,
            BinOp::Minus,
            BinOp::Mult,
            BinOp::Div,
        ] {
            assert_eq!(BinOp::from_token_kind(op.token_kind()), Some(op));
        }
        assert_eq!(BinOp::from_token_kind(TokenKind::Assign), None);
    }

    #[test]
    fn test_labels() {
        let span = Span::default();
        let expr = Expr::from(OpExpr::new(
            BinOp::Plus,
            ConstExpr::new(1, span).into(),
            IdExpr::new("x", span).into(),
            span,
        ));
        assert_eq!(expr.label(), "op (+)");
        assert_eq!(expr.kind(), NodeKind::OpExpr);
        assert_eq!(expr.to_string(), "(1 + x)");
        let Expr::Op(op) = &expr else {
            panic!("expected an op expression")
        };
        assert_eq!(op.left.label(), "const (1)");
        assert_eq!(op.right.label(), "id (x)");
    }
}
