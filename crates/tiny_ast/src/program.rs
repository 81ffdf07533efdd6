//! The root of a syntax tree

use crate::printer::TreePrinter;
use crate::statements::StmtSequence;
use std::fmt::{Display, Formatter};

/// A complete TINY program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub body: StmtSequence,
}

impl Program {
    pub fn new(body: StmtSequence) -> Self {
        Self { body }
    }
}

/// Writes the indented tree drawn by [TreePrinter]
impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&TreePrinter::new().print(self)?)
    }
}
