//! Converts a syntax tree into a graph, for rendering with Graphviz

use crate::expr::{ConstExpr, IdExpr, OpExpr};
use crate::program::Program;
use crate::statements::{Stmt, StmtSequence};
use crate::visitor::{self, Visitor};
use crate::NodeKind;
use log::debug;
use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};

/// A node of a [SyntaxGraph]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub kind: NodeKind,
    pub label: String,
}

impl GraphNode {
    /// The Graphviz shape used for this node
    pub fn shape(&self) -> &'static str {
        if self.kind.is_statement() {
            "box"
        } else if self.kind.is_expression() {
            "ellipse"
        } else {
            "plaintext"
        }
    }
}

impl Display for GraphNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// A syntax tree as a directed graph. Edges point from parent to child and are weighted with the
/// child's index among its siblings.
pub type SyntaxGraph = DiGraph<GraphNode, usize>;

/// Builds the graph of a program. The root is always the node at index 0.
pub fn to_graph(program: &Program) -> SyntaxGraph {
    let mut builder = GraphBuilder::default();
    match builder.visit_program(program) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    debug!(
        "built syntax graph with {} nodes",
        builder.graph.node_count()
    );
    builder.graph
}

/// Renders a program as a Graphviz DOT digraph
pub fn to_dot(program: &Program) -> String {
    let graph = to_graph(program);
    let dot = Dot::with_attr_getters(
        &graph,
        &[Config::EdgeNoLabel, Config::NodeNoLabel],
        &|_, _| String::new(),
        &|_, (_, node): (NodeIndex, &GraphNode)| {
            format!("label = {:?} shape = {} ", node.label, node.shape())
        },
    );
    format!("{dot}")
}

#[derive(Debug, Default)]
struct GraphBuilder {
    graph: SyntaxGraph,
    /// Nodes being walked, with how many children each has so far
    parents: Vec<(NodeIndex, usize)>,
}

impl GraphBuilder {
    fn node<F>(&mut self, kind: NodeKind, label: String, walk: F) -> Result<(), Infallible>
    where
        F: FnOnce(&mut Self) -> Result<(), Infallible>,
    {
        let index = self.graph.add_node(GraphNode { kind, label });
        if let Some((parent, children)) = self.parents.last_mut() {
            self.graph.add_edge(*parent, index, *children);
            *children += 1;
        }
        self.parents.push((index, 0));
        let result = walk(self);
        self.parents.pop();
        result
    }
}

impl Visitor for GraphBuilder {
    type Err = Infallible;

    fn visit_program(&mut self, program: &Program) -> Result<(), Self::Err> {
        self.node(NodeKind::Program, "program".to_string(), |b| {
            visitor::visit_program(b, program)
        })
    }

    fn visit_stmt_sequence(&mut self, stmt_sequence: &StmtSequence) -> Result<(), Self::Err> {
        self.node(NodeKind::StmtSequence, "sequence".to_string(), |b| {
            visitor::visit_stmt_sequence(b, stmt_sequence)
        })
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<(), Self::Err> {
        self.node(stmt.kind(), stmt.label(), |b| visitor::visit_stmt(b, stmt))
    }

    fn visit_op_expr(&mut self, op_expr: &OpExpr) -> Result<(), Self::Err> {
        self.node(NodeKind::OpExpr, op_expr.label(), |b| {
            visitor::visit_op_expr(b, op_expr)
        })
    }

    fn visit_const_expr(&mut self, const_expr: &ConstExpr) -> Result<(), Self::Err> {
        self.node(NodeKind::ConstExpr, const_expr.label(), |_| Ok(()))
    }

    fn visit_id_expr(&mut self, id_expr: &IdExpr) -> Result<(), Self::Err> {
        self.node(NodeKind::IdExpr, id_expr.label(), |_| Ok(()))
    }
}
