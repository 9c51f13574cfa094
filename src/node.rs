use std::fmt::{Display, Formatter};

use crate::gate::GateKind;
use crate::types::{NodeId, Port};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NodeKind {
    /// Externally driven, no input ports.
    Input,
    /// Passes its single input through unchanged.
    Output,
    Gate(GateKind),
}

impl NodeKind {
    /// Number of input ports of this node kind.
    pub const fn arity(self) -> usize {
        match self {
            NodeKind::Input => 0,
            NodeKind::Output => 1,
            NodeKind::Gate(kind) => kind.arity(),
        }
    }

    /// Resolves an edge's port tag to a slot on this node kind.
    ///
    /// Single-port nodes accept an untagged edge or port `a`.
    /// Binary gates require an explicit tag.
    pub const fn resolve_port(self, port: Option<Port>) -> Option<Port> {
        match (self.arity(), port) {
            (1, None) | (1, Some(Port::A)) => Some(Port::A),
            (2, Some(port)) => Some(port),
            _ => None,
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Input => write!(f, "IN"),
            NodeKind::Output => write!(f, "OUT"),
            NodeKind::Gate(kind) => write!(f, "{}", kind),
        }
    }
}

/// A node of the circuit snapshot.
///
/// `value` is the current boolean state: the externally driven level for
/// `Input` nodes, and the last computed value for everything else (absent
/// until first evaluated).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub value: Option<bool>,
}

impl Node {
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self { id, kind, value: None }
    }

    pub fn input(id: NodeId, value: bool) -> Self {
        Self {
            id,
            kind: NodeKind::Input,
            value: Some(value),
        }
    }

    pub fn output(id: NodeId) -> Self {
        Self::new(id, NodeKind::Output)
    }

    pub fn gate(id: NodeId, kind: GateKind) -> Self {
        Self::new(id, NodeKind::Gate(kind))
    }

    pub fn is_input(&self) -> bool {
        self.kind == NodeKind::Input
    }

    pub fn is_output(&self) -> bool {
        self.kind == NodeKind::Output
    }
}
