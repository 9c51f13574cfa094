//! Identifier and port types shared by the graph model and the evaluator.
//!
//! This module provides newtype wrappers that keep node identifiers distinct
//! from the dense indices used internally by a validated graph, plus the tag
//! naming a gate input port.
use std::fmt;

/// A node identifier, unique within a circuit graph.
///
/// Identifiers are chosen by the editor that owns the graph and are stable
/// across edits. They carry no ordering meaning for evaluation: declared order
/// of nodes in the graph decides input and output column order instead.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a node identifier from its raw value.
    pub const fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Returns the raw identifier as a `u32`.
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for u32 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// A named input port on a gate.
///
/// Binary gates have two ports, `a` and `b`. Single-input nodes (`NOT` and
/// `Output`) have one implicit port, which is addressed either by an untagged
/// edge or by [`Port::A`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Port {
    A,
    B,
}

impl Port {
    /// Returns the slot index of this port (`a` = 0, `b` = 1).
    pub const fn slot(self) -> usize {
        match self {
            Port::A => 0,
            Port::B => 1,
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Port::A => write!(f, "a"),
            Port::B => write!(f, "b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let n1 = NodeId::new(1);
        let n2 = NodeId::from(2);
        assert_eq!(n1.id(), 1);
        assert_eq!(u32::from(n2), 2);
        assert!(n1 < n2);
        assert_eq!(n1.to_string(), "n1");
    }

    #[test]
    fn test_port_slots() {
        assert_eq!(Port::A.slot(), 0);
        assert_eq!(Port::B.slot(), 1);
        assert_eq!(Port::B.to_string(), "b");
    }
}
