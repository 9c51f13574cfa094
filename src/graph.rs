//! Circuit snapshot: nodes and the wires between them.
//!
//! A [`CircuitGraph`] is what the editor hands to the engine. It is a plain
//! container with no invariants of its own; [`validate`][crate::validate::validate]
//! checks it and compiles it into a [`ValidatedGraph`][crate::validate::ValidatedGraph].

use std::collections::HashMap;

use crate::eval::Values;
use crate::gate::GateKind;
use crate::node::{Node, NodeKind};
use crate::types::{NodeId, Port};

/// A wire from the (single, implicit) output of `source` into `target`.
///
/// `port` selects the input slot on `target`: `a` or `b` for binary gates,
/// `None` (or `a`) for the single slot of `NOT` and `Output` nodes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub port: Option<Port>,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId, port: Option<Port>) -> Self {
        Self { source, target, port }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CircuitGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_id: u32,
}

// Constructors
impl CircuitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let next_id = nodes.iter().map(|n| n.id.id().saturating_add(1)).max().unwrap_or(0);
        Self { nodes, edges, next_id }
    }
}

// Getters
impl CircuitGraph {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|n| n.is_input())
    }

    pub fn outputs(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|n| n.is_output())
    }

    /// Stored values of all `Input` nodes; an input without a stored value
    /// is left out (and thus reads as `false` during evaluation).
    pub fn input_values(&self) -> HashMap<NodeId, bool> {
        self.inputs()
            .filter_map(|n| n.value.map(|value| (n.id, value)))
            .collect()
    }
}

// Editing
impl CircuitGraph {
    fn fresh_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Adds a node with a caller-chosen id.
    ///
    /// Uniqueness is not checked here; duplicates are reported by validation.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.next_id = self.next_id.max(id.id().saturating_add(1));
        self.nodes.push(node);
        id
    }

    pub fn add_input(&mut self, value: bool) -> NodeId {
        let id = self.fresh_id();
        self.add_node(Node::input(id, value))
    }

    pub fn add_output(&mut self) -> NodeId {
        let id = self.fresh_id();
        self.add_node(Node::output(id))
    }

    pub fn add_gate(&mut self, kind: GateKind) -> NodeId {
        let id = self.fresh_id();
        self.add_node(Node::gate(id, kind))
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn connect(&mut self, source: NodeId, target: NodeId, port: Option<Port>) {
        self.add_edge(Edge::new(source, target, port));
    }

    /// Removes every edge from `source` to `target`.
    pub fn disconnect(&mut self, source: NodeId, target: NodeId) {
        self.edges.retain(|e| !(e.source == source && e.target == target));
    }

    /// Sets the stored value of an `Input` node.
    ///
    /// Returns `false` (and changes nothing) if `id` is not an `Input` node.
    pub fn set_input(&mut self, id: NodeId, value: bool) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) if node.kind == NodeKind::Input => {
                node.value = Some(value);
                true
            }
            _ => false,
        }
    }

    /// Writes computed values back onto the nodes.
    ///
    /// `Input` nodes keep their externally driven value.
    pub fn apply_values(&mut self, values: &Values) {
        for node in self.nodes.iter_mut().filter(|n| !n.is_input()) {
            if let Some(value) = values.get(node.id) {
                node.value = Some(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_ids() {
        let mut graph = CircuitGraph::new();
        let a = graph.add_input(true);
        let b = graph.add_input(false);
        let g = graph.add_gate(GateKind::And);
        let y = graph.add_output();
        assert_eq!([a, b, g, y].map(NodeId::id), [0, 1, 2, 3]);
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.inputs().count(), 2);
        assert_eq!(graph.outputs().count(), 1);
    }

    #[test]
    fn test_add_node_bumps_fresh_id() {
        let mut graph = CircuitGraph::new();
        graph.add_node(Node::input(NodeId::new(10), false));
        let next = graph.add_output();
        assert_eq!(next, NodeId::new(11));
    }

    #[test]
    fn test_from_parts() {
        let mut graph = CircuitGraph::from_parts(
            vec![Node::input(NodeId::new(4), true), Node::output(NodeId::new(7))],
            vec![Edge::new(NodeId::new(4), NodeId::new(7), None)],
        );
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.add_input(false), NodeId::new(8));
    }

    #[test]
    fn test_set_input() {
        let mut graph = CircuitGraph::new();
        let a = graph.add_input(false);
        let y = graph.add_output();
        assert!(graph.set_input(a, true));
        assert!(!graph.set_input(y, true));
        assert_eq!(graph.node(a).and_then(|n| n.value), Some(true));
        assert_eq!(graph.node(y).and_then(|n| n.value), None);
        assert!(!graph.set_input(NodeId::new(99), true));
    }

    #[test]
    fn test_input_values() {
        let mut graph = CircuitGraph::new();
        let a = graph.add_input(true);
        let b = graph.add_input(false);
        graph.add_node(Node::new(NodeId::new(5), NodeKind::Input));
        let values = graph.input_values();
        assert_eq!(values.len(), 2);
        assert!(values[&a]);
        assert!(!values[&b]);
    }

    #[test]
    fn test_disconnect() {
        let mut graph = CircuitGraph::new();
        let a = graph.add_input(true);
        let g = graph.add_gate(GateKind::And);
        graph.connect(a, g, Some(Port::A));
        graph.connect(a, g, Some(Port::B));
        assert_eq!(graph.num_edges(), 2);
        graph.disconnect(a, g);
        assert_eq!(graph.num_edges(), 0);
    }
}
