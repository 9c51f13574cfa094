//! Graph validation and topological ordering.
//!
//! [`validate`] checks a [`CircuitGraph`] snapshot and compiles it into a
//! [`ValidatedGraph`]: a dense, index-based copy of the structure together
//! with a topological order of its nodes. The order is computed once here and
//! reused by every evaluation of the same structure, including every row of
//! a truth table.
//!
//! # Checks
//!
//! In this order, returning the first failure:
//!
//! 1. node ids are unique ([`GraphError::DuplicateNode`]);
//! 2. every edge references existing nodes ([`GraphError::DanglingEdgeReference`]);
//! 3. every edge targets a port its node has ([`GraphError::InvalidPort`]);
//! 4. no port is driven by more than one edge ([`GraphError::PortConflict`]);
//! 5. the dependency graph is acyclic ([`GraphError::CyclicGraph`]).
//!
//! A port with no incoming edge is allowed and reads as `false`.

use std::collections::{HashMap, VecDeque};

use log::debug;
use num_bigint::BigUint;

use crate::config::table_rows;
use crate::error::GraphError;
use crate::graph::CircuitGraph;
use crate::node::NodeKind;
use crate::types::{NodeId, Port};

/// A structurally valid circuit, compiled for evaluation.
///
/// Owns its data: the source [`CircuitGraph`] may be edited (for example,
/// toggling stored input values) without invalidating this compiled form, as
/// long as nodes and edges stay the same.
#[derive(Debug, Clone)]
pub struct ValidatedGraph {
    ids: Vec<NodeId>,
    kinds: Vec<NodeKind>,
    /// Source index driving each input slot, per node.
    drivers: Vec<[Option<usize>; 2]>,
    /// Topologically sorted node indices.
    order: Vec<usize>,
    inputs: Vec<usize>,
    outputs: Vec<usize>,
    index: HashMap<NodeId, usize>,
}

/// Validates a circuit snapshot and computes its topological order.
pub fn validate(graph: &CircuitGraph) -> Result<ValidatedGraph, GraphError> {
    debug!("validate(nodes = {}, edges = {})", graph.num_nodes(), graph.num_edges());

    let n = graph.num_nodes();
    let mut ids = Vec::with_capacity(n);
    let mut kinds = Vec::with_capacity(n);
    let mut index = HashMap::with_capacity(n);
    for (i, node) in graph.nodes().iter().enumerate() {
        if index.insert(node.id, i).is_some() {
            return Err(GraphError::DuplicateNode { node: node.id });
        }
        ids.push(node.id);
        kinds.push(node.kind);
    }

    let mut drivers = vec![[None; 2]; n];
    let mut successors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut in_degree = vec![0usize; n];

    // One pass per check, so an earlier kind of failure wins over a later edge.
    let mut endpoints = Vec::with_capacity(graph.num_edges());
    for (e, edge) in graph.edges().iter().enumerate() {
        let lookup = |node: NodeId| {
            index
                .get(&node)
                .copied()
                .ok_or(GraphError::DanglingEdgeReference { edge: e, node })
        };
        endpoints.push((lookup(edge.source)?, lookup(edge.target)?));
    }

    let mut wires = Vec::with_capacity(endpoints.len());
    for (e, (edge, (source, target))) in graph.edges().iter().zip(endpoints).enumerate() {
        let port = kinds[target].resolve_port(edge.port).ok_or(GraphError::InvalidPort {
            edge: e,
            node: edge.target,
            port: edge.port,
        })?;
        wires.push((source, target, port));
    }

    for (source, target, port) in wires {
        let slot = &mut drivers[target][port.slot()];
        if slot.is_some() {
            return Err(GraphError::PortConflict { node: ids[target], port });
        }
        *slot = Some(source);

        successors[source].push(target);
        in_degree[target] += 1;
    }

    let order = topological_order(&successors, &mut in_degree);
    if order.len() < n {
        // Every node left with a pending dependency is on, or downstream of, a cycle.
        let nodes: Vec<NodeId> = (0..n).filter(|&i| in_degree[i] > 0).map(|i| ids[i]).collect();
        debug!("validate: cycle through {:?}", nodes);
        return Err(GraphError::CyclicGraph { nodes });
    }

    let inputs = (0..n).filter(|&i| kinds[i] == NodeKind::Input).collect();
    let outputs = (0..n).filter(|&i| kinds[i] == NodeKind::Output).collect();

    debug!("validate: ok, order = {:?}", order);

    Ok(ValidatedGraph {
        ids,
        kinds,
        drivers,
        order,
        inputs,
        outputs,
        index,
    })
}

/// Kahn's algorithm over dense indices.
///
/// Ready nodes are taken in declaration order, so the result is deterministic.
/// On return, `in_degree` is zero exactly for the nodes that were ordered; if
/// the result is shorter than the node count, the rest are blocked by a cycle.
fn topological_order(successors: &[Vec<usize>], in_degree: &mut [usize]) -> Vec<usize> {
    let mut order = Vec::with_capacity(successors.len());
    let mut ready: VecDeque<usize> = (0..successors.len()).filter(|&i| in_degree[i] == 0).collect();

    while let Some(i) = ready.pop_front() {
        order.push(i);
        for &j in successors[i].iter() {
            in_degree[j] -= 1;
            if in_degree[j] == 0 {
                ready.push_back(j);
            }
        }
    }

    order
}

// Getters
impl ValidatedGraph {
    pub fn num_nodes(&self) -> usize {
        self.ids.len()
    }

    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// Node ids in declaration order.
    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.index.get(&id).map(|&i| self.kinds[i])
    }

    /// Node ids in evaluation order: each node after everything it depends on.
    pub fn topological_order(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().map(|&i| self.ids[i])
    }

    /// `Input` node ids in declaration order.
    pub fn input_ids(&self) -> Vec<NodeId> {
        self.inputs.iter().map(|&i| self.ids[i]).collect()
    }

    /// `Output` node ids in declaration order.
    pub fn output_ids(&self) -> Vec<NodeId> {
        self.outputs.iter().map(|&i| self.ids[i]).collect()
    }

    /// The node driving the given port of `id`, if connected.
    pub fn driver(&self, id: NodeId, port: Port) -> Option<NodeId> {
        let i = self.index_of(id)?;
        self.drivers[i][port.slot()].map(|j| self.ids[j])
    }

    /// Number of input assignments, `2^n` for `n` inputs.
    pub fn num_assignments(&self) -> BigUint {
        table_rows(self.num_inputs())
    }
}

// Dense accessors for the evaluator
impl ValidatedGraph {
    pub(crate) fn index_of(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub(crate) fn id_at(&self, i: usize) -> NodeId {
        self.ids[i]
    }

    pub(crate) fn kind_at(&self, i: usize) -> NodeKind {
        self.kinds[i]
    }

    pub(crate) fn drivers_at(&self, i: usize) -> [Option<usize>; 2] {
        self.drivers[i]
    }

    pub(crate) fn order_indices(&self) -> &[usize] {
        &self.order
    }

    pub(crate) fn input_indices(&self) -> &[usize] {
        &self.inputs
    }

    pub(crate) fn output_indices(&self) -> &[usize] {
        &self.outputs
    }
}
