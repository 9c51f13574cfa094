//! Circuit evaluation.
//!
//! Evaluation is a pure function of a [`ValidatedGraph`] and an input
//! assignment: nodes are visited in the precomputed topological order and each
//! gets a value from the values already computed for its drivers. It cannot
//! fail; every structural problem was rejected by validation.
//!
//! # Floating inputs
//!
//! The engine is two-valued. A port with no incoming edge reads as `false`,
//! and so does an `Input` node with no supplied value. In particular, a
//! disconnected `NOT` gate evaluates to `true`.

use std::collections::{BTreeMap, HashMap};
use std::ops::Index;

use log::{debug, trace};

use crate::graph::CircuitGraph;
use crate::node::NodeKind;
use crate::types::NodeId;
use crate::validate::ValidatedGraph;

/// The value of every node after one evaluation.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Values {
    values: BTreeMap<NodeId, bool>,
}

impl Values {
    pub fn get(&self, id: NodeId) -> Option<bool> {
        self.values.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(id, value)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, bool)> + '_ {
        self.values.iter().map(|(&id, &value)| (id, value))
    }

    /// Values of the `Output` nodes, in declared output order.
    pub fn outputs(&self, graph: &ValidatedGraph) -> Vec<(NodeId, bool)> {
        graph
            .output_ids()
            .into_iter()
            .map(|id| (id, self.get(id).unwrap_or(false)))
            .collect()
    }
}

impl Index<NodeId> for Values {
    type Output = bool;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.values[&id]
    }
}

/// Evaluates every node of the circuit for the given input values.
///
/// Inputs missing from `inputs` read as `false`. Entries for ids that are not
/// `Input` nodes are ignored.
pub fn evaluate(graph: &ValidatedGraph, inputs: &HashMap<NodeId, bool>) -> Values {
    debug!("evaluate(nodes = {}, inputs = {:?})", graph.num_nodes(), inputs);

    for id in inputs.keys() {
        if graph.kind(*id) != Some(NodeKind::Input) {
            debug!("evaluate: ignoring value for non-input {}", id);
        }
    }

    let input_ids = graph.input_ids();
    let dense = evaluate_dense(graph, |k| inputs.get(&input_ids[k]).copied().unwrap_or(false));

    let values = graph.ids().iter().copied().zip(dense).collect();
    Values { values }
}

/// Evaluates the circuit with the values currently stored on its `Input` nodes.
///
/// This is the "live" mode: the editor calls it after every mutation, reusing
/// `validated` as long as the structure of `graph` has not changed.
pub fn evaluate_stored(validated: &ValidatedGraph, graph: &CircuitGraph) -> Values {
    evaluate(validated, &graph.input_values())
}

/// Core evaluation over dense node indices.
///
/// `input(k)` is the value of the `k`-th input in declared order.
/// Returns the value of every node, indexed like the graph's nodes.
pub(crate) fn evaluate_dense<F>(graph: &ValidatedGraph, input: F) -> Vec<bool>
where
    F: Fn(usize) -> bool,
{
    let mut values = vec![false; graph.num_nodes()];

    for (k, &i) in graph.input_indices().iter().enumerate() {
        values[i] = input(k);
    }

    for &i in graph.order_indices() {
        let [a, b] = graph.drivers_at(i).map(|driver| driver.is_some_and(|j| values[j]));
        let value = match graph.kind_at(i) {
            NodeKind::Input => continue,
            NodeKind::Output => a,
            NodeKind::Gate(kind) => kind.apply(a, b),
        };
        trace!("evaluate: {} = {}", graph.id_at(i), value);
        values[i] = value;
    }

    values
}
