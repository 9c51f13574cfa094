//! Structural errors reported by validation and table generation.
//!
//! Every error here is a configuration error of the snapshot (or of the
//! request) and is returned before any value is computed.

use std::fmt;

use crate::config::table_rows;
use crate::types::{NodeId, Port};

/// Category of a [`GraphError`], for callers that only branch on the kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    DuplicateNode,
    DanglingEdgeReference,
    InvalidPort,
    PortConflict,
    CyclicGraph,
    TooManyInputs,
}

/// Error type for graph validation and truth table generation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum GraphError {
    /// Two nodes share the same identifier.
    DuplicateNode { node: NodeId },
    /// An edge names a node absent from the node set.
    DanglingEdgeReference { edge: usize, node: NodeId },
    /// An edge targets a port the node does not have
    /// (any port of an `Input`, `b` of a single-input node, or an untagged
    /// edge into a binary gate).
    InvalidPort { edge: usize, node: NodeId, port: Option<Port> },
    /// Two edges drive the same (node, port).
    PortConflict { node: NodeId, port: Port },
    /// The dependency graph has a cycle. Lists the nodes that could not be
    /// ordered, in declaration order.
    CyclicGraph { nodes: Vec<NodeId> },
    /// Truth table requested for more inputs than the configured ceiling.
    TooManyInputs { inputs: usize, limit: usize },
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::DuplicateNode { .. } => ErrorKind::DuplicateNode,
            GraphError::DanglingEdgeReference { .. } => ErrorKind::DanglingEdgeReference,
            GraphError::InvalidPort { .. } => ErrorKind::InvalidPort,
            GraphError::PortConflict { .. } => ErrorKind::PortConflict,
            GraphError::CyclicGraph { .. } => ErrorKind::CyclicGraph,
            GraphError::TooManyInputs { .. } => ErrorKind::TooManyInputs,
        }
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::DuplicateNode { node } => write!(f, "Duplicate node id: {}", node),
            GraphError::DanglingEdgeReference { edge, node } => {
                write!(f, "Edge #{} references unknown node {}", edge, node)
            }
            GraphError::InvalidPort { edge, node, port } => match port {
                Some(port) => write!(f, "Edge #{} targets invalid port {} of node {}", edge, port, node),
                None => write!(f, "Edge #{} needs an explicit port on node {}", edge, node),
            },
            GraphError::PortConflict { node, port } => {
                write!(f, "Port {} of node {} is driven by more than one edge", port, node)
            }
            GraphError::CyclicGraph { nodes } => {
                write!(f, "Circuit contains a cycle through nodes [")?;
                for (i, node) in nodes.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", node)?;
                }
                write!(f, "]")
            }
            GraphError::TooManyInputs { inputs, limit } => {
                write!(
                    f,
                    "Too many inputs for a truth table: {} > {} ({} rows)",
                    inputs,
                    limit,
                    table_rows(*inputs)
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}
