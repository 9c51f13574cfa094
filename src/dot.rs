//! Circuit to DOT (Graphviz) conversion.
//!
//! This module renders a [`CircuitGraph`] as a DOT digraph, a debugging aid
//! for inspecting wiring that can be viewed with `dot` or online viewers.
//!
//! # DOT Format
//!
//! - **Input nodes** are rendered at the top (source rank)
//! - **Output nodes** are rendered at the bottom (sink rank)
//! - **Gates** are labelled with their kind
//! - **Edges** point from driver to driven node and are labelled with the
//!   target port for binary gates
//! - When values are supplied, nodes carrying `true` are filled
//!
//! # Examples
//!
//! ```
//! use logic_sim::gate::GateKind;
//! use logic_sim::graph::CircuitGraph;
//!
//! let mut graph = CircuitGraph::new();
//! let a = graph.add_input(true);
//! let g = graph.add_gate(GateKind::Not);
//! graph.connect(a, g, None);
//!
//! let dot = graph.to_dot().unwrap();
//! assert!(dot.starts_with("digraph {"));
//! ```

use std::fmt::Write as _;

use crate::eval::Values;
use crate::graph::CircuitGraph;
use crate::node::NodeKind;

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for input nodes (default: "circle")
    pub input_shape: &'static str,
    /// Shape for output nodes (default: "doublecircle")
    pub output_shape: &'static str,
    /// Shape for gate nodes (default: "box")
    pub gate_shape: &'static str,
    /// Fill color for nodes whose value is `true` (default: "red")
    pub true_color: &'static str,
    /// Whether to label edges into binary gates with their port (default: true)
    pub show_ports: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            input_shape: "circle",
            output_shape: "doublecircle",
            gate_shape: "box",
            true_color: "red",
            show_ports: true,
        }
    }
}

impl CircuitGraph {
    /// Converts the circuit to DOT format with the default configuration.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default(), None)
    }

    /// Converts the circuit to DOT format.
    ///
    /// `values` (for example, the result of an evaluation) highlights nodes
    /// carrying `true` with `config.true_color`.
    pub fn to_dot_with_config(&self, config: &DotConfig, values: Option<&Values>) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;

        let rank = |dot: &mut String, which: &str, kind: NodeKind| -> std::fmt::Result {
            writeln!(dot, "{{ rank={}", which)?;
            for node in self.nodes().iter().filter(|n| n.kind == kind) {
                writeln!(dot, "{};", node.id)?;
            }
            writeln!(dot, "}}")
        };
        rank(&mut dot, "source", NodeKind::Input)?;
        rank(&mut dot, "sink", NodeKind::Output)?;

        for node in self.nodes() {
            let shape = match node.kind {
                NodeKind::Input => config.input_shape,
                NodeKind::Output => config.output_shape,
                NodeKind::Gate(_) => config.gate_shape,
            };
            let label = match node.kind {
                NodeKind::Gate(kind) => format!("{}\\n{}", kind, node.id),
                _ => node.id.to_string(),
            };
            write!(dot, "{} [shape={}, label=\"{}\"", node.id, shape, label)?;
            if values.and_then(|v| v.get(node.id)) == Some(true) {
                write!(dot, ", style=filled, fillcolor={}", config.true_color)?;
            }
            writeln!(dot, "];")?;
        }

        for edge in self.edges() {
            write!(dot, "{} -> {}", edge.source, edge.target)?;
            match edge.port {
                Some(port) if config.show_ports => writeln!(dot, " [label=\"{}\"];", port)?,
                _ => writeln!(dot, ";")?,
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}
