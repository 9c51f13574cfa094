//! # logic-sim: Combinational Logic Evaluation in Rust
//!
//! **`logic-sim`** is the evaluation engine behind a logic gate editor. It takes a snapshot of
//! a circuit (nodes and wires), computes the value of every node for a given input assignment,
//! and derives the complete truth table of the circuit on demand.
//!
//! ## Model
//!
//! - **Nodes** are `Input`s (externally driven), `Output`s (pass their single input through),
//!   or gates: `AND`, `OR`, `NOT`, `NAND`, `NOR`, `XOR`, `XNOR`.
//!   `NOT` has one input port; every other gate has two, named `a` and `b`.
//! - **Edges** carry a value from a node's output into one input port of another node.
//!   A port takes at most one edge; a node's output may feed any number of edges.
//! - **Combinational only**: the wiring must be acyclic.
//!
//! A disconnected port reads as `false`, and so does an `Input` with no supplied value.
//!
//! ## Basic Usage
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use logic_sim::eval::evaluate;
//! use logic_sim::gate::GateKind;
//! use logic_sim::graph::CircuitGraph;
//! use logic_sim::table::generate;
//! use logic_sim::types::Port;
//! use logic_sim::validate::validate;
//!
//! // 1. Build a snapshot: y = a AND b
//! let mut graph = CircuitGraph::new();
//! let a = graph.add_input(true);
//! let b = graph.add_input(false);
//! let g = graph.add_gate(GateKind::And);
//! let y = graph.add_output();
//! graph.connect(a, g, Some(Port::A));
//! graph.connect(b, g, Some(Port::B));
//! graph.connect(g, y, None);
//!
//! // 2. Validate once: checks wiring and computes the topological order
//! let validated = validate(&graph).unwrap();
//!
//! // 3. Evaluate (live mode)
//! let values = evaluate(&validated, &HashMap::from([(a, true), (b, false)]));
//! assert!(!values[y]);
//!
//! // 4. Truth table (batch mode)
//! let table = generate(&validated).unwrap();
//! assert_eq!(table.num_rows(), 4);
//! assert_eq!(table.column(y).unwrap().to_string(), "0001");
//! ```
//!
//! ## Core Components
//!
//! - **[`graph`]**: The circuit snapshot ([`CircuitGraph`][crate::graph::CircuitGraph]).
//! - **[`validate`]**: Structural checks and topological ordering.
//! - **[`eval`]**: Evaluation of every node for one input assignment.
//! - **[`table`]**: Truth table generation, bounded by [`config::EngineConfig`].
//! - **[`dot`]**: Graphviz export for debugging.

pub mod bits;
pub mod config;
pub mod dot;
pub mod error;
pub mod eval;
pub mod gate;
pub mod graph;
pub mod node;
pub mod table;
pub mod types;
pub mod validate;
