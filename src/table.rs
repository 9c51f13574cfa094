//! Truth table generation.
//!
//! [`generate`] enumerates every assignment of a circuit's `Input` nodes and
//! records the resulting values of its `Output` nodes.
//!
//! # Row order
//!
//! Assignments are enumerated in increasing binary order with the first
//! declared input as the most significant bit. Row `k` therefore has the
//! input bits of `k` written MSB-first:
//!
//! ```text
//! k  a b
//! 0  0 0
//! 1  0 1
//! 2  1 0
//! 3  1 1
//! ```
//!
//! Generation is refused up front, before any evaluation, when the circuit has
//! more inputs than the configured ceiling (see [`EngineConfig`]).

use std::fmt;

use log::debug;

use crate::bits::BitRow;
use crate::config::EngineConfig;
use crate::error::GraphError;
use crate::eval::evaluate_dense;
use crate::types::NodeId;
use crate::validate::ValidatedGraph;

/// One assignment of the inputs and the resulting outputs.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Row {
    pub inputs: BitRow,
    pub outputs: BitRow,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    input_ids: Vec<NodeId>,
    output_ids: Vec<NodeId>,
    rows: Vec<Row>,
}

/// Generates the truth table with the default configuration.
pub fn generate(graph: &ValidatedGraph) -> Result<TruthTable, GraphError> {
    generate_with_config(graph, &EngineConfig::default())
}

/// Generates the truth table, refusing circuits with more inputs than
/// `config` allows.
pub fn generate_with_config(graph: &ValidatedGraph, config: &EngineConfig) -> Result<TruthTable, GraphError> {
    config.check_table_inputs(graph)?;

    let n = graph.num_inputs();
    let num_rows = 1u64 << n;
    debug!(
        "generate(inputs = {}, outputs = {}, rows = {})",
        n,
        graph.num_outputs(),
        num_rows
    );

    let mut rows = Vec::with_capacity(num_rows as usize);
    for counter in 0..num_rows {
        let values = evaluate_dense(graph, |k| (counter >> (n - 1 - k)) & 1 == 1);
        let outputs = graph.output_indices().iter().map(|&i| values[i]).collect();
        rows.push(Row {
            inputs: BitRow::from_counter(counter, n),
            outputs,
        });
    }

    debug!("generate: done, {} rows", rows.len());

    Ok(TruthTable {
        input_ids: graph.input_ids(),
        output_ids: graph.output_ids(),
        rows,
    })
}

// Getters
impl TruthTable {
    /// Input columns, in declared input order.
    pub fn input_ids(&self) -> &[NodeId] {
        &self.input_ids
    }

    /// Output columns, in declared output order.
    pub fn output_ids(&self) -> &[NodeId] {
        &self.output_ids
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn num_inputs(&self) -> usize {
        self.input_ids.len()
    }

    pub fn num_outputs(&self) -> usize {
        self.output_ids.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, k: usize) -> Option<&Row> {
        self.rows.get(k)
    }

    /// The column of one output over all rows, in row order.
    pub fn column(&self, output: NodeId) -> Option<BitRow> {
        let j = self.output_ids.iter().position(|&id| id == output)?;
        Some(self.rows.iter().map(|row| row.outputs.get(j)).collect())
    }

    /// The row for a given input assignment (in declared input order).
    pub fn lookup(&self, inputs: &[bool]) -> Option<&Row> {
        if inputs.len() != self.num_inputs() {
            return None;
        }
        let k = inputs.iter().fold(0usize, |acc, &bit| (acc << 1) | bit as usize);
        self.rows.get(k)
    }
}

impl fmt::Display for TruthTable {
    /// Renders a plain-text grid, inputs then outputs:
    ///
    /// ```text
    /// n0 n1 | n3
    ///  0  0 |  0
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input_headers: Vec<String> = self.input_ids.iter().map(|id| id.to_string()).collect();
        let output_headers: Vec<String> = self.output_ids.iter().map(|id| id.to_string()).collect();

        writeln!(f, "{} | {}", input_headers.join(" "), output_headers.join(" "))?;

        for row in self.rows.iter() {
            let cells = |headers: &[String], bits: &BitRow| -> String {
                headers
                    .iter()
                    .zip(bits.iter())
                    .map(|(header, bit)| format!("{:>width$}", bit as u8, width = header.len()))
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            writeln!(
                f,
                "{} | {}",
                cells(&input_headers, &row.inputs),
                cells(&output_headers, &row.outputs)
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::error::ErrorKind;
    use crate::gate::GateKind;
    use crate::graph::CircuitGraph;
    use crate::types::Port;
    use crate::validate::validate;

    /// `y = (a AND b) XOR c`
    fn three_input_circuit() -> (CircuitGraph, [NodeId; 4]) {
        let mut graph = CircuitGraph::new();
        let a = graph.add_input(false);
        let b = graph.add_input(false);
        let c = graph.add_input(false);
        let g1 = graph.add_gate(GateKind::And);
        let g2 = graph.add_gate(GateKind::Xor);
        let y = graph.add_output();
        graph.connect(a, g1, Some(Port::A));
        graph.connect(b, g1, Some(Port::B));
        graph.connect(g1, g2, Some(Port::A));
        graph.connect(c, g2, Some(Port::B));
        graph.connect(g2, y, None);
        (graph, [a, b, c, y])
    }

    #[test]
    fn test_row_order() {
        let (graph, [a, b, c, y]) = three_input_circuit();
        let table = generate(&validate(&graph).unwrap()).unwrap();

        assert_eq!(table.input_ids(), &[a, b, c]);
        assert_eq!(table.output_ids(), &[y]);
        assert_eq!(table.num_rows(), 8);
        for (k, row) in table.rows().iter().enumerate() {
            assert_eq!(row.inputs.to_counter(), k as u64);
            let bit = |i: usize| (k >> (2 - i)) & 1 == 1;
            assert_eq!(row.outputs.get(0), (bit(0) && bit(1)) ^ bit(2), "row {}", k);
        }
    }

    #[test]
    fn test_too_many_inputs() {
        let mut graph = CircuitGraph::new();
        for _ in 0..11 {
            graph.add_input(false);
        }
        graph.add_output();
        let validated = validate(&graph).unwrap();
        let err = generate(&validated).unwrap_err();
        assert_eq!(err, GraphError::TooManyInputs { inputs: 11, limit: 10 });
        assert_eq!(err.kind(), ErrorKind::TooManyInputs);
    }

    #[test]
    fn test_custom_ceiling() {
        let (graph, _) = three_input_circuit();
        let validated = validate(&graph).unwrap();
        let config = EngineConfig::default().with_max_table_inputs(2);
        assert_eq!(
            generate_with_config(&validated, &config),
            Err(GraphError::TooManyInputs { inputs: 3, limit: 2 })
        );
        let config = EngineConfig::default().with_max_table_inputs(3);
        assert_eq!(generate_with_config(&validated, &config).unwrap().num_rows(), 8);
    }

    #[test]
    fn test_at_ceiling() {
        let mut graph = CircuitGraph::new();
        let mut prev = graph.add_input(false);
        for _ in 1..10 {
            let x = graph.add_input(false);
            let g = graph.add_gate(GateKind::Xor);
            graph.connect(prev, g, Some(Port::A));
            graph.connect(x, g, Some(Port::B));
            prev = g;
        }
        let y = graph.add_output();
        graph.connect(prev, y, None);

        let table = generate(&validate(&graph).unwrap()).unwrap();
        assert_eq!(table.num_rows(), 1024);
        // Parity of the row index.
        for (k, row) in table.rows().iter().enumerate() {
            assert_eq!(row.outputs.get(0), k.count_ones() % 2 == 1);
        }
    }

    #[test]
    fn test_no_inputs() {
        let mut graph = CircuitGraph::new();
        let g = graph.add_gate(GateKind::Nor);
        let y = graph.add_output();
        graph.connect(g, y, None);

        let table = generate(&validate(&graph).unwrap()).unwrap();
        assert_eq!(table.num_rows(), 1);
        let row = table.row(0).unwrap();
        assert!(row.inputs.is_empty());
        assert!(row.outputs.get(0));
    }

    #[test]
    fn test_no_outputs() {
        let mut graph = CircuitGraph::new();
        graph.add_input(false);
        graph.add_input(false);

        let table = generate(&validate(&graph).unwrap()).unwrap();
        assert_eq!(table.num_rows(), 4);
        assert!(table.rows().iter().all(|row| row.outputs.is_empty()));
    }

    #[test]
    fn test_column_and_lookup() {
        let (graph, [_, _, _, y]) = three_input_circuit();
        let table = generate(&validate(&graph).unwrap()).unwrap();

        assert_eq!(table.column(y).unwrap().to_string(), "01010110");
        assert_eq!(table.column(NodeId::new(1000)), None);

        let row = table.lookup(&[true, true, false]).unwrap();
        assert_eq!(row.inputs.to_string(), "110");
        assert!(row.outputs.get(0));
        assert_eq!(table.lookup(&[true]), None);
    }

    #[test]
    fn test_display() {
        let mut graph = CircuitGraph::new();
        let a = graph.add_input(false);
        let g = graph.add_gate(GateKind::Not);
        let y = graph.add_output();
        graph.connect(a, g, None);
        graph.connect(g, y, None);

        let table = generate(&validate(&graph).unwrap()).unwrap();
        assert_eq!(table.to_string(), "n0 | n2\n 0 |  1\n 1 |  0\n");
    }
}
