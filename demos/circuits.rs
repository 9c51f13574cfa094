//! Builds one of a few sample circuits, evaluates it and prints its truth table.
//!
//! Run with:
//! ```bash
//! cargo run --example circuits -- --circuit full-adder --set 1,0,1 --table
//! ```

use std::collections::HashMap;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::bail;
use log::info;

use logic_sim::config::{EngineConfig, HARD_MAX_TABLE_INPUTS};
use logic_sim::eval::evaluate;
use logic_sim::gate::GateKind;
use logic_sim::graph::CircuitGraph;
use logic_sim::table::generate_with_config;
use logic_sim::types::{NodeId, Port};
use logic_sim::validate::validate;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Circuit {
    And,
    Not,
    FanOut,
    HalfAdder,
    FullAdder,
    /// Ripple-carry adder over `--width` bits.
    Adder,
}

#[derive(Debug, Parser)]
#[command(about = "Evaluate sample logic circuits")]
struct Cli {
    /// Circuit to build.
    #[arg(long, value_enum, default_value = "full-adder")]
    circuit: Circuit,

    /// Bit width for the ripple-carry adder.
    #[arg(long, default_value_t = 2)]
    width: usize,

    /// Input values in declared order, e.g. `1,0,1`. Missing inputs read as 0.
    #[arg(long, value_delimiter = ',')]
    set: Vec<u8>,

    /// Print the truth table.
    #[arg(long)]
    table: bool,

    /// Print the circuit as DOT, annotated with the evaluated values.
    #[arg(long)]
    dot: bool,

    /// Ceiling on inputs for the truth table.
    #[arg(long)]
    max_inputs: Option<usize>,

    /// Log verbosity: `-v` for debug, `-vv` for trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn binary(graph: &mut CircuitGraph, kind: GateKind, a: NodeId, b: NodeId) -> NodeId {
    let g = graph.add_gate(kind);
    graph.connect(a, g, Some(Port::A));
    graph.connect(b, g, Some(Port::B));
    g
}

fn output(graph: &mut CircuitGraph, source: NodeId) -> NodeId {
    let y = graph.add_output();
    graph.connect(source, y, None);
    y
}

/// Returns `(sum, carry)`.
fn full_adder(graph: &mut CircuitGraph, a: NodeId, b: NodeId, cin: NodeId) -> (NodeId, NodeId) {
    let x1 = binary(graph, GateKind::Xor, a, b);
    let sum = binary(graph, GateKind::Xor, x1, cin);
    let a1 = binary(graph, GateKind::And, a, b);
    let a2 = binary(graph, GateKind::And, x1, cin);
    let carry = binary(graph, GateKind::Or, a1, a2);
    (sum, carry)
}

fn build(circuit: Circuit, width: usize) -> CircuitGraph {
    let mut graph = CircuitGraph::new();
    match circuit {
        Circuit::And => {
            let a = graph.add_input(false);
            let b = graph.add_input(false);
            let g = binary(&mut graph, GateKind::And, a, b);
            output(&mut graph, g);
        }
        Circuit::Not => {
            let a = graph.add_input(false);
            let g = graph.add_gate(GateKind::Not);
            graph.connect(a, g, None);
            output(&mut graph, g);
        }
        Circuit::FanOut => {
            let a = graph.add_input(false);
            let b = graph.add_input(false);
            let and = binary(&mut graph, GateKind::And, a, b);
            let or = binary(&mut graph, GateKind::Or, a, b);
            output(&mut graph, and);
            output(&mut graph, or);
        }
        Circuit::HalfAdder => {
            let a = graph.add_input(false);
            let b = graph.add_input(false);
            let sum = binary(&mut graph, GateKind::Xor, a, b);
            let carry = binary(&mut graph, GateKind::And, a, b);
            output(&mut graph, sum);
            output(&mut graph, carry);
        }
        Circuit::FullAdder => {
            let a = graph.add_input(false);
            let b = graph.add_input(false);
            let cin = graph.add_input(false);
            let (sum, carry) = full_adder(&mut graph, a, b, cin);
            output(&mut graph, sum);
            output(&mut graph, carry);
        }
        Circuit::Adder => {
            let xs: Vec<NodeId> = (0..width).map(|_| graph.add_input(false)).collect();
            let ys: Vec<NodeId> = (0..width).map(|_| graph.add_input(false)).collect();
            // A NOR with both ports floating is a constant 1; NOT of it is a constant 0 carry-in.
            let one = graph.add_gate(GateKind::Nor);
            let mut carry = graph.add_gate(GateKind::Not);
            graph.connect(one, carry, None);
            let mut sums = Vec::new();
            // Least significant bit last in declared order.
            for i in (0..width).rev() {
                let (sum, c) = full_adder(&mut graph, xs[i], ys[i], carry);
                sums.push(sum);
                carry = c;
            }
            output(&mut graph, carry);
            for &sum in sums.iter().rev() {
                output(&mut graph, sum);
            }
        }
    }
    graph
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut graph = build(cli.circuit, cli.width);
    info!(
        "circuit = {:?}: {} nodes, {} edges",
        cli.circuit,
        graph.num_nodes(),
        graph.num_edges()
    );

    let validated = validate(&graph)?;

    let input_ids = validated.input_ids();
    let inputs: HashMap<NodeId, bool> = input_ids
        .iter()
        .zip(cli.set.iter())
        .map(|(&id, &bit)| (id, bit != 0))
        .collect();
    for (&id, &value) in inputs.iter() {
        graph.set_input(id, value);
    }

    let values = evaluate(&validated, &inputs);
    for (id, value) in values.outputs(&validated) {
        println!("{} = {}", id, value as u8);
    }

    if cli.dot {
        let dot = graph.to_dot_with_config(&Default::default(), Some(&values))?;
        println!("{}", dot);
    }

    if cli.table {
        let mut config = EngineConfig::default();
        if let Some(max_inputs) = cli.max_inputs {
            if max_inputs > HARD_MAX_TABLE_INPUTS {
                bail!("--max-inputs must be at most {}", HARD_MAX_TABLE_INPUTS);
            }
            config = config.with_max_table_inputs(max_inputs);
        }
        let time = std::time::Instant::now();
        let table = generate_with_config(&validated, &config)?;
        info!("truth table: {} rows in {:.3} ms", table.num_rows(), time.elapsed().as_secs_f64() * 1000.0);
        print!("{}", table);
    }

    Ok(())
}
