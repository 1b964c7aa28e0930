//! Phasor - steady-state AC circuit solver
//!
//! Solves a two-terminal network at one frequency and prints the node
//! voltage phasors.
//!
//! # Usage
//!
//! ```bash
//! phasor                               # demo network at 60 Hz
//! phasor filter.net --frequency 1k     # netlist file
//! phasor --stamping branch-current     # full MNA for voltage sources
//! RUST_LOG=debug phasor filter.net     # log assembly details to stderr
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use phasor_mna::{
    circuit::Circuit,
    demo::{demo_circuit, DEMO_FREQUENCY},
    dsl::{self, parse_value},
    error::Result,
    solver::{AcAnalysis, SolverConfig, SourceStamping},
    DEFAULT_GROUND,
};

/// Steady-state AC circuit solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Netlist file; the built-in demo network is solved when omitted
    #[arg(value_name = "NETLIST")]
    netlist: Option<PathBuf>,

    /// Analysis frequency in Hz (accepts unit suffixes such as 1k)
    #[arg(short, long, value_parser = parse_frequency)]
    frequency: Option<f64>,

    /// Reference node pinned at 0 V
    #[arg(short, long, conflicts_with = "floating")]
    ground: Option<String>,

    /// Do not pin any node (every node is an unknown)
    #[arg(long)]
    floating: bool,

    /// How voltage sources are stamped
    #[arg(short, long, value_enum, default_value_t = Stamping::Injection)]
    stamping: Stamping,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Stamping {
    /// Current injection at the first terminal
    Injection,
    /// Full MNA with a branch-current unknown per source
    BranchCurrent,
}

impl From<Stamping> for SourceStamping {
    fn from(s: Stamping) -> Self {
        match s {
            Stamping::Injection => SourceStamping::Injection,
            Stamping::BranchCurrent => SourceStamping::BranchCurrent,
        }
    }
}

fn parse_frequency(text: &str) -> std::result::Result<f64, String> {
    parse_value(text).ok_or_else(|| format!("invalid frequency: {text}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Load the circuit
    let (circuit, netlist_frequency, netlist_ground) = match &args.netlist {
        Some(path) => {
            let ast = dsl::parse_file(path)?;
            let circuit = Circuit::from_ast(&ast)?;
            (circuit, ast.frequency, ast.ground)
        }
        None => (demo_circuit(), Some(DEMO_FREQUENCY), None),
    };

    let frequency = args
        .frequency
        .or(netlist_frequency)
        .unwrap_or(DEMO_FREQUENCY);

    let mut config = SolverConfig::new().with_stamping(args.stamping.into());
    config = if args.floating {
        config.floating()
    } else {
        let ground = args
            .ground
            .or(netlist_ground)
            .unwrap_or_else(|| DEFAULT_GROUND.to_string());
        config.with_reference(ground)
    };

    let solution = AcAnalysis::with_config(config).solve(&circuit, frequency)?;

    print!("{solution}");
    for branch in solution.branch_currents() {
        let component = &circuit.components()[branch.component.0];
        println!(
            "Current {}: {:.2e} + {:.2e}j",
            component.describe(branch.component),
            branch.current.re,
            branch.current.im
        );
    }

    Ok(())
}
