//! # Phasor MNA
//!
//! Steady-state AC analysis of linear two-terminal networks.
//!
//! This library provides:
//! - A network model that registers node labels in first-seen order
//! - Modified Nodal Analysis (MNA) assembly of the complex admittance system
//! - A dense complex LU solve returning node voltage phasors
//! - A SPICE-like netlist format and a small CLI
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Node registry and component list
//! - [`components`] - Component models and their stamps
//! - [`solver`] - MNA assembly and numerical solving
//! - [`dsl`] - Parser for the netlist format
//! - [`demo`] - The fixed example network
//!
//! ## Usage
//!
//! ```
//! use phasor_mna::components::{Resistor, VoltageSource};
//! use phasor_mna::solver::{AcAnalysis, SolverConfig, SourceStamping};
//! use phasor_mna::Circuit;
//!
//! let mut circuit = Circuit::new();
//! circuit.add_component(Resistor::new("1", "0", 1e3));
//! circuit.add_component(VoltageSource::new("1", "0", 5.0));
//!
//! let config = SolverConfig::new()
//!     .with_reference("0")
//!     .with_stamping(SourceStamping::BranchCurrent);
//! let solution = AcAnalysis::with_config(config).solve(&circuit, 60.0)?;
//! assert!((solution.voltage("1").unwrap().re - 5.0).abs() < 1e-12);
//! # Ok::<(), phasor_mna::MnaError>(())
//! ```
//!
//! ## Analysis Method
//!
//! For a frequency f the solver computes ω = 2πf and:
//!
//! 1. Stamps every component into the admittance matrix A and excitation
//!    vector z (resistor 1/R, capacitor jωC, inductor -j/(ωL))
//! 2. Solves Ax = z with LU decomposition and partial pivoting
//! 3. Returns x in node registration order
//!
//! By default no node is grounded and voltage sources are injected as a
//! current at their first terminal. See [`solver::SolverConfig`] for the
//! reference node and full-MNA options.

pub mod circuit;
pub mod components;
pub mod demo;
pub mod dsl;
pub mod error;
pub mod solver;

// Re-export main types for convenience
pub use circuit::Circuit;
pub use error::{MnaError, Result};
pub use solver::{solve, AcAnalysis, Solution, SolverConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmAcSolver;

/// Default reference node label used by the CLI.
pub const DEFAULT_GROUND: &str = "0";
