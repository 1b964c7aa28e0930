//! Single-frequency AC analysis.

use tracing::debug;

use super::mna::assemble;
use super::solution::{BranchCurrent, Solution};
use super::SolverConfig;
use crate::circuit::Circuit;
use crate::error::Result;

/// Solve `circuit` at `frequency` Hz with the default configuration.
///
/// Shorthand for `AcAnalysis::new().solve(circuit, frequency)`.
pub fn solve(circuit: &Circuit, frequency: f64) -> Result<Solution> {
    AcAnalysis::new().solve(circuit, frequency)
}

/// AC analysis driver.
///
/// Holds only configuration. Every call to [`AcAnalysis::solve`] builds and
/// discards its own system, so one analysis can be shared across threads
/// solving different frequencies.
#[derive(Debug, Clone, Default)]
pub struct AcAnalysis {
    config: SolverConfig,
}

impl AcAnalysis {
    /// Create an analysis with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analysis with a custom configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Assemble and solve the circuit at one frequency.
    ///
    /// Either every node voltage is returned or an error is; there is no
    /// partial result.
    pub fn solve(&self, circuit: &Circuit, frequency: f64) -> Result<Solution> {
        debug!(
            nodes = circuit.node_count(),
            components = circuit.component_count(),
            frequency,
            stamping = ?self.config.stamping,
            reference = ?self.config.reference,
            "assembling AC system"
        );

        let system = assemble(circuit, frequency, &self.config)?;
        let mut x = system.solve()?;

        let currents = x.split_off(system.num_nodes());
        let branch_currents = system
            .branches()
            .iter()
            .zip(currents)
            .map(|(&component, current)| BranchCurrent { component, current })
            .collect();

        debug!(size = system.size, "AC system solved");

        Ok(Solution::new(
            frequency,
            circuit.node_labels().to_vec(),
            x,
            branch_currents,
        ))
    }
}
