//! MNA (Modified Nodal Analysis) solver for steady-state AC analysis.
//!
//! ## Modified Nodal Analysis
//!
//! At a single angular frequency ω = 2πf every linear element becomes a
//! complex admittance, and the network reduces to the linear system
//! A·x = z where:
//! - x contains node voltage phasors (and branch currents in full MNA)
//! - A is the complex admittance matrix
//! - z is the excitation vector
//!
//! With [`SourceStamping::BranchCurrent`] the matrix takes the usual MNA
//! block structure:
//! ```text
//! [ Y   B ] [ v ]   [ i ]
//! [ C   0 ] [ j ] = [ e ]
//! ```
//!
//! where:
//! - Y is the nodal admittance matrix
//! - B, C connect voltage sources to nodes
//! - v is the vector of node voltages
//! - j is the vector of voltage source currents
//! - i is the sum of current sources into each node
//! - e is the vector of voltage source values
//!
//! With the default [`SourceStamping::Injection`] there is no B/C/j/e part:
//! a voltage source only subtracts its value from `i` at its first terminal.
//!
//! No node is grounded unless [`Reference::Node`] is configured. A purely
//! nodal admittance matrix has columns that sum to zero, so a floating system
//! is singular.

mod analysis;
mod mna;
mod solution;

pub use analysis::{solve, AcAnalysis};
pub use mna::{assemble, MnaSystem};
pub use solution::{BranchCurrent, Solution};

/// Default relative pivot tolerance for the LU factorization.
///
/// A pivot whose magnitude is at or below this fraction of the largest
/// entry in its own row of the original matrix marks the system as singular.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// How ideal voltage sources enter the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceStamping {
    /// Subtract the source voltage from the excitation entry of the first
    /// terminal. No matrix stamp, nothing at the second terminal.
    ///
    /// This does not enforce V[n1] - V[n2] = V in general.
    #[default]
    Injection,
    /// Standard MNA: one branch-current unknown and one constraint row per
    /// voltage source.
    BranchCurrent,
}

/// Which node, if any, is pinned at 0 V.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Reference {
    /// No ground elimination; every node is an unknown.
    #[default]
    Floating,
    /// Eliminate this node's row and column and report its voltage as 0.
    Node(String),
}

/// Configuration for the AC solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Voltage source stamping rule.
    pub stamping: SourceStamping,
    /// Reference node handling.
    pub reference: Reference,
    /// Relative pivot tolerance for singularity detection.
    pub pivot_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            stamping: SourceStamping::default(),
            reference: Reference::default(),
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the voltage source stamping rule.
    pub fn with_stamping(mut self, stamping: SourceStamping) -> Self {
        self.stamping = stamping;
        self
    }

    /// Pin the named node at 0 V.
    pub fn with_reference(mut self, label: impl Into<String>) -> Self {
        self.reference = Reference::Node(label.into());
        self
    }

    /// Leave every node floating.
    pub fn floating(mut self) -> Self {
        self.reference = Reference::Floating;
        self
    }

    /// Set the relative pivot tolerance.
    ///
    /// Lower values accept more ill-conditioned systems.
    /// - 1e-12 (default): rejects systems that are singular up to rounding
    /// - 1e-15: accepts nearly anything that does not produce an exact zero
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }
}
