//! Core types for circuit representation.

use std::fmt;

/// Dense index of a node in the registry.
///
/// Indices are handed out in first-seen order and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Row/column of this node in the assembled system.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// Position of a component in the circuit's component list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub usize);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of an auxiliary branch-current unknown (one per voltage source in
/// full MNA).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BranchId(pub usize);

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I{}", self.0)
    }
}

/// Variable index in the MNA solution vector.
/// Can be either a node voltage or a branch current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarIndex {
    /// Node voltage variable
    Voltage(NodeId),
    /// Branch current variable (voltage sources in full MNA)
    Current(BranchId),
}

impl VarIndex {
    /// Get the raw index into the solution vector.
    /// Node voltages come first, then branch currents.
    pub fn to_index(&self, num_nodes: usize) -> usize {
        match self {
            VarIndex::Voltage(NodeId(n)) => *n,
            VarIndex::Current(BranchId(b)) => num_nodes + b,
        }
    }
}
