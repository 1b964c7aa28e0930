//! Voltage and current sources.

/// An ideal voltage source component.
///
/// How the source enters the system depends on
/// [`SourceStamping`](crate::solver::SourceStamping). With the default
/// injection stamping it only subtracts its value from the excitation entry
/// of its first terminal. With branch-current stamping it adds an extra
/// row/column and enforces V[n1] - V[n2] = V.
#[derive(Debug, Clone, PartialEq)]
pub struct VoltageSource {
    pub name: Option<String>,
    pub nodes: [String; 2], // [positive, negative]
    /// Source voltage in volts
    pub voltage: f64,
}

impl VoltageSource {
    /// Create a new voltage source.
    pub fn new(n1: impl Into<String>, n2: impl Into<String>, voltage: f64) -> Self {
        Self {
            name: None,
            nodes: [n1.into(), n2.into()],
            voltage,
        }
    }
}

/// An ideal current source component.
///
/// Current sources add directly to the excitation vector: the current flows
/// from `nodes[1]` through the source and is injected into `nodes[0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentSource {
    pub name: Option<String>,
    pub nodes: [String; 2],
    /// Source current in amperes
    pub current: f64,
}

impl CurrentSource {
    /// Create a new current source.
    pub fn new(n1: impl Into<String>, n2: impl Into<String>, current: f64) -> Self {
        Self {
            name: None,
            nodes: [n1.into(), n2.into()],
            current,
        }
    }
}
