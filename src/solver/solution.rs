//! Node voltage phasors returned by a solve.

use std::collections::HashMap;
use std::fmt;

use num_complex::Complex64;

use crate::circuit::{ComponentId, NodeId};

/// Current through a voltage source that owns a branch unknown.
///
/// Positive current flows from the source's first node through the source to
/// its second node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchCurrent {
    pub component: ComponentId,
    pub current: Complex64,
}

/// Result of one AC solve.
///
/// `voltages()[i]` belongs to `node_labels()[i]`, which follows the circuit's
/// node registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    frequency: f64,
    labels: Vec<String>,
    node_map: HashMap<String, NodeId>,
    voltages: Vec<Complex64>,
    branch_currents: Vec<BranchCurrent>,
}

impl Solution {
    pub(crate) fn new(
        frequency: f64,
        labels: Vec<String>,
        voltages: Vec<Complex64>,
        branch_currents: Vec<BranchCurrent>,
    ) -> Self {
        debug_assert_eq!(labels.len(), voltages.len());
        let node_map = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), NodeId(i)))
            .collect();
        Self {
            frequency,
            labels,
            node_map,
            voltages,
            branch_currents,
        }
    }

    /// Frequency in Hz this solution was computed at.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Number of node voltages.
    pub fn len(&self) -> usize {
        self.voltages.len()
    }

    /// True for a circuit without nodes.
    pub fn is_empty(&self) -> bool {
        self.voltages.is_empty()
    }

    /// Node labels, parallel to [`Solution::voltages`].
    pub fn node_labels(&self) -> &[String] {
        &self.labels
    }

    /// Node voltage phasors in registration order.
    pub fn voltages(&self) -> &[Complex64] {
        &self.voltages
    }

    /// Voltage at a node by label.
    pub fn voltage(&self, label: &str) -> Option<Complex64> {
        self.node_map.get(label).map(|id| self.voltages[id.index()])
    }

    /// Voltage at a node by ID, `None` for an ID outside this solution.
    pub fn node_voltage(&self, node: NodeId) -> Option<Complex64> {
        self.voltages.get(node.index()).copied()
    }

    /// Voltage source branch currents. Empty unless the solve used
    /// branch-current stamping.
    pub fn branch_currents(&self) -> &[BranchCurrent] {
        &self.branch_currents
    }

    /// `(label, voltage)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Complex64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.voltages.iter().copied())
    }

    /// Consume the solution, keeping only the voltage vector.
    pub fn into_voltages(self) -> Vec<Complex64> {
        self.voltages
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Node voltages at {} Hz:", self.frequency)?;
        for (label, v) in self.iter() {
            writeln!(f, "Node {}: {:.2} + {:.2}j", label, v.re, v.im)?;
        }
        Ok(())
    }
}
