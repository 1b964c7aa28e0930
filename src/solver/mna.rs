//! MNA matrix assembly and solving.

use std::f64::consts::PI;

use num_complex::Complex64;
use tracing::trace;

use super::{Reference, SolverConfig};
use crate::circuit::{BranchId, Circuit, ComponentId, VarIndex};
use crate::components::Stamp;
use crate::error::{MnaError, Result};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Complex MNA system Ax = z.
#[derive(Debug, Clone)]
pub struct MnaSystem {
    /// System matrix A (row-major)
    pub a: Vec<Complex64>,
    /// Excitation vector z
    pub z: Vec<Complex64>,
    /// Matrix dimension (nodes + branches)
    pub size: usize,
    /// Number of node voltage unknowns
    num_nodes: usize,
    /// Voltage sources owning a branch-current unknown, in branch order
    branches: Vec<ComponentId>,
    /// Row/column eliminated as the 0 V reference
    reference: Option<usize>,
    /// Relative pivot tolerance
    pivot_tolerance: f64,
}

impl MnaSystem {
    /// Create a zeroed system with `num_nodes` voltages and `num_branches`
    /// branch currents.
    pub fn new(num_nodes: usize, num_branches: usize) -> Self {
        let size = num_nodes + num_branches;
        Self {
            a: vec![ZERO; size * size],
            z: vec![ZERO; size],
            size,
            num_nodes,
            branches: Vec::with_capacity(num_branches),
            reference: None,
            pivot_tolerance: super::DEFAULT_PIVOT_TOLERANCE,
        }
    }

    /// Number of node voltage unknowns.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Voltage sources that own a branch-current unknown, in branch order.
    pub fn branches(&self) -> &[ComponentId] {
        &self.branches
    }

    /// Row/column eliminated as the reference node, if any.
    pub fn reference(&self) -> Option<usize> {
        self.reference
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.a[row * self.size + col]
    }

    /// Add to matrix element at (row, col).
    pub fn add(&mut self, row: usize, col: usize, value: Complex64) {
        self.a[row * self.size + col] += value;
    }

    /// Add to excitation vector element.
    pub fn add_source(&mut self, row: usize, value: Complex64) {
        self.z[row] += value;
    }

    /// Get the matrix index for a branch current.
    pub fn branch_index(&self, branch: BranchId) -> usize {
        VarIndex::Current(branch).to_index(self.num_nodes)
    }

    /// Stamp an admittance between two nodes.
    /// For an admittance y between nodes n1 and n2:
    ///   A[n1,n1] += y
    ///   A[n2,n2] += y
    ///   A[n1,n2] -= y
    ///   A[n2,n1] -= y
    pub fn stamp_admittance(&mut self, n1: usize, n2: usize, y: Complex64) {
        self.add(n1, n1, y);
        self.add(n2, n2, y);
        self.add(n1, n2, -y);
        self.add(n2, n1, -y);
    }

    /// Stamp a voltage source between two nodes with branch current at index br.
    /// V[n1] - V[n2] = E, with the branch current flowing from n1 through
    /// the source to n2.
    pub fn stamp_voltage_branch(&mut self, n1: usize, n2: usize, br: usize, voltage: Complex64) {
        self.add(br, n1, ONE);
        self.add(n1, br, ONE);
        self.add(br, n2, -ONE);
        self.add(n2, br, -ONE);
        self.z[br] = voltage;
    }

    /// Apply one component stamp.
    fn apply(&mut self, id: ComponentId, stamp: Stamp) {
        match stamp {
            Stamp::Admittance { n1, n2, y } => self.stamp_admittance(n1, n2, y),
            Stamp::Excitation(entries) => {
                for (row, value) in entries {
                    self.add_source(row, value);
                }
            }
            Stamp::VoltageBranch { n1, n2, voltage } => {
                let br = self.branch_index(BranchId(self.branches.len()));
                self.stamp_voltage_branch(n1, n2, br, voltage);
                self.branches.push(id);
            }
        }
    }

    /// Solve the system with LU decomposition and partial pivoting.
    ///
    /// The reference row/column, if any, is left out and its unknown is
    /// reported as exactly zero. The returned vector has `size` entries.
    pub fn solve(&self) -> Result<Vec<Complex64>> {
        let active: Vec<usize> = (0..self.size).filter(|&i| Some(i) != self.reference).collect();
        let n = active.len();

        let mut lu = Vec::with_capacity(n * n);
        for &row in &active {
            for &col in &active {
                lu.push(self.get(row, col));
            }
        }
        let mut x: Vec<Complex64> = active.iter().map(|&row| self.z[row]).collect();

        // Largest magnitude in each row, swapped along with the rows.
        let mut row_scale: Vec<f64> = (0..n)
            .map(|i| lu[i * n..(i + 1) * n].iter().map(|v| v.norm()).fold(0.0, f64::max))
            .collect();

        for k in 0..n {
            // Find pivot
            let mut max_val = lu[k * n + k].norm();
            let mut max_row = k;

            for i in (k + 1)..n {
                let val = lu[i * n + k].norm();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_val == 0.0 || max_val <= self.pivot_tolerance * row_scale[max_row] {
                return Err(MnaError::SingularSystem {
                    row: active[k],
                    pivot: max_val,
                });
            }

            // Swap rows if needed
            if max_row != k {
                for j in 0..n {
                    lu.swap(k * n + j, max_row * n + j);
                }
                x.swap(k, max_row);
                row_scale.swap(k, max_row);
            }

            // Eliminate
            let pivot = lu[k * n + k];
            for i in (k + 1)..n {
                let factor = lu[i * n + k] / pivot;
                lu[i * n + k] = factor;
                for j in (k + 1)..n {
                    let a_kj = lu[k * n + j];
                    lu[i * n + j] -= factor * a_kj;
                }
                let x_k = x[k];
                x[i] -= factor * x_k;
            }
        }

        // Back substitution (U * x = y)
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                let x_j = x[j];
                x[i] -= lu[i * n + j] * x_j;
            }
            x[i] /= lu[i * n + i];
        }

        let mut full = vec![ZERO; self.size];
        for (value, &row) in x.into_iter().zip(&active) {
            full[row] = value;
        }
        Ok(full)
    }
}

/// Assemble the MNA system for `circuit` at `frequency` Hz.
///
/// Components are stamped in insertion order. Nothing is solved here; call
/// [`MnaSystem::solve`] on the result.
pub fn assemble(circuit: &Circuit, frequency: f64, config: &SolverConfig) -> Result<MnaSystem> {
    let omega = 2.0 * PI * frequency;
    let num_branches = circuit
        .components()
        .iter()
        .filter(|c| c.needs_branch(config.stamping))
        .count();

    let mut system = MnaSystem::new(circuit.node_count(), num_branches);
    system.pivot_tolerance = config.pivot_tolerance;

    if let Reference::Node(label) = &config.reference {
        let node = circuit
            .find_node(label)
            .ok_or_else(|| MnaError::UnknownReference { node: label.clone() })?;
        system.reference = Some(node.index());
    }

    for (idx, component) in circuit.components().iter().enumerate() {
        let id = ComponentId(idx);
        let (n1, n2) = circuit.resolve(component)?;
        let stamp = component.stamp(id, n1.index(), n2.index(), omega, config.stamping)?;
        trace!(component = %component.describe(id), ?stamp, "stamp");
        system.apply(id, stamp);
    }

    Ok(system)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Capacitor, CurrentSource, Inductor, Resistor, VoltageSource};
    use crate::solver::SourceStamping;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_system_dimensions() {
        let mut circuit = Circuit::new();
        circuit.add_component(Resistor::new("1", "0", 1e3));
        circuit.add_component(VoltageSource::new("1", "0", 5.0));
        circuit.add_component(VoltageSource::new("2", "0", 1.0));

        let system = assemble(&circuit, 60.0, &SolverConfig::new()).unwrap();
        assert_eq!(system.size, 3);
        assert!(system.branches().is_empty());

        let config = SolverConfig::new().with_stamping(SourceStamping::BranchCurrent);
        let system = assemble(&circuit, 60.0, &config).unwrap();
        assert_eq!(system.size, 5);
        assert_eq!(system.num_nodes(), 3);
        assert_eq!(system.branches(), [ComponentId(1), ComponentId(2)]);
    }

    #[test]
    fn test_resistor_stamp_pattern() {
        let mut circuit = Circuit::new();
        circuit.add_component(Resistor::new("a", "b", 250.0));
        let system = assemble(&circuit, 50.0, &SolverConfig::new()).unwrap();

        let y = c(0.004, 0.0);
        assert_eq!(system.get(0, 0), y);
        assert_eq!(system.get(1, 1), y);
        assert_eq!(system.get(0, 1), -y);
        assert_eq!(system.get(1, 0), -y);
        assert!(system.z.iter().all(|v| *v == ZERO));
    }

    #[test]
    fn test_source_excitation() {
        let mut circuit = Circuit::new();
        circuit.add_component(VoltageSource::new("1", "0", 5.0));
        circuit.add_component(CurrentSource::new("2", "0", 1e-3));
        let system = assemble(&circuit, 60.0, &SolverConfig::new()).unwrap();

        // nodes: 1, 0, 2
        assert_eq!(system.z, vec![c(-5.0, 0.0), c(-1e-3, 0.0), c(1e-3, 0.0)]);
        assert!(system.a.iter().all(|v| *v == ZERO));
    }

    #[test]
    fn test_voltage_branch_stamp() {
        let mut circuit = Circuit::new();
        circuit.add_component(VoltageSource::new("1", "0", 5.0));
        let config = SolverConfig::new().with_stamping(SourceStamping::BranchCurrent);
        let system = assemble(&circuit, 60.0, &config).unwrap();

        assert_eq!(system.get(2, 0), ONE);
        assert_eq!(system.get(0, 2), ONE);
        assert_eq!(system.get(2, 1), -ONE);
        assert_eq!(system.get(1, 2), -ONE);
        assert_eq!(system.z[2], c(5.0, 0.0));
    }

    #[test]
    fn test_self_loop_cancels() {
        let mut circuit = Circuit::new();
        circuit.add_component(Resistor::new("x", "x", 100.0));
        let system = assemble(&circuit, 1.0, &SolverConfig::new()).unwrap();
        assert_eq!(system.get(0, 0), ZERO);
    }

    #[test]
    fn test_capacitor_entry_linear_in_frequency() {
        let mut circuit = Circuit::new();
        circuit.add_component(Capacitor::new("1", "0", 1e-6));
        let low = assemble(&circuit, 100.0, &SolverConfig::new()).unwrap();
        let high = assemble(&circuit, 300.0, &SolverConfig::new()).unwrap();
        assert_abs_diff_eq!(high.get(0, 0).norm() / low.get(0, 0).norm(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inductor_entry_inverse_in_frequency() {
        let mut circuit = Circuit::new();
        circuit.add_component(Inductor::new("1", "0", 1e-3));
        let low = assemble(&circuit, 100.0, &SolverConfig::new()).unwrap();
        let high = assemble(&circuit, 300.0, &SolverConfig::new()).unwrap();
        assert_abs_diff_eq!(low.get(0, 0).norm() / high.get(0, 0).norm(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_reference() {
        let mut circuit = Circuit::new();
        circuit.add_component(Resistor::new("1", "2", 1.0));
        let config = SolverConfig::new().with_reference("gnd");
        assert!(matches!(
            assemble(&circuit, 1.0, &config),
            Err(MnaError::UnknownReference { node }) if node == "gnd"
        ));
    }

    #[test]
    fn test_solve_diagonal_system() {
        let mut system = MnaSystem::new(2, 0);
        system.add(0, 0, c(2.0, 0.0));
        system.add(1, 1, c(0.0, 4.0));
        system.add_source(0, c(1.0, 0.0));
        system.add_source(1, c(2.0, 0.0));
        let x = system.solve().unwrap();
        assert_eq!(x, vec![c(0.5, 0.0), c(0.0, -0.5)]);
    }

    #[test]
    fn test_solve_needs_pivoting() {
        let mut system = MnaSystem::new(2, 0);
        system.add(0, 1, ONE);
        system.add(1, 0, ONE);
        system.add_source(0, c(3.0, 0.0));
        system.add_source(1, c(7.0, 0.0));
        let x = system.solve().unwrap();
        assert_eq!(x, vec![c(7.0, 0.0), c(3.0, 0.0)]);
    }

    #[test]
    fn test_solve_widely_scaled_rows() {
        let mut system = MnaSystem::new(2, 0);
        system.add(0, 0, c(10.0, 0.0));
        system.add(1, 1, c(0.0, 6.28e-12));
        system.add_source(0, c(1e-3, 0.0));
        system.add_source(1, c(1e-12, 0.0));
        let x = system.solve().unwrap();
        assert_abs_diff_eq!(x[0].re, 1e-4, epsilon = 1e-18);
        assert_abs_diff_eq!(x[1].im, -1.0 / 6.28, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_cancelled_row_is_singular() {
        // Second row is the first scaled by 1e-6.
        let mut system = MnaSystem::new(2, 0);
        system.add(0, 0, c(1.0, 0.0));
        system.add(0, 1, c(2.0, 0.0));
        system.add(1, 0, c(1e-6, 0.0));
        system.add(1, 1, c(2e-6, 0.0));
        assert!(matches!(system.solve(), Err(MnaError::SingularSystem { row: 1, .. })));
    }

    #[test]
    fn test_solve_zero_matrix_is_singular() {
        let system = MnaSystem::new(2, 0);
        assert!(matches!(system.solve(), Err(MnaError::SingularSystem { .. })));
    }

    #[test]
    fn test_solve_empty_system() {
        let system = MnaSystem::new(0, 0);
        assert_eq!(system.solve().unwrap(), Vec::<Complex64>::new());
    }

    proptest! {
        #[test]
        fn prop_passive_stamp_is_symmetric(
            resistance in 1e-3f64..1e6,
            i in 0usize..4,
            j in 0usize..4,
        ) {
            prop_assume!(i != j);
            let mut system = MnaSystem::new(4, 0);
            let y = c(1.0 / resistance, 0.0);
            system.stamp_admittance(i, j, y);

            prop_assert_eq!(system.get(i, i), y);
            prop_assert_eq!(system.get(j, j), y);
            prop_assert_eq!(system.get(i, j), -y);
            prop_assert_eq!(system.get(j, i), -y);
            let total: Complex64 = system.a.iter().sum();
            prop_assert_eq!(total, ZERO);
        }
    }
}
