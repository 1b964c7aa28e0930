//! The example network solved by the `phasor` binary when no netlist is given.

use crate::circuit::Circuit;
use crate::components::{Capacitor, Component, CurrentSource, Inductor, Resistor, VoltageSource};

/// Frequency the demo network is solved at, in Hz.
pub const DEMO_FREQUENCY: f64 = 60.0;

/// The same network written as a netlist.
pub const DEMO_NETLIST: &str = "\
# RLC demo network
.freq 60
R1 1 0 1k
C1 1 2 1u
L1 2 0 1m
V1 1 0 5
I1 2 0 1m
";

/// Build the demo network: one of each component kind across nodes
/// `1`, `0` and `2`.
pub fn demo_circuit() -> Circuit {
    let mut circuit = Circuit::new();
    circuit.add_component(Component::from(Resistor::new("1", "0", 1e3)).with_name("R1"));
    circuit.add_component(Component::from(Capacitor::new("1", "2", 1e-6)).with_name("C1"));
    circuit.add_component(Component::from(Inductor::new("2", "0", 1e-3)).with_name("L1"));
    circuit.add_component(Component::from(VoltageSource::new("1", "0", 5.0)).with_name("V1"));
    circuit.add_component(Component::from(CurrentSource::new("2", "0", 1e-3)).with_name("I1"));
    circuit
}
