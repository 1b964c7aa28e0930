//! Component models for AC circuit analysis.
//!
//! This module provides models for all supported two-terminal components:
//! - Linear: Resistor, Capacitor, Inductor
//! - Sources: Voltage Source, Current Source
//!
//! Each component computes its own [`Stamp`] from its resolved node indices,
//! its magnitude and the angular frequency.

mod linear;
mod sources;

pub use linear::{Capacitor, Inductor, Resistor};
pub use sources::{CurrentSource, VoltageSource};

use num_complex::Complex64;

use crate::circuit::ComponentId;
use crate::dsl::{ComponentDef, ComponentType};
use crate::error::{MnaError, Result};
use crate::solver::SourceStamping;

/// A circuit component.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Resistor(Resistor),
    Capacitor(Capacitor),
    Inductor(Inductor),
    VoltageSource(VoltageSource),
    CurrentSource(CurrentSource),
}

/// The contribution of one component to the MNA system.
#[derive(Debug, Clone, PartialEq)]
pub enum Stamp {
    /// Two-terminal admittance `y` between rows `n1` and `n2`.
    Admittance { n1: usize, n2: usize, y: Complex64 },
    /// Entries added to the excitation vector.
    Excitation(Vec<(usize, Complex64)>),
    /// Ideal voltage source with its own branch-current unknown.
    VoltageBranch { n1: usize, n2: usize, voltage: Complex64 },
}

impl Component {
    /// Create a component from a netlist definition.
    pub fn from_def(def: &ComponentDef) -> Result<Self> {
        let value = def.value.ok_or_else(|| {
            MnaError::invalid_component(
                &def.name,
                def.line,
                format!("{} requires a value", def.component_type.kind_name()),
            )
        })?;

        let (n1, n2) = match def.nodes.as_slice() {
            [n1, n2] => (n1.clone(), n2.clone()),
            nodes => {
                return Err(MnaError::invalid_component(
                    &def.name,
                    def.line,
                    format!("expected 2 nodes, got {}", nodes.len()),
                ))
            }
        };

        let component = match def.component_type {
            ComponentType::Resistor => Component::Resistor(Resistor::new(n1, n2, value)),
            ComponentType::Capacitor => Component::Capacitor(Capacitor::new(n1, n2, value)),
            ComponentType::Inductor => Component::Inductor(Inductor::new(n1, n2, value)),
            ComponentType::VoltageSource => {
                Component::VoltageSource(VoltageSource::new(n1, n2, value))
            }
            ComponentType::CurrentSource => {
                Component::CurrentSource(CurrentSource::new(n1, n2, value))
            }
        };

        Ok(component.with_name(def.name.clone()))
    }

    /// Attach an instance name used in diagnostics.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = Some(name.into());
        match &mut self {
            Component::Resistor(c) => c.name = name,
            Component::Capacitor(c) => c.name = name,
            Component::Inductor(c) => c.name = name,
            Component::VoltageSource(c) => c.name = name,
            Component::CurrentSource(c) => c.name = name,
        }
        self
    }

    /// The component's instance name, if one was given.
    pub fn name(&self) -> Option<&str> {
        match self {
            Component::Resistor(c) => c.name.as_deref(),
            Component::Capacitor(c) => c.name.as_deref(),
            Component::Inductor(c) => c.name.as_deref(),
            Component::VoltageSource(c) => c.name.as_deref(),
            Component::CurrentSource(c) => c.name.as_deref(),
        }
    }

    /// The two endpoint labels, `[node1, node2]`.
    pub fn nodes(&self) -> [&str; 2] {
        let nodes = match self {
            Component::Resistor(c) => &c.nodes,
            Component::Capacitor(c) => &c.nodes,
            Component::Inductor(c) => &c.nodes,
            Component::VoltageSource(c) => &c.nodes,
            Component::CurrentSource(c) => &c.nodes,
        };
        [nodes[0].as_str(), nodes[1].as_str()]
    }

    /// The real-valued magnitude (Ω, F, H, V or A).
    pub fn value(&self) -> f64 {
        match self {
            Component::Resistor(c) => c.resistance,
            Component::Capacitor(c) => c.capacitance,
            Component::Inductor(c) => c.inductance,
            Component::VoltageSource(c) => c.voltage,
            Component::CurrentSource(c) => c.current,
        }
    }

    /// Lowercase kind name, e.g. `"inductor"`.
    pub fn kind_name(&self) -> &'static str {
        self.component_type().kind_name()
    }

    /// The netlist type of this component.
    pub fn component_type(&self) -> ComponentType {
        match self {
            Component::Resistor(_) => ComponentType::Resistor,
            Component::Capacitor(_) => ComponentType::Capacitor,
            Component::Inductor(_) => ComponentType::Inductor,
            Component::VoltageSource(_) => ComponentType::VoltageSource,
            Component::CurrentSource(_) => ComponentType::CurrentSource,
        }
    }

    /// Human-readable identification for error messages.
    pub fn describe(&self, id: ComponentId) -> String {
        match self.name() {
            Some(name) => name.to_string(),
            None => format!("{} {}", self.kind_name(), id),
        }
    }

    /// Whether this component needs a branch-current unknown under the given
    /// stamping.
    pub fn needs_branch(&self, stamping: SourceStamping) -> bool {
        matches!(self, Component::VoltageSource(_)) && stamping == SourceStamping::BranchCurrent
    }

    /// Compute this component's stamp.
    ///
    /// `n1` and `n2` are the resolved indices of `nodes()[0]` and
    /// `nodes()[1]`; `omega` is the angular frequency in rad/s.
    pub fn stamp(
        &self,
        id: ComponentId,
        n1: usize,
        n2: usize,
        omega: f64,
        stamping: SourceStamping,
    ) -> Result<Stamp> {
        let admittance = match self {
            Component::Resistor(r) => r.admittance(),
            Component::Capacitor(c) => c.admittance(omega),
            Component::Inductor(l) => l.admittance(omega),

            Component::VoltageSource(v) => {
                if !v.voltage.is_finite() {
                    return Err(MnaError::degenerate(self.describe(id), "source value is not finite"));
                }
                let voltage = Complex64::new(v.voltage, 0.0);
                return Ok(match stamping {
                    SourceStamping::Injection => Stamp::Excitation(vec![(n1, -voltage)]),
                    SourceStamping::BranchCurrent => Stamp::VoltageBranch { n1, n2, voltage },
                });
            }

            Component::CurrentSource(i) => {
                if !i.current.is_finite() {
                    return Err(MnaError::degenerate(self.describe(id), "source value is not finite"));
                }
                let current = Complex64::new(i.current, 0.0);
                return Ok(Stamp::Excitation(vec![(n1, current), (n2, -current)]));
            }
        };

        let y = admittance.map_err(|reason| MnaError::degenerate(self.describe(id), reason))?;
        Ok(Stamp::Admittance { n1, n2, y })
    }
}

impl From<Resistor> for Component {
    fn from(r: Resistor) -> Self {
        Component::Resistor(r)
    }
}

impl From<Capacitor> for Component {
    fn from(c: Capacitor) -> Self {
        Component::Capacitor(c)
    }
}

impl From<Inductor> for Component {
    fn from(l: Inductor) -> Self {
        Component::Inductor(l)
    }
}

impl From<VoltageSource> for Component {
    fn from(v: VoltageSource) -> Self {
        Component::VoltageSource(v)
    }
}

impl From<CurrentSource> for Component {
    fn from(i: CurrentSource) -> Self {
        Component::CurrentSource(i)
    }
}
