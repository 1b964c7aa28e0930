//! Linear passive components: Resistor, Capacitor, Inductor.
//!
//! All three reduce to a single complex admittance between their terminals.
//! `admittance` returns the reason as `Err` when the value is undefined at
//! the requested angular frequency.

use num_complex::Complex64;

/// A resistor component.
#[derive(Debug, Clone, PartialEq)]
pub struct Resistor {
    pub name: Option<String>,
    pub nodes: [String; 2],
    /// Resistance in ohms
    pub resistance: f64,
}

impl Resistor {
    /// Create a new resistor.
    pub fn new(n1: impl Into<String>, n2: impl Into<String>, resistance: f64) -> Self {
        Self {
            name: None,
            nodes: [n1.into(), n2.into()],
            resistance,
        }
    }

    /// Get the admittance y = 1/R.
    ///
    /// Zero resistance is rejected rather than replaced by a large
    /// conductance.
    pub fn admittance(&self) -> Result<Complex64, &'static str> {
        if self.resistance == 0.0 {
            return Err("zero resistance has infinite admittance");
        }
        finite(Complex64::new(1.0 / self.resistance, 0.0))
    }
}

/// A capacitor component.
///
/// In the phasor domain a capacitor has admittance y = jωC, which grows
/// linearly with frequency and vanishes at DC.
#[derive(Debug, Clone, PartialEq)]
pub struct Capacitor {
    pub name: Option<String>,
    pub nodes: [String; 2],
    /// Capacitance in farads
    pub capacitance: f64,
}

impl Capacitor {
    /// Create a new capacitor.
    pub fn new(n1: impl Into<String>, n2: impl Into<String>, capacitance: f64) -> Self {
        Self {
            name: None,
            nodes: [n1.into(), n2.into()],
            capacitance,
        }
    }

    /// Get the admittance y = jωC.
    pub fn admittance(&self, omega: f64) -> Result<Complex64, &'static str> {
        finite(Complex64::new(0.0, omega * self.capacitance))
    }
}

/// An inductor component.
///
/// In the phasor domain an inductor has admittance y = -j/(ωL), inversely
/// proportional to frequency. At DC it is a short circuit, which has no
/// finite admittance.
#[derive(Debug, Clone, PartialEq)]
pub struct Inductor {
    pub name: Option<String>,
    pub nodes: [String; 2],
    /// Inductance in henries
    pub inductance: f64,
}

impl Inductor {
    /// Create a new inductor.
    pub fn new(n1: impl Into<String>, n2: impl Into<String>, inductance: f64) -> Self {
        Self {
            name: None,
            nodes: [n1.into(), n2.into()],
            inductance,
        }
    }

    /// Get the admittance y = -j/(ωL).
    pub fn admittance(&self, omega: f64) -> Result<Complex64, &'static str> {
        let reactance = omega * self.inductance;
        if reactance == 0.0 {
            return Err("inductor admittance is undefined at zero frequency or zero inductance");
        }
        finite(Complex64::new(0.0, -1.0 / reactance))
    }
}

fn finite(y: Complex64) -> Result<Complex64, &'static str> {
    if y.is_finite() {
        Ok(y)
    } else {
        Err("admittance is not finite")
    }
}
