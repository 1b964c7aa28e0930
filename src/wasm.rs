//! WASM bindings for Phasor MNA.
//!
//! This module provides JavaScript-friendly bindings for solving netlists in
//! the browser.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmAcSolver } from 'phasor_mna';
//!
//! await init();
//!
//! const netlist = `
//!   .ground 0
//!   I1 in 0 1m
//!   R1 in 0 1k
//!   C1 in 0 1u
//! `;
//!
//! const solver = new WasmAcSolver(netlist);
//! const labels = solver.node_labels();
//! const phasors = solver.solve(1000); // [re0, im0, re1, im1, ...]
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::Circuit;
use crate::dsl;
use crate::solver::{AcAnalysis, SolverConfig, SourceStamping};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible AC solver for one parsed netlist.
#[wasm_bindgen]
pub struct WasmAcSolver {
    circuit: Circuit,
    analysis: AcAnalysis,
}

#[wasm_bindgen]
impl WasmAcSolver {
    /// Create a solver from a netlist string with injection stamping.
    ///
    /// A `.ground` directive in the netlist selects the reference node;
    /// without it every node floats.
    #[wasm_bindgen(constructor)]
    pub fn new(netlist: &str) -> Result<WasmAcSolver, JsValue> {
        Self::with_config(netlist, false)
    }

    /// Create a solver, optionally using full MNA for voltage sources.
    #[wasm_bindgen]
    pub fn with_config(netlist: &str, branch_current: bool) -> Result<WasmAcSolver, JsValue> {
        let ast = dsl::parse(netlist).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let circuit = Circuit::from_ast(&ast).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let stamping = if branch_current {
            SourceStamping::BranchCurrent
        } else {
            SourceStamping::Injection
        };
        let mut config = SolverConfig::new().with_stamping(stamping);
        if let Some(ground) = ast.ground {
            config = config.with_reference(ground);
        }

        Ok(WasmAcSolver {
            circuit,
            analysis: AcAnalysis::with_config(config),
        })
    }

    /// Solve at `frequency` Hz.
    ///
    /// # Returns
    /// A Float64Array of interleaved real/imaginary parts, one pair per node
    /// in `node_labels()` order.
    #[wasm_bindgen]
    pub fn solve(&self, frequency: f64) -> Result<Vec<f64>, JsValue> {
        let solution = self
            .analysis
            .solve(&self.circuit, frequency)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(solution.voltages().iter().flat_map(|v| [v.re, v.im]).collect())
    }

    /// Node labels in solution order.
    #[wasm_bindgen]
    pub fn node_labels(&self) -> Vec<String> {
        self.circuit.node_labels().to_vec()
    }

    /// Number of nodes.
    #[wasm_bindgen(getter)]
    pub fn node_count(&self) -> usize {
        self.circuit.node_count()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
