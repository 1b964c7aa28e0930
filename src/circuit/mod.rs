//! Circuit graph representation.
//!
//! This module provides the network model: a registry of node labels and the
//! ordered list of components connected between them. The [`Circuit`]
//! struct is what the solver consumes.

mod graph;
mod types;

pub use graph::Circuit;
pub use types::*;
