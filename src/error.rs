//! Error types for the phasor MNA solver.
//!
//! This module provides a unified error type [`MnaError`] that covers
//! netlist parsing, component stamping and the linear solve.

use thiserror::Error;

/// Result type alias using [`MnaError`].
pub type Result<T> = std::result::Result<T, MnaError>;

/// Unified error type for all phasor operations.
#[derive(Error, Debug)]
pub enum MnaError {
    // ============ Netlist Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Invalid component definition
    #[error("Invalid component '{name}' at line {line}: {message}")]
    InvalidComponent {
        name: String,
        line: usize,
        message: String,
    },

    /// Unknown component type
    #[error("Unknown component type '{component_type}' at line {line}")]
    UnknownComponentType { component_type: String, line: usize },

    // ============ Assembly Errors ============
    /// A component's stamp is undefined at the requested frequency
    #[error("Degenerate component '{component}': {reason}")]
    DegenerateComponent { component: String, reason: String },

    /// A component references a node missing from the registry.
    ///
    /// `Circuit::add_component` registers both endpoints, so this only fires
    /// when that invariant has been broken.
    #[error("Internal error: node '{node}' is not registered in the circuit")]
    UnknownNode { node: String },

    /// The configured reference node does not exist in the circuit
    #[error("Reference node '{node}' not found in circuit")]
    UnknownReference { node: String },

    // ============ Solve Errors ============
    /// Matrix is singular and cannot be solved
    #[error("Singular system at row {row} (pivot magnitude {pivot:.2e}) - circuit may have a floating node or no reference")]
    SingularSystem { row: usize, pivot: f64 },

    // ============ I/O Errors ============
    /// Error reading a netlist file
    #[error("Failed to read netlist file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl MnaError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid component error
    pub fn invalid_component(name: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::InvalidComponent {
            name: name.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a degenerate component error
    pub fn degenerate(component: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DegenerateComponent {
            component: component.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error came out of assembly or the linear solve, as
    /// opposed to netlist input.
    pub fn is_solve_error(&self) -> bool {
        matches!(
            self,
            Self::DegenerateComponent { .. }
                | Self::UnknownNode { .. }
                | Self::UnknownReference { .. }
                | Self::SingularSystem { .. }
        )
    }
}
