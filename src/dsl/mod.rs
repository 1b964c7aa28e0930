//! DSL (Domain Specific Language) parser for netlists.
//!
//! This module provides a SPICE-inspired text format for describing
//! two-terminal AC networks. The format is line-oriented and human-editable.
//!
//! # Grammar Overview
//!
//! ```text
//! netlist     = { line }
//! line        = comment | directive | component | empty
//! comment     = ('#' | ';') { any_char }
//! directive   = '.' directive_name { argument }
//! component   = type name node node [source_kind] value
//!
//! directive_name = "node" | "ground" | "freq" | "end"
//! type        = "R" | "C" | "L" | "V" | "I"
//! source_kind = "DC" | "AC"
//! node        = word | "GND"
//! value       = number [unit_suffix]
//!
//! number      = ['-'] (digit+ ['.' digit+] | '.' digit+) [('e'|'E') ['-'|'+'] digit+]
//! unit_suffix = 'p' | 'n' | 'u' | 'µ' | 'm' | 'k' | 'K' | 'M' | 'G'
//! ```
//!
//! A directive must be the first word on its line; anywhere else a leading
//! '.' belongs to the word, so `.5u` is a value.
//!
//! `GND` is an alias for node `0`. Any other word, numeric or not, is a node
//! label.
//!
//! # Component Types
//!
//! | Type | Description | Syntax |
//! |------|-------------|--------|
//! | R | Resistor | `R<name> <n1> <n2> <ohms>` |
//! | C | Capacitor | `C<name> <n1> <n2> <farads>` |
//! | L | Inductor | `L<name> <n1> <n2> <henries>` |
//! | V | Voltage Source | `V<name> <n+> <n-> [DC\|AC] <volts>` |
//! | I | Current Source | `I<name> <n1> <n2> [DC\|AC] <amps>` |
//!
//! # Directives
//!
//! | Directive | Description | Syntax |
//! |-----------|-------------|--------|
//! | .node | Register a node before any component | `.node <label>` |
//! | .ground | Reference node pinned at 0 V | `.ground <label>` |
//! | .freq | Analysis frequency in Hz | `.freq <value>` |
//! | .end | Ignore the rest of the file | `.end` |
//!
//! # Example
//!
//! ```text
//! # RC low-pass filter driven at 1 kHz
//! .freq 1k
//! .ground 0
//!
//! I1   in   0    1m
//! R1   in   0    10k
//! C1   in   0    100n
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{parse_value, Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a netlist string into an AST.
pub fn parse(input: &str) -> Result<CircuitAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse()
}

/// Parse a netlist file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<CircuitAst> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::MnaError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
