//! Abstract Syntax Tree types for the netlist DSL.

/// Complete AST representation of a parsed netlist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircuitAst {
    /// All component instances, in source order
    pub components: Vec<ComponentDef>,
    /// Nodes declared with `.node`, in source order
    pub nodes: Vec<String>,
    /// Reference node from `.ground`
    pub ground: Option<String>,
    /// Analysis frequency from `.freq`, in Hz
    pub frequency: Option<f64>,
}

impl CircuitAst {
    /// Create a new empty netlist AST.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A component definition from the DSL.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDef {
    /// Component type (R, C, L, V, I)
    pub component_type: ComponentType,
    /// Instance name, e.g. `R1`
    pub name: String,
    /// Connected node labels
    pub nodes: Vec<String>,
    /// Component value (resistance, capacitance, etc.)
    pub value: Option<f64>,
    /// Source line number for error reporting
    pub line: usize,
}

/// Component types supported by the DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    /// Resistor
    Resistor,
    /// Capacitor
    Capacitor,
    /// Inductor
    Inductor,
    /// Voltage Source
    VoltageSource,
    /// Current Source
    CurrentSource,
}

impl ComponentType {
    /// Parse a component type from its DSL prefix.
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix.to_ascii_uppercase() {
            'R' => Some(Self::Resistor),
            'C' => Some(Self::Capacitor),
            'L' => Some(Self::Inductor),
            'V' => Some(Self::VoltageSource),
            'I' => Some(Self::CurrentSource),
            _ => None,
        }
    }

    /// Lowercase name used in messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Resistor => "resistor",
            Self::Capacitor => "capacitor",
            Self::Inductor => "inductor",
            Self::VoltageSource => "voltage source",
            Self::CurrentSource => "current source",
        }
    }

    /// Whether the type accepts a `DC`/`AC` keyword before its value.
    pub fn is_source(&self) -> bool {
        matches!(self, Self::VoltageSource | Self::CurrentSource)
    }
}
