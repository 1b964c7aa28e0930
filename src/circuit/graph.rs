//! Circuit graph structure.

use std::collections::HashMap;

use super::types::{ComponentId, NodeId};
use crate::components::Component;
use crate::dsl::CircuitAst;
use crate::error::{MnaError, Result};

/// A network of two-terminal components.
///
/// Nodes are registered in first-seen order and keep their index for the
/// lifetime of the circuit. The order of [`Circuit::node_labels`] is the
/// order of every solution vector produced from this circuit.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    /// All components in insertion order
    components: Vec<Component>,

    /// Mapping from node labels to node IDs
    node_map: HashMap<String, NodeId>,

    /// Reverse mapping from node IDs to labels, in registration order
    node_names: Vec<String>,
}

impl Circuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a circuit from a parsed netlist.
    ///
    /// Nodes declared with `.node` are registered first, then components are
    /// added in source order.
    pub fn from_ast(ast: &CircuitAst) -> Result<Self> {
        let mut circuit = Circuit::new();

        for node in &ast.nodes {
            circuit.add_node(node.as_str());
        }

        for def in &ast.components {
            circuit.add_component(Component::from_def(def)?);
        }

        Ok(circuit)
    }

    /// Register a node label and return its index.
    ///
    /// Re-adding a known label returns the existing index.
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        let label = label.into();
        if let Some(&id) = self.node_map.get(&label) {
            return id;
        }
        let id = NodeId(self.node_names.len());
        self.node_names.push(label.clone());
        self.node_map.insert(label, id);
        id
    }

    /// Register both endpoints of a component and append it.
    pub fn add_component(&mut self, component: impl Into<Component>) -> ComponentId {
        let component = component.into();
        let [n1, n2] = component.nodes();
        self.add_node(n1);
        self.add_node(n2);

        let id = ComponentId(self.components.len());
        self.components.push(component);
        id
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.node_names.len()
    }

    /// Node labels in index order.
    pub fn node_labels(&self) -> &[String] {
        &self.node_names
    }

    /// All components in insertion order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Find a node ID by label.
    pub fn find_node(&self, label: &str) -> Option<NodeId> {
        self.node_map.get(label).copied()
    }

    /// Get the label of a node, `None` for an ID this circuit never issued.
    pub fn node_name(&self, node: NodeId) -> Option<&str> {
        self.node_names.get(node.0).map(String::as_str)
    }

    /// Resolve a component's endpoint labels to node IDs.
    pub fn resolve(&self, component: &Component) -> Result<(NodeId, NodeId)> {
        let [n1, n2] = component.nodes();
        let lookup = |label: &str| {
            self.find_node(label).ok_or_else(|| MnaError::UnknownNode {
                node: label.to_string(),
            })
        };
        Ok((lookup(n1)?, lookup(n2)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Capacitor, CurrentSource, Inductor, Resistor, VoltageSource};
    use proptest::prelude::*;

    #[test]
    fn test_nodes_registered_in_first_seen_order() {
        let mut circuit = Circuit::new();
        circuit.add_component(Resistor::new("1", "0", 1e3));
        circuit.add_component(Capacitor::new("1", "2", 1e-6));
        circuit.add_component(Inductor::new("2", "0", 1e-3));
        circuit.add_component(VoltageSource::new("1", "0", 5.0));
        circuit.add_component(CurrentSource::new("2", "0", 1e-3));

        assert_eq!(circuit.node_labels(), ["1", "0", "2"]);
        assert_eq!(circuit.node_count(), 3);
        assert_eq!(circuit.component_count(), 5);
        assert_eq!(circuit.find_node("2"), Some(NodeId(2)));
        assert_eq!(circuit.node_name(NodeId(1)), Some("0"));
    }

    #[test]
    fn test_node_name_unknown_id() {
        let mut circuit = Circuit::new();
        assert_eq!(circuit.node_name(NodeId(0)), None);
        circuit.add_node("a");
        assert_eq!(circuit.node_name(NodeId(0)), Some("a"));
        assert_eq!(circuit.node_name(NodeId(1)), None);
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut circuit = Circuit::new();
        let a = circuit.add_node("a");
        let b = circuit.add_node("b");
        assert_eq!(circuit.add_node("a"), a);
        assert_eq!(circuit.add_node("b"), b);
        assert_eq!(circuit.node_count(), 2);
    }

    #[test]
    fn test_self_loop_registers_one_node() {
        let mut circuit = Circuit::new();
        let id = circuit.add_component(Resistor::new("x", "x", 10.0));
        assert_eq!(id, ComponentId(0));
        assert_eq!(circuit.node_labels(), ["x"]);
    }

    #[test]
    fn test_resolve() {
        let mut circuit = Circuit::new();
        circuit.add_component(Resistor::new("in", "out", 1.0));
        let (n1, n2) = circuit.resolve(&circuit.components()[0]).unwrap();
        assert_eq!((n1, n2), (NodeId(0), NodeId(1)));

        let stranger: Component = Resistor::new("in", "nowhere", 1.0).into();
        assert!(matches!(
            circuit.resolve(&stranger),
            Err(MnaError::UnknownNode { node }) if node == "nowhere"
        ));
    }

    proptest! {
        #[test]
        fn prop_indices_dense_and_stable(edges in prop::collection::vec((0u8..12, 0u8..12), 0..40)) {
            let mut circuit = Circuit::new();
            let mut seen: Vec<String> = Vec::new();
            for (a, b) in &edges {
                let (a, b) = (a.to_string(), b.to_string());
                for label in [&a, &b] {
                    if !seen.contains(label) {
                        seen.push(label.clone());
                    }
                }
                circuit.add_component(Resistor::new(a, b, 1.0));
            }

            prop_assert_eq!(circuit.node_labels(), seen.as_slice());
            for (index, label) in seen.iter().enumerate() {
                prop_assert_eq!(circuit.find_node(label), Some(NodeId(index)));
            }
            for component in circuit.components() {
                prop_assert!(circuit.resolve(component).is_ok());
            }
        }
    }
}
