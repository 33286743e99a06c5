//! Resistor lookup by id.

use std::collections::HashMap;

use super::types::{CircuitData, Element, Resistor};

/// Read-only index over a circuit's resistors.
///
/// When ids collide the first registered resistor wins, matching a linear
/// search over the registry.
#[derive(Debug, Clone)]
pub struct ResistorRegistry<'a> {
    by_id: HashMap<&'a str, &'a Resistor>,
}

impl<'a> ResistorRegistry<'a> {
    /// Index the given resistors.
    pub fn new(resistors: &'a [Resistor]) -> Self {
        let mut by_id = HashMap::with_capacity(resistors.len());
        for resistor in resistors {
            by_id.entry(resistor.id.as_str()).or_insert(resistor);
        }
        Self { by_id }
    }

    /// Index the resistors of a circuit.
    pub fn for_circuit(circuit: &'a CircuitData) -> Self {
        Self::new(&circuit.resistors)
    }

    /// Look up a resistor. `None` signals a dangling reference.
    pub fn resolve(&self, id: &str) -> Option<&'a Resistor> {
        self.by_id.get(id).copied()
    }

    /// Resolve every reference of an element, dropping dangling ones.
    pub fn resolve_element(&self, element: &Element) -> Vec<&'a Resistor> {
        element
            .resistor_ids()
            .iter()
            .filter_map(|id| self.resolve(id))
            .collect()
    }

    /// Number of distinct ids.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resistors() -> Vec<Resistor> {
        vec![
            Resistor::new("r1", 30.0, "R₁"),
            Resistor::new("r2", 60.0, "R₂"),
            Resistor::new("r1", 99.0, "R₁'"),
        ]
    }

    #[test]
    fn test_resolve() {
        let resistors = resistors();
        let registry = ResistorRegistry::new(&resistors);
        assert_eq!(registry.resolve("r2").map(|r| r.value), Some(60.0));
        assert!(registry.resolve("missing").is_none());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let resistors = resistors();
        let registry = ResistorRegistry::new(&resistors);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve("r1").map(|r| r.label.as_str()), Some("R₁"));
    }

    #[test]
    fn test_resolve_element_skips_dangling() {
        let resistors = resistors();
        let registry = ResistorRegistry::new(&resistors);
        let group = Element::parallel(["r2", "nope", "r1"]);
        let resolved: Vec<&str> = registry
            .resolve_element(&group)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(resolved, vec!["r2", "r1"]);

        assert!(registry.resolve_element(&Element::resistor("nope")).is_empty());
    }
}
