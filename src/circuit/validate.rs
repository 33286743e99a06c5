//! Circuit validation.

use std::collections::HashSet;

use crate::error::{Result, TutorError};

use super::{CircuitData, Element};

/// Validate a circuit received from the exercise generator.
///
/// Checks:
/// - Source voltage and all resistances are positive
/// - Resistor ids are unique
/// - Every layout reference resolves, parallel groups are non-empty
/// - Each resistor is placed in exactly one layout element
///
/// Layout itself does not require any of this; it degrades gracefully on
/// dangling references. A circuit without a topology only gets the value
/// and id checks.
pub fn validate_circuit(circuit: &CircuitData) -> Result<()> {
    if circuit.voltage.value <= 0.0 || circuit.voltage.value.is_nan() {
        return Err(TutorError::NonPositiveVoltage {
            value: circuit.voltage.value,
        });
    }

    let mut ids = HashSet::with_capacity(circuit.resistors.len());
    for resistor in &circuit.resistors {
        if resistor.value <= 0.0 || resistor.value.is_nan() {
            return Err(TutorError::NonPositiveResistance {
                id: resistor.id.clone(),
                value: resistor.value,
            });
        }
        if !ids.insert(resistor.id.as_str()) {
            return Err(TutorError::duplicate_resistor(&resistor.id));
        }
    }

    if let Some(elements) = circuit.topology() {
        let mut placed = HashSet::with_capacity(ids.len());
        for (index, element) in elements.iter().enumerate() {
            if let Element::Parallel { resistor_ids } = element {
                if resistor_ids.is_empty() {
                    return Err(TutorError::EmptyParallelGroup { element: index });
                }
            }
            for id in element.resistor_ids() {
                if !ids.contains(id.as_str()) {
                    return Err(TutorError::unknown_resistor(id, index));
                }
                if !placed.insert(id.as_str()) {
                    return Err(TutorError::ResistorReused { id: id.clone() });
                }
            }
        }

        // Registry order keeps the reported resistor deterministic
        if let Some(unplaced) = circuit
            .resistors
            .iter()
            .find(|r| !placed.contains(r.id.as_str()))
        {
            return Err(TutorError::UnplacedResistor {
                id: unplaced.id.clone(),
            });
        }

        if let Some(actual) = circuit.classify() {
            if actual != circuit.circuit_type {
                tracing::warn!(
                    "Circuit declared as {} but its layout is {}",
                    circuit.circuit_type,
                    actual
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{CircuitType, Resistor};

    fn mixed() -> CircuitData {
        CircuitData::new(
            CircuitType::Mixed,
            12.0,
            vec![
                Resistor::new("r1", 30.0, "R₁"),
                Resistor::new("r2", 60.0, "R₂"),
                Resistor::new("r3", 60.0, "R₃"),
            ],
        )
        .with_layout(vec![Element::resistor("r1"), Element::parallel(["r2", "r3"])])
    }

    #[test]
    fn test_valid_circuit() {
        assert!(validate_circuit(&mixed()).is_ok());
    }

    #[test]
    fn test_fallback_circuit_is_valid() {
        let mut circuit = mixed();
        circuit.layout = None;
        assert!(validate_circuit(&circuit).is_ok());
    }

    #[test]
    fn test_non_positive_voltage() {
        let mut circuit = mixed();
        circuit.voltage.value = 0.0;
        assert!(matches!(
            validate_circuit(&circuit),
            Err(TutorError::NonPositiveVoltage { .. })
        ));
    }

    #[test]
    fn test_non_positive_resistance() {
        let mut circuit = mixed();
        circuit.resistors[1].value = -5.0;
        match validate_circuit(&circuit) {
            Err(TutorError::NonPositiveResistance { id, value }) => {
                assert_eq!(id, "r2");
                assert_eq!(value, -5.0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_id() {
        let mut circuit = mixed();
        circuit.resistors[2].id = "r1".to_string();
        assert!(matches!(
            validate_circuit(&circuit),
            Err(TutorError::DuplicateResistor { id }) if id == "r1"
        ));
    }

    #[test]
    fn test_dangling_reference() {
        let circuit = mixed().with_layout(vec![
            Element::resistor("r1"),
            Element::parallel(["r2", "r9"]),
        ]);
        let err = validate_circuit(&circuit).unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(
            err,
            TutorError::UnknownResistor { ref id, element: 1 } if id == "r9"
        ));
    }

    #[test]
    fn test_empty_group() {
        let circuit = mixed().with_layout(vec![
            Element::parallel(Vec::<String>::new()),
            Element::resistor("r1"),
        ]);
        assert!(matches!(
            validate_circuit(&circuit),
            Err(TutorError::EmptyParallelGroup { element: 0 })
        ));
    }

    #[test]
    fn test_reused_resistor() {
        let circuit = mixed().with_layout(vec![
            Element::resistor("r1"),
            Element::parallel(["r1", "r2", "r3"]),
        ]);
        assert!(matches!(
            validate_circuit(&circuit),
            Err(TutorError::ResistorReused { id }) if id == "r1"
        ));
    }

    #[test]
    fn test_unplaced_resistor() {
        let circuit = mixed().with_layout(vec![Element::parallel(["r2", "r3"])]);
        assert!(matches!(
            validate_circuit(&circuit),
            Err(TutorError::UnplacedResistor { id }) if id == "r1"
        ));
    }

    #[test]
    fn test_type_mismatch_is_not_an_error() {
        let mut circuit = mixed();
        circuit.circuit_type = CircuitType::Series;
        assert!(validate_circuit(&circuit).is_ok());
    }
}
