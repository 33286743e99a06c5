//! Boundary layer for exercises produced by the text-completion service.
//!
//! The service answers with free text that is supposed to contain a single
//! JSON object. This module pulls that object out and decodes it into an
//! [`Exercise`] or a bare [`CircuitData`]. Everything downstream (layout,
//! rendering) works on the decoded, immutable value.
//!
//! # Example
//!
//! ```
//! use circuit_tutor_core::exercise;
//!
//! let reply = r#"Hier ist die Schaltung:
//! { "type": "series", "voltage": { "value": 12 },
//!   "resistors": [{ "id": "r1", "value": 30, "label": "R₁" }],
//!   "layout": [{ "type": "resistor", "resistorId": "r1" }] }"#;
//!
//! let circuit = exercise::parse_circuit(reply).unwrap();
//! assert_eq!(circuit.resistors.len(), 1);
//! ```

mod types;

pub use types::*;

use serde::de::DeserializeOwned;

use crate::circuit::CircuitData;
use crate::error::{Result, TutorError};

/// Span from the first `{` to the last `}` of `text`, if any.
///
/// Surrounding prose or code fences are dropped; nested objects are kept
/// whole because the match is greedy.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T> {
    let json = extract_json_object(text).ok_or(TutorError::MissingJsonObject)?;
    Ok(serde_json::from_str(json)?)
}

/// Decode an exercise from a service response.
pub fn parse_exercise(text: &str) -> Result<Exercise> {
    let exercise: Exercise = decode(text)?;
    tracing::debug!(
        "Decoded exercise '{}' ({} {}, {} resistors)",
        exercise.id,
        exercise.difficulty,
        exercise.circuit_type,
        exercise.circuit.resistors.len()
    );
    Ok(exercise)
}

/// Decode a bare circuit from JSON or a service response.
pub fn parse_circuit(text: &str) -> Result<CircuitData> {
    decode(text)
}

/// Decode either a full exercise or a bare circuit and return the circuit.
///
/// Objects with a top-level `circuit` field are treated as exercises.
pub fn parse_any_circuit(text: &str) -> Result<CircuitData> {
    let json = extract_json_object(text).ok_or(TutorError::MissingJsonObject)?;
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.get("circuit").is_some() {
        let exercise: Exercise = serde_json::from_value(value)?;
        Ok(exercise.circuit)
    } else {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{CircuitType, Element};

    const EXERCISE: &str = r#"Gern! Hier ist deine Aufgabe:
```json
{
  "id": "42-1700000000000",
  "circuitType": "parallel",
  "difficulty": "medium",
  "circuit": {
    "type": "parallel",
    "voltage": { "value": 12 },
    "resistors": [
      { "id": "r1", "value": 60, "label": "R₁" },
      { "id": "r2", "value": 30, "label": "R₂" },
      { "id": "r3", "value": 40, "label": "R₃" },
      { "id": "r4", "value": 40, "label": "R₄" }
    ],
    "layout": [
      { "type": "parallel", "resistorIds": ["r1", "r2"] },
      { "type": "parallel", "resistorIds": ["r3", "r4"] }
    ],
    "description": "(R₁ || R₂) in Reihe mit (R₃ || R₄)"
  },
  "question": "Berechne den Gesamtwiderstand und den Gesamtstrom!",
  "requiredAnswers": [
    { "id": "r_ges", "label": "Gesamtwiderstand R_ges", "unit": "Ω", "correctValue": 40, "tolerance": 0.05 },
    { "id": "i_ges", "label": "Gesamtstrom I_ges", "unit": "A", "correctValue": 0.3, "tolerance": 0.05 }
  ]
}
```
Viel Erfolg!"#;

    #[test]
    fn test_extract_json_object() {
        assert_eq!(extract_json_object("x {\"a\": {\"b\": 1}} y"), Some("{\"a\": {\"b\": 1}}"));
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("} backwards {"), None);
    }

    #[test]
    fn test_parse_exercise() {
        let exercise = parse_exercise(EXERCISE).unwrap();
        assert_eq!(exercise.circuit_type, CircuitType::Parallel);
        assert_eq!(exercise.difficulty, Difficulty::Medium);
        assert_eq!(exercise.required_answers.len(), 2);
        assert_eq!(exercise.answer("i_ges").map(|a| a.correct_value), Some(0.3));
        assert_eq!(
            exercise.circuit.topology().map(|t| t.to_vec()),
            Some(vec![Element::parallel(["r1", "r2"]), Element::parallel(["r3", "r4"])])
        );
    }

    #[test]
    fn test_parse_any_circuit() {
        let from_exercise = parse_any_circuit(EXERCISE).unwrap();
        assert_eq!(from_exercise.resistors.len(), 4);

        let bare = r#"{"type":"series","voltage":{"value":9},"resistors":[]}"#;
        let circuit = parse_any_circuit(bare).unwrap();
        assert_eq!(circuit.circuit_type, CircuitType::Series);
    }

    #[test]
    fn test_missing_object() {
        assert!(matches!(
            parse_exercise("Entschuldigung, das kann ich nicht."),
            Err(TutorError::MissingJsonObject)
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_circuit(r#"{"type": "series", "voltage": "zwölf"}"#).unwrap_err();
        assert!(matches!(err, TutorError::InvalidJson { .. }));
        assert!(!err.is_validation());
    }
}
