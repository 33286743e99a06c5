//! Exercise envelope types exchanged with the text-completion service.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::circuit::{CircuitData, CircuitType};

/// Requested exercise difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// One value the student has to compute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredAnswer {
    pub id: String,
    /// Prompt shown next to the input, e.g. "Gesamtwiderstand R_ges"
    pub label: String,
    /// Unit the answer is expected in, e.g. "mA"
    pub unit: String,
    /// Reference value, expressed in `unit`
    pub correct_value: f64,
    /// Relative tolerance, e.g. 0.05 for ±5 %
    pub tolerance: f64,
}

/// A generated exercise: a circuit plus the question about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub circuit_type: CircuitType,
    pub difficulty: Difficulty,
    pub circuit: CircuitData,
    pub question: String,
    pub required_answers: Vec<RequiredAnswer>,
}

impl Exercise {
    /// Look up a required answer by id.
    pub fn answer(&self, id: &str) -> Option<&RequiredAnswer> {
        self.required_answers.iter().find(|a| a.id == id)
    }
}
