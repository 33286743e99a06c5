//! Core types for circuit representation.
//!
//! These mirror the JSON contract of the exercise generator one-to-one, so a
//! generated exercise deserializes straight into them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::LayoutConfig;

/// Classification tag attached to a circuit.
///
/// Informational only: the layout always follows [`CircuitData::layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircuitType {
    Series,
    Parallel,
    Mixed,
}

impl fmt::Display for CircuitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CircuitType::Series => "series",
            CircuitType::Parallel => "parallel",
            CircuitType::Mixed => "mixed",
        };
        f.write_str(name)
    }
}

/// A resistor in the circuit's registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resistor {
    /// Stable key referenced by layout elements
    pub id: String,
    /// Resistance in ohms
    pub value: f64,
    /// Display label, e.g. "R₁"
    pub label: String,
}

impl Resistor {
    /// Create a new resistor.
    pub fn new(id: impl Into<String>, value: f64, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value,
            label: label.into(),
        }
    }

    /// Resistance with its unit, e.g. "100 Ω".
    pub fn value_text(&self) -> String {
        format!("{} Ω", self.value)
    }
}

impl fmt::Display for Resistor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} Ω", self.label, self.value)
    }
}

/// The circuit's single DC voltage source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoltageSource {
    /// Source voltage in volts
    pub value: f64,
}

impl VoltageSource {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Symbol caption, e.g. "U = 12 V".
    pub fn label(&self) -> String {
        format!("U = {} V", self.value)
    }
}

/// One unit of the series chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// A single resistor in series
    Resistor {
        #[serde(rename = "resistorId")]
        resistor_id: String,
    },
    /// Resistors electrically in parallel, acting as one series element
    Parallel {
        #[serde(rename = "resistorIds")]
        resistor_ids: Vec<String>,
    },
}

impl Element {
    /// Create a single-resistor element.
    pub fn resistor(id: impl Into<String>) -> Self {
        Element::Resistor {
            resistor_id: id.into(),
        }
    }

    /// Create a parallel group from the given ids, in branch order.
    pub fn parallel<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Element::Parallel {
            resistor_ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Resistor ids referenced by this element, in order.
    pub fn resistor_ids(&self) -> &[String] {
        match self {
            Element::Resistor { resistor_id } => std::slice::from_ref(resistor_id),
            Element::Parallel { resistor_ids } => resistor_ids,
        }
    }

    /// Unscaled horizontal footprint of this element.
    ///
    /// Parallel groups always get the wider margin to leave room for their
    /// bus bars, independent of branch count.
    pub fn natural_width(&self, config: &LayoutConfig) -> f64 {
        match self {
            Element::Resistor { .. } => config.resistor_width + config.series_lead_margin,
            Element::Parallel { .. } => config.resistor_width + config.parallel_lead_margin,
        }
    }
}

/// A complete circuit as delivered with an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitData {
    /// Declared classification
    #[serde(rename = "type")]
    pub circuit_type: CircuitType,
    /// The voltage source
    pub voltage: VoltageSource,
    /// Resistor registry
    pub resistors: Vec<Resistor>,
    /// Elements connected in series, left to right
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Vec<Element>>,
    /// Human-readable description shown beneath the diagram
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CircuitData {
    /// Create a circuit without a topology; it renders in fallback mode
    /// until [`with_layout`](Self::with_layout) is applied.
    pub fn new(circuit_type: CircuitType, voltage: f64, resistors: Vec<Resistor>) -> Self {
        Self {
            circuit_type,
            voltage: VoltageSource::new(voltage),
            resistors,
            layout: None,
            description: None,
        }
    }

    /// Set the series topology.
    pub fn with_layout(mut self, layout: Vec<Element>) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Set the description text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The series topology, or `None` when it is absent or empty and the
    /// fallback representation applies.
    pub fn topology(&self) -> Option<&[Element]> {
        match self.layout.as_deref() {
            Some(elements) if !elements.is_empty() => Some(elements),
            _ => None,
        }
    }

    /// Classify the topology: all single resistors is series, all groups is
    /// parallel, anything else mixed. `None` without a topology.
    pub fn classify(&self) -> Option<CircuitType> {
        let elements = self.topology()?;
        let groups = elements
            .iter()
            .filter(|e| matches!(e, Element::Parallel { .. }))
            .count();

        Some(if groups == 0 {
            CircuitType::Series
        } else if groups == elements.len() {
            CircuitType::Parallel
        } else {
            CircuitType::Mixed
        })
    }
}
