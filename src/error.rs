//! Error types for the circuit tutor core.
//!
//! This module provides a unified error type [`TutorError`] covering the
//! boundary layer (decoding exercises produced by the text-completion
//! service), opt-in circuit validation, and CLI file I/O.
//!
//! Layout and rendering are infallible and never produce these errors.

use thiserror::Error;

/// Result type alias using [`TutorError`].
pub type Result<T> = std::result::Result<T, TutorError>;

/// Unified error type for all circuit tutor operations.
#[derive(Error, Debug)]
pub enum TutorError {
    // ============ Boundary Errors ============
    /// The payload is not valid circuit or exercise JSON
    #[error("Invalid circuit JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    /// The response text contains no JSON object at all
    #[error("Response contains no JSON object")]
    MissingJsonObject,

    // ============ Circuit Validation Errors ============
    /// Two resistors share the same id
    #[error("Duplicate resistor id '{id}'")]
    DuplicateResistor { id: String },

    /// Resistance must be strictly positive
    #[error("Resistor '{id}' has non-positive resistance {value} Ω")]
    NonPositiveResistance { id: String, value: f64 },

    /// Source voltage must be strictly positive
    #[error("Voltage source has non-positive value {value} V")]
    NonPositiveVoltage { value: f64 },

    /// A layout element references a resistor that is not registered
    #[error("Layout element {element} references unknown resistor '{id}'")]
    UnknownResistor { id: String, element: usize },

    /// A parallel group without any branch
    #[error("Layout element {element} is an empty parallel group")]
    EmptyParallelGroup { element: usize },

    /// A resistor placed in more than one layout position
    #[error("Resistor '{id}' appears more than once in the layout")]
    ResistorReused { id: String },

    /// A registered resistor that the layout never places
    #[error("Resistor '{id}' is not placed anywhere in the layout")]
    UnplacedResistor { id: String },

    /// Canvas dimensions that cannot hold a diagram
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    // ============ I/O Errors ============
    /// Error reading an input file
    #[error("Failed to read circuit file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the rendered diagram
    #[error("Failed to write diagram to '{path}': {source}")]
    OutputWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl TutorError {
    /// Create an unknown resistor error
    pub fn unknown_resistor(id: impl Into<String>, element: usize) -> Self {
        Self::UnknownResistor {
            id: id.into(),
            element,
        }
    }

    /// Create a duplicate resistor error
    pub fn duplicate_resistor(id: impl Into<String>) -> Self {
        Self::DuplicateResistor { id: id.into() }
    }

    /// Whether this error came from circuit validation (as opposed to
    /// decoding or I/O).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateResistor { .. }
                | Self::NonPositiveResistance { .. }
                | Self::NonPositiveVoltage { .. }
                | Self::UnknownResistor { .. }
                | Self::EmptyParallelGroup { .. }
                | Self::ResistorReused { .. }
                | Self::UnplacedResistor { .. }
                | Self::InvalidCanvas { .. }
        )
    }
}

impl From<serde_json::Error> for TutorError {
    fn from(source: serde_json::Error) -> Self {
        Self::InvalidJson { source }
    }
}
