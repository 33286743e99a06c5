//! Circuit topology model and validation.
//!
//! A circuit is a registry of resistors plus an ordered list of
//! [`Element`]s connected in series, each either a single resistor or a
//! parallel group. The model is read-only once built: it arrives whole with
//! an exercise and is only traversed afterwards.

mod registry;
mod types;
mod validate;

pub use registry::ResistorRegistry;
pub use types::*;
pub use validate::validate_circuit;
