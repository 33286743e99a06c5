//! # Circuit Tutor Core
//!
//! Circuit model and schematic layout for series/parallel resistor exercises.
//!
//! This library provides:
//! - A topology model for resistor networks: an ordered series chain of
//!   elements, each a single resistor or a parallel group
//! - A deterministic layout engine that fits the schematic into a canvas
//! - A renderer that turns the layout into vector shapes and SVG
//! - Decoding of exercises delivered by a text-completion service
//!
//! ## Architecture
//!
//! - [`circuit`] - Resistor registry, topology model and validation
//! - [`layout`] - Layout engine (geometry from topology and canvas size)
//! - [`render`] - Diagram renderer (geometry to shapes and SVG)
//! - [`exercise`] - Exercise envelope and response decoding
//!
//! Data flows one way: a decoded [`CircuitData`] is laid out, the layout is
//! rendered. Every step is a pure function of its inputs, so diagrams can be
//! produced concurrently without any shared state.
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! circuit-tutor render exercise.json --width 700 --height 350 -o circuit.svg
//! ```
//!
//! ### Library
//!
//! ```
//! use circuit_tutor_core::{CircuitData, CircuitType, Element, Resistor};
//!
//! let circuit = CircuitData::new(
//!     CircuitType::Series,
//!     12.0,
//!     vec![Resistor::new("r1", 30.0, "R₁"), Resistor::new("r2", 60.0, "R₂")],
//! )
//! .with_layout(vec![Element::resistor("r1"), Element::resistor("r2")]);
//!
//! let svg = circuit_tutor_core::render_svg(&circuit, 500.0, 250.0);
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { render_circuit_svg } from 'circuit_tutor_core';
//!
//! container.innerHTML = render_circuit_svg(exerciseJson, 700, 350);
//! ```

pub mod circuit;
pub mod error;
pub mod exercise;
pub mod layout;
pub mod render;

// Re-export main types for convenience
pub use circuit::{validate_circuit, CircuitData, CircuitType, Element, Resistor, VoltageSource};
pub use error::{Result, TutorError};
pub use layout::{layout_circuit, Layout, LayoutConfig};
pub use render::{draw, render_svg, Drawing};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::render_circuit_svg;

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: f64 = 500.0;

/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: f64 = 250.0;
