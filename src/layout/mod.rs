//! Schematic layout engine.
//!
//! Maps a [`CircuitData`](crate::circuit::CircuitData) and a canvas size to
//! absolute geometry in a single left-to-right pass:
//!
//! ```text
//!   +--[R1]--+--[R2]--+--+
//!  (U)       |        |  |
//!   |        +--[R3]--+  |
//!   +--------------------+
//! ```
//!
//! 1. Every element gets a natural width (resistor width plus a lead margin,
//!    wider for parallel groups).
//! 2. The sum is compared with the width left after padding and the space
//!    reserved for the source and return wire; the scale factor is
//!    `min(1, available / natural)`, so diagrams only ever shrink.
//! 3. Elements are placed along the main wire with a running cursor.
//!    Horizontal sizes are scaled; resistor height and the vertical spacing
//!    between parallel branches are not.
//! 4. The loop is closed with a right-hand riser, a bottom return rail and a
//!    stub into the source's negative terminal.
//!
//! Circuits without a topology get the fallback layout: the source symbol
//! beside a text list of resistor values.

mod engine;
mod geometry;

pub use engine::{layout_circuit, layout_with_config};
pub use geometry::*;

/// Padding between the canvas edge and the diagram.
pub const PADDING: f64 = 25.0;

/// Unscaled width of a resistor body.
pub const RESISTOR_WIDTH: f64 = 50.0;

/// Height of a resistor body. Never scaled.
pub const RESISTOR_HEIGHT: f64 = 18.0;

/// Vertical distance between adjacent branches of a parallel group. Never scaled.
pub const PARALLEL_SPACING: f64 = 55.0;

/// Configuration for the layout engine.
///
/// The defaults are the canonical rendering parameters; reference output
/// is reproducible only with them.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Padding between canvas edge and diagram
    pub padding: f64,
    /// Unscaled resistor body width
    pub resistor_width: f64,
    /// Resistor body height
    pub resistor_height: f64,
    /// Vertical spacing between parallel branches
    pub parallel_spacing: f64,
    /// Unscaled lead wire between an element's edge and its body or bus bar
    pub lead_length: f64,
    /// Extra natural width of a single-resistor element
    pub series_lead_margin: f64,
    /// Extra natural width of a parallel group
    pub parallel_lead_margin: f64,
    /// Width kept free for the source and the return wire
    pub source_reserve: f64,
    /// Length of the wire from the source to the first element
    pub source_lead: f64,
    /// Offset of the source centre from its left edge
    pub source_offset: f64,
    /// Radius of the source symbol
    pub source_radius: f64,
    /// Distance of the main wire above, and the return rail below, the centre line
    pub rail_offset: f64,
    /// Padding used by the fallback layout
    pub fallback_padding: f64,
    /// Line height of the fallback resistor list
    pub fallback_line_height: f64,
    /// Offset of the fallback list column right of the canvas centre
    pub fallback_column_offset: f64,
    /// Description baseline distance from the bottom edge
    pub description_offset: f64,
    /// Description baseline distance from the bottom edge in fallback mode
    pub fallback_description_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: PADDING,
            resistor_width: RESISTOR_WIDTH,
            resistor_height: RESISTOR_HEIGHT,
            parallel_spacing: PARALLEL_SPACING,
            lead_length: 10.0,
            series_lead_margin: 30.0,
            parallel_lead_margin: 50.0,
            source_reserve: 80.0,
            source_lead: 50.0,
            source_offset: 15.0,
            source_radius: 18.0,
            rail_offset: 30.0,
            fallback_padding: 30.0,
            fallback_line_height: 18.0,
            fallback_column_offset: 40.0,
            description_offset: 8.0,
            fallback_description_offset: 10.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the unscaled resistor body size.
    pub fn with_resistor_size(mut self, width: f64, height: f64) -> Self {
        self.resistor_width = width;
        self.resistor_height = height;
        self
    }

    /// Set the vertical spacing between parallel branches.
    pub fn with_parallel_spacing(mut self, spacing: f64) -> Self {
        self.parallel_spacing = spacing;
        self
    }

    /// Vertical extent of a parallel group's bus bars.
    pub fn parallel_span(&self, branches: usize) -> f64 {
        branches.saturating_sub(1) as f64 * self.parallel_spacing
    }

    /// Horizontal scale that fits `natural` into `available`, never enlarging.
    pub fn fit_scale(natural: f64, available: f64) -> f64 {
        if natural <= 0.0 {
            return 1.0;
        }
        (available / natural).clamp(0.0, 1.0)
    }
}
