//! Diagram renderer.
//!
//! Translates a [`Layout`] into plain vector shapes (lines, rectangles,
//! circles, text) with their styling resolved. Rendering is stateless and
//! one-shot: every call recomputes the full shape list.

mod svg;

pub use svg::escape_xml_text;

use crate::circuit::{CircuitData, VoltageSource};
use crate::layout::{
    layout_with_config, Caption, CaptionKind, Layout, LayoutConfig, Point, Primitive,
    ResistorSymbol, SourceSymbol, Wire,
};

/// Stroke width of every wire and symbol outline.
pub const STROKE_WIDTH: f64 = 2.0;

/// Half-length of the plus and minus marks inside the source symbol.
const SIGN_HALF: f64 = 4.0;

/// Vertical offset of the plus and minus marks from the source centre.
const SIGN_OFFSET: f64 = 8.0;

/// Baseline of the source caption below the source centre.
const SOURCE_LABEL_OFFSET: f64 = 38.0;

/// Gap between a resistor's label baseline and the top of its body.
const LABEL_GAP: f64 = 4.0;

/// Distance of a resistor's value baseline below its body.
const VALUE_GAP: f64 = 11.0;

/// Role of a text shape; decides font and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    /// Resistor or source name
    Label,
    /// Resistance value under a resistor
    Value,
    /// Fallback list heading
    Heading,
    /// Fallback list line
    Entry,
    /// Circuit description
    Description,
}

impl TextRole {
    /// Font size in pixels.
    pub fn font_size(&self) -> f64 {
        match self {
            TextRole::Label => 10.0,
            TextRole::Value => 9.0,
            TextRole::Heading => 14.0,
            TextRole::Entry | TextRole::Description => 12.0,
        }
    }
}

impl From<CaptionKind> for TextRole {
    fn from(kind: CaptionKind) -> Self {
        match kind {
            CaptionKind::Description => TextRole::Description,
            CaptionKind::Heading => TextRole::Heading,
            CaptionKind::Entry => TextRole::Entry,
        }
    }
}

/// A drawable vector shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        from: Point,
        to: Point,
        stroke_width: f64,
    },
    Rect {
        origin: Point,
        width: f64,
        height: f64,
        stroke_width: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        stroke_width: f64,
    },
    /// Text centred horizontally on `anchor`, baseline at `anchor.y`
    Text {
        anchor: Point,
        content: String,
        role: TextRole,
    },
}

/// A complete drawing ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<Shape>,
}

impl Drawing {
    /// Text contents in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}

/// Lay out and render a circuit with the canonical parameters.
pub fn draw(circuit: &CircuitData, width: f64, height: f64) -> Drawing {
    draw_with_config(circuit, width, height, &LayoutConfig::default())
}

/// Lay out and render a circuit with custom layout parameters.
pub fn draw_with_config(
    circuit: &CircuitData,
    width: f64,
    height: f64,
    config: &LayoutConfig,
) -> Drawing {
    render(&layout_with_config(circuit, width, height, config))
}

/// Lay out and render a circuit straight to an SVG document.
pub fn render_svg(circuit: &CircuitData, width: f64, height: f64) -> String {
    draw(circuit, width, height).to_svg()
}

/// Translate layout primitives into shapes, preserving paint order.
pub fn render(layout: &Layout) -> Drawing {
    let mut shapes = Vec::with_capacity(layout.primitives.len() * 2);

    for primitive in &layout.primitives {
        match primitive {
            Primitive::Wire(wire) => shapes.push(line(wire)),
            Primitive::Resistor(symbol) => resistor_shapes(symbol, &mut shapes),
            Primitive::Source(source) => source_shapes(source, &mut shapes),
            Primitive::Caption(caption) => shapes.push(caption_shape(caption)),
        }
    }

    Drawing {
        width: layout.width,
        height: layout.height,
        shapes,
    }
}

fn line(wire: &Wire) -> Shape {
    Shape::Line {
        from: wire.from,
        to: wire.to,
        stroke_width: STROKE_WIDTH,
    }
}

fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Shape {
    line(&Wire::new(Point::new(x1, y1), Point::new(x2, y2)))
}

fn resistor_shapes(symbol: &ResistorSymbol, shapes: &mut Vec<Shape>) {
    let mid_x = symbol.origin.x + symbol.width / 2.0;

    shapes.push(Shape::Rect {
        origin: symbol.origin,
        width: symbol.width,
        height: symbol.height,
        stroke_width: STROKE_WIDTH,
    });
    shapes.push(Shape::Text {
        anchor: Point::new(mid_x, symbol.origin.y - LABEL_GAP),
        content: symbol.label.clone(),
        role: TextRole::Label,
    });
    shapes.push(Shape::Text {
        anchor: Point::new(mid_x, symbol.origin.y + symbol.height + VALUE_GAP),
        content: format!("{} Ω", symbol.value),
        role: TextRole::Value,
    });
}

fn source_shapes(source: &SourceSymbol, shapes: &mut Vec<Shape>) {
    let Point { x, y } = source.center;
    let r = source.radius;

    shapes.push(Shape::Circle {
        center: source.center,
        radius: r,
        stroke_width: STROKE_WIDTH,
    });

    // Plus above the centre, minus below
    shapes.push(segment(x, y - SIGN_OFFSET - SIGN_HALF, x, y - SIGN_OFFSET + SIGN_HALF));
    shapes.push(segment(x - SIGN_HALF, y - SIGN_OFFSET, x + SIGN_HALF, y - SIGN_OFFSET));
    shapes.push(segment(x - SIGN_HALF, y + SIGN_OFFSET, x + SIGN_HALF, y + SIGN_OFFSET));

    shapes.push(Shape::Text {
        anchor: Point::new(x, y + SOURCE_LABEL_OFFSET),
        content: VoltageSource::new(source.voltage).label(),
        role: TextRole::Label,
    });

    shapes.push(segment(x, y - r, x, y - source.terminal_reach));
    shapes.push(segment(x, y + r, x, y + source.terminal_reach));
}

fn caption_shape(caption: &Caption) -> Shape {
    Shape::Text {
        anchor: caption.anchor,
        content: caption.text.clone(),
        role: caption.kind.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{CircuitType, Element, Resistor};

    fn series() -> CircuitData {
        CircuitData::new(
            CircuitType::Series,
            12.0,
            vec![Resistor::new("r1", 30.0, "R₁"), Resistor::new("r2", 60.0, "R₂")],
        )
        .with_layout(vec![Element::resistor("r1"), Element::resistor("r2")])
    }

    fn count(drawing: &Drawing, pred: impl Fn(&Shape) -> bool) -> usize {
        drawing.shapes.iter().filter(|s| pred(*s)).count()
    }

    #[test]
    fn test_series_shapes() {
        let drawing = draw(&series(), 500.0, 250.0);

        assert_eq!(count(&drawing, |s| matches!(s, Shape::Rect { .. })), 2);
        assert_eq!(count(&drawing, |s| matches!(s, Shape::Circle { .. })), 1);
        // Source lead, 4 resistor leads, 4 closing wires, 5 source strokes
        assert_eq!(count(&drawing, |s| matches!(s, Shape::Line { .. })), 14);

        let texts: Vec<&str> = drawing.texts().collect();
        assert_eq!(texts, vec!["U = 12 V", "R₁", "30 Ω", "R₂", "60 Ω"]);
    }

    #[test]
    fn test_resistor_label_positions() {
        let drawing = draw(&series(), 500.0, 250.0);
        let label = drawing
            .shapes
            .iter()
            .find(|s| matches!(s, Shape::Text { content, .. } if content == "R₁"))
            .unwrap();
        match label {
            Shape::Text { anchor, role, .. } => {
                assert_eq!(*anchor, Point::new(110.0, 82.0));
                assert_eq!(*role, TextRole::Label);
            }
            _ => unreachable!(),
        }

        let value = drawing
            .shapes
            .iter()
            .find(|s| matches!(s, Shape::Text { content, .. } if content == "30 Ω"))
            .unwrap();
        assert!(matches!(value, Shape::Text { anchor, .. } if *anchor == Point::new(110.0, 115.0)));
    }

    #[test]
    fn test_source_terminals() {
        let drawing = draw(&series(), 500.0, 250.0);
        assert!(drawing.shapes.contains(&segment(40.0, 107.0, 40.0, 95.0)));
        assert!(drawing.shapes.contains(&segment(40.0, 143.0, 40.0, 155.0)));
    }

    #[test]
    fn test_fallback_renders_text_only() {
        let circuit = CircuitData::new(
            CircuitType::Series,
            12.0,
            vec![Resistor::new("r1", 100.0, "R₁")],
        );
        let drawing = draw(&circuit, 500.0, 250.0);

        assert_eq!(count(&drawing, |s| matches!(s, Shape::Rect { .. })), 0);
        let texts: Vec<&str> = drawing.texts().collect();
        assert!(texts.contains(&"R₁ = 100 Ω"));
        assert!(texts.contains(&"Circuit"));
    }

    #[test]
    fn test_text_stays_on_canvas() {
        let circuit = CircuitData::new(
            CircuitType::Mixed,
            12.0,
            (1..=3)
                .map(|i| Resistor::new(format!("r{}", i), 10.0 * i as f64, format!("R{}", i)))
                .collect(),
        )
        .with_layout(vec![Element::resistor("r1"), Element::parallel(["r2", "r3"])])
        .with_description("R1 + (R2 || R3)");

        let drawing = draw(&circuit, 500.0, 250.0);
        for shape in &drawing.shapes {
            if let Shape::Text { anchor, .. } = shape {
                assert!(anchor.x >= 0.0 && anchor.x <= 500.0);
                assert!(anchor.y >= 0.0 && anchor.y <= 250.0);
            }
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let layout = crate::layout::layout_circuit(&series(), 420.0, 300.0);
        assert_eq!(render(&layout), render(&layout));
        assert_eq!(render_svg(&series(), 420.0, 300.0), render_svg(&series(), 420.0, 300.0));
    }
}
