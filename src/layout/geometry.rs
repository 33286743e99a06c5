//! Geometry produced by the layout engine.

use std::fmt;

/// A point in canvas coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A straight wire between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wire {
    pub from: Point,
    pub to: Point,
}

impl Wire {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Horizontal wire at height `y`.
    pub const fn horizontal(x1: f64, x2: f64, y: f64) -> Self {
        Self::new(Point::new(x1, y), Point::new(x2, y))
    }

    /// Vertical wire at `x`.
    pub const fn vertical(x: f64, y1: f64, y2: f64) -> Self {
        Self::new(Point::new(x, y1), Point::new(x, y2))
    }

    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x && self.from.y != self.to.y
    }
}

/// A placed resistor body.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistorSymbol {
    /// Id of the resistor this symbol shows
    pub resistor_id: String,
    /// Display label
    pub label: String,
    /// Resistance in ohms
    pub value: f64,
    /// Top-left corner of the body
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl ResistorSymbol {
    /// Centre of the body.
    pub fn center(&self) -> Point {
        Point::new(self.origin.x + self.width / 2.0, self.origin.y + self.height / 2.0)
    }
}

/// The placed voltage source, including its two terminal leads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceSymbol {
    pub center: Point,
    pub radius: f64,
    /// Terminals run from the circle to `center.y ∓ terminal_reach`
    pub terminal_reach: f64,
    /// Source voltage in volts
    pub voltage: f64,
}

/// What a free-standing text line is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptionKind {
    /// Circuit description beneath the diagram
    Description,
    /// Heading of the fallback resistor list
    Heading,
    /// One line of the fallback resistor list
    Entry,
}

/// Centred text at a fixed baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub kind: CaptionKind,
    /// Horizontal centre and baseline
    pub anchor: Point,
    pub text: String,
}

/// One drawable item of a layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Wire(Wire),
    Resistor(ResistorSymbol),
    Source(SourceSymbol),
    Caption(Caption),
}

/// Which pass produced a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Full schematic from the series topology
    Schematic,
    /// Source symbol plus a text list; no topology was supplied
    Fallback,
}

/// Axis-aligned bounds of a set of primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    fn point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    fn include(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Whether the bounds lie within `[0, width] × [0, height]`.
    pub fn within(&self, width: f64, height: f64) -> bool {
        self.min.x >= 0.0 && self.min.y >= 0.0 && self.max.x <= width && self.max.y <= height
    }
}

/// Complete engine output for one canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub mode: LayoutMode,
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
    /// Horizontal compression applied to all elements (1.0 in fallback mode)
    pub scale: f64,
    /// Sum of unscaled element widths
    pub natural_width: f64,
    /// Horizontal space actually taken by the elements after scaling
    pub consumed_width: f64,
    /// Drawables in paint order
    pub primitives: Vec<Primitive>,
}

impl Layout {
    pub fn wires(&self) -> impl Iterator<Item = &Wire> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Wire(w) => Some(w),
            _ => None,
        })
    }

    pub fn resistors(&self) -> impl Iterator<Item = &ResistorSymbol> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Resistor(r) => Some(r),
            _ => None,
        })
    }

    pub fn captions(&self) -> impl Iterator<Item = &Caption> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Caption(c) => Some(c),
            _ => None,
        })
    }

    pub fn source(&self) -> Option<&SourceSymbol> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Source(s) => Some(s),
            _ => None,
        })
    }

    /// Bounds of every emitted coordinate. Captions count by their anchor.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.primitives.iter().flat_map(|p| -> Vec<Point> {
            match p {
                Primitive::Wire(w) => vec![w.from, w.to],
                Primitive::Resistor(r) => vec![
                    r.origin,
                    Point::new(r.origin.x + r.width, r.origin.y + r.height),
                ],
                Primitive::Source(s) => {
                    let reach = s.radius.max(s.terminal_reach);
                    vec![
                        Point::new(s.center.x - s.radius, s.center.y - reach),
                        Point::new(s.center.x + s.radius, s.center.y + reach),
                    ]
                }
                Primitive::Caption(c) => vec![c.anchor],
            }
        });

        let mut bounds = Bounds::point(points.next()?);
        for p in points {
            bounds.include(p);
        }
        Some(bounds)
    }
}
