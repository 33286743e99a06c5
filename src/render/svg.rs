//! SVG serialization of a [`Drawing`].

use super::{Drawing, Shape, TextRole};

/// Colour of wires, outlines and labels.
const INK: &str = "#333";

fn text_fill(role: TextRole) -> &'static str {
    match role {
        TextRole::Label | TextRole::Heading => "#374151",
        TextRole::Entry => "#4b5563",
        TextRole::Value | TextRole::Description => "#6b7280",
    }
}

fn font_weight(role: TextRole) -> Option<&'static str> {
    match role {
        TextRole::Label => Some("600"),
        TextRole::Heading => Some("500"),
        _ => None,
    }
}

/// Escape text content for XML
pub fn escape_xml_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

impl Drawing {
    /// Serialize to a standalone SVG document.
    ///
    /// Coordinates print in shortest round-trip form, so equal drawings
    /// always produce byte-identical output.
    pub fn to_svg(&self) -> String {
        let mut svg = String::with_capacity(256 + self.shapes.len() * 96);

        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = self.width,
            h = self.height
        ));
        svg.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"white\"/>",
            self.width, self.height
        ));

        for shape in &self.shapes {
            match shape {
                Shape::Line {
                    from,
                    to,
                    stroke_width,
                } => svg.push_str(&format!(
                    "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                    from.x, from.y, to.x, to.y, INK, stroke_width
                )),
                Shape::Rect {
                    origin,
                    width,
                    height,
                    stroke_width,
                } => svg.push_str(&format!(
                    "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"white\" stroke=\"{}\" stroke-width=\"{}\"/>",
                    origin.x, origin.y, width, height, INK, stroke_width
                )),
                Shape::Circle {
                    center,
                    radius,
                    stroke_width,
                } => svg.push_str(&format!(
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"white\" stroke=\"{}\" stroke-width=\"{}\"/>",
                    center.x, center.y, radius, INK, stroke_width
                )),
                Shape::Text {
                    anchor,
                    content,
                    role,
                } => {
                    svg.push_str(&format!(
                        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"{}\" fill=\"{}\"",
                        anchor.x,
                        anchor.y,
                        role.font_size(),
                        text_fill(*role)
                    ));
                    if let Some(weight) = font_weight(*role) {
                        svg.push_str(&format!(" font-weight=\"{}\"", weight));
                    }
                    svg.push('>');
                    svg.push_str(&escape_xml_text(content));
                    svg.push_str("</text>");
                }
            }
        }

        svg.push_str("</svg>");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;

    fn drawing(shapes: Vec<Shape>) -> Drawing {
        Drawing {
            width: 500.0,
            height: 250.0,
            shapes,
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml_text("R1 < R2 & R3"), "R1 &lt; R2 &amp; R3");
    }

    #[test]
    fn test_empty_document() {
        let svg = drawing(vec![]).to_svg();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"500\" height=\"250\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_line_and_rect() {
        let svg = drawing(vec![
            Shape::Line {
                from: Point::new(40.0, 95.0),
                to: Point::new(75.0, 95.0),
                stroke_width: 2.0,
            },
            Shape::Rect {
                origin: Point::new(85.0, 86.0),
                width: 12.5,
                height: 18.0,
                stroke_width: 2.0,
            },
        ])
        .to_svg();

        assert!(svg.contains(
            "<line x1=\"40\" y1=\"95\" x2=\"75\" y2=\"95\" stroke=\"#333\" stroke-width=\"2\"/>"
        ));
        assert!(svg.contains("<rect x=\"85\" y=\"86\" width=\"12.5\" height=\"18\" fill=\"white\""));
    }

    #[test]
    fn test_text_is_escaped_and_styled() {
        let svg = drawing(vec![Shape::Text {
            anchor: Point::new(250.0, 242.0),
            content: "R₁ <in> R₂".to_string(),
            role: TextRole::Description,
        }])
        .to_svg();

        assert!(svg.contains("font-size=\"12\""));
        assert!(svg.contains(">R₁ &lt;in&gt; R₂</text>"));
        assert!(!svg.contains("font-weight"));
    }
}
