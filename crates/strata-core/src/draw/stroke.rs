//! Stroke definitions for outlined shapes.
//!
//! Bands and cells are outlined with solid strokes of a fixed color and
//! width. [`StrokeDefinition`] carries those two properties and the
//! [`apply_stroke!`](crate::apply_stroke!) macro applies them to any SVG
//! element.
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#ffffff"`, `1` |
//! | `width` | `stroke-width` | `2` |

use crate::color::Color;

/// A solid stroke: color plus width in pixels.
///
/// # Examples
///
/// ```
/// use strata_core::{color::Color, draw::StrokeDefinition};
///
/// let stroke = StrokeDefinition::solid(Color::new("white").unwrap(), 1.0);
/// assert_eq!(stroke.width(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

/// Applies stroke color, opacity and width to an SVG element.
///
/// ```
/// use strata_core::{color::Color, draw::StrokeDefinition};
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::new("white").unwrap(), 2.0);
/// let rect = strata_core::apply_stroke!(svg_element::Rectangle::new(), &stroke);
/// assert!(rect.to_string().contains("stroke-width=\"2\""));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", &$stroke.color())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_solid() {
        let color = Color::new("white").unwrap();
        let stroke = StrokeDefinition::solid(color, 2.0);
        assert_eq!(stroke.width(), 2.0);
        assert_eq!(stroke.color(), color);
    }

    #[test]
    fn test_apply_stroke_attributes() {
        let stroke = StrokeDefinition::solid(Color::new("navy").unwrap(), 0.5);
        let rect = crate::apply_stroke!(svg::node::element::Rectangle::new(), &stroke);
        let svg = rect.to_string();

        assert!(svg.contains("stroke=\"#000080\""));
        assert!(svg.contains("stroke-opacity=\"1\""));
        assert!(svg.contains("stroke-width=\"0.5\""));
    }
}
