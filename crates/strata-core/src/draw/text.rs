//! Text rendering definitions for diagram labels.
//!
//! This module provides types for configuring text appearance and rendering
//! single-line text elements. Multi-line component labels are rendered as one
//! [`Text`] per line by the caller, each anchored at its own baseline.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable text element combining content with a [`TextDefinition`]
//!
//! # Quick Start
//!
//! ```
//! # use strata_core::draw::{FontWeight, TextAnchor, TextDefinition, Text, Drawable};
//! let mut style = TextDefinition::new();
//! style.set_font_size(18);
//! style.set_font_weight(FontWeight::Bold);
//! style.set_anchor(TextAnchor::Start);
//!
//! let text = Text::new(&style, "Data Layer");
//! assert!(text.size().width() > 0);
//! ```

use svg::node::element as svg_element;
use unicode_width::UnicodeWidthStr;

use crate::{
    apply_data,
    color::Color,
    draw::{DataAttributes, Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Horizontal alignment of text relative to its anchor point.
///
/// Maps to the SVG `text-anchor` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the anchor (SVG default)
    #[default]
    Start,
    /// Text is centered on the anchor
    Middle,
}

impl TextAnchor {
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// Font weight. Maps to the SVG `font-weight` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Defines the visual style for text elements in diagrams.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `14` |
/// | Font weight | [`FontWeight::Normal`] |
/// | Text color | `None` (SVG default, typically black) |
/// | Anchor | [`TextAnchor::Start`] |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    font_weight: FontWeight,
    color: Option<Color>,
    anchor: TextAnchor,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family, e.g. `"'Microsoft YaHei', Arial, sans-serif"`.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    pub fn set_font_weight(&mut self, weight: FontWeight) {
        self.font_weight = weight;
    }

    /// Sets the text color. `None` leaves the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 14,
            font_weight: FontWeight::Normal,
            color: None,
            anchor: TextAnchor::Start,
        }
    }
}

/// A renderable single-line text element.
///
/// # Examples
///
/// ```
/// # use strata_core::draw::{TextDefinition, Text};
/// let style = TextDefinition::new();
/// let text = Text::new(&style, "Component");
/// assert_eq!(text.content(), "Component");
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
    data: DataAttributes,
}

impl<'a> Text<'a> {
    /// Creates a new text element with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
            data: DataAttributes::default(),
        }
    }

    /// Attaches `data-*` markers (builder style).
    pub fn with_data(mut self, data: DataAttributes) -> Self {
        self.data = data;
        self
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Estimates the rendered size without font metrics.
    ///
    /// Each terminal column counts as half an em, so wide (CJK) characters
    /// take a full em. Height is one line of the font size.
    fn estimate_size(&self) -> Size {
        let font_size = u32::from(self.definition.font_size());
        let columns = u32::try_from(self.content.width()).unwrap_or(u32::MAX);
        Size::new(columns.saturating_mul(font_size) / 2, font_size)
    }
}

impl Drawable for Text<'_> {
    /// `position` is the anchor point on the text baseline.
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let definition = self.definition;

        let mut text = svg_element::Text::new(self.content)
            .set("x", position.x())
            .set("y", position.y())
            .set("font-family", definition.font_family())
            .set("font-size", u32::from(definition.font_size()));

        if definition.anchor != TextAnchor::Start {
            text = text.set("text-anchor", definition.anchor.to_svg_value());
        }

        if definition.font_weight != FontWeight::Normal {
            text = text.set("font-weight", definition.font_weight.to_svg_value());
        }

        if let Some(color) = definition.color {
            text = text
                .set("fill", &color)
                .set("fill-opacity", color.alpha());
        }

        let text = apply_data!(text, &self.data);

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(text));
        output
    }

    fn size(&self) -> Size {
        self.estimate_size()
    }
}
