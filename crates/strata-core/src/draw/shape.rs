//! Rectangle definitions and rendering.
//!
//! Layer bands and component cells are both rounded rectangles. A
//! [`RectangleDefinition`] holds the shared style (fill, stroke, corner radius,
//! optional filter); a [`Rectangle`] pairs a definition with a size, a target
//! [`RenderLayer`] and its `data-*` markers.

use svg::node::element as svg_element;

use crate::{
    apply_data, apply_stroke,
    color::Color,
    draw::{DataAttributes, Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// Visual style of a rounded rectangle.
///
/// # Examples
///
/// ```
/// use strata_core::{color::Color, draw::{RectangleDefinition, StrokeDefinition}};
///
/// let white = Color::new("white").unwrap();
/// let mut band = RectangleDefinition::new(Color::new("#4A90E2").unwrap());
/// band.set_stroke(Some(StrokeDefinition::solid(white, 2.0)));
/// band.set_corner_radius(8);
/// band.set_filter(Some("shadow".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct RectangleDefinition {
    fill_color: Color,
    fill_opacity: Option<f32>,
    stroke: Option<StrokeDefinition>,
    corner_radius: u32,
    filter: Option<String>,
}

impl RectangleDefinition {
    /// Creates an opaque, unstroked, square-cornered rectangle style.
    pub fn new(fill_color: Color) -> Self {
        Self {
            fill_color,
            fill_opacity: None,
            stroke: None,
            corner_radius: 0,
            filter: None,
        }
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Sets an explicit `fill-opacity`. `None` falls back to the fill color's alpha.
    pub fn set_fill_opacity(&mut self, opacity: Option<f32>) {
        self.fill_opacity = opacity;
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    /// Sets the outline. `None` renders the rectangle without a stroke.
    pub fn set_stroke(&mut self, stroke: Option<StrokeDefinition>) {
        self.stroke = stroke;
    }

    /// Sets the corner radius applied to both `rx` and `ry`.
    pub fn set_corner_radius(&mut self, radius: u32) {
        self.corner_radius = radius;
    }

    pub fn corner_radius(&self) -> u32 {
        self.corner_radius
    }

    /// Sets the id of a filter defined in the document `<defs>`, e.g. a drop shadow.
    pub fn set_filter(&mut self, filter_id: Option<String>) {
        self.filter = filter_id;
    }

    fn fill_opacity(&self) -> f32 {
        self.fill_opacity.unwrap_or_else(|| self.fill_color.alpha())
    }
}

/// A sized rectangle ready to be rendered.
#[derive(Debug, Clone)]
pub struct Rectangle<'a> {
    definition: &'a RectangleDefinition,
    size: Size,
    layer: RenderLayer,
    data: DataAttributes,
}

impl<'a> Rectangle<'a> {
    /// Creates a rectangle of `size` rendered on `layer`.
    pub fn new(definition: &'a RectangleDefinition, size: Size, layer: RenderLayer) -> Self {
        Self {
            definition,
            size,
            layer,
            data: DataAttributes::default(),
        }
    }

    /// Attaches `data-*` markers (builder style).
    pub fn with_data(mut self, data: DataAttributes) -> Self {
        self.data = data;
        self
    }
}

impl Drawable for Rectangle<'_> {
    /// `position` is the top-left corner.
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let definition = self.definition;
        let radius = definition.corner_radius();

        let mut rect = svg_element::Rectangle::new()
            .set("x", position.x())
            .set("y", position.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("fill", &definition.fill_color())
            .set("fill-opacity", definition.fill_opacity());
        if let Some(stroke) = definition.stroke() {
            rect = apply_stroke!(rect, stroke);
        }

        if radius > 0 {
            rect = rect.set("rx", radius).set("ry", radius);
        }

        if let Some(filter) = &definition.filter {
            rect = rect.set("filter", format!("url(#{filter})"));
        }

        let rect = apply_data!(rect, &self.data);

        let mut output = LayeredOutput::new();
        output.add_to_layer(self.layer, Box::new(rect));
        output
    }

    fn size(&self) -> Size {
        self.size
    }
}
