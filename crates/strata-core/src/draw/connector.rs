//! Downward connectors between consecutive layer bands.

use svg::node::element as svg_element;

use crate::{
    apply_data,
    color::Color,
    draw::{DataAttributes, Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Shape and fill of a connector triangle.
///
/// The triangle's flat edge is `2 * half_width` wide and its apex points
/// `depth` pixels downward.
#[derive(Debug, Clone)]
pub struct ConnectorDefinition {
    fill_color: Color,
    half_width: u32,
    depth: u32,
}

impl ConnectorDefinition {
    pub fn new(fill_color: Color, half_width: u32, depth: u32) -> Self {
        Self {
            fill_color,
            half_width,
            depth,
        }
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn half_width(&self) -> u32 {
        self.half_width
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

/// A downward-pointing triangle signaling flow from one band to the next.
#[derive(Debug, Clone)]
pub struct Connector<'a> {
    definition: &'a ConnectorDefinition,
    data: DataAttributes,
}

impl<'a> Connector<'a> {
    pub fn new(definition: &'a ConnectorDefinition) -> Self {
        Self {
            definition,
            data: DataAttributes::default(),
        }
    }

    /// Attaches `data-*` markers (builder style).
    pub fn with_data(mut self, data: DataAttributes) -> Self {
        self.data = data;
        self
    }

    /// Returns the three corners: left base, right base, apex.
    ///
    /// `position` is the midpoint of the flat top edge.
    pub fn points(&self, position: Point) -> [Point; 3] {
        let half_width = self.definition.half_width();
        let left = position.with_x(position.x().saturating_sub(half_width));
        let right = position.offset(half_width, 0);
        let apex = position.offset(0, self.definition.depth());
        [left, right, apex]
    }
}

impl Drawable for Connector<'_> {
    /// `position` is the midpoint of the flat top edge.
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let points = self
            .points(position)
            .iter()
            .map(|point| format!("{},{}", point.x(), point.y()))
            .collect::<Vec<_>>()
            .join(" ");

        let fill = self.definition.fill_color();
        let polygon = svg_element::Polygon::new()
            .set("points", points)
            .set("fill", &fill)
            .set("fill-opacity", fill.alpha());
        let polygon = apply_data!(polygon, &self.data);

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Connector, Box::new(polygon));
        output
    }

    fn size(&self) -> Size {
        Size::new(
            self.definition.half_width().saturating_mul(2),
            self.definition.depth(),
        )
    }
}
