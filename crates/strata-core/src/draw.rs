//! Drawable Components for Diagram Rendering
//!
//! This module provides drawable abstractions for the elements of a layered
//! diagram: band and cell rectangles, text labels and the connectors between
//! bands. All drawable components implement the [`Drawable`] trait, which
//! provides a consistent interface for rendering to layered SVG output and
//! calculating size.
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are automatically ordered
//! during final SVG generation.

mod connector;
mod data;
mod layer;
mod positioned;
mod shape;
mod stroke;
mod text;

pub use connector::{Connector, ConnectorDefinition};
pub use data::DataAttributes;
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use positioned::PositionedDrawable;
pub use shape::{Rectangle, RectangleDefinition};
pub use stroke::StrokeDefinition;
pub use text::{FontWeight, Text, TextAnchor, TextDefinition};

use crate::geometry::{Point, Size};

/// Trait for drawable diagram elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// Implementations create SVG nodes and add them to the appropriate layers
    /// in the returned [`LayeredOutput`].
    ///
    /// # Arguments
    ///
    /// * `position` - The anchor position of this drawable. What the anchor
    ///   means (top-left corner, text anchor, apex base) is documented on each
    ///   implementation.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size of this drawable.
    fn size(&self) -> Size;
}
