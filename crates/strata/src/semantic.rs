//! Semantic model of a layered diagram.
//!
//! A [`Diagram`] is a title, an ordered list of [`Layer`]s and a [`Canvas`].
//! Layers render top-to-bottom in list order; the [`Component`]s of a layer
//! render left-to-right in list order.
//!
//! All types deserialize with [`serde`], so diagrams can be loaded from
//! manifests. A component is written either as a string or as an array of
//! strings:
//!
//! ```
//! # use strata::semantic::{Component, Layer};
//! let layer: Layer = toml::from_str(r#"
//!     name = "Data Layer"
//!     components = ["Storage", ["Config", "Backup"]]
//! "#).unwrap();
//!
//! assert_eq!(layer.components()[0], Component::label("Storage"));
//! assert_eq!(layer.components()[1], Component::multi_line(["Config", "Backup"]));
//! ```

use serde::Deserialize;

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 1200;

/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 800;

/// One functional unit inside a layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Component {
    /// A single centered label.
    Label(String),
    /// Several lines of text stacked inside the same cell.
    MultiLine(Vec<String>),
}

impl Component {
    pub fn label(text: impl Into<String>) -> Self {
        Self::Label(text.into())
    }

    pub fn multi_line<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MultiLine(lines.into_iter().map(Into::into).collect())
    }

    /// Returns the text lines of this component in display order.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::Label(text) => vec![text.as_str()],
            Self::MultiLine(lines) => lines.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for Component {
    fn from(text: &str) -> Self {
        Self::label(text)
    }
}

impl From<String> for Component {
    fn from(text: String) -> Self {
        Self::Label(text)
    }
}

/// One horizontal band of the diagram.
///
/// A layer without components, or with an empty component list, renders as
/// a label-only band.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layer {
    name: String,
    #[serde(default)]
    components: Option<Vec<Component>>,
}

impl Layer {
    /// Creates a label-only layer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: None,
        }
    }

    /// Sets the components of this layer (builder style).
    pub fn with_components<I, C>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Component>,
    {
        self.components = Some(components.into_iter().map(Into::into).collect());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the components, or an empty slice for a label-only layer.
    pub fn components(&self) -> &[Component] {
        self.components.as_deref().unwrap_or_default()
    }
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// A complete diagram: title, layers and canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    title: String,
    layers: Vec<Layer>,
    canvas: Canvas,
}

impl Diagram {
    /// Creates a diagram on the default 1200 x 800 canvas.
    pub fn new(title: impl Into<String>, layers: Vec<Layer>) -> Self {
        Self {
            title: title.into(),
            layers,
            canvas: Canvas::default(),
        }
    }

    /// Sets the canvas (builder style).
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }
}
