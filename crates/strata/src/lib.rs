//! Strata - layered architecture diagrams rendered to SVG.
//!
//! A [`Diagram`](semantic::Diagram) is a title and an ordered list of layers,
//! each holding labeled components. Strata lays the layers out as stacked
//! horizontal bands joined by downward connectors and renders the result as
//! a self-contained SVG document.
//!
//! Diagrams are built in code or loaded from a TOML
//! [`Manifest`](manifest::Manifest).

pub mod config;
pub mod layout;
pub mod manifest;
pub mod semantic;
pub mod theme;

mod error;
mod export;

pub use strata_core::{color, draw, geometry};

pub use error::StrataError;
pub use export::write_svg;

use std::path::Path;

use log::{debug, info, trace};

use config::AppConfig;
use export::svg::SvgExporter;
use layout::DiagramLayout;
use manifest::{Manifest, ManifestEntry};
use semantic::Diagram;
use theme::Theme;

/// Builder for loading and rendering Strata diagrams.
///
/// # Examples
///
/// ```rust
/// use strata::{
///     DiagramBuilder,
///     config::AppConfig,
///     semantic::{Diagram, Layer},
/// };
///
/// let diagram = Diagram::new(
///     "Platform",
///     vec![
///         Layer::new("Services").with_components(["Auth", "Billing"]),
///         Layer::new("Storage"),
///     ],
/// );
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let svg = builder.render_svg(&diagram).expect("Failed to render");
/// assert!(svg.contains("Platform"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a TOML manifest.
    ///
    /// # Errors
    ///
    /// Returns [`StrataError::Manifest`] with the offending span if the
    /// source is not a valid manifest.
    pub fn parse_manifest(&self, source: &str) -> Result<Manifest, StrataError> {
        info!("Parsing manifest");
        let manifest = Manifest::from_toml(source)?;
        trace!(manifest:?; "Parsed manifest");
        Ok(manifest)
    }

    /// Build the diagram of a manifest entry, using the configured canvas for
    /// any dimension the entry leaves unset.
    pub fn diagram(&self, entry: &ManifestEntry) -> Diagram {
        entry.to_diagram(self.config.canvas())
    }

    /// Render a diagram to SVG text.
    ///
    /// Rendering is pure: nothing is written to disk.
    ///
    /// # Errors
    ///
    /// Returns [`StrataError::EmptyLayers`] if the diagram has no layers,
    /// [`StrataError::InvalidCanvas`] if a canvas dimension is zero, or
    /// [`StrataError::Render`] if the theme cannot be built.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, StrataError> {
        info!(title = diagram.title(); "Rendering diagram");

        let layout = DiagramLayout::compute(diagram)?;
        debug!(
            bands = layout.bands().len(),
            layer_height = layout.layer_height();
            "Layout calculated"
        );

        let theme = Theme::standard()?;
        let svg = SvgExporter::new(&theme).render(&layout);

        info!(title = diagram.title(), bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Render a diagram and write it to `path`.
    ///
    /// The document is rendered completely before the file is touched.
    ///
    /// # Errors
    ///
    /// Any error of [`render_svg`](Self::render_svg) or [`write_svg`].
    pub fn render_to_file(
        &self,
        diagram: &Diagram,
        path: impl AsRef<Path>,
    ) -> Result<(), StrataError> {
        let svg = self.render_svg(diagram)?;
        write_svg(path, &svg)
    }
}

/// Render a diagram to SVG text with the default configuration.
///
/// # Examples
///
/// ```rust
/// use strata::semantic::{Diagram, Layer};
///
/// let diagram = Diagram::new("", vec![Layer::new("Only")]);
/// let svg = strata::render(&diagram).unwrap();
/// assert!(svg.contains("Only"));
/// ```
///
/// # Errors
///
/// See [`DiagramBuilder::render_svg`].
pub fn render(diagram: &Diagram) -> Result<String, StrataError> {
    DiagramBuilder::default().render_svg(diagram)
}
