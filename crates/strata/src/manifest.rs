//! Diagram manifests.
//!
//! A manifest lists the diagrams to render as `[[diagram]]` tables, each
//! with nested `[[diagram.layer]]` tables:
//!
//! ```
//! # use strata::manifest::Manifest;
//! let manifest = Manifest::from_toml(r#"
//!     [[diagram]]
//!     title = "Platform"
//!
//!     [[diagram.layer]]
//!     name = "Services"
//!     components = ["Auth", ["Billing", "Invoices"]]
//!
//!     [[diagram.layer]]
//!     name = "Storage"
//! "#).unwrap();
//!
//! assert_eq!(manifest.entries().len(), 1);
//! assert_eq!(manifest.entries()[0].file_name(), "Platform.svg");
//! ```

use std::{
    collections::HashMap,
    ops::Range,
    path::{Component as PathComponent, Path},
};

use log::debug;
use serde::Deserialize;
use toml::Spanned;

use crate::{
    StrataError,
    semantic::{Canvas, Diagram, Layer},
};

/// A parsed manifest: the ordered list of diagrams to render.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(rename = "diagram", default)]
    diagrams: Vec<ManifestEntry>,
}

impl Manifest {
    /// Parses a manifest from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`StrataError::Manifest`] carrying the source and the byte span
    /// of the offending TOML if the text is not a valid manifest, if an
    /// explicit `file` is not a plain file name, or if two entries would be
    /// written to the same file.
    pub fn from_toml(source: &str) -> Result<Self, StrataError> {
        let manifest: Self =
            toml::from_str(source).map_err(|err| StrataError::new_manifest_error(err, source))?;
        manifest.validate_output_files(source)?;
        debug!(diagrams = manifest.diagrams.len(); "Manifest parsed");
        Ok(manifest)
    }

    /// Every entry must write a distinct file directly inside the output
    /// directory.
    fn validate_output_files(&self, source: &str) -> Result<(), StrataError> {
        let invalid = |message: String, span: Range<usize>| StrataError::Manifest {
            message,
            span: Some(span),
            src: source.to_string(),
        };

        let mut seen: HashMap<String, &str> = HashMap::new();
        for entry in &self.diagrams {
            let escaping = entry
                .file
                .as_ref()
                .filter(|file| !is_plain_file_name(file.get_ref()));
            if let Some(file) = escaping {
                return Err(invalid(
                    format!(
                        "output file `{}` must be a plain file name inside the output directory",
                        file.get_ref()
                    ),
                    file.span(),
                ));
            }

            let file_name = entry.file_name();
            if let Some(previous) = seen.insert(file_name.clone(), entry.title()) {
                return Err(invalid(
                    format!("diagram `{previous}` is already written to `{file_name}`"),
                    entry.output_span(),
                ));
            }
        }

        Ok(())
    }

    /// Returns the entries in manifest order.
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.diagrams
    }

    pub fn is_empty(&self) -> bool {
        self.diagrams.is_empty()
    }
}

/// One `[[diagram]]` table of a manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    title: Spanned<String>,
    file: Option<Spanned<String>>,
    width: Option<u32>,
    height: Option<u32>,
    #[serde(rename = "layer", default)]
    layers: Vec<Layer>,
}

impl ManifestEntry {
    pub fn title(&self) -> &str {
        self.title.get_ref()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Output file name for this entry.
    ///
    /// Uses `file` when set, otherwise `<title>.svg` with path separators in
    /// the title replaced by `_`.
    pub fn file_name(&self) -> String {
        match &self.file {
            Some(file) => file.get_ref().clone(),
            None => format!("{}.svg", self.title().replace(['/', '\\'], "_")),
        }
    }

    /// Span of the key that decides the output file name.
    fn output_span(&self) -> Range<usize> {
        self.file.as_ref().unwrap_or(&self.title).span()
    }

    /// Canvas of this entry, falling back to `default_canvas` per dimension.
    pub fn canvas(&self, default_canvas: Canvas) -> Canvas {
        Canvas::new(
            self.width.unwrap_or(default_canvas.width()),
            self.height.unwrap_or(default_canvas.height()),
        )
    }

    /// Builds the [`Diagram`] described by this entry.
    pub fn to_diagram(&self, default_canvas: Canvas) -> Diagram {
        Diagram::new(self.title(), self.layers.clone())
            .with_canvas(self.canvas(default_canvas))
    }
}

/// Returns `true` if `name` is a single normal path component, i.e. it
/// stays inside whatever directory it is joined to.
fn is_plain_file_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }

    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(PathComponent::Normal(_)), None)
    )
}
