//! SVG rendering of laid-out diagrams.
//!
//! [`SvgExporter`] converts a [`DiagramLayout`] into drawables from
//! [`strata_core::draw`], collects them in a [`LayeredOutput`] so that
//! backgrounds, bands, cells, connectors and text stack in that order, and
//! wraps the result in a document with the shared `<defs>`.

use log::{debug, warn};
use svg::{
    Document, Node,
    node::element::{self as svg_element, Element},
};

use strata_core::{
    draw::{
        Connector, DataAttributes, Drawable, LayeredOutput, PositionedDrawable, Rectangle,
        RenderLayer, Text,
    },
    geometry::Point,
};

use crate::{
    layout::{BandLayout, CellLayout, DiagramLayout},
    theme::{SHADOW_FILTER_ID, Theme},
};

const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Renders [`DiagramLayout`]s with a [`Theme`].
#[derive(Debug)]
pub struct SvgExporter<'t> {
    theme: &'t Theme,
}

impl<'t> SvgExporter<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self { theme }
    }

    /// Renders the layout to a complete SVG text, including the XML prolog.
    pub fn render(&self, layout: &DiagramLayout) -> String {
        let document = self.render_document(layout);
        debug!("SVG document rendered");
        format!("{XML_PROLOG}\n{document}\n")
    }

    fn render_document(&self, layout: &DiagramLayout) -> Document {
        let canvas = layout.canvas();

        let mut output = LayeredOutput::new();
        output.merge(self.render_background(layout));
        output.merge(self.render_title(layout));
        for band in layout.bands() {
            output.merge(self.render_band(band));
        }

        output.render().into_iter().fold(
            Document::new()
                .set("width", canvas.width())
                .set("height", canvas.height())
                .set("viewBox", (0, 0, canvas.width(), canvas.height()))
                .add(self.render_definitions()),
            |document, group| document.add(group),
        )
    }

    fn render_definitions(&self) -> svg_element::Definitions {
        let shadow = self.theme.shadow();

        let mut drop_shadow = Element::new("feDropShadow");
        drop_shadow.assign("dx", shadow.dx);
        drop_shadow.assign("dy", shadow.dy);
        drop_shadow.assign("stdDeviation", shadow.std_deviation);
        drop_shadow.assign("flood-color", &shadow.color);
        drop_shadow.assign("flood-opacity", shadow.opacity);

        let filter = svg_element::Filter::new()
            .set("id", SHADOW_FILTER_ID)
            .add(drop_shadow);

        svg_element::Definitions::new().add(filter)
    }

    fn render_background(&self, layout: &DiagramLayout) -> LayeredOutput {
        let background = Rectangle::new(
            self.theme.background(),
            layout.canvas(),
            RenderLayer::Background,
        )
        .with_data(DataAttributes::role("background"));

        PositionedDrawable::new(background).render_to_layers()
    }

    fn render_title(&self, layout: &DiagramLayout) -> LayeredOutput {
        let title = layout.title();
        let text = Text::new(self.theme.title_text(), title.content())
            .with_data(DataAttributes::role("title"));

        PositionedDrawable::new(text)
            .with_position(title.anchor())
            .render_to_layers()
    }

    fn render_band(&self, band: &BandLayout) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let band_index = band.index();
        let bounds = band.bounds();

        let rect = Rectangle::new(
            self.theme.band(band.palette_index()),
            bounds.to_size(),
            RenderLayer::Band,
        )
        .with_data(
            DataAttributes::role("band")
                .with("data-band", band_index)
                .with("data-palette", band.palette_index()),
        );
        output.merge(
            PositionedDrawable::new(rect)
                .with_position(bounds.min_point())
                .render_to_layers(),
        );

        let label = band.label();
        let data = DataAttributes::role("band-label").with("data-band", band_index);
        let text = Text::new(self.theme.band_label_text(), label.content()).with_data(data);
        output.merge(
            PositionedDrawable::new(text)
                .with_position(label.anchor())
                .render_to_layers(),
        );

        for cell in band.cells() {
            output.merge(self.render_cell(band_index, cell));
        }

        if let Some(position) = band.connector() {
            output.merge(self.render_connector(band_index, position));
        }

        output
    }

    fn render_cell(&self, band_index: usize, cell: &CellLayout) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let bounds = cell.bounds();

        let data = DataAttributes::role("cell")
            .with("data-band", band_index)
            .with("data-cell", cell.index());
        let rect = Rectangle::new(self.theme.cell(), bounds.to_size(), RenderLayer::Cell)
            .with_data(data);
        output.merge(
            PositionedDrawable::new(rect)
                .with_position(bounds.min_point())
                .render_to_layers(),
        );

        for (line_index, line) in cell.lines().iter().enumerate() {
            let data = DataAttributes::role("cell-text")
                .with("data-band", band_index)
                .with("data-cell", cell.index())
                .with("data-line", line_index);
            let text = Text::new(self.theme.cell_text(), line.content()).with_data(data);

            if text.size().width() > bounds.width() {
                warn!(
                    band = band_index,
                    cell = cell.index(),
                    text = line.content();
                    "Component text is wider than its cell"
                );
            }

            output.merge(
                PositionedDrawable::new(text)
                    .with_position(line.anchor())
                    .render_to_layers(),
            );
        }

        output
    }

    fn render_connector(&self, band_index: usize, position: Point) -> LayeredOutput {
        let data = DataAttributes::role("connector").with("data-band", band_index);
        let connector = Connector::new(self.theme.connector()).with_data(data);

        PositionedDrawable::new(connector)
            .with_position(position)
            .render_to_layers()
    }
}
