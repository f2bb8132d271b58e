//! Layout computation for layered diagrams.
//!
//! The canvas below a fixed header is split into one equal-height band per
//! layer. Each band's inner width is split into equal-width cells, one per
//! component. All arithmetic is integer division on unsigned values;
//! subtractions saturate at zero, so tiny canvases produce zero-sized shapes
//! instead of negative ones. Rounding may leave unused pixels at the bottom
//! and right edges.
//!
//! ```text
//!  y=40   ─────────── title (centered) ───────────
//!  y=80   ┌ band 0 ─────────────────────────────┐
//!         │ label                               │
//!         │  ┌cell┐ ┌cell┐ ┌cell┐              │
//!         └──┴────┴─┴────┴─┴────┴──────▼───────┘
//!         ┌ band 1 ─────────────────────────────┐
//!         ...
//! ```

use log::{debug, trace};
use strata_core::geometry::{Bounds, Point, Size};

use crate::{
    StrataError,
    semantic::{Component, Diagram},
    theme::PALETTE,
};

/// Baseline of the title.
const TITLE_BASELINE: u32 = 40;
/// Top edge of the first band.
const BANDS_TOP: u32 = 80;
/// Vertical space not shared out between bands (header plus bottom margin).
const VERTICAL_RESERVE: u32 = 120;
/// Left and right margin of bands.
const BAND_MARGIN_X: u32 = 50;
/// Gap between consecutive bands.
const BAND_GAP: u32 = 10;
/// Offset of the band label from the band's top-left corner.
const LABEL_INSET_X: u32 = 20;
const LABEL_BASELINE: u32 = 30;
/// Left and right margin of the cell row.
const CELL_MARGIN_X: u32 = 80;
/// Offset of the cell row from the band top.
const CELL_TOP: u32 = 50;
/// Band height not available to cells.
const CELL_HEIGHT_RESERVE: u32 = 80;
/// Gap to the right of each cell.
const CELL_GAP: u32 = 10;
/// First baseline of multi-line cell text, relative to the cell top.
const LINE_TOP: u32 = 25;
/// Vertical distance between stacked lines.
const LINE_PITCH: u32 = 20;
/// How far the connector's flat edge sits above the next band's top.
const CONNECTOR_LIFT: u32 = 5;

/// A single line of text and its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLine<'a> {
    anchor: Point,
    content: &'a str,
}

impl<'a> TextLine<'a> {
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn content(&self) -> &'a str {
        self.content
    }
}

/// Geometry of one component cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellLayout<'a> {
    index: usize,
    bounds: Bounds,
    lines: Vec<TextLine<'a>>,
}

impl<'a> CellLayout<'a> {
    /// Position of the cell within its band, left to right.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Text lines in display order, top to bottom.
    pub fn lines(&self) -> &[TextLine<'a>] {
        &self.lines
    }
}

/// Geometry of one layer band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandLayout<'a> {
    index: usize,
    palette_index: usize,
    bounds: Bounds,
    label: TextLine<'a>,
    cells: Vec<CellLayout<'a>>,
    connector: Option<Point>,
}

impl<'a> BandLayout<'a> {
    /// Position of the band, top to bottom.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Index into [`PALETTE`] of the band's fill color.
    pub fn palette_index(&self) -> usize {
        self.palette_index
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn label(&self) -> &TextLine<'a> {
        &self.label
    }

    pub fn cells(&self) -> &[CellLayout<'a>] {
        &self.cells
    }

    /// Midpoint of the connector's flat top edge, or `None` for the last band.
    pub fn connector(&self) -> Option<Point> {
        self.connector
    }
}

/// Positioned geometry of a whole diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramLayout<'a> {
    canvas: Size,
    layer_height: u32,
    title: TextLine<'a>,
    bands: Vec<BandLayout<'a>>,
}

impl<'a> DiagramLayout<'a> {
    /// Computes the layout of `diagram`.
    ///
    /// # Errors
    ///
    /// - [`StrataError::EmptyLayers`] if the diagram has no layers.
    /// - [`StrataError::InvalidCanvas`] if either canvas dimension is zero.
    pub fn compute(diagram: &'a Diagram) -> Result<Self, StrataError> {
        let canvas = diagram.canvas();
        let (width, height) = (canvas.width(), canvas.height());

        if width == 0 || height == 0 {
            return Err(StrataError::InvalidCanvas { width, height });
        }

        let layers = diagram.layers();
        if layers.is_empty() {
            return Err(StrataError::EmptyLayers {
                title: diagram.title().to_string(),
            });
        }

        let layer_count = to_u32(layers.len());
        let layer_height = height.saturating_sub(VERTICAL_RESERVE) / layer_count;
        let center_x = width / 2;

        let bands = layers
            .iter()
            .enumerate()
            .map(|(index, layer)| {
                // index < layer_count, so the product stays below `height`.
                let band_top = BANDS_TOP.saturating_add(to_u32(index) * layer_height);
                let band_size = Size::new(width, layer_height).shrink(2 * BAND_MARGIN_X, BAND_GAP);
                let bounds = Point::new(BAND_MARGIN_X, band_top).to_bounds(band_size);

                let label = TextLine {
                    anchor: Point::new(BAND_MARGIN_X + LABEL_INSET_X, band_top)
                        .offset(0, LABEL_BASELINE),
                    content: layer.name(),
                };

                let cells = layout_cells(layer.components(), width, band_top, layer_height);

                let connector = (index + 1 < layers.len()).then(|| {
                    Point::new(
                        center_x,
                        band_top
                            .saturating_add(layer_height)
                            .saturating_sub(CONNECTOR_LIFT),
                    )
                });

                trace!(index, band_top, cells = cells.len(); "Band laid out");

                BandLayout {
                    index,
                    palette_index: index % PALETTE.len(),
                    bounds,
                    label,
                    cells,
                    connector,
                }
            })
            .collect();

        debug!(bands = layers.len(), layer_height, width, height; "Layout computed");

        Ok(Self {
            canvas: Size::new(width, height),
            layer_height,
            title: TextLine {
                anchor: Point::new(center_x, TITLE_BASELINE),
                content: diagram.title(),
            },
            bands,
        })
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Height of each band slot, including the gap below the band.
    pub fn layer_height(&self) -> u32 {
        self.layer_height
    }

    pub fn title(&self) -> &TextLine<'a> {
        &self.title
    }

    pub fn bands(&self) -> &[BandLayout<'a>] {
        &self.bands
    }

    /// Iterates over the connectors of all bands, top to bottom.
    pub fn connectors(&self) -> impl Iterator<Item = Point> + '_ {
        self.bands.iter().filter_map(BandLayout::connector)
    }
}

/// Lays out the cells of one band. An empty component list yields no cells.
fn layout_cells<'a>(
    components: &'a [Component],
    width: u32,
    band_top: u32,
    layer_height: u32,
) -> Vec<CellLayout<'a>> {
    if components.is_empty() {
        return Vec::new();
    }

    let cell_width = width.saturating_sub(2 * CELL_MARGIN_X) / to_u32(components.len());
    let cell_height = layer_height.saturating_sub(CELL_HEIGHT_RESERVE);
    let cell_top = band_top.saturating_add(CELL_TOP);

    components
        .iter()
        .enumerate()
        .map(|(index, component)| {
            let cell_left = CELL_MARGIN_X.saturating_add(to_u32(index) * cell_width);
            let origin = Point::new(cell_left, cell_top);
            let cell_size = Size::new(cell_width, cell_height).shrink(CELL_GAP, 0);
            let text_x = cell_left
                .saturating_add(cell_width / 2)
                .saturating_sub(CELL_GAP / 2);

            let lines = match component {
                Component::Label(text) => vec![TextLine {
                    anchor: Point::new(text_x, cell_top.saturating_add(cell_height / 2)),
                    content: text.as_str(),
                }],
                Component::MultiLine(lines) => lines
                    .iter()
                    .enumerate()
                    .map(|(line, text)| TextLine {
                        anchor: Point::new(
                            text_x,
                            cell_top
                                .saturating_add(LINE_TOP)
                                .saturating_add(to_u32(line).saturating_mul(LINE_PITCH)),
                        ),
                        content: text.as_str(),
                    })
                    .collect(),
            };

            CellLayout {
                index,
                bounds: origin.to_bounds(cell_size),
                lines,
            }
        })
        .collect()
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::semantic::{Canvas, Layer};

    // ===================
    // Strategies
    // ===================

    fn component_strategy() -> impl Strategy<Value = Component> {
        prop_oneof![
            "[a-z]{1,8}".prop_map(Component::Label),
            prop::collection::vec("[a-z]{1,8}", 0..4).prop_map(Component::MultiLine),
        ]
    }

    fn layer_strategy() -> impl Strategy<Value = Layer> {
        (
            "[A-Z][a-z]{0,10}",
            prop::option::of(prop::collection::vec(component_strategy(), 0..8)),
        )
            .prop_map(|(name, components)| match components {
                Some(components) => Layer::new(name).with_components(components),
                None => Layer::new(name),
            })
    }

    fn diagram_strategy() -> impl Strategy<Value = Diagram> {
        (
            prop::collection::vec(layer_strategy(), 1..12),
            100u32..4000,
            120u32..4000,
        )
            .prop_map(|(layers, width, height)| {
                Diagram::new("Prop", layers).with_canvas(Canvas::new(width, height))
            })
    }

    // ===================
    // Property Test Functions
    // ===================

    /// One band per layer and one connector between each consecutive pair.
    fn check_band_and_connector_counts(diagram: &Diagram) -> Result<(), TestCaseError> {
        let layout = DiagramLayout::compute(diagram).unwrap();
        prop_assert_eq!(layout.bands().len(), diagram.layers().len());
        prop_assert_eq!(layout.connectors().count(), diagram.layers().len() - 1);
        Ok(())
    }

    /// One cell per component, with lines in component order.
    fn check_cells_match_components(diagram: &Diagram) -> Result<(), TestCaseError> {
        let layout = DiagramLayout::compute(diagram).unwrap();
        for (band, layer) in layout.bands().iter().zip(diagram.layers()) {
            prop_assert_eq!(band.cells().len(), layer.components().len());
            for (cell, component) in band.cells().iter().zip(layer.components()) {
                let rendered: Vec<&str> = cell.lines().iter().map(TextLine::content).collect();
                prop_assert_eq!(rendered, component.lines());
            }
        }
        Ok(())
    }

    /// Bands stack top to bottom, cells run left to right, and the title is centered.
    fn check_ordering_and_centering(diagram: &Diagram) -> Result<(), TestCaseError> {
        let layout = DiagramLayout::compute(diagram).unwrap();
        prop_assert_eq!(layout.title().anchor().x(), diagram.canvas().width() / 2);

        for pair in layout.bands().windows(2) {
            prop_assert!(pair[0].bounds().min_y() <= pair[1].bounds().min_y());
        }
        for band in layout.bands() {
            prop_assert_eq!(band.palette_index(), band.index() % PALETTE.len());
            for pair in band.cells().windows(2) {
                prop_assert!(pair[0].bounds().min_x() <= pair[1].bounds().min_x());
            }
        }
        Ok(())
    }

    /// Bands never extend past the canvas.
    fn check_bands_fit_canvas(diagram: &Diagram) -> Result<(), TestCaseError> {
        let layout = DiagramLayout::compute(diagram).unwrap();
        let canvas = Point::new(0, 0).to_bounds(layout.canvas());
        for band in layout.bands() {
            prop_assert!(
                canvas.contains(band.bounds()),
                "band {:?} outside canvas {:?}",
                band.bounds(),
                canvas
            );
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn band_and_connector_counts(diagram in diagram_strategy()) {
            check_band_and_connector_counts(&diagram)?;
        }

        #[test]
        fn cells_match_components(diagram in diagram_strategy()) {
            check_cells_match_components(&diagram)?;
        }

        #[test]
        fn ordering_and_centering(diagram in diagram_strategy()) {
            check_ordering_and_centering(&diagram)?;
        }

        #[test]
        fn bands_fit_canvas(diagram in diagram_strategy()) {
            check_bands_fit_canvas(&diagram)?;
        }
    }
}
