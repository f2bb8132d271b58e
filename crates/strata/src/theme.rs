//! The fixed visual theme of Strata diagrams.
//!
//! Layer bands cycle through a six-color palette: layer `i` is filled with
//! [`PALETTE`]`[i % 6]`, so a seventh layer reuses the first color. Fonts,
//! strokes, the shadow filter and the connector shape are fixed as well.

use strata_core::{
    color::Color,
    draw::{
        ConnectorDefinition, FontWeight, RectangleDefinition, StrokeDefinition, TextAnchor,
        TextDefinition,
    },
};

use crate::StrataError;

/// Band fill colors, in the order they are assigned to layers.
pub const PALETTE: [&str; 6] = [
    "#4A90E2", // blue
    "#7ED321", // green
    "#F5A623", // orange
    "#BD10E0", // purple
    "#B8E986", // light green
    "#50E3C2", // teal
];

const HEADER_COLOR: &str = "#2E4A62";
const TEXT_COLOR: &str = "#FFFFFF";
const BORDER_COLOR: &str = "#FFFFFF";
const BACKGROUND_COLOR: &str = "#F8F9FA";
const SHADOW_COLOR: &str = "#000000";

const FONT_FAMILY: &str = "'Microsoft YaHei', Arial, sans-serif";

/// Id of the drop-shadow filter in the document `<defs>`.
pub const SHADOW_FILTER_ID: &str = "shadow";

/// Parameters of the drop shadow cast by layer bands.
#[derive(Debug, Clone)]
pub struct ShadowDefinition {
    pub dx: u32,
    pub dy: u32,
    pub std_deviation: u32,
    pub color: Color,
    pub opacity: f32,
}

/// All drawing definitions used to render a diagram.
#[derive(Debug, Clone)]
pub struct Theme {
    background: RectangleDefinition,
    bands: Vec<RectangleDefinition>,
    cell: RectangleDefinition,
    connector: ConnectorDefinition,
    title_text: TextDefinition,
    band_label_text: TextDefinition,
    cell_text: TextDefinition,
    shadow: ShadowDefinition,
}

impl Theme {
    /// Builds the standard theme.
    ///
    /// # Errors
    ///
    /// Returns [`StrataError::Render`] if one of the built-in colors fails to
    /// parse.
    pub fn standard() -> Result<Self, StrataError> {
        let header = parse_color(HEADER_COLOR)?;
        let text = parse_color(TEXT_COLOR)?;
        let border = parse_color(BORDER_COLOR)?;

        let background = RectangleDefinition::new(parse_color(BACKGROUND_COLOR)?);

        let bands = PALETTE
            .iter()
            .map(|fill| -> Result<RectangleDefinition, StrataError> {
                let mut band = RectangleDefinition::new(parse_color(fill)?);
                band.set_stroke(Some(StrokeDefinition::solid(border, 2.0)));
                band.set_corner_radius(8);
                band.set_filter(Some(SHADOW_FILTER_ID.to_string()));
                Ok(band)
            })
            .collect::<Result<Vec<_>, StrataError>>()?;

        let mut cell = RectangleDefinition::new(parse_color("white")?);
        cell.set_fill_opacity(Some(0.2));
        cell.set_stroke(Some(StrokeDefinition::solid(border, 1.0)));
        cell.set_corner_radius(4);

        let connector = ConnectorDefinition::new(header, 10, 15);

        let title_text = text_definition(24, FontWeight::Bold, header, TextAnchor::Middle);
        let band_label_text = text_definition(18, FontWeight::Bold, text, TextAnchor::Start);
        let cell_text = text_definition(14, FontWeight::Normal, text, TextAnchor::Middle);

        let shadow = ShadowDefinition {
            dx: 2,
            dy: 2,
            std_deviation: 3,
            color: parse_color(SHADOW_COLOR)?,
            opacity: 0.3,
        };

        Ok(Self {
            background,
            bands,
            cell,
            connector,
            title_text,
            band_label_text,
            cell_text,
            shadow,
        })
    }

    /// Returns the band style for a palette index, wrapping around the palette.
    pub fn band(&self, palette_index: usize) -> &RectangleDefinition {
        &self.bands[palette_index % self.bands.len()]
    }

    pub fn background(&self) -> &RectangleDefinition {
        &self.background
    }

    pub fn cell(&self) -> &RectangleDefinition {
        &self.cell
    }

    pub fn connector(&self) -> &ConnectorDefinition {
        &self.connector
    }

    pub fn title_text(&self) -> &TextDefinition {
        &self.title_text
    }

    pub fn band_label_text(&self) -> &TextDefinition {
        &self.band_label_text
    }

    pub fn cell_text(&self) -> &TextDefinition {
        &self.cell_text
    }

    pub fn shadow(&self) -> &ShadowDefinition {
        &self.shadow
    }
}

fn parse_color(value: &str) -> Result<Color, StrataError> {
    Color::new(value).map_err(StrataError::Render)
}

fn text_definition(
    size: u16,
    weight: FontWeight,
    color: Color,
    anchor: TextAnchor,
) -> TextDefinition {
    let mut definition = TextDefinition::new();
    definition.set_font_family(FONT_FAMILY);
    definition.set_font_size(size);
    definition.set_font_weight(weight);
    definition.set_color(Some(color));
    definition.set_anchor(anchor);
    definition
}
