//! Integration tests for the DiagramBuilder API
//!
//! These tests render whole documents and inspect them through the
//! `data-*` markers every element carries.

use strata::{
    DiagramBuilder, StrataError,
    config::AppConfig,
    semantic::{Canvas, Component, Diagram, Layer},
    theme::PALETTE,
};

/// An opening tag and the text that directly follows it, without the
/// newlines the svg crate puts around text nodes.
struct Element<'a> {
    tag: &'a str,
    text: &'a str,
}

impl<'a> Element<'a> {
    fn attr(&self, name: &str) -> Option<&'a str> {
        let needle = format!(" {name}=\"");
        let start = self.tag.find(&needle)? + needle.len();
        let len = self.tag[start..].find('"')?;
        Some(&self.tag[start..start + len])
    }
}

fn elements_with_role<'a>(svg: &'a str, role: &str) -> Vec<Element<'a>> {
    let marker = format!("data-role=\"{role}\"");
    svg.split('<')
        .filter(|fragment| fragment.contains(&marker))
        .map(|fragment| {
            let (tag, text) = fragment.split_once('>').unwrap_or((fragment, ""));
            Element {
                tag,
                text: text.trim(),
            }
        })
        .collect()
}

fn two_layer_diagram() -> Diagram {
    Diagram::new(
        "Test",
        vec![
            Layer::new("L1").with_components(["A", "B"]),
            Layer::new("L2").with_components(["C"]),
        ],
    )
}

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
    let _builder = DiagramBuilder::new(AppConfig::default());
}

#[test]
fn test_render_simple_diagram() {
    let svg = strata::render(&two_layer_diagram()).expect("Failed to render");

    assert!(svg.starts_with("<?xml"), "Output should start with the XML prolog");
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
}

#[test]
fn test_two_layer_structure() {
    let svg = strata::render(&two_layer_diagram()).unwrap();

    assert_eq!(elements_with_role(&svg, "band").len(), 2);
    assert_eq!(elements_with_role(&svg, "connector").len(), 1);

    let labels: Vec<&str> = elements_with_role(&svg, "band-label")
        .iter()
        .map(|element| element.text)
        .collect();
    assert_eq!(labels, ["L1", "L2"]);

    let cell_texts: Vec<(&str, &str)> = elements_with_role(&svg, "cell-text")
        .iter()
        .map(|element| (element.attr("data-band").unwrap(), element.text))
        .collect();
    assert_eq!(cell_texts, [("0", "A"), ("0", "B"), ("1", "C")]);
}

#[test]
fn test_cells_match_components_in_order() {
    let diagram = Diagram::new(
        "Cells",
        vec![Layer::new("Mixed").with_components([
            Component::label("first"),
            Component::multi_line(["second", "third"]),
        ])],
    );
    let svg = strata::render(&diagram).unwrap();

    assert_eq!(elements_with_role(&svg, "cell").len(), 2);

    let lines: Vec<(&str, &str, &str)> = elements_with_role(&svg, "cell-text")
        .iter()
        .map(|element| {
            (
                element.attr("data-cell").unwrap(),
                element.attr("data-line").unwrap(),
                element.text,
            )
        })
        .collect();
    assert_eq!(
        lines,
        [("0", "0", "first"), ("1", "0", "second"), ("1", "1", "third")]
    );
}

#[test]
fn test_empty_title_single_label_only_layer() {
    let diagram = Diagram::new("", vec![Layer::new("Only")]);
    let svg = strata::render(&diagram).unwrap();

    let titles = elements_with_role(&svg, "title");
    assert_eq!(titles.len(), 1);
    assert_eq!(titles[0].text, "");

    assert_eq!(elements_with_role(&svg, "band").len(), 1);
    assert!(elements_with_role(&svg, "connector").is_empty());
    assert!(elements_with_role(&svg, "cell").is_empty());
    assert_eq!(elements_with_role(&svg, "band-label")[0].text, "Only");
}

#[test]
fn test_title_centered() {
    for width in [1200, 801] {
        let diagram = two_layer_diagram().with_canvas(Canvas::new(width, 800));
        let svg = strata::render(&diagram).unwrap();

        let title = &elements_with_role(&svg, "title")[0];
        let expected = (width / 2).to_string();
        assert_eq!(title.attr("x"), Some(expected.as_str()));
        assert_eq!(title.attr("y"), Some("40"));
        assert_eq!(title.text, "Test");
    }
}

#[test]
fn test_palette_cycles_after_six_layers() {
    let layers = (0..8).map(|i| Layer::new(format!("L{i}"))).collect();
    let svg = strata::render(&Diagram::new("Palette", layers)).unwrap();

    let palette: Vec<&str> = elements_with_role(&svg, "band")
        .iter()
        .map(|element| element.attr("data-palette").unwrap())
        .collect();
    assert_eq!(palette, ["0", "1", "2", "3", "4", "5", "0", "1"]);

    let bands = elements_with_role(&svg, "band");
    for (i, band) in bands.iter().enumerate() {
        assert_eq!(band.attr("fill"), Some(PALETTE[i % PALETTE.len()]));
    }
}

#[test]
fn test_fixed_colors_are_hex() {
    let svg = strata::render(&two_layer_diagram()).unwrap();

    let background = &elements_with_role(&svg, "background")[0];
    assert_eq!(background.attr("fill"), Some("#F8F9FA"));

    let title = &elements_with_role(&svg, "title")[0];
    assert_eq!(title.attr("fill"), Some("#2E4A62"));

    let connector = &elements_with_role(&svg, "connector")[0];
    assert_eq!(connector.attr("fill"), Some("#2E4A62"));

    let cell = &elements_with_role(&svg, "cell")[0];
    assert_eq!(cell.attr("fill"), Some("#FFFFFF"));
    assert_eq!(cell.attr("fill-opacity"), Some("0.2"));
    assert_eq!(cell.attr("stroke"), Some("#FFFFFF"));

    assert!(!svg.contains("rgb("));
}

#[test]
fn test_render_is_deterministic() {
    let builder = DiagramBuilder::default();
    let diagram = two_layer_diagram();

    let first = builder.render_svg(&diagram).unwrap();
    let second = builder.render_svg(&diagram).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_layers_error() {
    let err = strata::render(&Diagram::new("Nothing", Vec::new())).unwrap_err();

    assert!(matches!(err, StrataError::EmptyLayers { .. }));
    assert!(err.to_string().contains("no layers supplied"));
}

#[test]
fn test_zero_canvas_error() {
    let diagram = two_layer_diagram().with_canvas(Canvas::new(1200, 0));
    let err = strata::render(&diagram).unwrap_err();

    assert!(matches!(
        err,
        StrataError::InvalidCanvas {
            width: 1200,
            height: 0
        }
    ));
}

#[test]
fn test_declared_empty_components_render_label_only_band() {
    let diagram = Diagram::new(
        "Empty",
        vec![Layer::new("Declared").with_components(Vec::<Component>::new())],
    );
    let svg = strata::render(&diagram).unwrap();

    assert_eq!(elements_with_role(&svg, "band").len(), 1);
    assert!(elements_with_role(&svg, "cell").is_empty());
}

#[test]
fn test_text_is_escaped() {
    let diagram = Diagram::new("R&D <core>", vec![Layer::new("A & B")]);
    let svg = strata::render(&diagram).unwrap();

    assert!(svg.contains("R&amp;D &lt;core&gt;"));
    assert!(svg.contains("A &amp; B"));
}

#[test]
fn test_manifest_to_file() {
    let builder = DiagramBuilder::new(AppConfig::new(Canvas::new(1000, 600)));
    let manifest = builder
        .parse_manifest(
            r#"
            [[diagram]]
            title = "From Manifest"

            [[diagram.layer]]
            name = "Only"
            components = ["X"]
            "#,
        )
        .unwrap();

    let entry = &manifest.entries()[0];
    let diagram = builder.diagram(entry);
    assert_eq!(diagram.canvas(), Canvas::new(1000, 600));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join(entry.file_name());
    builder.render_to_file(&diagram, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("width=\"1000\""));
    assert!(written.contains("From Manifest"));
}

#[test]
fn test_render_to_file_writes_nothing_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.svg");

    let result = DiagramBuilder::default().render_to_file(&Diagram::new("T", Vec::new()), &path);

    assert!(result.is_err());
    assert!(!path.exists());
}
