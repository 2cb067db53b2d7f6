use indexmap::IndexMap;
use scatter_rs::api::{ChartEngine, ChartEngineConfig};
use scatter_rs::core::{FieldDef, Record, Viewport};
use scatter_rs::render::{
    CirclePrimitive, Color, NullRenderer, RenderFrame, Renderer, SvgRenderer, TextHAlign,
    TextPrimitive,
};

fn record(abbr: &str, pairs: &[(&str, f64)]) -> Record {
    let mut values = IndexMap::new();
    for (key, value) in pairs {
        values.insert((*key).to_owned(), *value);
    }
    Record::new(abbr, values)
}

fn svg_engine() -> ChartEngine<SvgRenderer> {
    let records = vec![
        record("AA", &[("poverty", 10.0), ("albums", 3.0), ("cost", 20.0)]),
        record("BB", &[("poverty", 20.0), ("albums", 9.0), ("cost", 40.0)]),
    ];
    ChartEngine::new(
        SvgRenderer::default(),
        ChartEngineConfig::default(),
        vec![
            FieldDef::new("poverty", "In Poverty (%)"),
            FieldDef::new("albums", "# of Albums Released"),
        ],
        FieldDef::new("cost", "Could Not See Doctor Because of Cost (%)"),
        "poverty",
        records,
    )
    .expect("engine init")
}

#[test]
fn frame_validation_rejects_bad_geometry() {
    let viewport = Viewport::new(960, 500);

    let frame = RenderFrame::new(viewport).with_circle(CirclePrimitive::new(
        10.0,
        10.0,
        0.0,
        Color::MARKER_TEAL,
    ));
    assert!(frame.validate().is_err());

    let frame = RenderFrame::new(viewport).with_text(TextPrimitive::new(
        "AA",
        f64::NAN,
        0.0,
        11.0,
        Color::BLACK,
        TextHAlign::Center,
    ));
    assert!(frame.validate().is_err());

    let frame = RenderFrame::new(Viewport::new(0, 0));
    assert!(frame.validate().is_err());
}

#[test]
fn color_channels_are_range_checked() {
    assert!(Color::rgba(0.0, 0.5, 0.5, 0.4).validate().is_ok());
    assert!(Color::rgba(1.5, 0.0, 0.0, 1.0).validate().is_err());
    assert!(Color::rgba(0.0, 0.0, 0.0, f64::NAN).validate().is_err());
}

#[test]
fn null_renderer_counts_frame_primitives() {
    let mut renderer = NullRenderer::default();
    let frame = RenderFrame::new(Viewport::new(960, 500))
        .with_circle(CirclePrimitive::new(10.0, 10.0, 15.0, Color::MARKER_TEAL))
        .with_text(TextPrimitive::new(
            "AA",
            10.0,
            10.0,
            11.0,
            Color::BLACK,
            TextHAlign::Center,
        ));

    renderer.render(&frame).expect("render");
    assert_eq!(renderer.last_circle_count, 1);
    assert_eq!(renderer.last_text_count, 1);
    assert_eq!(renderer.last_line_count, 0);
}

#[test]
fn svg_backend_emits_markers_labels_and_axes() {
    let mut engine = svg_engine();
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    let document = renderer.last_document().expect("document");

    assert!(document.starts_with("<svg"));
    assert!(document.ends_with("</svg>\n"));
    assert_eq!(document.matches("<circle").count(), 2);
    assert!(document.contains(">AA</text>"));
    assert!(document.contains("In Poverty (%)"));
    assert!(document.contains(r#"transform="rotate(-90"#));
}

#[test]
fn svg_text_content_is_escaped() {
    let mut renderer = SvgRenderer::default();
    let frame = RenderFrame::new(Viewport::new(960, 500)).with_text(TextPrimitive::new(
        "a < b & c",
        10.0,
        10.0,
        11.0,
        Color::BLACK,
        TextHAlign::Left,
    ));

    renderer.render(&frame).expect("render");
    let document = renderer.last_document().expect("document");
    assert!(document.contains("a &lt; b &amp; c"));
}

#[test]
fn mid_transition_frames_render_cleanly() {
    let mut engine = svg_engine();
    engine.select_field("albums").expect("switch");

    engine.render_at(900.0).expect("mid-flight frame");
    let renderer = engine.into_renderer();
    assert!(renderer.last_document().is_some());
}
