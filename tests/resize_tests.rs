use indexmap::IndexMap;
use scatter_rs::api::{ChartEngine, ChartEngineConfig};
use scatter_rs::core::{FieldDef, Record, Viewport};
use scatter_rs::render::NullRenderer;

fn record(abbr: &str, pairs: &[(&str, f64)]) -> Record {
    let mut values = IndexMap::new();
    for (key, value) in pairs {
        values.insert((*key).to_owned(), *value);
    }
    Record::new(abbr, values)
}

fn sample_records() -> Vec<Record> {
    vec![
        record("AA", &[("poverty", 10.0), ("albums", 3.0), ("cost", 20.0)]),
        record("BB", &[("poverty", 20.0), ("albums", 9.0), ("cost", 40.0)]),
    ]
}

fn engine_at(viewport: Viewport) -> ChartEngine<NullRenderer> {
    ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(viewport),
        vec![
            FieldDef::new("poverty", "In Poverty (%)"),
            FieldDef::new("albums", "# of Albums Released"),
        ],
        FieldDef::new("cost", "Could Not See Doctor Because of Cost (%)"),
        "poverty",
        sample_records(),
    )
    .expect("engine init")
}

#[test]
fn resize_resets_active_field_and_interaction_state() {
    let mut engine = engine_at(Viewport::new(960, 500));
    engine.select_field("albums").expect("switch");
    engine.show_tooltip(1).expect("show tooltip");

    engine.resize(Viewport::new(1280, 720)).expect("resize");

    assert_eq!(engine.active_field(), "poverty");
    assert!(engine.transition().is_none());
    assert_eq!(engine.visible_tooltip(), None);
}

#[test]
fn resize_reproduces_the_initial_layout_at_new_dimensions() {
    let mut resized = engine_at(Viewport::new(960, 500));
    resized.select_field("albums").expect("switch");
    resized.resize(Viewport::new(1280, 720)).expect("resize");

    let fresh = engine_at(Viewport::new(1280, 720));

    assert_eq!(resized.horizontal_domain(), fresh.horizontal_domain());
    assert_eq!(resized.vertical_domain(), fresh.vertical_domain());
    assert_eq!(
        resized.point_positions().expect("resized positions"),
        fresh.point_positions().expect("fresh positions")
    );
}

#[test]
fn resize_is_idempotent_at_the_same_dimensions() {
    let mut engine = engine_at(Viewport::new(960, 500));
    let positions_before = engine.point_positions().expect("positions");

    engine.resize(Viewport::new(960, 500)).expect("resize");
    assert_eq!(engine.point_positions().expect("positions"), positions_before);
}

#[test]
fn resize_during_a_transition_aborts_it_cleanly() {
    let mut engine = engine_at(Viewport::new(960, 500));
    engine.select_field("albums").expect("switch");
    assert!(engine.transition().is_some());

    engine.resize(Viewport::new(800, 600)).expect("mid-flight resize");
    assert!(engine.transition().is_none());
    engine.render().expect("render after resize");
}

#[test]
fn invalid_viewport_is_rejected_without_state_change() {
    let mut engine = engine_at(Viewport::new(960, 500));
    engine.select_field("albums").expect("switch");
    let domain_before = engine.horizontal_domain();

    assert!(engine.resize(Viewport::new(0, 500)).is_err());
    // Viewport smaller than the margins leaves no plot area.
    assert!(engine.resize(Viewport::new(100, 60)).is_err());

    assert_eq!(engine.active_field(), "albums");
    assert_eq!(engine.horizontal_domain(), domain_before);
}
