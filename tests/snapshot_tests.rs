use chart_scrubber::api::{
    ChartEngine, ChartEngineConfig, ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot,
};
use chart_scrubber::core::{Dataset, RangeWindow, Series, Viewport};
use chart_scrubber::interaction::InteractionMode;
use chart_scrubber::render::{Color, NullRenderer, ThemeMode};

fn engine() -> ChartEngine<NullRenderer> {
    let x_values = (0..=40).map(|i| f64::from(i) * 60_000.0).collect();
    let series = vec![
        Series::new("y0", "Views", Color::rgb8(0x3d, 0xc2, 0x3f), (0..=40).map(f64::from).collect()),
        Series::new("y1", "Clicks", Color::rgb8(0xf3, 0x4c, 0x44), (0..=40).map(|i| f64::from(i % 5)).collect()),
    ];
    let dataset = Dataset::new(x_values, series).expect("valid dataset");
    let config = ChartEngineConfig::new(Viewport::new(640, 400)).with_theme_mode(ThemeMode::Night);
    ChartEngine::with_dataset(NullRenderer::default(), config, dataset).expect("engine init")
}

#[test]
fn snapshot_reflects_selection_and_animation_progress() {
    let mut engine = engine();
    engine.set_visible("y1", false).expect("hide y1");
    engine.set_range(5, 20).expect("set range");
    engine.tick().expect("tick");
    engine.tick().expect("tick");

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.samples, 41);
    assert_eq!(snapshot.window, Some(RangeWindow { begin: 5, end: 20 }));
    assert_eq!(
        snapshot.visible.iter().map(|id| id.as_str()).collect::<Vec<_>>(),
        vec!["y0"]
    );
    assert_eq!(snapshot.theme_mode, ThemeMode::Night);
    assert_eq!(snapshot.interaction_mode, InteractionMode::Idle);
    let progress = snapshot.animation.expect("animation progress");
    assert_eq!((progress.step_index, progress.total_steps), (2, 10));
}

#[test]
fn empty_engine_snapshot_has_no_selection() {
    let config = ChartEngineConfig::new(Viewport::new(640, 400));
    let engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.samples, 0);
    assert!(snapshot.window.is_none());
    assert!(snapshot.visible.is_empty());
    assert!(snapshot.main_transform.is_none());
}

#[test]
fn json_contract_carries_schema_version() {
    let engine = engine();
    let json = engine.snapshot_json_pretty().expect("snapshot json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["schema_version"], ENGINE_SNAPSHOT_JSON_SCHEMA_V1);
    assert_eq!(value["snapshot"]["window"]["begin"], 30);
    assert_eq!(value["snapshot"]["visible"][1], "y1");

    let parsed = EngineSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed.window, engine.snapshot().window);
    assert_eq!(parsed.visible, engine.snapshot().visible);
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let engine = engine();
    let bare = serde_json::to_string(&engine.snapshot()).expect("bare json");
    let parsed = EngineSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed.window, engine.snapshot().window);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let engine = engine();
    let json = engine
        .snapshot_json_pretty()
        .expect("snapshot json")
        .replacen("\"schema_version\": 1", "\"schema_version\": 99", 1);
    assert!(EngineSnapshot::from_json_compat_str(&json).is_err());
}
