use chartflow::models::{DataValue, Row};
use chartflow::{ChartConfig, ChartEngine, Metadata, SeriesConfig};

fn config(scale: &[&str], domain: &[&str]) -> ChartConfig {
    ChartConfig {
        charts: vec![SeriesConfig {
            kind: Some("line".into()),
            x: "t".into(),
            y: "v".into(),
            size: None,
            color_category_name: Some("cat".into()),
            color_scale: Some(scale.iter().map(|s| s.to_string()).collect()),
            color_domain: if domain.is_empty() {
                None
            } else {
                Some(domain.iter().map(|s| s.to_string()).collect())
            },
            max_length: None,
            style: None,
        }],
        ..ChartConfig::default()
    }
}

fn metadata() -> Metadata {
    Metadata::parse(
        vec!["t".into(), "v".into(), "cat".into()],
        &["time", "linear", "ordinal"],
    )
    .unwrap()
}

fn row(t: f64, cat: &str) -> Row {
    vec![
        DataValue::Number(t),
        DataValue::Number(t * 2.0),
        DataValue::Text(cat.into()),
    ]
}

#[test]
fn colors_are_stable_across_updates() {
    let mut engine = ChartEngine::new(config(&["red", "blue"], &[]));
    let meta = metadata();
    engine.update(&meta, &[row(0.0, "a")]).unwrap();
    let first = engine.series_color("a").unwrap().to_string();

    engine
        .update(&meta, &[row(1.0, "b"), row(2.0, "a")])
        .unwrap();
    assert_eq!(engine.series_color("a"), Some(first.as_str()));
    assert_eq!(engine.series_color("b"), Some("blue"));
}

#[test]
fn palette_cycles_when_categories_exceed_it() {
    let mut engine = ChartEngine::new(config(&["red", "blue"], &[]));
    let meta = metadata();
    engine
        .update(&meta, &[row(0.0, "a"), row(1.0, "b"), row(2.0, "c")])
        .unwrap();

    assert_eq!(engine.series_color("a"), Some("red"));
    assert_eq!(engine.series_color("b"), Some("blue"));
    // Third category wraps back to the start of the palette.
    assert_eq!(engine.series_color("c"), Some("red"));

    engine.update(&meta, &[row(3.0, "d")]).unwrap();
    assert_eq!(engine.series_color("d"), Some("blue"));
}

#[test]
fn fixed_domain_overrides_arrival_order() {
    let mut engine = ChartEngine::new(config(&["red", "blue"], &["A", "B"]));
    let meta = metadata();
    // "B" arrives first but is pinned to the second palette slot.
    engine.update(&meta, &[row(0.0, "B")]).unwrap();
    assert_eq!(engine.series_color("B"), Some("blue"));

    engine.update(&meta, &[row(1.0, "A")]).unwrap();
    assert_eq!(engine.series_color("A"), Some("red"));
}

#[test]
fn allocation_is_reproducible_for_the_same_arrival_order() {
    let meta = metadata();
    let batches = [vec![row(0.0, "a"), row(1.0, "b")], vec![row(2.0, "c")]];

    let mut first = ChartEngine::new(config(&["red", "blue"], &["a", "b"]));
    let mut second = ChartEngine::new(config(&["red", "blue"], &["a", "b"]));
    for batch in &batches {
        first.update(&meta, batch).unwrap();
        second.update(&meta, batch).unwrap();
    }

    for key in ["a", "b", "c"] {
        assert_eq!(first.series_color(key), second.series_color(key));
    }
    // The pinned key took its domain slot, not a cursor slot.
    assert_eq!(first.series_color("b"), Some("blue"));
}
