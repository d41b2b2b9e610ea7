use chartflow::models::{DataValue, Row};
use chartflow::{stats, ChartConfig, ChartEngine, Metadata, SeriesConfig};

fn engine() -> ChartEngine {
    ChartEngine::new(ChartConfig {
        charts: vec![SeriesConfig {
            kind: Some("line".into()),
            x: "t".into(),
            y: "v".into(),
            size: None,
            color_category_name: Some("cat".into()),
            color_scale: None,
            color_domain: None,
            max_length: None,
            style: None,
        }],
        ..ChartConfig::default()
    })
}

fn metadata() -> Metadata {
    Metadata::parse(
        vec!["t".into(), "v".into(), "cat".into()],
        &["linear", "linear", "ordinal"],
    )
    .unwrap()
}

fn row(t: f64, v: DataValue, cat: &str) -> Row {
    vec![DataValue::Number(t), v, DataValue::Text(cat.into())]
}

#[test]
fn summarizes_each_series_over_numeric_y() {
    let mut engine = engine();
    engine
        .update(
            &metadata(),
            &[
                row(0.0, DataValue::Number(1.0), "a"),
                row(1.0, DataValue::Number(3.0), "a"),
                row(2.0, DataValue::Number(2.0), "a"),
                row(3.0, DataValue::Number(10.0), "b"),
            ],
        )
        .unwrap();

    let summaries = stats::series_summary(engine.data_sets());
    assert_eq!(summaries.len(), 2);

    let a = &summaries[0];
    assert_eq!(a.series, "a");
    assert_eq!(a.count, 3);
    assert_eq!(a.min, Some(1.0));
    assert_eq!(a.max, Some(3.0));
    assert_eq!(a.mean, Some(2.0));
    assert_eq!(a.median, Some(2.0));

    let b = &summaries[1];
    assert_eq!(b.series, "b");
    assert_eq!(b.count, 1);
    assert_eq!(b.median, Some(10.0));
}

#[test]
fn counts_non_numeric_values_separately() {
    let mut engine = engine();
    engine
        .update(
            &metadata(),
            &[
                row(0.0, DataValue::Number(4.0), "a"),
                row(1.0, DataValue::Null, "a"),
                row(2.0, DataValue::Text("n/a".into()), "a"),
                row(3.0, DataValue::Text("6".into()), "a"),
            ],
        )
        .unwrap();

    let summaries = stats::series_summary(engine.data_sets());
    let a = &summaries[0];
    // "6" parses; null and "n/a" do not.
    assert_eq!(a.count, 2);
    assert_eq!(a.non_numeric, 2);
    assert_eq!(a.mean, Some(5.0));
}

#[test]
fn non_finite_values_are_counted_not_sorted() {
    let mut engine = engine();
    engine
        .update(
            &metadata(),
            &[
                row(0.0, DataValue::Number(f64::NAN), "a"),
                row(1.0, DataValue::Number(f64::INFINITY), "a"),
                row(2.0, DataValue::Text("NaN".into()), "a"),
                row(3.0, DataValue::Number(2.0), "a"),
            ],
        )
        .unwrap();

    let summaries = stats::series_summary(engine.data_sets());
    let a = &summaries[0];
    assert_eq!(a.count, 1);
    assert_eq!(a.non_numeric, 3);
    assert_eq!(a.mean, Some(2.0));
    assert_eq!(a.median, Some(2.0));
}

#[test]
fn even_count_median_averages_the_middle_pair() {
    let mut engine = engine();
    engine
        .update(
            &metadata(),
            &[
                row(0.0, DataValue::Number(1.0), "a"),
                row(1.0, DataValue::Number(2.0), "a"),
                row(2.0, DataValue::Number(3.0), "a"),
                row(3.0, DataValue::Number(4.0), "a"),
            ],
        )
        .unwrap();

    let summaries = stats::series_summary(engine.data_sets());
    assert_eq!(summaries[0].median, Some(2.5));
}
