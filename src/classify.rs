//! The classification engine: partitions incoming rows into
//! per-category point series, allocating colors for unseen categories
//! and enforcing each chart's sliding window.

use crate::chart::{self, ChartConfig, ChartDescriptor};
use crate::error::Result;
use crate::metadata::{self, ClassificationMode, Metadata, ResolvedColumns};
use crate::models::{DataValue, LegendItem, Point, PointDetails, Row};
use crate::palette;
use crate::scale::AxisScale;
use crate::series::Series;
use ahash::RandomState;
use indexmap::IndexMap;
use log::debug;

/// Insertion-ordered map from category key to its point series.
pub type DataSets = IndexMap<String, Series, RandomState>;

/// One chart instance: the normalized descriptors, the accumulated
/// per-category series, and the resolved x-axis scale. Owns all
/// mutable state; `&mut self` on [`update`](ChartEngine::update)
/// enforces the single-writer model.
#[derive(Debug)]
pub struct ChartEngine {
    config: ChartConfig,
    charts: Vec<ChartDescriptor>,
    data_sets: DataSets,
    x_scale: AxisScale,
}

impl ChartEngine {
    pub fn new(config: ChartConfig) -> Self {
        let charts = chart::build_chart_array(&config);
        Self {
            config,
            charts,
            data_sets: DataSets::default(),
            x_scale: AxisScale::Linear,
        }
    }

    /// Replace the configuration. Rebuilds descriptors and drops all
    /// accumulated series only on a true change; re-submitting an
    /// identical config keeps color assignments and data intact.
    pub fn set_config(&mut self, config: ChartConfig) {
        if self.config == config {
            return;
        }
        debug!("configuration replaced, resetting {} series", self.data_sets.len());
        self.charts = chart::build_chart_array(&config);
        self.data_sets.clear();
        self.config = config;
    }

    /// Classify a batch of rows. Every chart definition is validated
    /// against `metadata` before any state is mutated, so an error
    /// leaves the engine exactly as it was. An empty batch still runs
    /// validation and scale resolution but creates no series and
    /// consumes no color.
    pub fn update(&mut self, metadata: &Metadata, rows: &[Row]) -> Result<()> {
        let resolved = self
            .charts
            .iter()
            .map(|c| metadata::resolve_columns(c, metadata))
            .collect::<Result<Vec<_>>>()?;

        let Self {
            charts, data_sets, x_scale, ..
        } = self;

        for (chart, cols) in charts.iter_mut().zip(&resolved) {
            // Charts share one x axis; with several definitions the
            // last resolution wins.
            if let Some(ty) = metadata.column_type(cols.x) {
                *x_scale = AxisScale::for_column(ty);
            }

            if rows.is_empty() {
                continue;
            }

            match cols.mode {
                ClassificationMode::Keyed(color_idx) => {
                    classify_keyed(chart, cols, color_idx, rows, data_sets);
                }
                ClassificationMode::Unkeyed => {
                    classify_unkeyed(chart, cols, rows, data_sets);
                }
            }

            if let Some(max_length) = chart.max_length {
                for key in chart.data_set_names.keys() {
                    if let Some(series) = data_sets.get_mut(key) {
                        series.trim_to(max_length);
                    }
                }
            }
        }

        Ok(())
    }

    /// The normalized chart descriptors, in configuration order.
    pub fn charts(&self) -> &[ChartDescriptor] {
        &self.charts
    }

    pub fn data_sets(&self) -> &DataSets {
        &self.data_sets
    }

    pub fn series(&self, key: &str) -> Option<&Series> {
        self.data_sets.get(key)
    }

    /// Resolved scale kind for the x axis.
    pub fn x_scale(&self) -> AxisScale {
        self.x_scale
    }

    /// Assigned visual color for a series key, searching all charts.
    pub fn series_color(&self, key: &str) -> Option<&str> {
        self.charts.iter().find_map(|c| c.color_of(key))
    }

    /// Legend entries for every category ever seen, across all charts.
    /// Keys named in `ignored` keep their entry but carry the
    /// suppressed grey so legends grey them out rather than drop them.
    pub fn legend_items(&self, ignored: &[String]) -> Vec<LegendItem> {
        let mut items = Vec::new();
        for chart in &self.charts {
            for (name, color) in &chart.data_set_names {
                let color = if ignored.iter().any(|i| i == name) {
                    palette::SUPPRESSED.to_string()
                } else {
                    color.clone()
                };
                items.push(LegendItem {
                    name: name.clone(),
                    color,
                    chart_index: chart.id,
                });
            }
        }
        items
    }

    /// Resolve the data tuple behind a selected point for an external
    /// click handler: field names paired with the point's values.
    pub fn describe_point(&self, point: &Point) -> Option<PointDetails> {
        let chart = self.charts.get(point.chart_index)?;
        Some(PointDetails {
            x_name: chart.x.clone(),
            x: point.x.clone(),
            y_name: chart.y.clone(),
            y: point.y.clone(),
            color_category: point.color.clone(),
            size: point.amount.clone(),
        })
    }
}

fn value_at(row: &Row, idx: usize) -> DataValue {
    row.get(idx).cloned().unwrap_or(DataValue::Null)
}

fn make_point(chart: &ChartDescriptor, cols: &ResolvedColumns, row: &Row) -> Point {
    Point {
        x: value_at(row, cols.x),
        y: value_at(row, cols.y),
        color: cols.color.map(|idx| value_at(row, idx)),
        amount: cols.size.map(|idx| value_at(row, idx)),
        chart_index: chart.id,
    }
}

/// Group rows by the color-dimension value. Colors are allocated for
/// unseen keys in first-occurrence order within the batch, before any
/// points are exposed; each group then appends to its series in
/// arrival order.
fn classify_keyed(
    chart: &mut ChartDescriptor,
    cols: &ResolvedColumns,
    color_idx: usize,
    rows: &[Row],
    data_sets: &mut DataSets,
) {
    let mut groups: IndexMap<String, Vec<Point>, RandomState> = IndexMap::default();
    for row in rows {
        let key = value_at(row, color_idx).as_key();
        groups
            .entry(key)
            .or_default()
            .push(make_point(chart, cols, row));
    }

    for key in groups.keys() {
        chart.assign_color(key);
    }

    for (key, points) in groups {
        data_sets.entry(key).or_default().extend(points);
    }
}

/// All rows fall into a single series named after the `y` field,
/// bound to the first palette color. A continuous color column still
/// rides along on each point for the renderer's color ramp.
fn classify_unkeyed(
    chart: &mut ChartDescriptor,
    cols: &ResolvedColumns,
    rows: &[Row],
    data_sets: &mut DataSets,
) {
    chart.assign_unkeyed_color();
    let series = data_sets.entry(chart.y.clone()).or_default();
    for row in rows {
        series.push(make_point(chart, cols, row));
    }
}
