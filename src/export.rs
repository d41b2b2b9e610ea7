use crate::classify::ChartEngine;
use crate::models::LegendItem;
use crate::scale::AxisScale;
use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save the classified output as tidy CSV with header
/// (one row = one point).
pub fn save_csv<P: AsRef<Path>>(engine: &ChartEngine, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("series", "color", "chart_index", "x", "y", "amount"))?;
    for (name, series) in engine.data_sets() {
        let color = engine.series_color(name).unwrap_or_default();
        for p in series {
            wtr.serialize((
                name,
                color,
                p.chart_index,
                p.x.to_string(),
                p.y.to_string(),
                p.amount.as_ref().map(|v| v.to_string()),
            ))?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// JSON snapshot of the engine output: resolved x scale, legend, and
/// the per-series point arrays in insertion order.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    x_scale: AxisScale,
    legend: Vec<LegendItem>,
    data_sets: &'a crate::classify::DataSets,
}

/// Save the classified output as a pretty JSON snapshot.
pub fn save_json<P: AsRef<Path>>(engine: &ChartEngine, path: P) -> Result<()> {
    let snapshot = Snapshot {
        x_scale: engine.x_scale(),
        legend: engine.legend_items(&[]),
        data_sets: engine.data_sets(),
    };
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(&snapshot)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
