//! chartflow
//!
//! A lightweight Rust library for classifying tabular data into per-category
//! point series for interactive charts. Pairs with the `chartflow` CLI.
//!
//! ### Features
//! - Partition rows into ordered, per-category series from a declarative
//!   multi-chart configuration
//! - Stable, deterministic color assignment from a finite palette, with
//!   optional fixed-domain pinning and wrap-around cycling
//! - Axis-scale inference from declared column types
//! - Bounded sliding window over streaming data (oldest-first eviction)
//! - Legend derivation, CSV/JSON export, and quick per-series statistics
//!
//! ### Example
//! ```
//! use chartflow::{ChartConfig, ChartEngine, Metadata};
//! use chartflow::models::DataValue;
//!
//! let config: ChartConfig = serde_json::from_str(
//!     r#"{ "charts": [{ "x": "time", "y": "value", "colorCategoryName": "region" }] }"#,
//! )?;
//! let metadata = Metadata::parse(
//!     vec!["time".into(), "value".into(), "region".into()],
//!     &["linear", "linear", "ordinal"],
//! )?;
//!
//! let mut engine = ChartEngine::new(config);
//! engine.update(&metadata, &[
//!     vec![DataValue::Number(1.0), DataValue::Number(10.0), "EU".into()],
//!     vec![DataValue::Number(2.0), DataValue::Number(12.0), "NA".into()],
//! ])?;
//!
//! assert_eq!(engine.series("EU").unwrap().len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod chart;
pub mod classify;
pub mod error;
pub mod export;
pub mod metadata;
pub mod models;
pub mod palette;
pub mod scale;
pub mod series;
pub mod stats;

pub use chart::{ChartConfig, ChartDescriptor, SeriesConfig};
pub use classify::{ChartEngine, DataSets};
pub use error::{Error, FieldRole};
pub use metadata::{ClassificationMode, ColumnType, Metadata};
pub use models::{DataValue, LegendItem, Point, PointDetails, Row};
pub use scale::AxisScale;
pub use series::Series;
