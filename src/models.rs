use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell of a data row. Values pass through the engine
/// un-validated; formatting and sanitizing are the renderer's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(f64),
    Text(String),
    Null,
}

impl DataValue {
    /// String form used as a category key when this value sits in the
    /// color dimension.
    pub fn as_key(&self) -> String {
        match self {
            DataValue::Number(n) => n.to_string(),
            DataValue::Text(s) => s.clone(),
            DataValue::Null => "null".to_string(),
        }
    }

    /// Numeric view for summaries. Text is parsed leniently, `Null` is
    /// treated as missing.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Number(n) => Some(*n),
            DataValue::Text(s) => s.trim().parse::<f64>().ok(),
            DataValue::Null => None,
        }
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Number(n) => write!(f, "{}", n),
            DataValue::Text(s) => write!(f, "{}", s),
            DataValue::Null => Ok(()),
        }
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        DataValue::Number(v)
    }
}

impl From<&str> for DataValue {
    fn from(v: &str) -> Self {
        DataValue::Text(v.to_string())
    }
}

impl From<String> for DataValue {
    fn from(v: String) -> Self {
        DataValue::Text(v)
    }
}

/// One data row, positionally aligned to the submitted column metadata.
pub type Row = Vec<DataValue>;

/// A classified point, ready for a rendering layer to consume.
/// `color` carries the raw color-dimension value (a category, not a
/// visual color); `amount` carries the size-dimension value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub x: DataValue,
    pub y: DataValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<DataValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<DataValue>,
    pub chart_index: usize,
}

/// Legend entry derived from the accumulated category keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendItem {
    pub name: String,
    /// Visual color, or the suppressed grey when the caller currently
    /// ignores this series.
    pub color: String,
    pub chart_index: usize,
}

/// Resolved data tuple for a selected point, handed to an external
/// click handler by the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointDetails {
    pub x_name: String,
    pub x: DataValue,
    pub y_name: String,
    pub y: DataValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_category: Option<DataValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<DataValue>,
}
