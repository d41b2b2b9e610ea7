//! Column metadata and per-update field resolution.

use crate::chart::ChartDescriptor;
use crate::error::{Error, FieldRole, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Declared type of a data column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Linear,
    Ordinal,
    Time,
}

impl FromStr for ColumnType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(ColumnType::Linear),
            "ordinal" => Ok(ColumnType::Ordinal),
            "time" => Ok(ColumnType::Time),
            other => Err(Error::UnsupportedColumnType(other.to_string())),
        }
    }
}

/// Ordered column names and types, positionally aligned. Names are
/// expected to be unique within one submission; lookup uses the first
/// match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub names: Vec<String>,
    pub types: Vec<ColumnType>,
}

impl Metadata {
    pub fn new(names: Vec<String>, types: Vec<ColumnType>) -> Self {
        Self { names, types }
    }

    /// Build metadata from wire-form type strings
    /// (`"linear" | "ordinal" | "time"`).
    pub fn parse<S: AsRef<str>>(names: Vec<String>, types: &[S]) -> Result<Self> {
        let types = types
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { names, types })
    }

    /// Positional index of a column name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn column_type(&self, idx: usize) -> Option<ColumnType> {
        self.types.get(idx).copied()
    }
}

/// How rows are partitioned into series. Resolved once per update,
/// not re-branched per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationMode {
    /// Group rows by the ordinal color-dimension column at this index.
    Keyed(usize),
    /// A single series keyed by the `y` field name.
    Unkeyed,
}

/// Positional column indices for one chart definition, validated
/// against a metadata submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub x: usize,
    pub y: usize,
    pub size: Option<usize>,
    pub color: Option<usize>,
    pub mode: ClassificationMode,
}

/// Resolve every field the chart definition references. Fails when a
/// required field (`x`, `y`) is absent from metadata, and when an
/// optionally configured field (`size`, color dimension) is named but
/// absent. Pure lookup; the engine resolves all definitions before
/// mutating any state.
pub fn resolve_columns(chart: &ChartDescriptor, metadata: &Metadata) -> Result<ResolvedColumns> {
    let missing = |role: FieldRole, field: &str| Error::MissingField {
        chart: chart.label(),
        role,
        field: field.to_string(),
    };

    let x = metadata
        .index_of(&chart.x)
        .ok_or_else(|| missing(FieldRole::X, &chart.x))?;
    let y = metadata
        .index_of(&chart.y)
        .ok_or_else(|| missing(FieldRole::Y, &chart.y))?;
    let size = match &chart.size {
        Some(name) => Some(
            metadata
                .index_of(name)
                .ok_or_else(|| missing(FieldRole::Size, name))?,
        ),
        None => None,
    };
    let color = match &chart.color_category {
        Some(name) => Some(
            metadata
                .index_of(name)
                .ok_or_else(|| missing(FieldRole::Color, name))?,
        ),
        None => None,
    };

    // Keyed only when the color dimension is categorical; a continuous
    // color column still rides along on each point for the renderer.
    let mode = match color {
        Some(idx) if metadata.column_type(idx) == Some(ColumnType::Ordinal) => {
            ClassificationMode::Keyed(idx)
        }
        _ => ClassificationMode::Unkeyed,
    };

    Ok(ResolvedColumns {
        x,
        y,
        size,
        color,
        mode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_unknown_type() {
        let err = Metadata::parse(vec!["t".into()], &["logarithmic"]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedColumnType(ref t) if t == "logarithmic"));
    }

    #[test]
    fn index_lookup_uses_first_match() {
        let meta = Metadata::parse(
            vec!["a".into(), "b".into(), "a".into()],
            &["linear", "ordinal", "time"],
        )
        .unwrap();
        assert_eq!(meta.index_of("a"), Some(0));
        assert_eq!(meta.index_of("c"), None);
    }
}
