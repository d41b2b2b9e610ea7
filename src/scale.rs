//! Axis-scale inference from declared column types.

use crate::metadata::ColumnType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scale kind the rendering layer should use for an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    Linear,
    Ordinal,
    Time,
}

impl AxisScale {
    /// Fixed mapping from column type to scale kind. Total over the
    /// enum; unknown wire types are rejected earlier, at column-type
    /// parse time.
    pub fn for_column(ty: ColumnType) -> AxisScale {
        match ty {
            ColumnType::Linear => AxisScale::Linear,
            ColumnType::Ordinal => AxisScale::Ordinal,
            ColumnType::Time => AxisScale::Time,
        }
    }
}

impl fmt::Display for AxisScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AxisScale::Linear => "linear",
            AxisScale::Ordinal => "ordinal",
            AxisScale::Time => "time",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_types_map_to_scales() {
        assert_eq!(AxisScale::for_column(ColumnType::Linear), AxisScale::Linear);
        assert_eq!(
            AxisScale::for_column(ColumnType::Ordinal),
            AxisScale::Ordinal
        );
        assert_eq!(AxisScale::for_column(ColumnType::Time), AxisScale::Time);
    }
}
