use crate::classify::DataSets;
use serde::Serialize;

/// Summary statistics for one classified series, over its finite
/// numeric y values.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Summary {
    pub series: String,
    pub count: usize,
    pub non_numeric: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Compute per-series statistics, in series insertion order.
pub fn series_summary(data_sets: &DataSets) -> Vec<Summary> {
    let mut out = Vec::new();
    for (name, series) in data_sets {
        let mut vals = Vec::new();
        let mut non_numeric = 0usize;
        for p in series {
            // NaN/infinite values come straight from user data; they
            // count as non-numeric rather than poisoning the order.
            match p.y.as_f64() {
                Some(v) if v.is_finite() => vals.push(v),
                _ => non_numeric += 1,
            }
        }
        vals.sort_by(f64::total_cmp);
        let count = vals.len();
        let min = vals.first().cloned();
        let max = vals.last().cloned();
        let mean = if count > 0 {
            Some(vals.iter().copied().sum::<f64>() / count as f64)
        } else {
            None
        };
        let median = if count == 0 {
            None
        } else if count % 2 == 1 {
            Some(vals[count / 2])
        } else {
            Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
        };
        out.push(Summary {
            series: name.clone(),
            count,
            non_numeric,
            min,
            max,
            mean,
            median,
        });
    }
    out
}
