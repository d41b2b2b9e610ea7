//! Default color palette and the suppressed-series color.

/// Category-10 chart series palette.
/// Order: blue, orange, green, red, purple, brown, pink, gray, olive, cyan.
const CATEGORY10: [&str; 10] = [
    "#1f77b4", // blue
    "#ff7f0e", // orange
    "#2ca02c", // green
    "#d62728", // red
    "#9467bd", // purple
    "#8c564b", // brown
    "#e377c2", // pink
    "#7f7f7f", // gray
    "#bcbd22", // olive
    "#17becf", // cyan
];

/// Color used for legend entries the caller currently suppresses.
pub const SUPPRESSED: &str = "#d3d3d3";

/// Default palette used when a chart definition configures none.
pub fn default_palette() -> Vec<String> {
    CATEGORY10.iter().map(|c| c.to_string()).collect()
}
