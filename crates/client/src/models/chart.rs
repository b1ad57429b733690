use serde::{Deserialize, Serialize};

/// Which chart widget a config drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Line,
}

/// One dataset inside a chart config.
///
/// Field names are the rendering sink's contract (Chart.js-compatible),
/// hence camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    pub data: Vec<f64>,

    /// Per-point colors for pie charts, single fill color for line charts.
    pub background_color: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,

    pub border_width: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,

    #[serde(default)]
    pub fill: bool,
}

/// A complete chart configuration, ready for the rendering frontend.
///
/// The client computes all of it — labels, values, colors, titles — so the
/// frontend only instantiates the chart object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub chart_type: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// Outcome of a render pass for one chart slot.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartRender {
    /// Draw this chart.
    Chart(ChartConfig),
    /// No data — draw this centered message instead of a chart.
    Placeholder(&'static str),
    /// Unrecognized payload shape — leave the slot untouched.
    Skipped,
}
