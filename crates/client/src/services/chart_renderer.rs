use crate::models::analytics::{ChartInput, NormalizedAnalytics};
use crate::models::chart::{ChartConfig, ChartDataset, ChartKind, ChartRender};

const INCOME_LINE_COLOR: &str = "#28a745";
const INCOME_FILL_COLOR: &str = "rgba(40, 167, 69, 0.1)";
const EXPENSE_LINE_COLOR: &str = "#dc3545";
const EXPENSE_FILL_COLOR: &str = "rgba(220, 53, 69, 0.1)";

const CATEGORY_PLACEHOLDER: &str = "No expense data available";
const TIMELINE_PLACEHOLDER: &str = "No timeline data available";

/// Builds chart configurations from normalized analytics and owns the two
/// chart slots.
///
/// Each render pass drops the previously held config for its slot before
/// building a new one, so re-rendering is idempotent — no stacked canvases,
/// no leaked chart instances on the frontend side.
#[derive(Debug, Default)]
pub struct ChartRenderer {
    category_chart: Option<ChartConfig>,
    timeline_chart: Option<ChartConfig>,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the expense-by-category pie.
    pub fn render_category(&mut self, analytics: &NormalizedAnalytics) -> ChartRender {
        // Destroy the previous instance for this slot first.
        self.category_chart = None;

        match &analytics.category_breakdown {
            ChartInput::Data(slices) => {
                let config = ChartConfig {
                    chart_type: ChartKind::Pie,
                    title: "Expense Categories".to_string(),
                    labels: slices.iter().map(|s| s.label.clone()).collect(),
                    datasets: vec![ChartDataset {
                        label: None,
                        data: slices.iter().map(|s| s.value).collect(),
                        background_color: slices.iter().map(|s| s.color.clone()).collect(),
                        border_color: Some("#fff".to_string()),
                        border_width: 2,
                        tension: None,
                        fill: false,
                    }],
                };
                self.category_chart = Some(config.clone());
                ChartRender::Chart(config)
            }
            ChartInput::Empty => ChartRender::Placeholder(CATEGORY_PLACEHOLDER),
            ChartInput::Unrecognized => ChartRender::Skipped,
        }
    }

    /// Render the income/expense timeline line chart.
    pub fn render_timeline(&mut self, analytics: &NormalizedAnalytics) -> ChartRender {
        self.timeline_chart = None;

        match &analytics.timeline_series {
            ChartInput::Data(points) => {
                let line = |label: &str, data: Vec<f64>, stroke: &str, fill: &str| ChartDataset {
                    label: Some(label.to_string()),
                    data,
                    background_color: vec![fill.to_string()],
                    border_color: Some(stroke.to_string()),
                    border_width: 1,
                    tension: Some(0.4),
                    fill: true,
                };
                let config = ChartConfig {
                    chart_type: ChartKind::Line,
                    title: "Monthly Transaction Trends".to_string(),
                    labels: points.iter().map(|p| p.label.clone()).collect(),
                    datasets: vec![
                        line(
                            "Income",
                            points.iter().map(|p| p.income).collect(),
                            INCOME_LINE_COLOR,
                            INCOME_FILL_COLOR,
                        ),
                        line(
                            "Expenses",
                            points.iter().map(|p| p.expense).collect(),
                            EXPENSE_LINE_COLOR,
                            EXPENSE_FILL_COLOR,
                        ),
                    ],
                };
                self.timeline_chart = Some(config.clone());
                ChartRender::Chart(config)
            }
            ChartInput::Empty => ChartRender::Placeholder(TIMELINE_PLACEHOLDER),
            ChartInput::Unrecognized => ChartRender::Skipped,
        }
    }

    /// Currently held pie config, if the last render produced one.
    pub fn category_chart(&self) -> Option<&ChartConfig> {
        self.category_chart.as_ref()
    }

    /// Currently held line config, if the last render produced one.
    pub fn timeline_chart(&self) -> Option<&ChartConfig> {
        self.timeline_chart.as_ref()
    }

    /// Drop both chart instances (logout path).
    pub fn clear(&mut self) {
        self.category_chart = None;
        self.timeline_chart = None;
    }
}
