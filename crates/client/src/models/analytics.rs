use serde::{Deserialize, Serialize};

use super::entry::TransactionEntry;

/// Resolution outcome for one chart's worth of payload data.
///
/// The API emits category/timeline breakdowns in several shapes; the
/// normalizer collapses them into exactly one of these at the boundary so
/// downstream code never probes raw JSON again.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartInput<T> {
    /// Recognized shape with at least one point.
    Data(T),
    /// Recognized shape, nothing in it — render a placeholder, not a chart.
    Empty,
    /// None of the known shapes matched — skip rendering entirely.
    Unrecognized,
}

impl<T> ChartInput<T> {
    pub fn as_data(&self) -> Option<&T> {
        match self {
            ChartInput::Data(data) => Some(data),
            _ => None,
        }
    }
}

/// One slice of the category breakdown pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub label: String,
    pub value: f64,
    /// Hex color, either taken from the payload or assigned from the palette.
    pub color: String,
}

/// One bucket of the income/expense timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub label: String,
    pub income: f64,
    pub expense: f64,
}

/// Stable internal view of one comprehensive analytics response.
///
/// Derived entirely from the raw payload by the normalizer; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAnalytics {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Always `total_income - total_expenses`, never read from the payload.
    pub net_balance: f64,
    pub transaction_count: u64,
    pub category_breakdown: ChartInput<Vec<CategorySlice>>,
    pub timeline_series: ChartInput<Vec<TimelinePoint>>,
    pub recent_transactions: Vec<TransactionEntry>,
}

impl NormalizedAnalytics {
    /// Display class for the net balance stat ("income" when non-negative,
    /// "expense" otherwise), matching the stat-card styling contract.
    pub fn balance_class(&self) -> &'static str {
        if self.net_balance >= 0.0 {
            "income"
        } else {
            "expense"
        }
    }

    /// The dashboard shows at most `n` recent transactions.
    pub fn recent(&self, n: usize) -> &[TransactionEntry] {
        &self.recent_transactions[..self.recent_transactions.len().min(n)]
    }
}
