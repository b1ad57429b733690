use serde_json::Value;
use tracing::warn;

use crate::models::analytics::{CategorySlice, ChartInput, NormalizedAnalytics, TimelinePoint};
use crate::models::entry::TransactionEntry;

/// Fixed chart color palette, cycled by slice index when the payload does
/// not carry its own `backgroundColor`.
pub const CHART_PALETTE: [&str; 12] = [
    "#667eea", "#764ba2", "#f093fb", "#f5576c", "#4facfe", "#00f2fe", "#43e97b", "#38f9d7",
    "#ffecd2", "#fcb69f", "#a8edea", "#fed6e3",
];

/// Key priority for the income total (the backend has emitted both casings).
const INCOME_KEYS: [&str; 2] = ["totalIncome", "totalincome"];
/// Key priority for the expense total (`totalExpense` is what the analytics
/// service actually writes; `totalExpenses` came from an older revision).
const EXPENSE_KEYS: [&str; 2] = ["totalExpenses", "totalExpense"];
/// Key priority for the transaction count.
const COUNT_KEYS: [&str; 2] = ["transactionCount", "transactioncount"];

/// Reconciles the analytics service's heterogeneous response shapes into
/// [`NormalizedAnalytics`].
///
/// The payload is probed once, here, at the boundary. Unknown shapes resolve
/// to [`ChartInput::Unrecognized`] with a logged diagnostic — a skipped
/// render, never an error.
pub struct ResponseNormalizer;

impl ResponseNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize one comprehensive analytics payload.
    pub fn normalize(&self, payload: &Value) -> NormalizedAnalytics {
        let total_income = resolve_total(payload, &INCOME_KEYS);
        let total_expenses = resolve_total(payload, &EXPENSE_KEYS);
        let transaction_count = resolve_total(payload, &COUNT_KEYS) as u64;

        NormalizedAnalytics {
            total_income,
            total_expenses,
            net_balance: total_income - total_expenses,
            transaction_count,
            category_breakdown: self.resolve_category(payload),
            timeline_series: self.resolve_timeline(payload),
            recent_transactions: resolve_recent(payload),
        }
    }

    /// Resolve the expense-by-category breakdown.
    ///
    /// Shapes, in probe order:
    /// 1. `expenseByCategory: {labels, datasets: [{data, backgroundColor?}]}`
    /// 2. `expenseByCategory: {labels, data}`
    /// 3. the whole payload is an array of `{category|label, amount|value}`
    pub fn resolve_category(&self, payload: &Value) -> ChartInput<Vec<CategorySlice>> {
        let by_category = payload.get("expenseByCategory");

        let (labels, values, colors) = if let Some(datasets) =
            by_category.and_then(|c| c.get("datasets")).and_then(Value::as_array)
        {
            let labels = string_array(by_category.and_then(|c| c.get("labels")));
            let first = datasets.first();
            let values = number_array(first.and_then(|d| d.get("data")));
            // Colors from the payload win; only generate when absent, so
            // re-normalizing an already-colored payload changes nothing.
            let colors = match first.and_then(|d| d.get("backgroundColor")) {
                Some(bg) if bg.is_array() => string_array(Some(bg)),
                _ => generate_colors(labels.len()),
            };
            (labels, values, colors)
        } else if let Some(container) = by_category {
            let labels = string_array(container.get("labels"));
            let values = number_array(container.get("data"));
            let colors = generate_colors(labels.len());
            (labels, values, colors)
        } else if let Some(items) = payload.as_array() {
            let labels: Vec<String> = items
                .iter()
                .map(|item| {
                    first_string(item, &["category", "label"])
                        .unwrap_or_default()
                        .to_string()
                })
                .collect();
            let values: Vec<f64> = items
                .iter()
                .map(|item| first_number(item, &["amount", "value"]))
                .collect();
            let colors = generate_colors(labels.len());
            (labels, values, colors)
        } else {
            warn!(target: "normalizer", "unknown category data format, skipping render");
            return ChartInput::Unrecognized;
        };

        if labels.is_empty() || values.is_empty() {
            return ChartInput::Empty;
        }

        let slices = labels
            .into_iter()
            .zip(values)
            .enumerate()
            .map(|(i, (label, value))| CategorySlice {
                label,
                value,
                color: colors
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| CHART_PALETTE[i % CHART_PALETTE.len()].to_string()),
            })
            .collect();
        ChartInput::Data(slices)
    }

    /// Resolve the income/expense timeline.
    ///
    /// Shapes mirror the category breakdown: `timelineTrends` with chart
    /// datasets, or the whole payload as an array of
    /// `{period|label, income, expense}` buckets.
    pub fn resolve_timeline(&self, payload: &Value) -> ChartInput<Vec<TimelinePoint>> {
        let trends = payload.get("timelineTrends");

        let (labels, income, expense) = if let Some(datasets) =
            trends.and_then(|t| t.get("datasets")).and_then(Value::as_array)
        {
            let labels = string_array(trends.and_then(|t| t.get("labels")));
            let income = dataset_by_label(datasets, &["Income"]);
            // The backend has labeled this dataset both "Expense" and
            // "Expenses" across revisions; accept either, preferring the
            // former. See DESIGN.md for the open-question decision.
            let expense = dataset_by_label(datasets, &["Expense", "Expenses"]);
            (labels, income, expense)
        } else if let Some(items) = payload.as_array() {
            let labels: Vec<String> = items
                .iter()
                .map(|item| {
                    first_string(item, &["period", "label"])
                        .unwrap_or_default()
                        .to_string()
                })
                .collect();
            let income: Vec<f64> = items
                .iter()
                .map(|item| first_number(item, &["income"]))
                .collect();
            let expense: Vec<f64> = items
                .iter()
                .map(|item| first_number(item, &["expense"]))
                .collect();
            (labels, income, expense)
        } else {
            warn!(target: "normalizer", "unknown timeline data format, skipping render");
            return ChartInput::Unrecognized;
        };

        if labels.is_empty() {
            return ChartInput::Empty;
        }

        let points = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| TimelinePoint {
                label,
                income: income.get(i).copied().unwrap_or(0.0),
                expense: expense.get(i).copied().unwrap_or(0.0),
            })
            .collect();
        ChartInput::Data(points)
    }
}

impl Default for ResponseNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors for `count` slices, cycling the palette by position.
pub fn generate_colors(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| CHART_PALETTE[i % CHART_PALETTE.len()].to_string())
        .collect()
}

// ── Raw payload probing helpers ─────────────────────────────────────

/// Try each key in priority order; first numeric (or numeric-string) value
/// wins, else 0.
fn resolve_total(payload: &Value, keys: &[&str]) -> f64 {
    for key in keys {
        if let Some(v) = payload.get(key) {
            if let Some(n) = as_number(v) {
                return n;
            }
        }
    }
    0.0
}

fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        // BigDecimal totals occasionally arrive serialized as strings.
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn string_array(v: Option<&Value>) -> Vec<String> {
    v.and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(str::to_string).unwrap_or_else(|| item.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

fn number_array(v: Option<&Value>) -> Vec<f64> {
    v.and_then(Value::as_array)
        .map(|items| items.iter().map(|item| as_number(item).unwrap_or(0.0)).collect())
        .unwrap_or_default()
}

fn first_string<'a>(item: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| item.get(key).and_then(Value::as_str))
}

fn first_number(item: &Value, keys: &[&str]) -> f64 {
    keys.iter()
        .find_map(|key| item.get(key).and_then(as_number))
        .unwrap_or(0.0)
}

/// Find a dataset by its `label`, trying each candidate in order, and return
/// its `data` array. Missing dataset → empty (charts render zeros).
fn dataset_by_label(datasets: &[Value], candidates: &[&str]) -> Vec<f64> {
    for candidate in candidates {
        let found = datasets.iter().find(|d| {
            d.get("label").and_then(Value::as_str) == Some(candidate)
        });
        if let Some(dataset) = found {
            return number_array(dataset.get("data"));
        }
    }
    Vec::new()
}

/// Recent transactions deserialize leniently: a shape mismatch yields an
/// empty list, not an error.
fn resolve_recent(payload: &Value) -> Vec<TransactionEntry> {
    payload
        .get("recentTransactions")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}
