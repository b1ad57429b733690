use chrono::{Datelike, NaiveDate};

use super::entry::TransactionType;

/// Bucketing granularity for the timeline trends chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineGranularity {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl TimelineGranularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineGranularity::Daily => "DAILY",
            TimelineGranularity::Weekly => "WEEKLY",
            TimelineGranularity::Monthly => "MONTHLY",
            TimelineGranularity::Yearly => "YEARLY",
        }
    }
}

/// Query parameters for the comprehensive analytics endpoint.
///
/// `start_date`/`end_date` are calendar dates; they are widened to full-day
/// timestamps (`T00:00:00` / `T23:59:59`) when serialized to the query
/// string, so a one-day range still covers the whole day.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsFilter {
    pub user_id: String,
    pub transaction_filter: Option<TransactionType>,
    pub timeline: Option<TimelineGranularity>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl AnalyticsFilter {
    /// Filter with no date range or type constraints (the dashboard view).
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            transaction_filter: None,
            timeline: None,
            start_date: None,
            end_date: None,
        }
    }

    /// Default analytics filter: first day through last day of the month
    /// containing `today`.
    pub fn current_month(user_id: impl Into<String>, today: NaiveDate) -> Self {
        let first = today.with_day(1).unwrap_or(today);
        // Last day of the month = day before the first of the next month.
        let last = first
            .checked_add_months(chrono::Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(today);
        Self {
            user_id: user_id.into(),
            transaction_filter: None,
            timeline: None,
            start_date: Some(first),
            end_date: Some(last),
        }
    }

    pub fn with_transaction_filter(mut self, filter: TransactionType) -> Self {
        self.transaction_filter = Some(filter);
        self
    }

    pub fn with_timeline(mut self, timeline: TimelineGranularity) -> Self {
        self.timeline = Some(timeline);
        self
    }

    /// Query pairs in the exact shape the analytics service expects.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("userId", self.user_id.clone())];
        if let Some(filter) = self.transaction_filter {
            pairs.push(("transactionFilter", filter.as_str().to_string()));
        }
        if let Some(timeline) = self.timeline {
            pairs.push(("timelineType", timeline.as_str().to_string()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("startDate", format!("{}T00:00:00", start.format("%Y-%m-%d"))));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", format!("{}T23:59:59", end.format("%Y-%m-%d"))));
        }
        pairs
    }
}
