// ═══════════════════════════════════════════════════════════════════
// Model Tests — Session, TransactionEntry, OcrDraft, AnalyticsFilter,
// categories, Notification
// ═══════════════════════════════════════════════════════════════════

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use serde_json::Value;

use finance_tracker_client::models::category::{
    categories_for, display_name, ExpenseCategory, IncomeCategory,
};
use finance_tracker_client::models::entry::{OcrDraft, TransactionEntry, TransactionType};
use finance_tracker_client::models::filter::{AnalyticsFilter, TimelineGranularity};
use finance_tracker_client::models::notification::{Notification, NotificationKind};
use finance_tracker_client::models::session::Session;

// ═══════════════════════════════════════════════════════════════════
// Session
// ═══════════════════════════════════════════════════════════════════

mod session {
    use super::*;

    #[test]
    fn holds_all_three_fields() {
        let s = Session::new("tok", "u-1", "a@b.com");
        assert_eq!(s.token, "tok");
        assert_eq!(s.user_id, "u-1");
        assert_eq!(s.user_email, "a@b.com");
    }
}

// ═══════════════════════════════════════════════════════════════════
// TransactionEntry — category/type invariant
// ═══════════════════════════════════════════════════════════════════

mod entry {
    use super::*;

    fn income_entry() -> TransactionEntry {
        TransactionEntry::new(
            "u-1",
            "Salary",
            50_000.0,
            TransactionType::Income,
            "INR",
            None,
            "SALARY",
        )
    }

    fn expense_entry() -> TransactionEntry {
        TransactionEntry::new(
            "u-1",
            "Groceries",
            1_200.0,
            TransactionType::Expense,
            "INR",
            Some("weekly shop".into()),
            "FOOD_AND_DINING",
        )
    }

    #[test]
    fn income_routes_category_to_income_field() {
        let e = income_entry();
        assert_eq!(e.income_category.as_deref(), Some("SALARY"));
        assert!(e.expense_category.is_none());
        assert!(e.validate().is_ok());
    }

    #[test]
    fn expense_routes_category_to_expense_field() {
        let e = expense_entry();
        assert_eq!(e.expense_category.as_deref(), Some("FOOD_AND_DINING"));
        assert!(e.income_category.is_none());
        assert!(e.validate().is_ok());
    }

    #[test]
    fn income_payload_omits_expense_category() {
        let json = serde_json::to_value(income_entry()).unwrap();
        assert_eq!(json["type"], "INCOME");
        assert_eq!(json["incomeCategory"], "SALARY");
        assert!(json.get("expenseCategory").is_none());
        assert_eq!(json["userId"], "u-1");
    }

    #[test]
    fn expense_payload_omits_income_category() {
        let json = serde_json::to_value(expense_entry()).unwrap();
        assert_eq!(json["type"], "EXPENSE");
        assert_eq!(json["expenseCategory"], "FOOD_AND_DINING");
        assert!(json.get("incomeCategory").is_none());
    }

    #[test]
    fn mismatched_category_field_fails_validation() {
        let mut e = income_entry();
        e.expense_category = Some("TRAVEL".into());
        assert!(e.validate().is_err());

        let mut e = income_entry();
        e.income_category = None;
        assert!(e.validate().is_err());
    }

    #[test]
    fn non_positive_amount_fails_validation() {
        let mut e = expense_entry();
        e.amount = 0.0;
        assert!(e.validate().is_err());
        e.amount = -5.0;
        assert!(e.validate().is_err());
    }

    #[test]
    fn blank_name_fails_validation() {
        let mut e = expense_entry();
        e.name = "   ".into();
        assert!(e.validate().is_err());
    }

    #[test]
    fn deserializes_server_entry() {
        let raw = r#"{
            "userId": "u-9",
            "name": "Rent",
            "amount": 15000.0,
            "type": "EXPENSE",
            "currency": "INR",
            "expenseCategory": "BILLS_AND_UTILITIES"
        }"#;
        let e: TransactionEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(e.entry_type, TransactionType::Expense);
        assert_eq!(e.category(), Some("BILLS_AND_UTILITIES"));
        assert!(e.description.is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
// TransactionType — loose parsing
// ═══════════════════════════════════════════════════════════════════

mod transaction_type {
    use super::*;

    #[test]
    fn parses_any_casing() {
        assert_eq!(
            TransactionType::parse_loose("expense"),
            Some(TransactionType::Expense)
        );
        assert_eq!(
            TransactionType::parse_loose("Income"),
            Some(TransactionType::Income)
        );
        assert_eq!(
            TransactionType::parse_loose(" EXPENSE "),
            Some(TransactionType::Expense)
        );
    }

    #[test]
    fn rejects_unknown_strings() {
        assert_eq!(TransactionType::parse_loose("transfer"), None);
        assert_eq!(TransactionType::parse_loose(""), None);
    }
}

// ═══════════════════════════════════════════════════════════════════
// OcrDraft
// ═══════════════════════════════════════════════════════════════════

mod ocr_draft {
    use super::*;

    fn draft() -> OcrDraft {
        OcrDraft {
            name: Some("Cafe Bill".into()),
            amount: Some(450.0),
            entry_type: Some("expense".into()),
            expense_category: Some("FOOD_AND_DINING".into()),
            ..OcrDraft::default()
        }
    }

    #[test]
    fn normalizes_lowercase_type() {
        assert_eq!(draft().normalized_type(), Some(TransactionType::Expense));
    }

    #[test]
    fn currency_defaults_to_inr() {
        assert_eq!(draft().currency_or_default(), "INR");
        let mut d = draft();
        d.currency = Some("USD".into());
        assert_eq!(d.currency_or_default(), "USD");
    }

    #[test]
    fn into_entry_enforces_category_invariant() {
        let entry = draft().into_entry("u-1").unwrap();
        assert_eq!(entry.entry_type, TransactionType::Expense);
        assert_eq!(entry.expense_category.as_deref(), Some("FOOD_AND_DINING"));
        assert!(entry.income_category.is_none());
        assert_eq!(entry.user_id, "u-1");
        assert_eq!(entry.currency, "INR");
    }

    #[test]
    fn into_entry_rejects_missing_type() {
        let mut d = draft();
        d.entry_type = None;
        assert!(d.into_entry("u-1").is_err());

        let mut d = draft();
        d.entry_type = Some("maybe".into());
        assert!(d.into_entry("u-1").is_err());
    }

    #[test]
    fn deserializes_partial_ocr_response() {
        let raw = r#"{"amount": 120.5, "type": "EXPENSE"}"#;
        let d: OcrDraft = serde_json::from_str(raw).unwrap();
        assert_eq!(d.amount, Some(120.5));
        assert!(d.name.is_none());
        assert_eq!(d.normalized_type(), Some(TransactionType::Expense));
    }
}

// ═══════════════════════════════════════════════════════════════════
// AnalyticsFilter
// ═══════════════════════════════════════════════════════════════════

mod filter {
    use super::*;

    #[test]
    fn minimal_filter_sends_only_user_id() {
        let pairs = AnalyticsFilter::for_user("u-1").to_query_pairs();
        assert_eq!(pairs, vec![("userId", "u-1".to_string())]);
    }

    #[test]
    fn dates_widen_to_full_day_timestamps() {
        let mut f = AnalyticsFilter::for_user("u-1");
        f.start_date = Some(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        f.end_date = Some(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());

        let pairs = f.to_query_pairs();
        assert!(pairs.contains(&("startDate", "2025-03-01T00:00:00".to_string())));
        assert!(pairs.contains(&("endDate", "2025-03-31T23:59:59".to_string())));
    }

    #[test]
    fn optional_params_are_included_when_set() {
        let f = AnalyticsFilter::for_user("u-1")
            .with_transaction_filter(TransactionType::Expense)
            .with_timeline(TimelineGranularity::Monthly);
        let pairs = f.to_query_pairs();
        assert!(pairs.contains(&("transactionFilter", "EXPENSE".to_string())));
        assert!(pairs.contains(&("timelineType", "MONTHLY".to_string())));
    }

    #[test]
    fn current_month_spans_first_to_last_day() {
        let today = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
        let f = AnalyticsFilter::current_month("u-1", today);
        assert_eq!(f.start_date, NaiveDate::from_ymd_opt(2025, 2, 1));
        assert_eq!(f.end_date, NaiveDate::from_ymd_opt(2025, 2, 28));
    }

    #[test]
    fn current_month_handles_december() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let f = AnalyticsFilter::current_month("u-1", today);
        assert_eq!(f.start_date, NaiveDate::from_ymd_opt(2024, 12, 1));
        assert_eq!(f.end_date, NaiveDate::from_ymd_opt(2024, 12, 31));
    }

    #[test]
    fn current_month_handles_leap_february() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let f = AnalyticsFilter::current_month("u-1", today);
        assert_eq!(f.end_date, NaiveDate::from_ymd_opt(2024, 2, 29));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Categories
// ═══════════════════════════════════════════════════════════════════

mod categories {
    use super::*;

    #[test]
    fn income_listing_matches_upsert_service() {
        let names = categories_for(TransactionType::Income);
        assert_eq!(names.len(), 8);
        assert!(names.contains(&"SALARY"));
        assert!(names.contains(&"RENTAL_INCOME"));
    }

    #[test]
    fn expense_listing_matches_upsert_service() {
        let names = categories_for(TransactionType::Expense);
        assert_eq!(names.len(), 9);
        assert!(names.contains(&"FOOD_AND_DINING"));
        assert!(names.contains(&"BILLS_AND_UTILITIES"));
    }

    #[test]
    fn wire_names_serialize_screaming_snake() {
        let v: Value = serde_json::to_value(IncomeCategory::RentalIncome).unwrap();
        assert_eq!(v, "RENTAL_INCOME");
        let v: Value = serde_json::to_value(ExpenseCategory::FoodAndDining).unwrap();
        assert_eq!(v, "FOOD_AND_DINING");
    }

    #[test]
    fn display_name_replaces_underscores() {
        assert_eq!(display_name("FOOD_AND_DINING"), "FOOD AND DINING");
        assert_eq!(display_name("SALARY"), "SALARY");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Notification — polled expiry
// ═══════════════════════════════════════════════════════════════════

mod notification {
    use super::*;

    #[test]
    fn success_expires_after_three_seconds() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let n = Notification::success("saved", now);
        assert_eq!(n.kind, NotificationKind::Success);
        assert!(!n.is_expired(now + Duration::seconds(2)));
        assert!(n.is_expired(now + Duration::seconds(3)));
    }

    #[test]
    fn error_expires_after_five_seconds() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let n = Notification::error("boom", now);
        assert_eq!(n.kind, NotificationKind::Error);
        assert!(!n.is_expired(now + Duration::seconds(4)));
        assert!(n.is_expired(now + Duration::seconds(5)));
    }
}
