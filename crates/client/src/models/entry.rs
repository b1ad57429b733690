use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ClientError;

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }

    /// Parse a loosely-cased type string ("expense", "Income", "EXPENSE"...)
    /// as emitted by the OCR service.
    pub fn parse_loose(s: &str) -> Option<TransactionType> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(TransactionType::Income),
            "expense" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single transaction as sent to (and returned by) the upsert service.
///
/// Exactly one of `income_category` / `expense_category` is populated,
/// chosen by `entry_type`; the other is omitted from the serialized payload.
/// Construct through [`TransactionEntry::new`] to get that invariant for free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEntry {
    pub user_id: String,

    pub name: String,

    pub amount: f64,

    #[serde(rename = "type")]
    pub entry_type: TransactionType,

    pub currency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_category: Option<String>,
}

impl TransactionEntry {
    /// Build an entry, routing `category` into the field matching `entry_type`.
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        entry_type: TransactionType,
        currency: impl Into<String>,
        description: Option<String>,
        category: impl Into<String>,
    ) -> Self {
        let category = category.into();
        let (income_category, expense_category) = match entry_type {
            TransactionType::Income => (Some(category), None),
            TransactionType::Expense => (None, Some(category)),
        };
        Self {
            user_id: user_id.into(),
            name: name.into(),
            amount,
            entry_type,
            currency: currency.into(),
            description,
            income_category,
            expense_category,
        }
    }

    /// The populated category, regardless of type.
    pub fn category(&self) -> Option<&str> {
        self.income_category
            .as_deref()
            .or(self.expense_category.as_deref())
    }

    /// Check the category/type invariant before sending the entry anywhere.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.name.trim().is_empty() {
            return Err(ClientError::Validation("Entry name is required".into()));
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ClientError::Validation(format!(
                "Entry amount must be a positive number, got {}",
                self.amount
            )));
        }
        match self.entry_type {
            TransactionType::Income => {
                if self.income_category.is_none() || self.expense_category.is_some() {
                    return Err(ClientError::Validation(
                        "INCOME entries must carry incomeCategory and no expenseCategory".into(),
                    ));
                }
            }
            TransactionType::Expense => {
                if self.expense_category.is_none() || self.income_category.is_some() {
                    return Err(ClientError::Validation(
                        "EXPENSE entries must carry expenseCategory and no incomeCategory".into(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// A transaction proposal extracted from an uploaded bill.
///
/// Everything is optional — the OCR service fills in what it could read and
/// the user reviews/edits before confirming. Nothing is persisted until the
/// draft is explicitly converted into a [`TransactionEntry`] and submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrDraft {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub amount: Option<f64>,

    /// Raw type string as extracted; may be any casing ("expense", "INCOME"...).
    #[serde(default, rename = "type")]
    pub entry_type: Option<String>,

    #[serde(default)]
    pub income_category: Option<String>,

    #[serde(default)]
    pub expense_category: Option<String>,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl OcrDraft {
    /// Canonical transaction type, if the extracted string is recognizable.
    pub fn normalized_type(&self) -> Option<TransactionType> {
        self.entry_type
            .as_deref()
            .and_then(TransactionType::parse_loose)
    }

    /// Extracted category, whichever field the OCR service used.
    pub fn category(&self) -> Option<&str> {
        self.expense_category
            .as_deref()
            .or(self.income_category.as_deref())
    }

    /// Currency with the upstream default applied.
    pub fn currency_or_default(&self) -> &str {
        self.currency.as_deref().unwrap_or("INR")
    }

    /// Convert the reviewed draft into a submittable entry.
    ///
    /// Fails with a validation error when the type is missing/unrecognized —
    /// the one field the user must get right before confirming.
    pub fn into_entry(self, user_id: &str) -> Result<TransactionEntry, ClientError> {
        let entry_type = self.normalized_type().ok_or_else(|| {
            ClientError::Validation(
                "Please select a valid transaction type (EXPENSE or INCOME)".into(),
            )
        })?;
        let category = self.category().unwrap_or_default().to_string();
        let entry = TransactionEntry::new(
            user_id,
            self.name.clone().unwrap_or_default(),
            self.amount.unwrap_or(0.0),
            entry_type,
            self.currency_or_default(),
            self.description.clone(),
            category,
        );
        entry.validate()?;
        Ok(entry)
    }
}
