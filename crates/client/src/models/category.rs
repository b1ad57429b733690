use serde::{Deserialize, Serialize};
use std::fmt;

use super::entry::TransactionType;

/// Income categories recognized by the upsert service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncomeCategory {
    Salary,
    Business,
    Investments,
    Gifts,
    Freelance,
    RentalIncome,
    Interest,
    Others,
}

/// Expense categories recognized by the upsert service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    FoodAndDining,
    Transportation,
    Shopping,
    Entertainment,
    BillsAndUtilities,
    Healthcare,
    Travel,
    Education,
    Others,
}

impl IncomeCategory {
    pub const ALL: [IncomeCategory; 8] = [
        IncomeCategory::Salary,
        IncomeCategory::Business,
        IncomeCategory::Investments,
        IncomeCategory::Gifts,
        IncomeCategory::Freelance,
        IncomeCategory::RentalIncome,
        IncomeCategory::Interest,
        IncomeCategory::Others,
    ];

    /// Wire name, e.g. `RENTAL_INCOME`.
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeCategory::Salary => "SALARY",
            IncomeCategory::Business => "BUSINESS",
            IncomeCategory::Investments => "INVESTMENTS",
            IncomeCategory::Gifts => "GIFTS",
            IncomeCategory::Freelance => "FREELANCE",
            IncomeCategory::RentalIncome => "RENTAL_INCOME",
            IncomeCategory::Interest => "INTEREST",
            IncomeCategory::Others => "OTHERS",
        }
    }
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 9] = [
        ExpenseCategory::FoodAndDining,
        ExpenseCategory::Transportation,
        ExpenseCategory::Shopping,
        ExpenseCategory::Entertainment,
        ExpenseCategory::BillsAndUtilities,
        ExpenseCategory::Healthcare,
        ExpenseCategory::Travel,
        ExpenseCategory::Education,
        ExpenseCategory::Others,
    ];

    /// Wire name, e.g. `FOOD_AND_DINING`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::FoodAndDining => "FOOD_AND_DINING",
            ExpenseCategory::Transportation => "TRANSPORTATION",
            ExpenseCategory::Shopping => "SHOPPING",
            ExpenseCategory::Entertainment => "ENTERTAINMENT",
            ExpenseCategory::BillsAndUtilities => "BILLS_AND_UTILITIES",
            ExpenseCategory::Healthcare => "HEALTHCARE",
            ExpenseCategory::Travel => "TRAVEL",
            ExpenseCategory::Education => "EDUCATION",
            ExpenseCategory::Others => "OTHERS",
        }
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category wire names selectable for a given transaction type.
/// The entry form repopulates its category dropdown from this list
/// whenever the type selection changes.
pub fn categories_for(transaction_type: TransactionType) -> Vec<&'static str> {
    match transaction_type {
        TransactionType::Income => IncomeCategory::ALL.iter().map(|c| c.as_str()).collect(),
        TransactionType::Expense => ExpenseCategory::ALL.iter().map(|c| c.as_str()).collect(),
    }
}

/// Human-readable label for a category wire name (`FOOD_AND_DINING` → `FOOD AND DINING`).
pub fn display_name(wire_name: &str) -> String {
    wire_name.replace('_', " ")
}
