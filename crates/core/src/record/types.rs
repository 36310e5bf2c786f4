//! Transaction record types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One OPEX ledger line as produced by a record source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Posting date.
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Owning department (open set).
    #[serde(rename = "Department")]
    pub department: String,
    /// Optional expense category, carried through untouched.
    #[serde(rename = "Expense Type", default, skip_serializing_if = "Option::is_none")]
    pub expense_type: Option<String>,
    /// Paid vendor.
    #[serde(rename = "Vendor")]
    pub vendor: String,
    /// Free-text description.
    #[serde(rename = "Description")]
    pub description: String,
    /// Budgeted amount.
    #[serde(rename = "Budgeted Amount")]
    pub budgeted_amount: Decimal,
    /// Actual amount paid.
    #[serde(rename = "Actual Amount")]
    pub actual_amount: Decimal,
}

impl TransactionRecord {
    /// Creates a record without an expense type.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        department: impl Into<String>,
        vendor: impl Into<String>,
        description: impl Into<String>,
        budgeted_amount: Decimal,
        actual_amount: Decimal,
    ) -> Self {
        Self {
            date,
            department: department.into(),
            expense_type: None,
            vendor: vendor.into(),
            description: description.into(),
            budgeted_amount,
            actual_amount,
        }
    }

    /// Sets the expense type.
    #[must_use]
    pub fn with_expense_type(mut self, expense_type: impl Into<String>) -> Self {
        self.expense_type = Some(expense_type.into());
        self
    }
}

/// A transaction record with its derived variance fields attached.
///
/// Only the variance calculator builds these, so `variance` and
/// `variance_fraction` are always consistent with the wrapped record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedRecord {
    /// The source record, unchanged.
    #[serde(flatten)]
    pub record: TransactionRecord,
    /// `actual_amount - budgeted_amount`; positive means overspend.
    #[serde(rename = "Variance")]
    pub variance: Decimal,
    /// `variance / budgeted_amount` as a fraction, zero when unbudgeted.
    #[serde(rename = "Variance %")]
    pub variance_fraction: Decimal,
}

impl AnalyzedRecord {
    /// Returns true if the record had no budget.
    #[must_use]
    pub fn is_unbudgeted(&self) -> bool {
        self.record.budgeted_amount.is_zero()
    }
}
