//! Department summary types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals for one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    /// Department name, the grouping key.
    #[serde(rename = "Department")]
    pub department: String,
    /// Sum of budgeted amounts.
    #[serde(rename = "Budgeted Amount")]
    pub budgeted_total: Decimal,
    /// Sum of actual amounts.
    #[serde(rename = "Actual Amount")]
    pub actual_total: Decimal,
    /// Sum of per-record variances.
    #[serde(rename = "Variance")]
    pub variance_total: Decimal,
    /// `safe_divide(variance_total, budgeted_total)`.
    #[serde(rename = "Variance %")]
    pub variance_fraction: Decimal,
    /// Number of records in the department.
    #[serde(skip)]
    pub record_count: usize,
}
