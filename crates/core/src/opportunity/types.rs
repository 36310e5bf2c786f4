//! Opportunity types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::record::AnalyzedRecord;

/// Kind of savings opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpportunityType {
    /// Records far over budget.
    HighVarianceOutlier,
    /// Payments repeated with the same date, vendor and amount.
    DuplicatePayments,
}

impl OpportunityType {
    /// Human-readable label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighVarianceOutlier => "High Variance Outlier",
            Self::DuplicatePayments => "Potential Duplicate Payments",
        }
    }
}

impl std::fmt::Display for OpportunityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Excerpt of a record flagged as a high variance outlier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlierDetail {
    /// Posting date.
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Department.
    #[serde(rename = "Department")]
    pub department: String,
    /// Description.
    #[serde(rename = "Description")]
    pub description: String,
    /// Variance of the record.
    #[serde(rename = "Variance")]
    pub variance: Decimal,
}

impl From<&AnalyzedRecord> for OutlierDetail {
    fn from(analyzed: &AnalyzedRecord) -> Self {
        Self {
            date: analyzed.record.date,
            department: analyzed.record.department.clone(),
            description: analyzed.record.description.clone(),
            variance: analyzed.variance,
        }
    }
}

/// Excerpt of a record that belongs to a duplicate cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateDetail {
    /// Posting date.
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Vendor.
    #[serde(rename = "Vendor")]
    pub vendor: String,
    /// Description.
    #[serde(rename = "Description")]
    pub description: String,
    /// Amount paid.
    #[serde(rename = "Actual Amount")]
    pub actual_amount: Decimal,
}

impl From<&AnalyzedRecord> for DuplicateDetail {
    fn from(analyzed: &AnalyzedRecord) -> Self {
        Self {
            date: analyzed.record.date,
            vendor: analyzed.record.vendor.clone(),
            description: analyzed.record.description.clone(),
            actual_amount: analyzed.record.actual_amount,
        }
    }
}

/// One detail row of an opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpportunityDetail {
    /// Outlier excerpt.
    Outlier(OutlierDetail),
    /// Duplicate payment excerpt.
    Duplicate(DuplicateDetail),
}

/// A flagged category of potential savings.
///
/// Never constructed with `count == 0`; a rule without matches emits nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    /// Which rule produced this entry.
    #[serde(rename = "Type")]
    pub kind: OpportunityType,
    /// Outliers: flagged records. Duplicates: removable payments.
    #[serde(rename = "Count")]
    pub count: usize,
    /// Estimated recoverable amount.
    #[serde(rename = "Potential Savings")]
    pub potential_savings: Decimal,
    /// Flagged record excerpts, in detection order.
    #[serde(rename = "Details")]
    pub details: Vec<OpportunityDetail>,
}
