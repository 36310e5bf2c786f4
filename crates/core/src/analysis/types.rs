//! Analysis output types.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::department::DepartmentSummary;
use crate::opportunity::Opportunity;
use crate::record::AnalyzedRecord;

/// Everything the report renderer consumes.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Input records with variance attached, in input order.
    pub records: Vec<AnalyzedRecord>,
    /// Department rollup, sorted by variance descending.
    pub departments: Vec<DepartmentSummary>,
    /// Detected opportunities, outliers first.
    pub opportunities: Vec<Opportunity>,
    /// Ledger-wide totals.
    pub totals: AnalysisTotals,
}

/// Ledger-wide totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisTotals {
    /// Number of records analyzed.
    pub record_count: usize,
    /// Sum of budgeted amounts.
    pub budgeted_total: Decimal,
    /// Sum of actual amounts.
    pub actual_total: Decimal,
    /// Sum of variances.
    pub variance_total: Decimal,
    /// `safe_divide(variance_total, budgeted_total)`.
    pub variance_fraction: Decimal,
    /// Sum of potential savings over all opportunities.
    pub potential_savings: Decimal,
}

impl AnalysisReport {
    /// Returns true if the ledger had no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
