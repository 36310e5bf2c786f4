//! Department aggregation.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::types::DepartmentSummary;
use crate::record::AnalyzedRecord;
use crate::variance::safe_divide;

/// Rolls analyzed records up by department.
pub struct DepartmentAggregator;

impl DepartmentAggregator {
    /// Produces one summary per distinct department.
    ///
    /// Departments match on exact string equality. The fraction is recomputed
    /// from the summed totals rather than averaged over rows, so small
    /// high-fraction rows do not dominate. Output is sorted by
    /// `variance_total` descending; ties keep first-appearance order.
    #[must_use]
    pub fn aggregate(records: &[AnalyzedRecord]) -> Vec<DepartmentSummary> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut summaries: Vec<DepartmentSummary> = Vec::new();

        for analyzed in records {
            let department = analyzed.record.department.as_str();
            let slot = *index.entry(department).or_insert_with(|| {
                summaries.push(DepartmentSummary {
                    department: department.to_string(),
                    budgeted_total: Decimal::ZERO,
                    actual_total: Decimal::ZERO,
                    variance_total: Decimal::ZERO,
                    variance_fraction: Decimal::ZERO,
                    record_count: 0,
                });
                summaries.len() - 1
            });

            let summary = &mut summaries[slot];
            summary.budgeted_total += analyzed.record.budgeted_amount;
            summary.actual_total += analyzed.record.actual_amount;
            summary.variance_total += analyzed.variance;
            summary.record_count += 1;
        }

        for summary in &mut summaries {
            summary.variance_fraction = safe_divide(summary.variance_total, summary.budgeted_total);
        }

        // Stable sort keeps first-appearance order for equal variances.
        summaries.sort_by(|a, b| b.variance_total.cmp(&a.variance_total));
        summaries
    }
}
