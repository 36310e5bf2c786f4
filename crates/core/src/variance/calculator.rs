//! Per-record variance calculation.

use crate::record::{AnalyzedRecord, TransactionRecord};

use super::ratio::safe_divide;

/// Attaches variance fields to transaction records.
pub struct VarianceCalculator;

impl VarianceCalculator {
    /// Computes variance for a single record.
    ///
    /// `variance = actual - budgeted` (positive = overspend) and
    /// `variance_fraction = safe_divide(variance, budgeted)`.
    #[must_use]
    pub fn analyze(record: &TransactionRecord) -> AnalyzedRecord {
        let variance = record.actual_amount - record.budgeted_amount;
        let variance_fraction = safe_divide(variance, record.budgeted_amount);

        AnalyzedRecord {
            record: record.clone(),
            variance,
            variance_fraction,
        }
    }

    /// Computes variance for every record, preserving count and order.
    ///
    /// The input is left untouched; a new record set is returned.
    #[must_use]
    pub fn calculate(records: &[TransactionRecord]) -> Vec<AnalyzedRecord> {
        records.iter().map(Self::analyze).collect()
    }
}
