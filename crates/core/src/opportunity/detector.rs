//! Savings opportunity detector.

use rust_decimal::Decimal;

use super::duplicate::DuplicateCluster;
use super::types::{Opportunity, OpportunityDetail, OpportunityType, OutlierDetail};
use crate::record::AnalyzedRecord;

/// Minimum variance fraction for a budgeted record to be an outlier (exclusive).
pub const HIGH_VARIANCE_FRACTION: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Minimum absolute variance for any outlier (exclusive).
pub const HIGH_VARIANCE_AMOUNT: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

/// Runs the outlier and duplicate rules over analyzed records.
pub struct OpportunityDetector;

impl OpportunityDetector {
    /// Detects all opportunities.
    ///
    /// Returns the outlier entry first and the duplicate entry second; a rule
    /// with no matches contributes nothing.
    #[must_use]
    pub fn detect(records: &[AnalyzedRecord]) -> Vec<Opportunity> {
        [Self::high_variance_outliers(records), Self::duplicate_payments(records)]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Returns true if the record is a high variance outlier.
    ///
    /// Both thresholds must hold for budgeted records. An unbudgeted record has
    /// a zero fraction by the safe-divide policy, so only its amount counts.
    #[must_use]
    pub fn is_high_variance_outlier(analyzed: &AnalyzedRecord) -> bool {
        let budgeted = analyzed.record.budgeted_amount;
        let variance = analyzed.variance;

        if variance <= HIGH_VARIANCE_AMOUNT {
            return false;
        }

        if budgeted > Decimal::ZERO {
            analyzed.variance_fraction > HIGH_VARIANCE_FRACTION
        } else {
            budgeted.is_zero()
        }
    }

    /// Rule A: large overspends.
    ///
    /// Savings are the summed variance of the flagged records.
    #[must_use]
    pub fn high_variance_outliers(records: &[AnalyzedRecord]) -> Option<Opportunity> {
        let flagged: Vec<&AnalyzedRecord> = records
            .iter()
            .filter(|r| Self::is_high_variance_outlier(r))
            .collect();

        if flagged.is_empty() {
            return None;
        }

        Some(Opportunity {
            kind: OpportunityType::HighVarianceOutlier,
            count: flagged.len(),
            potential_savings: flagged.iter().map(|r| r.variance).sum(),
            details: flagged
                .into_iter()
                .map(|r| OpportunityDetail::Outlier(OutlierDetail::from(r)))
                .collect(),
        })
    }

    /// Rule B: repeated payments with the same date, vendor and amount.
    ///
    /// `count` is the number of removable payments across all clusters and
    /// savings are, per cluster, the total minus the largest payment. Details
    /// list every cluster member, cluster by cluster.
    #[must_use]
    pub fn duplicate_payments(records: &[AnalyzedRecord]) -> Option<Opportunity> {
        Self::from_clusters(DuplicateCluster::find_all(records))
    }

    /// Folds duplicate clusters into a single opportunity.
    #[must_use]
    pub fn from_clusters(clusters: Vec<DuplicateCluster>) -> Option<Opportunity> {
        let count: usize = clusters.iter().map(DuplicateCluster::removable).sum();
        if count == 0 {
            return None;
        }

        let potential_savings = clusters.iter().map(DuplicateCluster::savings).sum();
        let details = clusters
            .into_iter()
            .flat_map(|cluster| cluster.members)
            .map(OpportunityDetail::Duplicate)
            .collect();

        Some(Opportunity {
            kind: OpportunityType::DuplicatePayments,
            count,
            potential_savings,
            details,
        })
    }
}
