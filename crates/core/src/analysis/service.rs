//! Analysis pipeline.

use crate::department::DepartmentAggregator;
use crate::opportunity::OpportunityDetector;
use crate::record::{AnalyzedRecord, TransactionRecord};
use crate::variance::{VarianceCalculator, safe_divide};

use super::types::{AnalysisReport, AnalysisTotals};

/// Runs variance, department rollup and opportunity detection in sequence.
pub struct AnalysisService;

impl AnalysisService {
    /// Analyzes a ledger. Empty input yields empty outputs and zero totals.
    #[must_use]
    pub fn analyze(records: &[TransactionRecord]) -> AnalysisReport {
        let analyzed = VarianceCalculator::calculate(records);
        let departments = DepartmentAggregator::aggregate(&analyzed);
        let opportunities = OpportunityDetector::detect(&analyzed);

        let mut totals = Self::totals(&analyzed);
        totals.potential_savings = opportunities.iter().map(|o| o.potential_savings).sum();

        AnalysisReport {
            records: analyzed,
            departments,
            opportunities,
            totals,
        }
    }

    fn totals(records: &[AnalyzedRecord]) -> AnalysisTotals {
        let mut totals = AnalysisTotals {
            record_count: records.len(),
            ..AnalysisTotals::default()
        };

        for analyzed in records {
            totals.budgeted_total += analyzed.record.budgeted_amount;
            totals.actual_total += analyzed.record.actual_amount;
            totals.variance_total += analyzed.variance;
        }
        totals.variance_fraction = safe_divide(totals.variance_total, totals.budgeted_total);

        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opportunity::OpportunityType;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn sample_ledger() -> Vec<TransactionRecord> {
        let jan = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
        vec![
            TransactionRecord::new(jan(5), "Aero", "Vendor A", "Parts", dec!(10000), dec!(17000)),
            TransactionRecord::new(jan(5), "Aero", "Vendor A", "Parts", dec!(10000), dec!(17000)),
            TransactionRecord::new(
                jan(6),
                "Logistics",
                "Vendor B",
                "Shipping",
                dec!(20000),
                dec!(19000),
            ),
        ]
    }

    #[test]
    fn test_analyze_sample_ledger() {
        let report = AnalysisService::analyze(&sample_ledger());

        assert_eq!(report.records.len(), 3);
        assert_eq!(report.records[0].variance, dec!(7000));
        assert_eq!(report.records[0].variance_fraction, dec!(0.7));

        assert_eq!(report.departments[0].department, "Aero");
        assert_eq!(report.departments[0].actual_total, dec!(34000));

        let kinds: Vec<OpportunityType> = report.opportunities.iter().map(|o| o.kind).collect();
        assert_eq!(
            kinds,
            vec![
                OpportunityType::HighVarianceOutlier,
                OpportunityType::DuplicatePayments
            ]
        );

        assert_eq!(report.totals.record_count, 3);
        assert_eq!(report.totals.budgeted_total, dec!(40000));
        assert_eq!(report.totals.actual_total, dec!(53000));
        assert_eq!(report.totals.variance_total, dec!(13000));
        assert_eq!(report.totals.variance_fraction, dec!(0.325));
        assert_eq!(report.totals.potential_savings, dec!(31000));
    }

    #[test]
    fn test_analyze_empty_ledger() {
        let report = AnalysisService::analyze(&[]);

        assert!(report.is_empty());
        assert!(report.departments.is_empty());
        assert!(report.opportunities.is_empty());
        assert_eq!(report.totals, AnalysisTotals::default());
        assert_eq!(report.totals.variance_fraction, Decimal::ZERO);
    }

    #[test]
    fn test_report_serializes_with_column_names() {
        let report = AnalysisService::analyze(&sample_ledger());
        let json = serde_json::to_value(&report).unwrap();

        let first = &json["records"][0];
        assert_eq!(first["Department"], "Aero");
        assert_eq!(first["Variance"], "7000");
        assert!(first.get("Variance %").is_some());
        assert!(first.get("Expense Type").is_none());

        assert_eq!(json["departments"][0]["Department"], "Aero");
        assert_eq!(json["opportunities"][0]["Type"], "HighVarianceOutlier");
        assert_eq!(json["opportunities"][1]["Count"], 1);
        assert_eq!(json["opportunities"][1]["Details"][0]["Vendor"], "Vendor A");
    }
}
