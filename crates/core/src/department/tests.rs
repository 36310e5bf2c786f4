//! Tests for department aggregation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::DepartmentAggregator;
use crate::record::{AnalyzedRecord, TransactionRecord};
use crate::variance::{VarianceCalculator, safe_divide};

fn analyzed(department: &str, budgeted: Decimal, actual: Decimal) -> AnalyzedRecord {
    VarianceCalculator::analyze(&TransactionRecord::new(
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        department,
        "Vendor",
        "Line",
        budgeted,
        actual,
    ))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Totals equal per-row sums and the fraction is recomputed from totals.
    #[test]
    fn prop_totals_match_row_sums(
        rows in prop::collection::vec(
            (0usize..4, 0i64..10_000_000i64, 0i64..10_000_000i64),
            0..60,
        ),
    ) {
        let names = ["Aero", "IT", "Logistics", "Chassis"];
        let records: Vec<AnalyzedRecord> = rows
            .iter()
            .map(|(d, b, a)| analyzed(names[*d], Decimal::new(*b, 2), Decimal::new(*a, 2)))
            .collect();

        let summaries = DepartmentAggregator::aggregate(&records);

        let distinct: std::collections::HashSet<&str> =
            records.iter().map(|r| r.record.department.as_str()).collect();
        prop_assert_eq!(summaries.len(), distinct.len());

        for summary in &summaries {
            let rows: Vec<&AnalyzedRecord> = records
                .iter()
                .filter(|r| r.record.department == summary.department)
                .collect();
            let budgeted: Decimal = rows.iter().map(|r| r.record.budgeted_amount).sum();
            let actual: Decimal = rows.iter().map(|r| r.record.actual_amount).sum();
            let variance: Decimal = rows.iter().map(|r| r.variance).sum();

            prop_assert_eq!(summary.budgeted_total, budgeted);
            prop_assert_eq!(summary.actual_total, actual);
            prop_assert_eq!(summary.variance_total, variance);
            prop_assert_eq!(summary.variance_total, summary.actual_total - summary.budgeted_total);
            prop_assert_eq!(
                summary.variance_fraction,
                safe_divide(summary.variance_total, summary.budgeted_total)
            );
            prop_assert_eq!(summary.record_count, rows.len());
        }

        for pair in summaries.windows(2) {
            prop_assert!(pair[0].variance_total >= pair[1].variance_total);
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_rollup_matches_sample_ledger() {
        let records = vec![
            analyzed("Aero", dec!(10000), dec!(17000)),
            analyzed("Aero", dec!(10000), dec!(17000)),
            analyzed("Logistics", dec!(20000), dec!(19000)),
        ];

        let summaries = DepartmentAggregator::aggregate(&records);

        assert_eq!(summaries.len(), 2);
        let aero = &summaries[0];
        assert_eq!(aero.department, "Aero");
        assert_eq!(aero.budgeted_total, dec!(20000));
        assert_eq!(aero.actual_total, dec!(34000));
        assert_eq!(aero.variance_total, dec!(14000));
        assert_eq!(aero.variance_fraction, dec!(0.7));
        assert_eq!(aero.record_count, 2);

        let logistics = &summaries[1];
        assert_eq!(logistics.department, "Logistics");
        assert_eq!(logistics.variance_total, dec!(-1000));
        assert_eq!(logistics.variance_fraction, dec!(-0.05));
    }

    #[test]
    fn test_fraction_is_not_mean_of_row_fractions() {
        // Row fractions are 0.9 and 0.01; their mean would be 0.455.
        let records = vec![
            analyzed("IT", dec!(100), dec!(190)),
            analyzed("IT", dec!(100000), dec!(101000)),
        ];

        let summaries = DepartmentAggregator::aggregate(&records);

        assert_eq!(summaries[0].variance_total, dec!(1090));
        assert_eq!(
            summaries[0].variance_fraction,
            dec!(1090) / dec!(100100)
        );
        assert_ne!(summaries[0].variance_fraction, dec!(0.455));
    }

    #[test]
    fn test_zero_budget_department() {
        let records = vec![analyzed("Marketing", Decimal::ZERO, dec!(12000))];
        let summaries = DepartmentAggregator::aggregate(&records);
        assert_eq!(summaries[0].variance_total, dec!(12000));
        assert_eq!(summaries[0].variance_fraction, Decimal::ZERO);
    }

    #[test]
    fn test_ties_keep_first_appearance_order() {
        let records = vec![
            analyzed("Strategy", dec!(100), dec!(150)),
            analyzed("Chassis", dec!(500), dec!(400)),
            analyzed("IT", dec!(200), dec!(250)),
            analyzed("Aerodynamics", dec!(10), dec!(60)),
        ];

        let summaries = DepartmentAggregator::aggregate(&records);
        let order: Vec<&str> = summaries.iter().map(|s| s.department.as_str()).collect();

        assert_eq!(order, vec!["Strategy", "IT", "Aerodynamics", "Chassis"]);
    }

    #[test]
    fn test_department_match_is_exact() {
        let records = vec![
            analyzed("IT", dec!(1), dec!(1)),
            analyzed("it", dec!(1), dec!(1)),
            analyzed("IT ", dec!(1), dec!(1)),
        ];
        assert_eq!(DepartmentAggregator::aggregate(&records).len(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(DepartmentAggregator::aggregate(&[]).is_empty());
    }
}
