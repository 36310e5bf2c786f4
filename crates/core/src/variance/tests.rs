//! Property-based tests for variance calculation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::VarianceCalculator;
use super::ratio::safe_divide;
use crate::record::TransactionRecord;

/// Strategy for amounts from -1,000,000.00 to 1,000,000.00 at cent precision.
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn make_record(budgeted: Decimal, actual: Decimal) -> TransactionRecord {
    TransactionRecord::new(
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        "Dept",
        "Vendor",
        "Line",
        budgeted,
        actual,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Variance is exactly actual minus budgeted.
    #[test]
    fn prop_variance_is_exact_difference(budgeted in amount(), actual in amount()) {
        let result = VarianceCalculator::analyze(&make_record(budgeted, actual));
        prop_assert_eq!(result.variance, actual - budgeted);
        prop_assert_eq!(result.variance + budgeted, actual);
    }

    /// Zero denominators always yield zero.
    #[test]
    fn prop_safe_divide_zero_denominator(numerator in amount()) {
        prop_assert_eq!(safe_divide(numerator, Decimal::ZERO), Decimal::ZERO);
    }

    /// Non-zero denominators yield the plain quotient.
    #[test]
    fn prop_safe_divide_matches_division(numerator in amount(), denominator in amount()) {
        prop_assume!(!denominator.is_zero());
        prop_assert_eq!(safe_divide(numerator, denominator), numerator / denominator);
    }

    /// The fraction always equals safe_divide(variance, budgeted).
    #[test]
    fn prop_fraction_uses_safe_divide(budgeted in amount(), actual in amount()) {
        let result = VarianceCalculator::analyze(&make_record(budgeted, actual));
        prop_assert_eq!(result.variance_fraction, safe_divide(result.variance, budgeted));
    }

    /// Row count and order survive the calculation.
    #[test]
    fn prop_calculate_preserves_rows(
        pairs in prop::collection::vec((amount(), amount()), 0..50),
    ) {
        let records: Vec<TransactionRecord> = pairs
            .iter()
            .map(|(b, a)| make_record(*b, *a))
            .collect();

        let result = VarianceCalculator::calculate(&records);

        prop_assert_eq!(result.len(), records.len());
        for (analyzed, original) in result.iter().zip(&records) {
            prop_assert_eq!(&analyzed.record, original);
        }
    }
}
