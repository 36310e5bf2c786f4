//! Synthetic OPEX ledger generator.
//!
//! Produces a reproducible ledger for a motorsport team's operating costs,
//! with one planted overspend and one planted duplicate payment so that the
//! detector always has something to find.

use chrono::{Days, NaiveDate};
use opex_core::TransactionRecord;
use opex_shared::config::GeneratorSettings;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::SourceError;

/// Departments and their expense types.
const DEPARTMENTS: [(&str, [&str; 4]); 8] = [
    (
        "Aerodynamics",
        ["Wind Tunnel Usage", "CFD License", "Composite Materials", "Prototyping"],
    ),
    (
        "Power Unit",
        ["Engine Testing", "Fuel Analysis", "Hybrid System Components", "Dyno Operations"],
    ),
    (
        "Chassis",
        ["Carbon Fiber", "Suspension Parts", "Crash Testing", "Machining"],
    ),
    (
        "Logistics",
        ["Freight - Air", "Freight - Sea", "Travel & Accommodation", "Catering"],
    ),
    (
        "Strategy",
        ["Simulation Software", "Data Feeds", "Consulting", "Compute Resources"],
    ),
    (
        "Vehicle Performance",
        ["Telemetry Systems", "Trackside Equipment", "Sensor Calibration", "Driver Simulator"],
    ),
    (
        "Marketing",
        ["Sponsorship Events", "Merchandise", "Digital Content", "Hospitality"],
    ),
    (
        "IT",
        ["Server Infrastructure", "Cybersecurity", "Software Licenses", "Hardware Upgrades"],
    ),
];

const VENDORS: [&str; 10] = [
    "Oracle",
    "Honda",
    "Siemens",
    "Hewlett Packard Enterprise",
    "AT&T",
    "Tag Heuer",
    "Mobil 1",
    "Pirelli",
    "DHL",
    "Ansys",
];

/// Budget range in cents (1,000.00 to 100,000.00 inclusive).
const BUDGET_CENTS_MIN: i64 = 100_000;
const BUDGET_CENTS_MAX: i64 = 10_000_000;

/// Generator parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of records.
    pub records: usize,
    /// Calendar year of the transactions.
    pub year: i32,
    /// RNG seed.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::from(&GeneratorSettings::default())
    }
}

impl From<&GeneratorSettings> for GeneratorConfig {
    fn from(settings: &GeneratorSettings) -> Self {
        Self {
            records: settings.records,
            year: settings.year,
            seed: settings.seed,
        }
    }
}

/// Generates a synthetic ledger. Equal configs give equal ledgers.
///
/// Row 0 is replaced by a large Logistics air-freight overspend. With three
/// or more rows, row 1 becomes a copy of row 2 (same date, vendor and amount)
/// with a marked description.
///
/// # Errors
///
/// Returns `SourceError::InvalidYear` if the year cannot be represented.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<TransactionRecord>, SourceError> {
    let start =
        NaiveDate::from_ymd_opt(config.year, 1, 1).ok_or(SourceError::InvalidYear(config.year))?;
    let next_year = config
        .year
        .checked_add(1)
        .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
        .ok_or(SourceError::InvalidYear(config.year))?;
    let days_in_year = next_year.signed_duration_since(start).num_days().unsigned_abs();

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut records = Vec::with_capacity(config.records);

    for _ in 0..config.records {
        let (department, expense_types) = DEPARTMENTS[rng.gen_range(0..DEPARTMENTS.len())];
        let expense = expense_types[rng.gen_range(0..expense_types.len())];
        let vendor = VENDORS[rng.gen_range(0..VENDORS.len())];

        let date = start + Days::new(rng.gen_range(0..days_in_year));
        let budget = Decimal::new(rng.gen_range(BUDGET_CENTS_MIN..=BUDGET_CENTS_MAX), 2);
        let actual = (budget * variance_factor(&mut rng)).round_dp(2);

        records.push(
            TransactionRecord::new(
                date,
                department,
                vendor,
                format!("{expense} invoice from {vendor}"),
                budget,
                actual,
            )
            .with_expense_type(expense),
        );
    }

    plant_anomalies(&mut records);
    debug!(
        records = records.len(),
        year = config.year,
        seed = config.seed,
        "Synthetic ledger generated"
    );

    Ok(records)
}

/// Draws a spend factor distributed roughly as Normal(1.0, 0.15).
///
/// Twelve uniform draws on [0, 1) minus six approximate a standard normal
/// (Irwin-Hall); draws are integers in units of 1e-4 to stay off floats.
fn variance_factor(rng: &mut impl Rng) -> Decimal {
    let z_units: i64 = (0..12).map(|_| rng.gen_range(0..10_000i64)).sum::<i64>() - 60_000;
    // 1 + 0.15 * z, at 1e-6 scale.
    Decimal::new(1_000_000 + 15 * z_units, 6)
}

fn plant_anomalies(records: &mut [TransactionRecord]) {
    if let Some(first) = records.first_mut() {
        first.department = "Logistics".to_string();
        first.expense_type = Some("Freight - Air".to_string());
        first.budgeted_amount = Decimal::from(50_000);
        first.actual_amount = Decimal::from(120_000);
        first.description = "Emergency Air Freight - Urgent Upgrade Package".to_string();
    }

    if records.len() >= 3 {
        let mut copy = records[2].clone();
        copy.description.push_str(" (DUPLICATE?)");
        records[1] = copy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opex_core::{AnalysisService, OpportunityType, opportunity::OpportunityDetail};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn config(records: usize, seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            records,
            year: 2024,
            seed,
        }
    }

    #[test]
    fn test_same_seed_same_ledger() {
        let a = generate(&config(200, 42)).unwrap();
        let b = generate(&config(200, 42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_ledger() {
        let a = generate(&config(50, 1)).unwrap();
        let b = generate(&config(50, 2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_records_within_ranges() {
        let records = generate(&config(500, 7)).unwrap();
        assert_eq!(records.len(), 500);

        for record in records.iter().skip(2) {
            assert_eq!(chrono::Datelike::year(&record.date), 2024);
            assert!(record.budgeted_amount >= dec!(1000));
            assert!(record.budgeted_amount <= dec!(100000));
            assert!(record.budgeted_amount.scale() <= 2);
            assert!(record.actual_amount > Decimal::ZERO);
            assert!(record.actual_amount.scale() <= 2);
            assert!(VENDORS.contains(&record.vendor.as_str()));
            let (_, expenses) = DEPARTMENTS
                .iter()
                .find(|(name, _)| *name == record.department)
                .unwrap();
            let expense = record.expense_type.as_deref().unwrap();
            assert!(expenses.contains(&expense));
            assert!(record.description.ends_with(&record.vendor));
        }
    }

    #[test]
    fn test_planted_overspend() {
        let records = generate(&config(10, 42)).unwrap();
        let first = &records[0];
        assert_eq!(first.department, "Logistics");
        assert_eq!(first.expense_type.as_deref(), Some("Freight - Air"));
        assert_eq!(first.budgeted_amount, dec!(50000));
        assert_eq!(first.actual_amount, dec!(120000));
    }

    #[test]
    fn test_planted_duplicate() {
        let records = generate(&config(10, 42)).unwrap();
        assert_eq!(records[1].date, records[2].date);
        assert_eq!(records[1].vendor, records[2].vendor);
        assert_eq!(records[1].actual_amount, records[2].actual_amount);
        assert_eq!(
            records[1].description,
            format!("{} (DUPLICATE?)", records[2].description)
        );
    }

    #[test]
    fn test_generated_ledger_triggers_both_rules() {
        let records = generate(&config(500, 42)).unwrap();
        let report = AnalysisService::analyze(&records);

        let outliers = report
            .opportunities
            .iter()
            .find(|o| o.kind == OpportunityType::HighVarianceOutlier)
            .unwrap();
        assert!(outliers.details.iter().any(|d| matches!(
            d,
            OpportunityDetail::Outlier(o) if o.description.starts_with("Emergency Air Freight")
        )));

        let duplicates = report
            .opportunities
            .iter()
            .find(|o| o.kind == OpportunityType::DuplicatePayments)
            .unwrap();
        assert!(duplicates.count >= 1);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(3, 3)]
    fn test_small_ledgers(#[case] requested: usize, #[case] expected: usize) {
        assert_eq!(generate(&config(requested, 42)).unwrap().len(), expected);
    }

    #[test]
    fn test_invalid_year() {
        let err = generate(&GeneratorConfig {
            records: 1,
            year: i32::MAX,
            seed: 0,
        })
        .unwrap_err();
        assert!(matches!(err, SourceError::InvalidYear(y) if y == i32::MAX));
    }

    #[test]
    fn test_variance_factor_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..1_000 {
            let factor = variance_factor(&mut rng);
            assert!(factor > dec!(0.09) && factor < dec!(1.91));
        }
    }

    #[test]
    fn test_config_from_settings() {
        let config = GeneratorConfig::default();
        assert_eq!(config.records, 500);
        assert_eq!(config.year, 2024);
        assert_eq!(config.seed, 42);
    }
}
