//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use opex_shared::AppConfig;
use opex_source::GeneratorConfig;

/// Budget-vs-actual variance analysis for OPEX ledgers.
#[derive(Debug, Parser)]
#[command(name = "opex", version, about)]
pub struct Args {
    /// Number of synthetic records to generate.
    #[arg(long)]
    pub records: Option<usize>,

    /// Calendar year of the synthetic ledger.
    #[arg(long)]
    pub year: Option<i32>,

    /// Seed for the synthetic ledger.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where the synthetic ledger CSV is written.
    #[arg(long, value_name = "PATH")]
    pub csv_path: Option<String>,

    /// Path of the XLSX report.
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Analyze an existing ledger CSV instead of generating one.
    #[arg(long, value_name = "CSV", conflicts_with_all = ["records", "year", "seed", "csv_path"])]
    pub input: Option<String>,

    /// Also write the analysis as JSON.
    #[arg(long, value_name = "PATH")]
    pub json: Option<String>,
}

/// Resolved work for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    /// Ledger to synthesize first, if any.
    pub generator: Option<GeneratorConfig>,
    /// Ledger CSV to analyze.
    pub csv_path: PathBuf,
    /// Workbook destination.
    pub output_path: PathBuf,
    /// JSON dump destination.
    pub json_path: Option<PathBuf>,
}

impl Args {
    /// Applies the flags on top of the loaded configuration.
    #[must_use]
    pub fn plan(&self, config: &AppConfig) -> RunPlan {
        let generator = self.input.is_none().then(|| {
            let mut generator = GeneratorConfig::from(&config.generator);
            if let Some(records) = self.records {
                generator.records = records;
            }
            if let Some(year) = self.year {
                generator.year = year;
            }
            if let Some(seed) = self.seed {
                generator.seed = seed;
            }
            generator
        });

        let csv_path = self
            .input
            .as_ref()
            .or(self.csv_path.as_ref())
            .unwrap_or(&config.input.csv_path);

        RunPlan {
            generator,
            csv_path: PathBuf::from(csv_path),
            output_path: PathBuf::from(self.output.as_ref().unwrap_or(&config.report.output_path)),
            json_path: self
                .json
                .as_ref()
                .or(config.report.json_path.as_ref())
                .map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("opex").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_come_from_config() {
        let plan = parse(&[]).plan(&AppConfig::default());

        assert_eq!(
            plan.generator,
            Some(GeneratorConfig {
                records: 500,
                year: 2024,
                seed: 42
            })
        );
        assert_eq!(plan.csv_path, PathBuf::from("opex_data.csv"));
        assert_eq!(plan.output_path, PathBuf::from("opex_analysis_report.xlsx"));
        assert!(plan.json_path.is_none());
    }

    #[test]
    fn test_flags_override_config() {
        let plan = parse(&[
            "--records",
            "20",
            "--year",
            "2023",
            "--seed",
            "9",
            "--csv-path",
            "ledger.csv",
            "--output",
            "out.xlsx",
            "--json",
            "out.json",
        ])
        .plan(&AppConfig::default());

        assert_eq!(
            plan.generator,
            Some(GeneratorConfig {
                records: 20,
                year: 2023,
                seed: 9
            })
        );
        assert_eq!(plan.csv_path, PathBuf::from("ledger.csv"));
        assert_eq!(plan.output_path, PathBuf::from("out.xlsx"));
        assert_eq!(plan.json_path, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_input_skips_generation() {
        let plan = parse(&["--input", "real.csv"]).plan(&AppConfig::default());
        assert!(plan.generator.is_none());
        assert_eq!(plan.csv_path, PathBuf::from("real.csv"));
    }

    #[test]
    fn test_json_path_from_config() {
        let mut config = AppConfig::default();
        config.report.json_path = Some("analysis.json".to_string());
        let plan = parse(&[]).plan(&config);
        assert_eq!(plan.json_path, Some(PathBuf::from("analysis.json")));
    }

    #[rstest]
    #[case(&["--input", "a.csv", "--seed", "1"])]
    #[case(&["--input", "a.csv", "--csv-path", "b.csv"])]
    #[case(&["--records", "many"])]
    fn test_rejected_flags(#[case] argv: &[&str]) {
        let argv = std::iter::once("opex").chain(argv.iter().copied());
        assert!(Args::try_parse_from(argv).is_err());
    }
}
