//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Synthetic ledger generation settings.
    #[serde(default)]
    pub generator: GeneratorSettings,
    /// Input ledger settings.
    #[serde(default)]
    pub input: InputSettings,
    /// Report output settings.
    #[serde(default)]
    pub report: ReportSettings,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Synthetic ledger generation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    /// Number of transaction records to generate.
    #[serde(default = "default_records")]
    pub records: usize,
    /// Calendar year the transactions fall in.
    #[serde(default = "default_year")]
    pub year: i32,
    /// Random seed for reproducible output.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_records() -> usize {
    500
}

fn default_year() -> i32 {
    2024
}

fn default_seed() -> u64 {
    42
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            records: default_records(),
            year: default_year(),
            seed: default_seed(),
        }
    }
}

/// Input ledger settings.
#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    /// Where the ledger CSV is written to and read from.
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
}

fn default_csv_path() -> String {
    "opex_data.csv".to_string()
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    /// Path of the XLSX workbook.
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// Optional path of a JSON dump of the analysis.
    #[serde(default)]
    pub json_path: Option<String>,
}

fn default_output_path() -> String {
    "opex_analysis_report.xlsx".to_string()
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            json_path: None,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "opex=info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
    /// then `OPEX__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("OPEX")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
