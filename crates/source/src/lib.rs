//! Ledger record sources for OPEX analysis.
//!
//! - `ledger_file` - Read and write ledger CSV files through the core schema
//! - `generator` - Deterministic synthetic ledgers for demos and tests

pub mod error;
pub mod generator;
pub mod ledger_file;

pub use error::SourceError;
pub use generator::{GeneratorConfig, generate};
pub use ledger_file::{parse_records, read_records, write_records};
