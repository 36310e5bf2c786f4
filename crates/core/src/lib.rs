//! OPEX variance analysis engine.
//!
//! This crate contains pure analysis logic with ZERO file, CSV or logging
//! dependencies. Every stage takes an immutable record set and returns a new
//! value.
//!
//! # Modules
//!
//! - `record` - Transaction records and the ledger input schema
//! - `variance` - Per-record variance and the safe-divide policy
//! - `department` - Department-level rollup
//! - `opportunity` - Outlier and duplicate-payment detection
//! - `analysis` - The full pipeline in one call

pub mod analysis;
pub mod department;
pub mod opportunity;
pub mod record;
pub mod variance;

pub use analysis::{AnalysisReport, AnalysisService, AnalysisTotals};
pub use department::{DepartmentAggregator, DepartmentSummary};
pub use opportunity::{Opportunity, OpportunityDetector, OpportunityType};
pub use record::{AnalyzedRecord, IngestError, Schema, TransactionRecord};
pub use variance::{VarianceCalculator, safe_divide};
