//! End-to-end analysis of a transaction ledger.

pub mod service;
pub mod types;

pub use service::AnalysisService;
pub use types::{AnalysisReport, AnalysisTotals};
