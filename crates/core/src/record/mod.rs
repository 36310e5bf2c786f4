//! Transaction records and the ledger input schema.
//!
//! This module defines:
//! - The typed transaction record consumed by the analysis engine
//! - The analyzed record carrying derived variance fields
//! - Column names and row typing for raw tabular input
//! - Ingestion errors (schema and type classes)

pub mod error;
pub mod schema;
pub mod types;

pub use error::IngestError;
pub use schema::{MAX_AMOUNT, Schema, columns};
pub use types::{AnalyzedRecord, TransactionRecord};
