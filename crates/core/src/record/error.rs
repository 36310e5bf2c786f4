//! Ingestion error types.

use thiserror::Error;

/// Errors raised while typing raw ledger rows into records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    // ========== Schema Errors ==========
    /// A required column is absent from the header row.
    #[error("Schema error: missing required column '{0}'")]
    MissingColumn(String),

    /// A data row has fewer fields than the header requires.
    #[error("Schema error: line {line} has {found} fields, expected at least {expected}")]
    ShortRow {
        /// 1-based data line number.
        line: usize,
        /// Number of fields present.
        found: usize,
        /// Number of fields needed to reach every required column.
        expected: usize,
    },

    // ========== Type Errors ==========
    /// An amount column holds a non-numeric value.
    #[error("Type error: line {line}, column '{column}': cannot parse amount '{value}'")]
    InvalidAmount {
        /// 1-based data line number.
        line: usize,
        /// Column name.
        column: String,
        /// Offending text.
        value: String,
    },

    /// An amount is numeric but larger in magnitude than the ledger allows.
    #[error(
        "Type error: line {line}, column '{column}': amount '{value}' exceeds the ledger limit of {limit}"
    )]
    AmountOutOfRange {
        /// 1-based data line number.
        line: usize,
        /// Column name.
        column: String,
        /// Offending text.
        value: String,
        /// Largest accepted magnitude.
        limit: i64,
    },

    /// The date column holds something that is not a calendar date.
    #[error("Type error: line {line}: cannot parse date '{value}'")]
    InvalidDate {
        /// 1-based data line number.
        line: usize,
        /// Offending text.
        value: String,
    },
}

impl IngestError {
    /// Returns true for schema-class errors (header or row shape).
    #[must_use]
    pub const fn is_schema_error(&self) -> bool {
        matches!(self, Self::MissingColumn(_) | Self::ShortRow { .. })
    }
}
