//! Ledger column schema and row typing.
//!
//! Record sources hand over raw text rows; this module resolves the fixed
//! column names against a header row and types each field. Parsing is
//! strict: the first malformed value aborts ingestion.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::error::IngestError;
use super::types::TransactionRecord;

/// Fixed column names of the ledger contract.
pub mod columns {
    /// Posting date.
    pub const DATE: &str = "Date";
    /// Department.
    pub const DEPARTMENT: &str = "Department";
    /// Vendor.
    pub const VENDOR: &str = "Vendor";
    /// Description.
    pub const DESCRIPTION: &str = "Description";
    /// Budgeted amount.
    pub const BUDGETED_AMOUNT: &str = "Budgeted Amount";
    /// Actual amount.
    pub const ACTUAL_AMOUNT: &str = "Actual Amount";
    /// Optional expense category.
    pub const EXPENSE_TYPE: &str = "Expense Type";
    /// Derived variance.
    pub const VARIANCE: &str = "Variance";
    /// Derived variance fraction.
    pub const VARIANCE_PCT: &str = "Variance %";

    /// Required input columns, in the order they are checked.
    pub const REQUIRED: [&str; 6] = [
        DATE,
        DEPARTMENT,
        VENDOR,
        DESCRIPTION,
        BUDGETED_AMOUNT,
        ACTUAL_AMOUNT,
    ];
}

/// Largest accepted amount magnitude. Sums of in-memory ledgers stay far
/// below `Decimal::MAX` under this bound.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Column positions resolved from a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    date: usize,
    department: usize,
    vendor: usize,
    description: usize,
    budgeted_amount: usize,
    actual_amount: usize,
    expense_type: Option<usize>,
}

impl Schema {
    /// Resolves column positions from header names.
    ///
    /// Headers are compared after trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::MissingColumn` naming the first required
    /// column that is absent.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self, IngestError> {
        let position = |name: &str| headers.iter().position(|h| h.as_ref().trim() == name);
        let require = |name: &str| {
            position(name).ok_or_else(|| IngestError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            date: require(columns::DATE)?,
            department: require(columns::DEPARTMENT)?,
            vendor: require(columns::VENDOR)?,
            description: require(columns::DESCRIPTION)?,
            budgeted_amount: require(columns::BUDGETED_AMOUNT)?,
            actual_amount: require(columns::ACTUAL_AMOUNT)?,
            expense_type: position(columns::EXPENSE_TYPE),
        })
    }

    /// Number of fields a row needs to cover every required column.
    #[must_use]
    pub fn min_width(&self) -> usize {
        [
            self.date,
            self.department,
            self.vendor,
            self.description,
            self.budgeted_amount,
            self.actual_amount,
        ]
        .into_iter()
        .max()
        .map_or(0, |idx| idx + 1)
    }

    /// Types one raw row. `line` is the 1-based data line used in errors.
    ///
    /// # Errors
    ///
    /// Returns `ShortRow` if required fields are missing, `InvalidDate` or
    /// `InvalidAmount` if a value does not parse.
    pub fn parse_row<S: AsRef<str>>(
        &self,
        fields: &[S],
        line: usize,
    ) -> Result<TransactionRecord, IngestError> {
        let expected = self.min_width();
        if fields.len() < expected {
            return Err(IngestError::ShortRow {
                line,
                found: fields.len(),
                expected,
            });
        }

        let text = |idx: usize| fields[idx].as_ref();

        let expense_type = self
            .expense_type
            .and_then(|idx| fields.get(idx))
            .map(|v| v.as_ref().trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        Ok(TransactionRecord {
            date: parse_date(text(self.date), line)?,
            department: text(self.department).to_string(),
            expense_type,
            vendor: text(self.vendor).to_string(),
            description: text(self.description).to_string(),
            budgeted_amount: parse_amount(
                text(self.budgeted_amount),
                columns::BUDGETED_AMOUNT,
                line,
            )?,
            actual_amount: parse_amount(text(self.actual_amount), columns::ACTUAL_AMOUNT, line)?,
        })
    }
}

/// Parses a calendar date, accepting a trailing time component.
///
/// # Errors
///
/// Returns `IngestError::InvalidDate` if no supported format matches.
pub fn parse_date(value: &str, line: usize) -> Result<NaiveDate, IngestError> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| IngestError::InvalidDate {
            line,
            value: value.to_string(),
        })
}

/// Parses a decimal amount (plain or scientific notation).
///
/// # Errors
///
/// Returns `IngestError::InvalidAmount` for empty or non-numeric text and
/// `IngestError::AmountOutOfRange` when the magnitude exceeds [`MAX_AMOUNT`].
pub fn parse_amount(value: &str, column: &str, line: usize) -> Result<Decimal, IngestError> {
    let trimmed = value.trim();
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| IngestError::InvalidAmount {
            line,
            column: column.to_string(),
            value: value.to_string(),
        })?;

    if amount.abs() > Decimal::from(MAX_AMOUNT) {
        return Err(IngestError::AmountOutOfRange {
            line,
            column: column.to_string(),
            value: value.to_string(),
            limit: MAX_AMOUNT,
        });
    }
    Ok(amount)
}
