//! XLSX report rendering for OPEX variance analysis.
//!
//! The workbook has three sheets:
//! - `Executive Summary` - department rollup with a spend chart
//! - `Savings Opportunities` - one block per detected opportunity
//! - `Detailed Data` - every analyzed record
//!
//! Sheet contents are laid out as plain tables first (`layout`) and only
//! then written to the file (`workbook`).

pub mod error;
pub mod layout;
pub mod workbook;

pub use error::ReportError;
pub use workbook::{ReportOutcome, write_workbook};
