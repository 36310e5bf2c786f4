//! Report error types.

use opex_shared::AppError;
use thiserror::Error;

/// Errors that can occur while rendering the workbook.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The spreadsheet writer rejected an operation or could not save.
    #[error("Workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::Report(err.to_string())
    }
}
