//! XLSX workbook writer.

use std::path::{Path, PathBuf};

use opex_core::AnalysisReport;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{
    Chart, ChartType, Color, ConditionalFormatCell, ConditionalFormatCellRule, Format,
    FormatBorder, Workbook, Worksheet, XlsxError,
};
use tracing::{info, warn};

use crate::error::ReportError;
use crate::layout::{self, Cell, Table};

const SUMMARY_SHEET: &str = "Executive Summary";
const SAVINGS_SHEET: &str = "Savings Opportunities";
const DETAIL_SHEET: &str = "Detailed Data";

/// Department variance above this fraction is highlighted red.
const OVERSPEND_HIGHLIGHT: f64 = 0.1;

/// What happened to the requested workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Workbook written to this path.
    Written(PathBuf),
    /// Nothing to report; no file was written.
    Skipped,
}

/// Shared cell formats.
struct Formats {
    title: Format,
    header: Format,
    bold: Format,
    currency: Format,
    percent: Format,
    red: Format,
    green: Format,
    plain: Format,
}

impl Formats {
    fn new() -> Self {
        Self {
            title: Format::new().set_bold().set_font_size(14),
            header: Format::new()
                .set_bold()
                .set_background_color(Color::RGB(0x00D3_D3D3))
                .set_border(FormatBorder::Thin),
            bold: Format::new().set_bold(),
            currency: Format::new().set_num_format("$#,##0.00"),
            percent: Format::new().set_num_format("0.00%"),
            red: Format::new()
                .set_background_color(Color::RGB(0x00FF_C7CE))
                .set_font_color(Color::RGB(0x009C_0006)),
            green: Format::new()
                .set_background_color(Color::RGB(0x00C6_EFCE))
                .set_font_color(Color::RGB(0x0000_6100)),
            plain: Format::new(),
        }
    }
}

/// Renders the analysis as an XLSX workbook at `path`.
///
/// An empty department summary means there is nothing to chart; the workbook
/// is skipped rather than written half-empty.
///
/// # Errors
///
/// Returns `ReportError::Xlsx` if a sheet cannot be built or the file cannot
/// be saved.
pub fn write_workbook(path: &Path, report: &AnalysisReport) -> Result<ReportOutcome, ReportError> {
    if report.departments.is_empty() {
        warn!("Department summary is empty, skipping workbook");
        return Ok(ReportOutcome::Skipped);
    }

    let formats = Formats::new();
    let mut workbook = Workbook::new();

    write_summary_sheet(workbook.add_worksheet(), report, &formats)?;
    write_savings_sheet(workbook.add_worksheet(), report, &formats)?;
    write_detail_sheet(workbook.add_worksheet(), report, &formats)?;

    workbook.save(path)?;
    info!(
        path = %path.display(),
        departments = report.departments.len(),
        opportunities = report.opportunities.len(),
        records = report.records.len(),
        "Workbook written"
    );

    Ok(ReportOutcome::Written(path.to_path_buf()))
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    report: &AnalysisReport,
    formats: &Formats,
) -> Result<(), XlsxError> {
    sheet.set_name(SUMMARY_SHEET)?;
    sheet.write_string_with_format(0, 0, "Departmental OPEX Overview", &formats.title)?;

    let table = layout::summary_table(&report.departments);
    let first_row = 2;
    write_table(sheet, 1, &table, formats)?;

    let last_row = first_row + to_row(table.rows.len()) - 1;
    sheet.add_conditional_format(
        first_row,
        4,
        last_row,
        4,
        &ConditionalFormatCell::new()
            .set_rule(ConditionalFormatCellRule::GreaterThan(OVERSPEND_HIGHLIGHT))
            .set_format(&formats.red),
    )?;
    sheet.add_conditional_format(
        first_row,
        4,
        last_row,
        4,
        &ConditionalFormatCell::new()
            .set_rule(ConditionalFormatCellRule::LessThan(0))
            .set_format(&formats.green),
    )?;

    let mut chart = Chart::new(ChartType::Column);
    chart
        .add_series()
        .set_name("Actual Amount")
        .set_categories((SUMMARY_SHEET, first_row, 0, last_row, 0))
        .set_values((SUMMARY_SHEET, first_row, 2, last_row, 2));
    chart.title().set_name("Actual Spend by Department");
    sheet.insert_chart(1, 6, &chart)?;

    sheet.set_column_width(0, 20)?;
    for col in 1..=3 {
        sheet.set_column_width(col, 15)?;
    }
    sheet.set_column_width(4, 12)?;
    sheet.set_freeze_panes(2, 0)?;
    Ok(())
}

fn write_savings_sheet(
    sheet: &mut Worksheet,
    report: &AnalysisReport,
    formats: &Formats,
) -> Result<(), XlsxError> {
    sheet.set_name(SAVINGS_SHEET)?;
    sheet.write_string_with_format(
        0,
        0,
        "Identified Cost Savings Opportunities",
        &formats.title,
    )?;

    let mut row = 2;
    for block in layout::opportunity_blocks(&report.opportunities) {
        sheet.write_string_with_format(row, 0, &block.title, &formats.bold)?;
        sheet.write_string_with_format(row, 1, &block.savings, &formats.red)?;
        row += 1;

        if !block.details.rows.is_empty() {
            write_table(sheet, row, &block.details, formats)?;
            row += to_row(block.details.rows.len()) + 2;
        }
    }

    sheet.set_column_width(0, 20)?;
    sheet.set_column_width(1, 20)?;
    sheet.set_column_width(2, 40)?;
    sheet.set_column_width(3, 15)?;
    Ok(())
}

fn write_detail_sheet(
    sheet: &mut Worksheet,
    report: &AnalysisReport,
    formats: &Formats,
) -> Result<(), XlsxError> {
    sheet.set_name(DETAIL_SHEET)?;
    write_table(sheet, 0, &layout::detail_table(&report.records), formats)?;

    let widths = [12, 20, 20, 20, 40, 15, 15, 15, 12];
    for (col, width) in (0u16..).zip(widths) {
        sheet.set_column_width(col, width)?;
    }
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

/// Writes a header row at `start_row` followed by the data rows.
fn write_table(
    sheet: &mut Worksheet,
    start_row: u32,
    table: &Table,
    formats: &Formats,
) -> Result<(), XlsxError> {
    for (col, header) in (0u16..).zip(&table.headers) {
        sheet.write_string_with_format(start_row, col, *header, &formats.header)?;
    }

    for (row, cells) in (start_row + 1..).zip(&table.rows) {
        for (col, cell) in (0u16..).zip(cells) {
            write_cell(sheet, row, col, cell, formats)?;
        }
    }
    Ok(())
}

fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    formats: &Formats,
) -> Result<(), XlsxError> {
    match cell {
        Cell::Text(text) => {
            sheet.write_string_with_format(row, col, text, &formats.plain)?;
        }
        Cell::Money(amount) => {
            sheet.write_number_with_format(row, col, to_number(*amount), &formats.currency)?;
        }
        Cell::Fraction(fraction) => {
            sheet.write_number_with_format(row, col, to_number(*fraction), &formats.percent)?;
        }
        Cell::Empty => {}
    }
    Ok(())
}

/// Spreadsheet cells are IEEE doubles; conversion happens only here.
fn to_number(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn to_row(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
