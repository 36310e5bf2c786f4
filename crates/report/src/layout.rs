//! Sheet layouts as plain tables.

use opex_core::opportunity::OpportunityDetail;
use opex_core::record::columns;
use opex_core::{AnalyzedRecord, DepartmentSummary, Opportunity};
use rust_decimal::Decimal;

/// A typed cell value; the workbook writer picks the number format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Plain text.
    Text(String),
    /// Currency amount.
    Money(Decimal),
    /// Fraction shown as a percentage.
    Fraction(Decimal),
    /// Blank cell.
    Empty,
}

impl Cell {
    fn text(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A header row plus data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column headers.
    pub headers: Vec<&'static str>,
    /// Data rows, each as long as `headers`.
    pub rows: Vec<Vec<Cell>>,
}

/// One opportunity on the savings sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpportunityBlock {
    /// `Type: <label>` line.
    pub title: String,
    /// `Potential Savings: $1,234.00` line.
    pub savings: String,
    /// Flagged records.
    pub details: Table,
}

/// Department rollup table.
pub fn summary_table(departments: &[DepartmentSummary]) -> Table {
    Table {
        headers: vec![
            columns::DEPARTMENT,
            columns::BUDGETED_AMOUNT,
            columns::ACTUAL_AMOUNT,
            columns::VARIANCE,
            columns::VARIANCE_PCT,
        ],
        rows: departments
            .iter()
            .map(|d| {
                vec![
                    Cell::text(&d.department),
                    Cell::Money(d.budgeted_total),
                    Cell::Money(d.actual_total),
                    Cell::Money(d.variance_total),
                    Cell::Fraction(d.variance_fraction),
                ]
            })
            .collect(),
    }
}

/// Every analyzed record, all columns.
pub fn detail_table(records: &[AnalyzedRecord]) -> Table {
    Table {
        headers: vec![
            columns::DATE,
            columns::DEPARTMENT,
            columns::EXPENSE_TYPE,
            columns::VENDOR,
            columns::DESCRIPTION,
            columns::BUDGETED_AMOUNT,
            columns::ACTUAL_AMOUNT,
            columns::VARIANCE,
            columns::VARIANCE_PCT,
        ],
        rows: records
            .iter()
            .map(|r| {
                vec![
                    Cell::Text(r.record.date.format("%Y-%m-%d").to_string()),
                    Cell::text(&r.record.department),
                    r.record.expense_type.as_deref().map_or(Cell::Empty, Cell::text),
                    Cell::text(&r.record.vendor),
                    Cell::text(&r.record.description),
                    Cell::Money(r.record.budgeted_amount),
                    Cell::Money(r.record.actual_amount),
                    Cell::Money(r.variance),
                    Cell::Fraction(r.variance_fraction),
                ]
            })
            .collect(),
    }
}

/// One block per opportunity, in detection order.
pub fn opportunity_blocks(opportunities: &[Opportunity]) -> Vec<OpportunityBlock> {
    opportunities
        .iter()
        .map(|o| OpportunityBlock {
            title: format!("Type: {}", o.kind),
            savings: format!("Potential Savings: ${}", format_money(o.potential_savings)),
            details: detail_rows(&o.details),
        })
        .collect()
}

fn detail_rows(details: &[OpportunityDetail]) -> Table {
    let headers = match details.first() {
        Some(OpportunityDetail::Duplicate(_)) => vec![
            columns::DATE,
            columns::VENDOR,
            columns::DESCRIPTION,
            columns::ACTUAL_AMOUNT,
        ],
        _ => vec![
            columns::DATE,
            columns::DEPARTMENT,
            columns::DESCRIPTION,
            columns::VARIANCE,
        ],
    };

    let rows = details
        .iter()
        .map(|detail| match detail {
            OpportunityDetail::Outlier(d) => vec![
                Cell::Text(d.date.format("%Y-%m-%d").to_string()),
                Cell::text(&d.department),
                Cell::text(&d.description),
                Cell::Money(d.variance),
            ],
            OpportunityDetail::Duplicate(d) => vec![
                Cell::Text(d.date.format("%Y-%m-%d").to_string()),
                Cell::text(&d.vendor),
                Cell::text(&d.description),
                Cell::Money(d.actual_amount),
            ],
        })
        .collect();

    Table { headers, rows }
}

/// Formats an amount with thousands separators and two decimals.
pub fn format_money(amount: Decimal) -> String {
    let mut rounded = amount.round_dp(2);
    rounded.rescale(2);
    let text = rounded.abs().to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{cents}")
}
