//! Generate, analyze, render.

use std::path::Path;

use opex_core::{AnalysisReport, AnalysisService};
use opex_report::{ReportOutcome, write_workbook};
use opex_shared::{AppError, AppResult};
use opex_source::{generate, read_records, write_records};
use tracing::{info, warn};

use crate::args::RunPlan;

/// Runs the whole pipeline for one plan.
///
/// # Errors
///
/// Returns the first failing stage as an `AppError`.
pub fn run(plan: &RunPlan) -> AppResult<AnalysisReport> {
    if let Some(generator) = &plan.generator {
        let records = generate(generator)?;
        write_records(&plan.csv_path, &records)?;
    }

    let records = read_records(&plan.csv_path)?;
    let report = AnalysisService::analyze(&records);
    log_summary(&report);

    match write_workbook(&plan.output_path, &report)? {
        ReportOutcome::Written(path) => info!(path = %path.display(), "Report ready"),
        ReportOutcome::Skipped => warn!("Ledger is empty, no report written"),
    }

    if let Some(json_path) = &plan.json_path {
        write_json(json_path, &report)?;
    }

    Ok(report)
}

fn log_summary(report: &AnalysisReport) {
    let totals = &report.totals;
    info!(
        records = totals.record_count,
        budgeted = %totals.budgeted_total,
        actual = %totals.actual_total,
        variance = %totals.variance_total,
        variance_fraction = %totals.variance_fraction.round_dp(4),
        "Variance analysis complete"
    );

    if let Some(top) = report.departments.first() {
        info!(
            department = %top.department,
            variance = %top.variance_total,
            "Largest department overspend"
        );
    }

    for opportunity in &report.opportunities {
        info!(
            kind = %opportunity.kind,
            count = opportunity.count,
            savings = %opportunity.potential_savings,
            "Savings opportunity"
        );
    }
}

fn write_json(path: &Path, report: &AnalysisReport) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(report).map_err(|e| AppError::Internal(e.to_string()))?;
    std::fs::write(path, json)
        .map_err(|e| AppError::Io(format!("{}: {e}", path.display())))?;
    info!(path = %path.display(), "Analysis JSON written");
    Ok(())
}
