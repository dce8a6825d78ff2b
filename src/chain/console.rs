//! Colored per-case run output
//!
//! Purely observational; nothing printed here feeds back into results.

use colored::Colorize;
use serde_json::Value;

use super::case::CaseStatus;
use super::report::ReportEntry;

pub(crate) fn banner_start(total: usize) {
    println!(
        "\n{} {}",
        "Running chain:".blue().bold(),
        format!("{} case(s)", total).white().bold()
    );
}

pub(crate) fn case_line(position: usize, report: &ReportEntry, data: Option<&Value>) {
    let (marker, status) = match report.status {
        CaseStatus::Success => ("✓".green(), "success".green()),
        CaseStatus::Fail => ("✗".red(), "fail".red()),
        CaseStatus::Error => ("✗".red().bold(), "error".red().bold()),
    };

    println!(
        "  {} Case {}: {} ({})",
        marker,
        position,
        report.title,
        report.function_name.dimmed()
    );
    println!("    status: {}", status);
    if let Some(request_id) = &report.request_id {
        println!("    request id: {}", request_id.dimmed());
    }
    if let Some(data) = data {
        println!("    response: {}", data.to_string().dimmed());
    }
}

pub(crate) fn banner_finish(success: usize, failure: usize) {
    let summary = format!("{} succeeded, {} failed", success, failure);
    let summary = if failure == 0 {
        summary.green().bold()
    } else {
        summary.red().bold()
    };
    println!("\n{} {}\n", "Chain finished:".blue().bold(), summary);
}
