//! Console output for a finished run.

use colored::Colorize;
use std::path::Path;
use subhost::PipelineReport;

/// Print the result location and a one-line summary to stdout.
pub fn print_summary(report: &PipelineReport, output: &Path) {
    println!(
        "{} {}",
        "Results have been saved to".green(),
        output.display().to_string().bold()
    );
    println!("  {}", summary_line(report).dimmed());
}

fn summary_line(report: &PipelineReport) -> String {
    format!(
        "{} hostnames, {} rows, {} unresolved, {} without registry name",
        report.hostnames.len(),
        report.records.len(),
        report.unresolved.len(),
        report.lookup_failures.len()
    )
}
