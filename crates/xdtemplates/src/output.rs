use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use xdtemplates_core::{RenderJob, RunReport};

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Progress lines shown before a job runs
pub fn print_job_header(job: &RenderJob) {
    println!("{} Data from: {}", "→".cyan(), job.variable_file.display());
    println!("{} Processing from: {}", "→".cyan(), job.template_folder.display());
    println!("{} Output to: {}", "→".cyan(), job.output_folder.display());
}

/// Unresolved placeholders per file, then the completion line
pub fn print_report(report: &RunReport) {
    for (file, tokens) in report.files_with_unresolved() {
        println!();
        println!("{} {}", "✗".red(), file.bold());
        println!(
            "{}",
            "Found the following unknown placeholders - these were not replaced:".red()
        );
        for token in tokens {
            println!("  {}", token.red());
        }
    }

    println!();
    println!(
        "{} DONE PROCESSING ({} file{})",
        "✓".green(),
        report.files_processed,
        if report.files_processed == 1 { "" } else { "s" }
    );
}
