use anyhow::{Context, Result};
use colored::*;
use header_stubs::{ensure_headers, Report};
use std::path::Path;

/// Run the stub pass over `root` and print what happened.
///
/// Returns the process exit code: 0 when every companion is in place,
/// 1 when any entry failed.
pub fn execute(root: &Path) -> Result<i32> {
    println!("🔍 Scanning {} for C/C++ sources...", root.display());

    let report = ensure_headers(root)
        .with_context(|| format!("Cannot scan {}", root.display()))?;

    display_report(root, &report);

    Ok(if report.is_success() { 0 } else { 1 })
}

fn display_report(root: &Path, report: &Report) {
    for header in &report.created {
        let shown = header.strip_prefix(root).unwrap_or(header);
        println!("  {} {}", "+".green(), shown.display());
    }

    for failure in &report.failures {
        eprintln!("  {} {}", "✗".red(), failure);
    }

    println!(
        "\n{} {} created, {} already present, {} failed ({} files scanned)",
        if report.is_success() {
            "✓".green()
        } else {
            "✗".red()
        },
        report.created.len(),
        report.existing.len(),
        report.failures.len(),
        report.files_scanned
    );
}
