use crate::app::RunSummary;
use crate::ui::table;
use colored::*;

pub fn print_summary(summary: &RunSummary, max_rows: usize) {
    let outcome = &summary.outcome;
    let rule = "═══════════════════════════════════════";

    println!("\n{}", rule.green().bold());
    println!("{}", "NA Scan Complete".green().bold());
    println!("{}", rule.green().bold());

    println!("\n{}: {}", "Main Folder".cyan().bold(), outcome.main_folder);
    println!("  Files checked: {}", outcome.files_checked.to_string().bold());
    println!(
        "  Files with NA: {}",
        outcome.files_with_na().to_string().green().bold()
    );
    println!("  Total NA: {}", outcome.total_na().to_string().yellow().bold());

    if !outcome.failures.is_empty() {
        println!(
            "  Unreadable: {}",
            outcome.failures.len().to_string().red().bold()
        );
        for failure in &outcome.failures {
            println!("    • {}", failure.path.display().to_string().dimmed());
        }
    }

    match &summary.report {
        Some(report) if report.written => {
            if max_rows > 0 && !report.rows.is_empty() {
                println!("\n{}", "Most NA markers:".yellow().bold());
                println!("{}", table::top_rows(&report.rows, max_rows));
            }
            println!(
                "\n{}",
                format!("Report written to {}", summary.output.display())
                    .green()
                    .dimmed()
            );
        }
        Some(_) => {
            println!(
                "\n{}",
                format!("Report could not be written to {}", summary.output.display())
                    .red()
                    .bold()
            );
        }
        None => {
            println!("\n{}", "No files containing 'NA' found.".yellow());
        }
    }
}
