use crate::{
    cli::args::Cli,
    config::{ConfigLoader, GlobalConfig},
    core::models::ScanOutcome,
    reporters::{self, ReportOutcome},
    scanner::Scanner,
    ui::{printer, progress::ScanSpinner},
    utils::logging,
};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Everything one run produced, for the terminal summary.
#[derive(Debug)]
pub struct RunSummary {
    pub outcome: ScanOutcome,
    pub report: Option<ReportOutcome>,
    pub output: PathBuf,
}

pub fn run(cli: Cli) -> Result<()> {
    let level = logging::level_from_cli(&cli);
    logging::init(level)?;

    let config = ConfigLoader::load_with_custom_path(cli.config.as_deref())?;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.root.join(&config.report.file_name));

    let summary = execute(&cli.root, &output, &config, !cli.quiet)?;

    if !cli.quiet {
        printer::print_summary(&summary, config.report.summary_rows);
    }

    Ok(())
}

/// Scan `root` and, when anything was found, write the report to `output`.
///
/// A missing root is the only error. An empty scan writes nothing.
pub fn execute(
    root: &Path,
    output: &Path,
    config: &GlobalConfig,
    show_progress: bool,
) -> Result<RunSummary> {
    let scanner = Scanner::new(&config.scan)?;

    let spinner = ScanSpinner::new(show_progress);
    let scanned = scanner.scan_with_progress(root, |path| spinner.tick(path));
    spinner.finish();

    let outcome = scanned.inspect_err(|e| tracing::error!("Cannot scan {}: {}", root.display(), e))?;

    tracing::info!(
        "Checked {} files, {} with NA, {} unreadable",
        outcome.files_checked,
        outcome.files_with_na(),
        outcome.failures.len()
    );

    let report = if outcome.is_empty() {
        tracing::info!("No files containing 'NA' found.");
        None
    } else {
        let report = reporters::generate_report(&outcome.main_folder, &outcome.stations, output);
        if report.rows.is_empty() {
            tracing::info!("No data to write to CSV (empty report).");
        }
        Some(report)
    };

    Ok(RunSummary {
        outcome,
        report,
        output: output.to_path_buf(),
    })
}
