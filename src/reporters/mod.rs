pub mod writer;

use crate::core::errors::NaReportError;
use crate::core::models::{ReportRow, ScanResult};
use std::path::Path;
use tracing::{error, info};

/// Rows produced by one report run and whether the CSV reached disk.
#[derive(Debug)]
pub struct ReportOutcome {
    pub rows: Vec<ReportRow>,
    pub written: bool,
}

/// Flatten grouped scan results into report rows, ascending by NA count.
/// Equal counts keep their station and traversal order.
pub fn build_rows(main_folder: &str, stations: &ScanResult) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = stations
        .iter()
        .flat_map(|(station, files)| {
            files.iter().map(move |file| ReportRow {
                main_folder: main_folder.to_string(),
                station: station.to_string(),
                file_folder: file.folder.clone(),
                file_name: file.name.clone(),
                na_count: file.na_count,
            })
        })
        .collect();

    rows.sort_by_key(|row| row.na_count);
    rows
}

/// Build the rows and write them to `output`. Write failures are logged,
/// never returned; the rows come back either way.
pub fn generate_report(main_folder: &str, stations: &ScanResult, output: &Path) -> ReportOutcome {
    let rows = build_rows(main_folder, stations);

    let written = match writer::write_csv(&rows, output) {
        Ok(()) => {
            info!("Report generated: {}", output.display());
            true
        }
        Err(e) => {
            let err = NaReportError::Report {
                path: output.to_path_buf(),
                reason: format!("{:#}", e),
            };
            error!("{}", err);
            false
        }
    };

    ReportOutcome { rows, written }
}
