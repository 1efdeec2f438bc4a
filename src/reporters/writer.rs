use crate::core::models::ReportRow;
use crate::utils::fs::atomic_write;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

pub const HEADERS: [&str; 4] = [
    "Main Folder",
    "Mean Daily Discharge Folder",
    "File Folder",
    "File Name (NA Count)",
];

#[derive(Serialize)]
struct CsvRecord<'a> {
    main_folder: &'a str,
    station: &'a str,
    file_folder: &'a str,
    file_label: String,
}

impl<'a> From<&'a ReportRow> for CsvRecord<'a> {
    fn from(row: &'a ReportRow) -> Self {
        Self {
            main_folder: &row.main_folder,
            station: &row.station,
            file_folder: &row.file_folder,
            file_label: row.file_label(),
        }
    }
}

/// Header plus one record per row, CRLF-terminated.
pub fn render_csv(rows: &[ReportRow]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(HEADERS).context("Failed to write CSV header")?;
    for row in rows {
        writer
            .serialize(CsvRecord::from(row))
            .with_context(|| format!("Failed to serialize row for {}", row.file_name))?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {}", e.error()))
}

pub fn write_csv(rows: &[ReportRow], output: &Path) -> Result<()> {
    let bytes = render_csv(rows)?;
    atomic_write(output, &bytes)?;
    Ok(())
}
