use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub scan: ScanConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Case-sensitive file-name suffix of files to check.
    pub extension: String,
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: ".txt".to_string(),
            follow_links: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Report file name, placed in the scan root unless `--output` is given.
    pub file_name: String,
    /// Rows shown in the terminal summary table.
    pub summary_rows: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            file_name: "na_report.csv".to_string(),
            summary_rows: 10,
        }
    }
}
