use super::types::GlobalConfig;
use crate::core::errors::NaReportError;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_PATH: &str = "./na-report.toml";
const CONFIG_FILE_NAME: &str = "config.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with an optional explicit path.
    ///
    /// Order: explicit path, `./na-report.toml`, the user config directory,
    /// then built-in defaults. An explicit path that exists but fails to parse
    /// is an error; a broken fallback file only logs a warning.
    pub fn load_with_custom_path(custom_path: Option<&Path>) -> Result<GlobalConfig> {
        if let Some(path) = custom_path {
            if path.exists() {
                return Self::load_from_file(path)
                    .with_context(|| format!("Failed to load config from custom path: {:?}", path));
            }
            tracing::warn!("Custom config path does not exist: {:?}, falling back to defaults", path);
        }

        for path in Self::default_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from: {:?}", path);
                    return Ok(config);
                }
                Err(e) => {
                    tracing::warn!("Failed to load config from {:?}: {:#}", path, e);
                }
            }
        }

        tracing::debug!("No configuration file found, using default settings");
        Ok(GlobalConfig::default())
    }

    fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_PATH)];
        if let Some(dirs) = ProjectDirs::from("", "", "na-report") {
            paths.push(dirs.config_dir().join(CONFIG_FILE_NAME));
        }
        paths
    }

    fn load_from_file(path: &Path) -> Result<GlobalConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: GlobalConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {:?}", path))?;

        Self::validate_config(&config)?;

        Ok(config)
    }

    fn validate_config(config: &GlobalConfig) -> Result<(), NaReportError> {
        if config.scan.extension.is_empty() {
            return Err(NaReportError::Config(
                "scan.extension cannot be empty".to_string(),
            ));
        }

        let file_name = &config.report.file_name;
        if file_name.is_empty() {
            return Err(NaReportError::Config(
                "report.file_name cannot be empty".to_string(),
            ));
        }
        if file_name.contains(['/', '\\']) {
            return Err(NaReportError::Config(format!(
                "report.file_name must be a bare file name, got {:?}",
                file_name
            )));
        }

        Ok(())
    }
}
