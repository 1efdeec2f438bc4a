use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NaReportError {
    #[error("directory not found: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error walking {}: {reason}", .path.display())]
    Walk { path: PathBuf, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("error writing CSV to {}: {reason}", .path.display())]
    Report { path: PathBuf, reason: String },
}
