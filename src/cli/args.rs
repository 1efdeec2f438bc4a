use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "na-report", version)]
#[command(about = "Count whole-word NA markers in .txt files and write a CSV report", long_about = None)]
pub struct Cli {
    /// Directory to scan recursively
    pub root: PathBuf,

    /// CSV report path (default: <ROOT>/na_report.csv)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Verbose human output
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Debug logs (implies verbose)
    #[arg(short = 'd', long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,

    /// Skip the terminal summary and progress spinner
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["na-report", "/data/bag-basin"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("/data/bag-basin"));
        assert!(cli.output.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose && !cli.debug && !cli.quiet);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "na-report", "basin", "-o", "out/report.csv", "-c", "na.toml", "-v", "-d", "-q",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out/report.csv")));
        assert_eq!(cli.config, Some(PathBuf::from("na.toml")));
        assert!(cli.verbose && cli.debug && cli.quiet);
    }

    #[test]
    fn test_root_is_required() {
        assert!(Cli::try_parse_from(["na-report"]).is_err());
    }
}
