pub mod matcher;
pub mod walker;

use crate::config::ScanConfig;
use crate::core::errors::NaReportError;
use crate::core::models::{FileCount, FileOutcome, ScanFailure, ScanOutcome};
use anyhow::Result;
use matcher::NaMatcher;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub struct Scanner {
    matcher: NaMatcher,
    extension: String,
    follow_links: bool,
}

impl Scanner {
    pub fn new(config: &ScanConfig) -> Result<Self> {
        Ok(Self {
            matcher: NaMatcher::new()?,
            extension: config.extension.clone(),
            follow_links: config.follow_links,
        })
    }

    #[cfg(test)]
    pub fn scan(&self, root: &Path) -> Result<ScanOutcome, NaReportError> {
        self.scan_with_progress(root, |_| {})
    }

    /// Walk `root` and count NA tokens in every candidate file.
    ///
    /// Only a missing or non-directory root is an error. Unreadable files and
    /// directory entries are logged, recorded in `ScanOutcome::failures` and
    /// skipped. `on_file` is called for each candidate before it is read.
    pub fn scan_with_progress<F>(
        &self,
        root: &Path,
        mut on_file: F,
    ) -> Result<ScanOutcome, NaReportError>
    where
        F: FnMut(&Path),
    {
        if !root.exists() {
            return Err(NaReportError::MissingRoot(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(NaReportError::NotADirectory(root.to_path_buf()));
        }

        let main_folder = walker::main_folder_name(root);
        let mut outcome = ScanOutcome::new(main_folder);
        info!("Scanning directory: {}", root.display());

        // Files before subfolders, so each folder is finished before descending.
        let entries = WalkDir::new(root)
            .follow_links(self.follow_links)
            .sort_by(|a, b| {
                a.file_type()
                    .is_dir()
                    .cmp(&b.file_type().is_dir())
                    .then_with(|| a.file_name().cmp(b.file_name()))
            });

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    let err = NaReportError::Walk {
                        path: path.clone(),
                        reason: e.to_string(),
                    };
                    warn!("{}", err);
                    outcome.failures.push(ScanFailure {
                        path,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            let path = entry.path();
            if entry.file_type().is_dir() {
                let folder = walker::relative_folder(root, path);
                debug!(
                    "Processing folder: {} (station: {})",
                    path.display(),
                    walker::station_name(&outcome.main_folder, &folder)
                );
                continue;
            }
            if entry.path_is_symlink() && path.is_dir() {
                debug!("Skipping linked folder: {}", path.display());
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().into_owned();
            if !file_name.ends_with(&self.extension) {
                continue;
            }

            debug!("Checking file: {}", path.display());
            outcome.files_checked += 1;
            on_file(path);

            match self.check_file(path) {
                FileOutcome::Matched(na_count) => {
                    info!("Found {} 'NA' in {}", na_count, file_name);
                    let folder = walker::relative_folder(root, path.parent().unwrap_or(root));
                    let station = walker::station_name(&outcome.main_folder, &folder);
                    outcome.record(
                        station,
                        FileCount {
                            folder,
                            name: file_name,
                            na_count,
                        },
                    );
                }
                FileOutcome::NoMatch => {}
                FileOutcome::Failed(reason) => {
                    warn!("{}", reason);
                    outcome.failures.push(ScanFailure {
                        path: path.to_path_buf(),
                        reason,
                    });
                }
            }
        }

        Ok(outcome)
    }

    /// Read one file as UTF-8 and count its NA tokens.
    pub fn check_file(&self, path: &Path) -> FileOutcome {
        match read_text(path) {
            Ok(content) => match self.matcher.count(&content) {
                0 => FileOutcome::NoMatch,
                n => FileOutcome::Matched(n),
            },
            Err(e) => FileOutcome::Failed(e.to_string()),
        }
    }
}

fn read_text(path: &Path) -> Result<String, NaReportError> {
    fs::read_to_string(path).map_err(|source| NaReportError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobalConfig;
    use crate::core::models::ScanResult;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn scanner() -> Scanner {
        Scanner::new(&GlobalConfig::default().scan).unwrap()
    }

    fn write(root: &Path, relative: &str, content: &[u8]) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn fixture() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("R");
        fs::create_dir(&root).unwrap();
        (dir, root)
    }

    fn file(folder: &str, name: &str, na_count: usize) -> FileCount {
        FileCount {
            folder: folder.to_string(),
            name: name.to_string(),
            na_count,
        }
    }

    #[test]
    fn test_scan_groups_by_relative_folder() {
        let (_dir, root) = fixture();
        write(&root, "A/f1.txt", b"x NA y");
        write(&root, "f2.txt", b"NA NA");
        write(&root, "f3.txt", b"banana");
        write(&root, "StationX/sub/data.txt", b"NA\nNA\nNA");

        let outcome = scanner().scan(&root).unwrap();

        let mut expected = ScanResult::new();
        expected.push("R".to_string(), file("", "f2.txt", 2));
        expected.push("A".to_string(), file("A", "f1.txt", 1));
        expected.push("StationX/sub".to_string(), file("StationX/sub", "data.txt", 3));

        assert_eq!(outcome.main_folder, "R");
        assert_eq!(outcome.stations, expected);
        assert_eq!(outcome.files_checked, 4);
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn test_scan_only_checks_case_sensitive_txt_suffix() {
        let (_dir, root) = fixture();
        write(&root, "data.csv", b"NA");
        write(&root, "DATA.TXT", b"NA");
        write(&root, "notes.txt.bak", b"NA");
        write(&root, "S1/flows.txt", b"NA");

        let outcome = scanner().scan(&root).unwrap();

        assert_eq!(outcome.files_checked, 1);
        assert_eq!(outcome.files_with_na(), 1);
        assert_eq!(outcome.stations["S1"], vec![file("S1", "flows.txt", 1)]);
    }

    #[test]
    fn test_scan_skips_unreadable_files_and_continues() {
        let (_dir, root) = fixture();
        write(&root, "A/bad.txt", &[0xff, 0xfe, b' ', b'N', b'A']);
        write(&root, "A/good.txt", b"NA");

        let outcome = scanner().scan(&root).unwrap();

        assert_eq!(outcome.files_checked, 2);
        assert_eq!(outcome.stations["A"], vec![file("A", "good.txt", 1)]);
        assert_eq!(outcome.failures.len(), 1);
        assert!(outcome.failures[0].path.ends_with("A/bad.txt"));
        assert!(outcome.failures[0].reason.contains("bad.txt"));
    }

    #[test]
    fn test_scan_is_repeatable() {
        let (_dir, root) = fixture();
        write(&root, "b/one.txt", b"NA NA");
        write(&root, "a/two.txt", b"NA");
        write(&root, "a/three.txt", b"NA, NA, NA");
        write(&root, "root.txt", b"NA");

        let scanner = scanner();
        let first = scanner.scan(&root).unwrap();
        let second = scanner.scan(&root).unwrap();

        assert_eq!(first.stations, second.stations);
        assert_eq!(
            first.stations["a"],
            vec![file("a", "three.txt", 3), file("a", "two.txt", 1)]
        );
    }

    #[test]
    fn test_scan_orders_stations_root_first_then_traversal() {
        let (_dir, root) = fixture();
        write(&root, "b/y.txt", b"NA");
        write(&root, "a/deep/w.txt", b"NA");
        write(&root, "a/x.txt", b"NA");
        write(&root, "z.txt", b"NA");

        let outcome = scanner().scan(&root).unwrap();

        let names: Vec<&str> = outcome.stations.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["R", "a", "a/deep", "b"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_linked_folder_with_matching_suffix() {
        let (_dir, root) = fixture();
        write(&root, "real/a.txt", b"NA");
        std::os::unix::fs::symlink(root.join("real"), root.join("link.txt")).unwrap();

        let outcome = scanner().scan(&root).unwrap();

        assert_eq!(outcome.files_checked, 1);
        assert!(outcome.failures.is_empty());
        assert_eq!(outcome.stations["real"], vec![file("real", "a.txt", 1)]);
    }

    #[test]
    fn test_scan_reports_progress_per_candidate() {
        let (_dir, root) = fixture();
        write(&root, "a.txt", b"NA");
        write(&root, "b.txt", b"none");
        write(&root, "c.dat", b"NA");

        let mut seen = Vec::new();
        scanner()
            .scan_with_progress(&root, |path| seen.push(path.to_path_buf()))
            .unwrap();

        assert_eq!(seen, vec![root.join("a.txt"), root.join("b.txt")]);
    }

    #[test]
    fn test_scan_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("Z");

        let err = scanner().scan(&missing).unwrap_err();
        assert!(matches!(err, NaReportError::MissingRoot(ref path) if path == &missing));
    }

    #[test]
    fn test_scan_root_is_a_file() {
        let (_dir, root) = fixture();
        write(&root, "f.txt", b"NA");

        let err = scanner().scan(&root.join("f.txt")).unwrap_err();
        assert!(matches!(err, NaReportError::NotADirectory(_)));
    }

    #[test]
    fn test_check_file_outcomes() {
        let (_dir, root) = fixture();
        write(&root, "hit.txt", b"NA, NA NA");
        write(&root, "miss.txt", b"BANANA NAME NAAN");

        let scanner = scanner();
        assert_eq!(scanner.check_file(&root.join("hit.txt")), FileOutcome::Matched(3));
        assert_eq!(scanner.check_file(&root.join("miss.txt")), FileOutcome::NoMatch);
        assert!(matches!(
            scanner.check_file(&root.join("absent.txt")),
            FileOutcome::Failed(_)
        ));
    }
}
