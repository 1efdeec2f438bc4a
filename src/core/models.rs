use std::collections::HashMap;
use std::ops::Index;
use std::path::PathBuf;

/// A file that contained at least one NA token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileCount {
    pub folder: String, // relative to the scan root, empty for files in the root itself
    pub name: String,
    pub na_count: usize,
}

/// Station name to the files found under it. Stations keep the order in
/// which they were first seen, files keep traversal order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanResult {
    stations: Vec<(String, Vec<FileCount>)>,
    index: HashMap<String, usize>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, station: String, file: FileCount) {
        match self.index.get(&station) {
            Some(&pos) => self.stations[pos].1.push(file),
            None => {
                self.index.insert(station.clone(), self.stations.len());
                self.stations.push((station, vec![file]));
            }
        }
    }

    pub fn get(&self, station: &str) -> Option<&[FileCount]> {
        self.index
            .get(station)
            .map(|&pos| self.stations[pos].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FileCount])> {
        self.stations
            .iter()
            .map(|(name, files)| (name.as_str(), files.as_slice()))
    }

    pub fn files(&self) -> impl Iterator<Item = &FileCount> {
        self.stations.iter().flat_map(|(_, files)| files)
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl Index<&str> for ScanResult {
    type Output = [FileCount];

    fn index(&self, station: &str) -> &Self::Output {
        match self.get(station) {
            Some(files) => files,
            None => panic!("no station named {:?}", station),
        }
    }
}

/// What happened when a single candidate file was checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    Matched(usize),
    NoMatch,
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Clone, Debug, Default)]
pub struct ScanOutcome {
    pub main_folder: String,
    pub stations: ScanResult,
    pub files_checked: usize,
    pub failures: Vec<ScanFailure>,
}

impl ScanOutcome {
    pub fn new(main_folder: String) -> Self {
        Self {
            main_folder,
            ..Self::default()
        }
    }

    pub fn record(&mut self, station: String, file: FileCount) {
        self.stations.push(station, file);
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn files_with_na(&self) -> usize {
        self.stations.files().count()
    }

    pub fn total_na(&self) -> usize {
        self.stations.files().map(|file| file.na_count).sum()
    }
}

/// One line of the CSV report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub main_folder: String,
    pub station: String,
    pub file_folder: String,
    pub file_name: String,
    pub na_count: usize,
}

impl ReportRow {
    /// Last report column, e.g. `flows_1990.txt (12)`.
    pub fn file_label(&self) -> String {
        format!("{} ({})", self.file_name, self.na_count)
    }
}
