//! CSV-directory data source.

use std::path::{Component, Path, PathBuf};

use griddle_dispatch::{DataSource, Grid};
use tracing::warn;

/// Serves grids from CSV files beneath a root directory.
///
/// Keys are resolved as paths relative to the root; a leading `/` is
/// stripped, so the file-path-shaped keys of the in-memory deployment
/// (`/data/dataset1.csv`) address `<root>/data/dataset1.csv`. Keys that
/// climb out of the root (`..`) never resolve.
///
/// Every failure - missing file, unreadable bytes, malformed CSV, an
/// empty file - maps to a lookup miss. The console loop has no fault
/// path, and a broken file is indistinguishable from an absent one by
/// design; the details land in the log instead.
#[derive(Debug, Clone)]
pub struct CsvDirSource {
    root: PathBuf,
}

impl CsvDirSource {
    /// Creates a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, key: &str) -> Option<PathBuf> {
        let relative = key.trim_start_matches('/');
        if relative.is_empty() {
            return None;
        }
        let path = Path::new(relative);
        if path
            .components()
            .any(|component| matches!(component, Component::ParentDir | Component::RootDir))
        {
            return None;
        }
        Some(self.root.join(path))
    }

    fn read(&self, key: &str, path: &Path) -> Option<Grid> {
        let mut reader = match csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
        {
            Ok(reader) => reader,
            Err(err) => {
                warn!(key, error = %err, "dataset file is not readable");
                return None;
            }
        };

        let mut rows = Vec::new();
        for record in reader.records() {
            match record {
                Ok(record) => rows.push(record.iter().map(String::from).collect()),
                Err(err) => {
                    warn!(key, error = %err, "dataset file is not valid CSV");
                    return None;
                }
            }
        }
        if rows.is_empty() {
            // a dataset is either absent or has at least a header row
            warn!(key, "dataset file is empty");
            return None;
        }
        Some(Grid::from_rows(rows))
    }
}

impl DataSource for CsvDirSource {
    fn lookup(&self, key: &str) -> Option<Grid> {
        let path = self.resolve(key)?;
        self.read(key, &path)
    }
}
