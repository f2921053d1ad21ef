//! The data-source collaborator contract and its in-memory implementation.

use std::collections::BTreeMap;

use crate::grid::Grid;

/// Maps opaque string keys to grids.
///
/// Keys are file-path-shaped in practice (`/data/dataset1.csv`) but the
/// dispatcher treats them as plain strings. Lookup is synchronous and
/// infallible: a backend that can fail (real files, say) must map failures
/// to `None` so the console loop never faults.
pub trait DataSource {
    /// Returns the grid for `key`, or `None` if the key is absent.
    fn lookup(&self, key: &str) -> Option<Grid>;
}

/// String-keyed in-memory source.
///
/// The reference deployment backs the console with a fixed set of mocked
/// datasets; this is that set. Also the workhorse for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    datasets: BTreeMap<String, Grid>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a dataset under `key`.
    pub fn insert(&mut self, key: impl Into<String>, grid: Grid) {
        self.datasets.insert(key.into(), grid);
    }

    /// Removes the dataset under `key`, returning it if present.
    pub fn remove(&mut self, key: &str) -> Option<Grid> {
        self.datasets.remove(key)
    }

    /// Number of datasets held.
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// True when no datasets are held.
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

impl DataSource for MemorySource {
    fn lookup(&self, key: &str) -> Option<Grid> {
        self.datasets.get(key).cloned()
    }
}
