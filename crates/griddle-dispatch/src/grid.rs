//! The tabular value datasets are made of.

use serde::{Deserialize, Serialize};

/// An ordered sequence of rows, each an ordered sequence of string cells.
///
/// Row 0 conventionally holds the column headers. Rows are assumed, not
/// enforced, to share a column count - a ragged grid still round-trips
/// through every operation, it just reads oddly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Creates an empty grid (the "no dataset loaded" value).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grid from pre-built rows.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// All rows, header included.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The header row (row 0), if the grid has one.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(|row| row.as_slice())
    }

    /// Iterates over the data rows - every row except the header.
    pub fn records(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().skip(1).map(|row| row.as_slice())
    }

    /// Resolves a column name against the header by exact string equality.
    ///
    /// The first matching index wins when headers repeat a name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header()
            .and_then(|header| header.iter().position(|cell| cell == name))
    }

    /// Number of rows, header included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the grid holds no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Vec<String>>> for Grid {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::from_rows(rows)
    }
}
