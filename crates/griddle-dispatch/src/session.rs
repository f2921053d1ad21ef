//! Mutable session state shared across handler invocations.

use std::fmt;

use crate::grid::Grid;

/// Output verbosity for dispatched replies.
///
/// Two states, one transition: a zero-argument `mode` command toggles
/// between them. Every session starts in `Brief`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Replies carry the handler outcome alone.
    #[default]
    Brief,
    /// Replies echo the input line alongside the outcome.
    Verbose,
}

impl Verbosity {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Verbosity::Brief => Verbosity::Verbose,
            Verbosity::Verbose => Verbosity::Brief,
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verbosity::Brief => write!(f, "brief"),
            Verbosity::Verbose => write!(f, "verbose"),
        }
    }
}

/// The mutable fields one console instance shares across handlers.
///
/// Lives for the lifetime of the dispatcher and is discarded with it -
/// nothing here persists. `load_file` is the only writer of the dataset
/// fields (`view` refreshes the cached copy from the source), and `mode`
/// the only writer of the verbosity.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Key the current dataset was loaded from. `None` until the first
    /// successful load.
    pub source_key: Option<String>,
    /// Cached copy of the current dataset. Empty until a load succeeds.
    pub dataset: Grid,
    /// Current reply verbosity.
    pub verbosity: Verbosity,
}

impl Session {
    /// A fresh session: no dataset, brief replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a dataset has ever been successfully loaded.
    pub fn has_dataset(&self) -> bool {
        self.source_key.is_some()
    }
}
