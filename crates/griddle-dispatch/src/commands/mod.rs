//! Built-in command handlers.
//!
//! Four stateful operations over the session: `load_file`, `view`,
//! `search`, and `mode`. Between them they cover the whole command surface
//! of the console; everything they can't do comes back as a message, so
//! the loop around them never has to handle a fault.

mod load;
mod mode;
mod search;
mod view;

pub use load::load_file;
pub use mode::mode;
pub use search::search;
pub use view::view;

/// Precondition message for commands that need a loaded dataset.
pub(crate) const NO_DATASET: &str =
    "No dataset loaded. Use 'load_file' command to load a dataset.";

/// Reply when a key resolves to nothing in the data source.
pub(crate) const MISSING_FILE: &str = "File path does not exist.";
