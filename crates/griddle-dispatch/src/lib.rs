//! Command dispatch and session state for the griddle console.
//!
//! `griddle-dispatch` is the engine behind the console: it maps a raw input
//! line to a registered handler, executes it against the session's current
//! dataset, and wraps the result according to the session-wide verbosity
//! mode. Rendering is deliberately out of scope - the dispatcher hands back
//! a structured [`Reply`] and the caller decides how to display it.
//!
//! # Pipeline
//!
//! ```text
//! input line -> tokenize -> registry lookup -> handler -> Outcome -> Reply
//! ```
//!
//! - **Tokenize**: split on whitespace; first token is the command name,
//!   the rest are positional arguments.
//! - **Lookup**: exact, case-sensitive match against the registry. A miss
//!   is the fixed `Unknown command` message, not an error.
//! - **Handler**: reads and writes [`Session`] state, resolves datasets
//!   through the [`DataSource`] collaborator, and always produces an
//!   [`Outcome`] - a message or a table. There is no fault path.
//! - **Wrap**: `brief` passes the outcome through; `verbose` echoes the
//!   literal input line alongside it.
//!
//! # Example
//!
//! ```rust
//! use griddle_dispatch::{Dispatcher, Grid, MemorySource, Outcome};
//!
//! let mut source = MemorySource::new();
//! source.insert(
//!     "/data/pets.csv",
//!     Grid::from_rows(vec![
//!         vec!["Name".into(), "Kind".into()],
//!         vec!["Maple".into(), "cat".into()],
//!     ]),
//! );
//!
//! let mut dispatcher = Dispatcher::with_builtins(Box::new(source));
//! let reply = dispatcher.process("load_file /data/pets.csv");
//! assert_eq!(
//!     reply.outcome(),
//!     &Outcome::message("Dataset loaded from /data/pets.csv")
//! );
//! ```

mod commands;
mod dispatch;
mod grid;
mod handler;
mod outcome;
mod serialize;
mod session;
mod source;

pub use commands::{load_file, mode, search, view};
pub use dispatch::{Dispatcher, DispatcherBuilder, SetupError, UNKNOWN_COMMAND};
pub use grid::Grid;
pub use handler::{CommandContext, Handler};
pub use outcome::{Outcome, Reply};
pub use serialize::to_json;
pub use session::{Session, Verbosity};
pub use source::{DataSource, MemorySource};
