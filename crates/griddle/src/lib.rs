//! griddle: an interactive console for browsing tabular datasets.
//!
//! The binary wires four collaborators around the dispatch engine:
//!
//! - [`cli`]: the flag surface (`--data-dir`, `--output`, `-c`, `--debug`)
//! - [`auth`]: the session gate the prompt loop sits behind
//! - [`source`]: where datasets come from - built-in fixtures or a CSV
//!   directory
//! - [`repl`]: the prompt loop itself, appending rendered replies to the
//!   [`history`] transcript
//!
//! The engine itself lives in `griddle-dispatch`; nothing here interprets
//! commands beyond the shell words (`login`, `logout`, `exit`, `quit`).

pub mod auth;
pub mod cli;
pub mod fixtures;
pub mod history;
pub mod repl;
pub mod source;
