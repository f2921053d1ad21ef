//! Text rendering for griddle console replies.
//!
//! The dispatcher hands back structured [`Reply`](griddle_dispatch::Reply)
//! values; this crate turns them into display text. It switches on the
//! reply's tags - message vs table, brief vs verbose - and never inspects
//! message contents.
//!
//! - Messages pass through unchanged.
//! - Grids become left-aligned columns separated by two spaces, widths
//!   measured display-aware (ANSI sequences and wide CJK glyphs included).
//! - Verbose replies echo the literal input line above the output:
//!
//! ```text
//! Command: search City Laketown
//! Output: No records found matching 'Laketown' in column 'City'.
//! ```
//!
//! [`TextStyle`] picks between ANSI-styled output for attended terminals
//! and plain text for pipes and transcripts.

mod reply;
mod style;
mod table;

pub use reply::{render_outcome, render_reply};
pub use style::TextStyle;
pub use table::format_grid;
