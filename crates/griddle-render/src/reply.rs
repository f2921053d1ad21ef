//! Reply rendering: brief pass-through and the verbose echo layout.

use console::style;
use griddle_dispatch::{Outcome, Reply};

use crate::style::TextStyle;
use crate::table::format_grid;

/// Renders an outcome as display text.
///
/// Messages pass through unchanged; tables become aligned lines joined
/// with newlines.
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Message(text) => text.clone(),
        Outcome::Table(grid) => format_grid(grid).join("\n"),
    }
}

/// Renders a reply as display text.
///
/// Brief replies are the outcome alone. Verbose replies echo the literal
/// input line first; message outcomes share the `Output:` line, tables
/// start on the line below it so their column alignment survives:
///
/// ```text
/// Command: view
/// Output:
/// ID  Address      City
/// 1   123 Main St  Anytown
/// ```
pub fn render_reply(reply: &Reply, text_style: TextStyle) -> String {
    match reply {
        Reply::Brief { outcome } => render_outcome(outcome),
        Reply::Verbose { command, outcome } => {
            let echo = decorate_echo(format!("Command: {}", command), text_style);
            match outcome {
                Outcome::Message(text) => format!("{}\nOutput: {}", echo, text),
                Outcome::Table(grid) => {
                    let mut lines = vec![echo, "Output:".to_string()];
                    lines.extend(format_grid(grid));
                    lines.join("\n")
                }
            }
        }
    }
}

fn decorate_echo(echo: String, text_style: TextStyle) -> String {
    match text_style {
        TextStyle::Styled => style(echo).dim().force_styling(true).to_string(),
        TextStyle::Plain => echo,
    }
}
