//! `mode` - toggle brief/verbose reply wrapping.

use crate::handler::CommandContext;
use crate::outcome::Outcome;

/// Usage reply when `mode` is called with arguments.
const MODE_USAGE: &str = "Usage: 'mode' to toggle between brief and verbose output.";

/// Toggles the session verbosity and reports the new mode.
///
/// Any argument means the caller expected `mode` to take a value, so the
/// state is left alone and the usage line comes back instead. The toggle
/// is the only transition the two-state machine has; it stays available
/// for the lifetime of the session.
pub fn mode(ctx: &mut CommandContext<'_>, args: &[String]) -> Outcome {
    if !args.is_empty() {
        return Outcome::message(MODE_USAGE);
    }
    ctx.session.verbosity = ctx.session.verbosity.toggled();
    Outcome::message(format!("Mode set to {}", ctx.session.verbosity))
}
