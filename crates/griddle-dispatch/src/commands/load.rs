//! `load_file` - bind a source key to the session.

use crate::handler::CommandContext;
use crate::outcome::Outcome;

use super::MISSING_FILE;

/// Loads the dataset named by the argument tokens.
///
/// The tokens are rejoined with single spaces to reconstruct a
/// file-path-like key, so paths containing spaces need no quoting. On a
/// hit the key and grid become the session's current dataset; on a miss
/// the session is left exactly as it was - no partial mutation.
///
/// Loading the same key twice is idempotent: same dataset, same message.
pub fn load_file(ctx: &mut CommandContext<'_>, args: &[String]) -> Outcome {
    let key = args.join(" ");
    match ctx.source.lookup(&key) {
        Some(grid) => {
            ctx.session.dataset = grid;
            ctx.session.source_key = Some(key.clone());
            Outcome::message(format!("Dataset loaded from {}", key))
        }
        None => Outcome::message(MISSING_FILE),
    }
}
