//! `view` - display the full current dataset.

use crate::handler::CommandContext;
use crate::outcome::Outcome;

use super::{MISSING_FILE, NO_DATASET};

/// Returns the whole current dataset, header row included.
///
/// Arguments are ignored. The grid is re-resolved against the data source
/// rather than served from the session's cached copy - the source owns the
/// truth, and the cache is refreshed as a side effect. If the key has
/// vanished from the source since the load, the reply is the same message
/// a failed `load_file` gives.
pub fn view(ctx: &mut CommandContext<'_>, _args: &[String]) -> Outcome {
    let key = match &ctx.session.source_key {
        Some(key) => key.clone(),
        None => return Outcome::message(NO_DATASET),
    };
    match ctx.source.lookup(&key) {
        Some(grid) => {
            ctx.session.dataset = grid.clone();
            Outcome::table(grid)
        }
        None => Outcome::message(MISSING_FILE),
    }
}
