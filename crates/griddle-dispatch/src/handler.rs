//! The command handler contract.

use crate::outcome::Outcome;
use crate::session::Session;
use crate::source::DataSource;

/// Execution environment a handler runs against.
///
/// Handlers mutate the session through this context; the data source is the
/// external collaborator datasets are (re)loaded from. A fresh context is
/// assembled per dispatch, borrowing both from the dispatcher - only one
/// handler can be live at a time, which is the whole concurrency story.
pub struct CommandContext<'a> {
    /// The session state this command reads and writes.
    pub session: &'a mut Session,
    /// Where datasets come from.
    pub source: &'a dyn DataSource,
}

/// A function bound to a command name.
///
/// Handlers consume the argument tokens (the input line minus the command
/// word) and always produce an [`Outcome`]. Failure paths - missing files,
/// unknown columns, empty matches - are ordinary messages, never errors;
/// the console loop has no fault path to propagate them through.
///
/// Any `Fn(&mut CommandContext, &[String]) -> Outcome` is a handler, so
/// plain functions and capturing closures both register directly.
pub trait Handler {
    /// Executes the command against the session.
    fn handle(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Outcome;
}

impl<F> Handler for F
where
    F: Fn(&mut CommandContext<'_>, &[String]) -> Outcome,
{
    fn handle(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Outcome {
        self(ctx, args)
    }
}
