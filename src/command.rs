use crate::session::Session;
use anyhow::Result;
use std::io::Write;

/// Conventional exit code type used by simulator commands.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// The simulator never turns it into a process status, it only shows up in logs
/// and in [`Outcome`](crate::Outcome).
pub type ExitCode = i32;

/// Object-safe trait for any command the simulator can run.
///
/// Implemented for every built-in verb via a blanket impl, and for the small
/// adapter that reports argument-parsing problems.
pub trait ExecutableCommand {
    /// Executes the command against the session, writing user-facing text to `stdout`.
    fn execute(self: Box<Self>, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode>;
}

/// Factory that tries to create a command from a verb and its arguments.
///
/// Returns `None` when the factory doesn't recognize `name`.
pub trait CommandFactory {
    /// Attempt to create a command instance for the provided verb and arguments.
    fn try_create(
        &self,
        session: &Session,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>>;
}
