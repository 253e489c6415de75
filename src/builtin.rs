use crate::command::{CommandFactory, ExecutableCommand, ExitCode};
use crate::error::ShellError;
use crate::interpreter::Factory;
use crate::listing::EntryKind;
use crate::session::Session;
use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use std::io::Write;
use tracing::debug;

/// Hint printed after the screen is cleared.
pub(crate) const EXIT_HINT: &str = "Type 'exit' to leave.";

/// The verbs the simulator understands, as advertised by `help`.
pub(crate) const HELP_TEXT: &str =
    "Available commands in simulator: ls, pwd, mkdir, touch, rm, clear, exit";

/// Commands the simulator knows at compile time.
///
/// Verbs that declare flags parse their arguments with the [`argh`] crate
/// (`FromArgs`). Verbs that only take names keep the raw words, so an operand such
/// as `help` or `-v` is a name like any other. Every command runs against the
/// in-memory [`Session`]; nothing here ever touches the real filesystem.
pub(crate) trait SimCommand: Sized {
    /// Verb that selects the command, e.g. "ls" or "mkdir".
    fn name() -> &'static str;

    /// Builds the command from the words following the verb.
    fn parse(args: &[&str]) -> Result<Self, EarlyExit>;

    /// Executes the command, writing user-facing text to `stdout`.
    ///
    /// Refusals are returned as [`ShellError`] wrapped in `anyhow`; the interpreter
    /// prints them and keeps going.
    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode>;
}

impl<T: SimCommand> ExecutableCommand for T {
    fn execute(self: Box<Self>, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        <T as SimCommand>::execute(*self, stdout, session)
    }
}

/// What `argh` produced instead of a command: help text or a parse error.
struct InvalidArgs {
    output: String,
    is_error: bool,
}

impl ExecutableCommand for InvalidArgs {
    fn execute(self: Box<Self>, stdout: &mut dyn Write, _session: &mut Session) -> Result<ExitCode> {
        writeln!(stdout, "{}", self.output.trim_end())?;
        Ok(if self.is_error { 1 } else { 0 })
    }
}

impl<T: SimCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(
        &self,
        _session: &Session,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>> {
        if name == T::name() {
            Some(match T::parse(args) {
                Ok(cmd) => Box::new(cmd),
                Err(EarlyExit { output, status }) => {
                    debug!(verb = name, "argument parsing exited early");
                    Box::new(InvalidArgs {
                        output,
                        is_error: status.is_err(),
                    })
                }
            })
        } else {
            None
        }
    }
}

/// Raw operands, untouched by any flag parsing.
fn operands(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}

/// Print the current working directory.
pub struct Pwd {
    /// Ignored, like the classic tutor did.
    pub _args: Vec<String>,
}

impl SimCommand for Pwd {
    fn name() -> &'static str {
        "pwd"
    }

    fn parse(args: &[&str]) -> Result<Self, EarlyExit> {
        Ok(Self { _args: operands(args) })
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        writeln!(stdout, "{}", session.current_path)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// List the entries of the current directory.
pub struct Ls {
    #[argh(switch, short = 'l')]
    /// use a long listing format, one entry per line.
    pub long: bool,

    #[argh(positional, greedy)]
    /// ignored; there is only one directory to list.
    pub _paths: Vec<String>,
}

impl SimCommand for Ls {
    fn name() -> &'static str {
        "ls"
    }

    fn parse(args: &[&str]) -> Result<Self, EarlyExit> {
        Self::from_args(&[Self::name()], args)
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        let palette = session.palette;
        let render = |name: &str, kind: EntryKind| match kind {
            EntryKind::Directory => palette.directory(name),
            EntryKind::File => name.to_string(),
        };

        if self.long {
            for entry in session.listing.entries() {
                let mode = match entry.kind {
                    EntryKind::Directory => "drwxr-xr-x",
                    EntryKind::File => "-rw-r--r--",
                };
                writeln!(
                    stdout,
                    "{} {} {}",
                    mode,
                    session.user,
                    render(&entry.name, entry.kind)
                )?;
            }
        } else {
            let names: Vec<String> = session
                .listing
                .entries()
                .iter()
                .map(|e| render(&e.name, e.kind))
                .collect();
            writeln!(stdout, "{}", names.join("  "))?;
        }
        Ok(0)
    }
}

/// Create a directory.
pub struct Mkdir {
    /// Name of the directory to create; only the first one is used.
    pub names: Vec<String>,
}

impl SimCommand for Mkdir {
    fn name() -> &'static str {
        "mkdir"
    }

    fn parse(args: &[&str]) -> Result<Self, EarlyExit> {
        Ok(Self {
            names: operands(args),
        })
    }

    fn execute(self, _stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        let name = self
            .names
            .first()
            .ok_or_else(|| ShellError::missing_operand("mkdir"))?;
        session.listing.create_dir(name)?;
        debug!(name = %name, "directory created");
        Ok(0)
    }
}

/// Create an empty file.
pub struct Touch {
    /// Name of the file to create; only the first one is used.
    pub names: Vec<String>,
}

impl SimCommand for Touch {
    fn name() -> &'static str {
        "touch"
    }

    fn parse(args: &[&str]) -> Result<Self, EarlyExit> {
        Ok(Self {
            names: operands(args),
        })
    }

    fn execute(self, _stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        let name = self
            .names
            .first()
            .ok_or_else(|| ShellError::missing_file_operand("touch"))?;
        session.listing.create_file(name);
        debug!(name = %name, "file created");
        Ok(0)
    }
}

/// Remove a file. Directories are refused.
pub struct Rm {
    /// Name of the file to remove; only the first one is used.
    pub names: Vec<String>,
}

impl SimCommand for Rm {
    fn name() -> &'static str {
        "rm"
    }

    fn parse(args: &[&str]) -> Result<Self, EarlyExit> {
        Ok(Self {
            names: operands(args),
        })
    }

    fn execute(self, _stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        let name = self
            .names
            .first()
            .ok_or_else(|| ShellError::missing_operand("rm"))?;
        session.listing.remove_file(name)?;
        debug!(name = %name, "file removed");
        Ok(0)
    }
}

/// Clear the terminal screen.
pub struct ClearScreen {
    /// Ignored.
    pub _args: Vec<String>,
}

impl SimCommand for ClearScreen {
    fn name() -> &'static str {
        "clear"
    }

    fn parse(args: &[&str]) -> Result<Self, EarlyExit> {
        Ok(Self { _args: operands(args) })
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        session.palette.clear_screen(stdout)?;
        writeln!(stdout, "{}", EXIT_HINT)?;
        Ok(0)
    }
}

/// List the commands the simulator understands.
pub struct Help {
    /// Ignored.
    pub _args: Vec<String>,
}

impl SimCommand for Help {
    fn name() -> &'static str {
        "help"
    }

    fn parse(args: &[&str]) -> Result<Self, EarlyExit> {
        Ok(Self { _args: operands(args) })
    }

    fn execute(self, stdout: &mut dyn Write, _session: &mut Session) -> Result<ExitCode> {
        writeln!(stdout, "{}", HELP_TEXT)?;
        Ok(0)
    }
}

/// Leave the simulator.
pub struct Exit {
    /// Ignored; there is no status to report.
    pub _args: Vec<String>,
}

impl SimCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn parse(args: &[&str]) -> Result<Self, EarlyExit> {
        Ok(Self { _args: operands(args) })
    }

    fn execute(self, _stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        session.should_exit = true;
        Ok(0)
    }
}
