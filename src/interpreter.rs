use crate::command::{CommandFactory, ExitCode};
use crate::error::ShellError;
use crate::io_adapters::{LineEvent, LineSource};
use crate::parser;
use crate::session::Session;
use crate::style::Palette;
use std::io::Write;
use tracing::{debug, info};

const BANNER_TITLE: &str = "VIRTUAL SHELL SIMULATOR";
const BANNER_HINT: &str = "Type 'exit' to leave. Try: ls, pwd, mkdir test, touch file.txt";

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports commands defined in this crate.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// What a single line did to the session.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line, nothing ran.
    Empty,
    /// A command ran and returned this exit code.
    Done(ExitCode),
    /// A command was refused; the message has already been printed.
    Refused(ShellError),
    /// The session is over.
    Exit,
}

/// The simulated shell.
///
/// The interpreter owns a [`Session`] and a list of [`CommandFactory`] objects that
/// are queried in order to create a command for each verb. See [`Default`] for the
/// verbs included out of the box.
///
/// Example
/// ```
/// use linux_tutor::{Interpreter, Outcome};
/// let mut sh = Interpreter::default();
/// let mut out = Vec::new();
/// assert_eq!(sh.execute_line("mkdir test", &mut out).unwrap(), Outcome::Done(0));
/// sh.execute_line("ls", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "home  docs  images  test\n");
/// ```
pub struct Interpreter {
    session: Session,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>, session: Session) -> Self {
        Self { session, commands }
    }

    /// Interpreter with every built-in verb and a fresh session styled by `palette`.
    pub fn with_palette(palette: Palette) -> Self {
        Self::new(default_commands(), Session::new(palette))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run a single command invocation by verb with arguments.
    ///
    /// Refusals are printed to `out` and reported as [`Outcome::Refused`]. Only
    /// failures to write the output come back as errors.
    pub fn run(&mut self, name: &str, args: &[&str], out: &mut dyn Write) -> anyhow::Result<Outcome> {
        let cmd = self
            .commands
            .iter()
            .find_map(|factory| factory.try_create(&self.session, name, args));

        let result = match cmd {
            Some(cmd) => cmd.execute(out, &mut self.session),
            None => Err(ShellError::UnknownCommand {
                verb: name.to_string(),
            }
            .into()),
        };

        match result {
            Ok(code) => {
                debug!(verb = name, code, "command finished");
                if self.session.should_exit {
                    Ok(Outcome::Exit)
                } else {
                    Ok(Outcome::Done(code))
                }
            }
            Err(err) => {
                let refusal = err.downcast::<ShellError>()?;
                debug!(verb = name, error = %refusal, "command refused");
                writeln!(out, "{}", refusal)?;
                Ok(Outcome::Refused(refusal))
            }
        }
    }

    /// Interpret one raw input line.
    pub fn execute_line(&mut self, line: &str, out: &mut dyn Write) -> anyhow::Result<Outcome> {
        match parser::split_command(line) {
            Some(cmd) => self.run(cmd.verb, &cmd.args, out),
            None => Ok(Outcome::Empty),
        }
    }

    /// Read-eval-print loop: runs until `exit`, Ctrl-C or end of input.
    pub fn repl(&mut self, input: &mut dyn LineSource, out: &mut dyn Write) -> anyhow::Result<()> {
        let palette = self.session.palette;
        palette.clear_screen(out)?;
        write!(out, "{}", palette.header(BANNER_TITLE))?;
        writeln!(out, "{}", BANNER_HINT)?;
        writeln!(out, "{}", "-".repeat(BANNER_HINT.len()))?;
        out.flush()?;

        loop {
            let prompt = self.session.prompt();
            match input.read_line(&prompt)? {
                LineEvent::Line(line) => {
                    let outcome = self.execute_line(&line, out)?;
                    out.flush()?;
                    if outcome == Outcome::Exit {
                        break;
                    }
                }
                LineEvent::Interrupted | LineEvent::Eof => {
                    self.session.should_exit = true;
                    break;
                }
            }
        }

        info!(entries = self.session.listing.len(), "simulator session finished");
        Ok(())
    }
}

fn default_commands() -> Vec<Box<dyn CommandFactory>> {
    use crate::builtin::*;
    vec![
        Box::new(Factory::<Pwd>::default()),
        Box::new(Factory::<Ls>::default()),
        Box::new(Factory::<Mkdir>::default()),
        Box::new(Factory::<Touch>::default()),
        Box::new(Factory::<Rm>::default()),
        Box::new(Factory::<ClearScreen>::default()),
        Box::new(Factory::<Help>::default()),
        Box::new(Factory::<Exit>::default()),
    ]
}

impl Default for Interpreter {
    /// Create an interpreter with the default set of verbs (`pwd`, `ls`, `mkdir`,
    /// `touch`, `rm`, `clear`, `help`, `exit`) and an unstyled fresh session.
    fn default() -> Self {
        Self::new(default_commands(), Session::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::ScriptedInput;
    use crate::listing::Listing;

    fn line(sh: &mut Interpreter, text: &str) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = sh.execute_line(text, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_fresh_ls() {
        let mut sh = Interpreter::default();
        assert_eq!(line(&mut sh, "ls"), (Outcome::Done(0), "home  docs  images\n".to_string()));
    }

    #[test]
    fn test_mkdir_then_ls_lists_name_once() {
        let mut sh = Interpreter::default();
        line(&mut sh, "mkdir projects");
        let (_, out) = line(&mut sh, "ls");
        assert_eq!(out.split_whitespace().filter(|n| *n == "projects").count(), 1);
    }

    #[test]
    fn test_empty_line_is_silent() {
        let mut sh = Interpreter::default();
        assert_eq!(line(&mut sh, ""), (Outcome::Empty, String::new()));
        assert_eq!(line(&mut sh, "    "), (Outcome::Empty, String::new()));
        assert_eq!(sh.session().listing, Listing::seeded());
        assert_eq!(sh.session().current_path, "/home/user");
    }

    #[test]
    fn test_unknown_verb() {
        let mut sh = Interpreter::default();
        let (outcome, out) = line(&mut sh, "foobar --x");
        assert_eq!(
            outcome,
            Outcome::Refused(ShellError::UnknownCommand {
                verb: "foobar".into()
            })
        );
        assert_eq!(out, "foobar: command not found\n");
        assert_eq!(sh.session().listing, Listing::seeded());
    }

    #[test]
    fn test_refusal_is_printed() {
        let mut sh = Interpreter::default();
        let (outcome, out) = line(&mut sh, "rm docs");
        assert!(matches!(outcome, Outcome::Refused(ShellError::WrongKind { .. })));
        assert_eq!(out, "rm: cannot remove 'docs': Is a directory\n");
    }

    #[test]
    fn test_pwd_unaffected_by_mutations() {
        let mut sh = Interpreter::default();
        let (_, before) = line(&mut sh, "pwd");
        line(&mut sh, "mkdir a");
        line(&mut sh, "touch b");
        line(&mut sh, "rm b");
        let (_, after) = line(&mut sh, "pwd");
        assert_eq!(before, after);
    }

    #[test]
    fn test_exit_outcome() {
        let mut sh = Interpreter::default();
        assert_eq!(line(&mut sh, "exit"), (Outcome::Exit, String::new()));
        assert!(sh.session().should_exit);
    }

    #[test]
    fn test_repl_stops_at_exit() {
        let mut sh = Interpreter::default();
        let mut input = ScriptedInput::new(["mkdir test", "exit", "touch never"]);
        let mut out = Vec::new();
        sh.repl(&mut input, &mut out).unwrap();

        assert_eq!(input.remaining(), 1);
        assert!(sh.session().listing.contains("test"));
        assert!(!sh.session().listing.contains("never"));
        assert!(input.prompts().iter().all(|p| p == "user@tutor:/home/user$ "));
    }

    #[test]
    fn test_repl_stops_on_interrupt() {
        let mut sh = Interpreter::default();
        let mut input = ScriptedInput::new(["touch a"]).then_interrupt();
        let mut out = Vec::new();
        sh.repl(&mut input, &mut out).unwrap();

        assert!(sh.session().should_exit);
        assert!(sh.session().listing.contains("a"));
    }
}
