//! Presentation helpers.
//!
//! Everything that emits ANSI escapes lives here. Commands and tutor modes ask the
//! [`Palette`] to decorate text, and a disabled palette returns the text untouched,
//! so assertions in tests never have to deal with escape codes.

use colored::{ColoredString, Colorize};
use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use std::env;
use std::io::{self, Write};

/// Width of the `=` rules around headers and of the `-` rules in learning mode.
pub const RULE_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Styling off. Used by tests and when stdout is not meant for a human.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Styling on unless the user opted out, either with a flag or with `NO_COLOR`.
    pub fn from_env(no_color_flag: bool) -> Self {
        let no_color_env = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(!no_color_flag && !no_color_env)
    }

    fn paint(&self, text: &str, f: impl FnOnce(&str) -> ColoredString) -> String {
        if self.enabled {
            f(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Three-line banner with the title centered between two rules, plus a blank line.
    pub fn header(&self, title: &str) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let block = format!("{rule}\n{title:^width$}\n{rule}", width = RULE_WIDTH);
        format!("{}\n\n", self.paint(&block, |s| s.magenta()))
    }

    pub fn directory(&self, name: &str) -> String {
        self.paint(name, |s| s.blue().bold())
    }

    pub fn prompt(&self, user: &str, host: &str, path: &str) -> String {
        format!(
            "{}{}$ ",
            self.paint(&format!("{user}@{host}:"), |s| s.green()),
            self.paint(path, |s| s.blue())
        )
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, |s| s.green())
    }

    pub fn failure(&self, text: &str) -> String {
        self.paint(text, |s| s.red())
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(text, |s| s.blue())
    }

    pub fn caution(&self, text: &str) -> String {
        self.paint(text, |s| s.yellow())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |s| s.bold())
    }

    /// Wipes the terminal and homes the cursor. A no-op for a plain palette.
    pub fn clear_screen(&self, out: &mut dyn Write) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        out.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
        out.flush()
    }
}
