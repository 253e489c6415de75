//! Where input lines come from.
//!
//! The interactive binary reads through [`EditorInput`], a thin wrapper around
//! `rustyline`. Tests and demos use [`ScriptedInput`], which replays a fixed list
//! of lines and then reports end of input.

use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;

/// One result of asking the user for a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    Line(String),
    /// Ctrl-C while reading.
    Interrupted,
    /// Ctrl-D, or the script ran out.
    Eof,
}

/// Anything that can hand out lines after showing a prompt.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<LineEvent>;
}

/// Line editor backed input with history.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("failed to initialize line editor")?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<LineEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(LineEvent::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(LineEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(LineEvent::Eof),
            Err(err) => Err(err).context("failed to read line"),
        }
    }
}

/// Memory-backed input that replays prepared lines.
///
/// Prompts are recorded so callers can check what the user would have seen.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<LineEvent>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(|l| LineEvent::Line(l.into())).collect(),
            prompts: Vec::new(),
        }
    }

    /// Queue a Ctrl-C after the lines already scripted.
    pub fn then_interrupt(mut self) -> Self {
        self.lines.push_back(LineEvent::Interrupted);
        self
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<LineEvent> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().unwrap_or(LineEvent::Eof))
    }
}
