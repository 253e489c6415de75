use super::learn::learn_mode;
use super::quiz::{DEFAULT_QUESTIONS, quiz_mode};
use crate::Interpreter;
use crate::io_adapters::{LineEvent, LineSource};
use crate::style::Palette;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use tracing::{debug, info};

const MENU_PROMPT: &str = "Select an option (1-4): ";
const FAREWELL: &str = "Goodbye! Happy Hacking.";

/// Which screen to start in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Menu,
    Learn,
    Quiz,
    Shell,
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "menu" => Ok(Self::Menu),
            "learn" => Ok(Self::Learn),
            "quiz" => Ok(Self::Quiz),
            "shell" => Ok(Self::Shell),
            other => Err(format!(
                "unknown mode '{other}', expected one of: menu, learn, quiz, shell"
            )),
        }
    }
}

/// Knobs for a tutor run.
#[derive(Debug, Clone, Copy)]
pub struct TutorConfig {
    pub palette: Palette,
    pub questions: usize,
    /// Fixed seed for the quiz order; random when absent.
    pub seed: Option<u64>,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            palette: Palette::plain(),
            questions: DEFAULT_QUESTIONS,
            seed: None,
        }
    }
}

/// The tutor program: a menu in front of the three modes.
pub struct Tutor {
    config: TutorConfig,
    rng: StdRng,
}

impl Tutor {
    pub fn new(config: TutorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Starts in `mode`. Every mode other than [`Mode::Menu`] runs once and returns.
    pub fn run(&mut self, mode: Mode, input: &mut dyn LineSource, out: &mut dyn Write) -> Result<()> {
        debug!(?mode, "starting tutor");
        match mode {
            Mode::Menu => self.menu(input, out),
            Mode::Learn => learn_mode(input, out, self.config.palette).map(drop),
            Mode::Quiz => self.quiz(input, out).map(drop),
            Mode::Shell => self.shell(input, out),
        }
    }

    /// Shows the main menu until the user picks exit, presses Ctrl-C or closes input.
    pub fn menu(&mut self, input: &mut dyn LineSource, out: &mut dyn Write) -> Result<()> {
        let palette = self.config.palette;
        let prompt = palette.accent(MENU_PROMPT);
        // Left false after a bad choice so the complaint stays on screen.
        let mut clear = true;

        loop {
            if clear {
                palette.clear_screen(out)?;
            }
            clear = true;
            write!(out, "{}", palette.header("LINUX TUTOR"))?;
            writeln!(out, "1. Learn Commands")?;
            writeln!(out, "2. Take a Quiz")?;
            writeln!(out, "3. Virtual Shell (Safe Practice)")?;
            writeln!(out, "4. Exit")?;
            writeln!(out)?;
            out.flush()?;

            let choice = match input.read_line(&prompt)? {
                LineEvent::Line(line) => line,
                LineEvent::Interrupted | LineEvent::Eof => String::from("4"),
            };
            debug!(choice = choice.trim(), "menu choice");

            match choice.trim() {
                "1" => {
                    learn_mode(input, out, palette)?;
                }
                "2" => {
                    self.quiz(input, out)?;
                }
                "3" => self.shell(input, out)?,
                "4" => {
                    writeln!(out, "{}", FAREWELL)?;
                    info!("tutor finished");
                    return Ok(());
                }
                _ => {
                    writeln!(out, "Invalid choice. Try again.")?;
                    clear = false;
                }
            }
        }
    }

    fn quiz(&mut self, input: &mut dyn LineSource, out: &mut dyn Write) -> Result<super::QuizScore> {
        quiz_mode(
            input,
            out,
            self.config.palette,
            self.config.questions,
            &mut self.rng,
        )
    }

    fn shell(&mut self, input: &mut dyn LineSource, out: &mut dyn Write) -> Result<()> {
        Interpreter::with_palette(self.config.palette).repl(input, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::ScriptedInput;

    fn run_menu(lines: &[&str]) -> (ScriptedInput, String) {
        let mut input = ScriptedInput::new(lines.iter().copied());
        let mut out = Vec::new();
        Tutor::new(TutorConfig {
            seed: Some(42),
            ..TutorConfig::default()
        })
        .menu(&mut input, &mut out)
        .unwrap();
        (input, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_exit_option() {
        let (input, out) = run_menu(&["4", "never read"]);
        assert!(out.contains("LINUX TUTOR"));
        assert!(out.ends_with("Goodbye! Happy Hacking.\n"));
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let (_, out) = run_menu(&["9", "4"]);
        assert!(out.contains("Invalid choice. Try again.\n"));
        assert_eq!(out.matches("1. Learn Commands").count(), 2);
    }

    #[test]
    fn test_invalid_choice_is_not_cleared_away() {
        let mut input = ScriptedInput::new(["9", "4"]);
        let mut out = Vec::new();
        Tutor::new(TutorConfig {
            palette: Palette::new(true),
            seed: Some(42),
            ..TutorConfig::default()
        })
        .menu(&mut input, &mut out)
        .unwrap();

        let s = String::from_utf8_lossy(&out);
        let (before, after) = s
            .split_once("Invalid choice. Try again.")
            .expect("complaint should be printed");
        assert!(before.contains("\x1b[2J"));
        assert!(!after.contains("\x1b[2J"));
        assert!(after.contains("Exit"));
    }

    #[test]
    fn test_eof_says_goodbye() {
        let (_, out) = run_menu(&[]);
        assert!(out.ends_with("Goodbye! Happy Hacking.\n"));
    }

    #[test]
    fn test_shell_then_back_to_menu() {
        let (_, out) = run_menu(&["3", "mkdir demo", "ls", "exit", "4"]);
        assert!(out.contains("VIRTUAL SHELL SIMULATOR"));
        assert!(out.contains("home  docs  images  demo\n"));
        assert_eq!(out.matches("1. Learn Commands").count(), 2);
    }

    #[test]
    fn test_learn_q_returns_to_menu() {
        let (_, out) = run_menu(&["1", "q", "4"]);
        assert!(out.contains("LEARNING MODE"));
        assert!(out.ends_with("Goodbye! Happy Hacking.\n"));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Shell".parse::<Mode>().unwrap(), Mode::Shell);
        assert_eq!("quiz".parse::<Mode>().unwrap(), Mode::Quiz);
        assert!("games".parse::<Mode>().is_err());
    }

    #[test]
    fn test_run_single_mode_returns() {
        let mut input = ScriptedInput::new(["touch notes.txt", "ls"]);
        let mut out = Vec::new();
        Tutor::new(TutorConfig::default())
            .run(Mode::Shell, &mut input, &mut out)
            .unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("home  docs  images  notes.txt\n"));
        assert!(!s.contains("LINUX TUTOR"));
    }
}
