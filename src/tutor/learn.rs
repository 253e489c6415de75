use super::catalog::{LESSONS, Lesson};
use crate::io_adapters::{LineEvent, LineSource};
use crate::style::{Palette, RULE_WIDTH};
use anyhow::Result;
use std::io::Write;
use tracing::debug;

const NEXT_PROMPT: &str = "Press Enter for next...";

/// Walks through the catalog one lesson at a time.
///
/// Returns how many lessons were shown. `q`, Ctrl-C or end of input stop early.
pub fn learn_mode(
    input: &mut dyn LineSource,
    out: &mut dyn Write,
    palette: Palette,
) -> Result<usize> {
    palette.clear_screen(out)?;
    write!(out, "{}", palette.header("LEARNING MODE"))?;
    writeln!(out, "Press Enter to step through commands, or 'q' to quit.\n")?;

    let mut shown = 0;
    for lesson in LESSONS {
        print_lesson(lesson, out, palette)?;
        shown += 1;
        out.flush()?;

        match input.read_line(NEXT_PROMPT)? {
            LineEvent::Line(answer) if answer.trim().eq_ignore_ascii_case("q") => break,
            LineEvent::Line(_) => writeln!(out)?,
            LineEvent::Interrupted | LineEvent::Eof => break,
        }
    }

    debug!(shown, "learning mode finished");
    Ok(shown)
}

fn print_lesson(lesson: &Lesson, out: &mut dyn Write, palette: Palette) -> Result<()> {
    writeln!(
        out,
        "{} {}",
        palette.accent("Command:"),
        palette.bold(lesson.command)
    )?;
    writeln!(out, "{} {}", palette.accent("Category:"), lesson.category)?;
    writeln!(out, "{} {}", palette.success("Description:"), lesson.description)?;
    writeln!(out, "{} {}", palette.caution("Usage:"), lesson.usage)?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    Ok(())
}
