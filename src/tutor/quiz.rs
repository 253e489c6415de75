use super::catalog::{LESSONS, Lesson};
use crate::io_adapters::{LineEvent, LineSource};
use crate::style::Palette;
use anyhow::Result;
use rand::Rng;
use rand::seq::SliceRandom;
use std::io::Write;
use tracing::debug;

pub const DEFAULT_QUESTIONS: usize = 5;

const ANSWER_PROMPT: &str = "Your Answer > ";
const RETURN_PROMPT: &str = "Press Enter to return to menu...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub asked: usize,
}

/// Asks up to `questions` randomly chosen "which command does this" questions.
///
/// Answers are compared after trimming and lowercasing. Ctrl-C or end of input ends
/// the quiz early; the score then covers only the questions actually answered.
pub fn quiz_mode<R: Rng + ?Sized>(
    input: &mut dyn LineSource,
    out: &mut dyn Write,
    palette: Palette,
    questions: usize,
    rng: &mut R,
) -> Result<QuizScore> {
    palette.clear_screen(out)?;
    write!(out, "{}", palette.header("QUIZ MODE"))?;

    let mut pool: Vec<&Lesson> = LESSONS.iter().collect();
    pool.shuffle(rng);
    pool.truncate(questions);

    let mut score = QuizScore {
        correct: 0,
        asked: 0,
    };
    let prompt = palette.accent(ANSWER_PROMPT);

    for (i, lesson) in pool.iter().enumerate() {
        writeln!(
            out,
            "Question {}: What command is used to: {}?",
            i + 1,
            palette.bold(lesson.description)
        )?;
        out.flush()?;

        let answer = match input.read_line(&prompt)? {
            LineEvent::Line(line) => line.trim().to_lowercase(),
            LineEvent::Interrupted | LineEvent::Eof => break,
        };
        score.asked += 1;

        if answer == lesson.command {
            score.correct += 1;
            writeln!(out, "{}\n", palette.success("Correct!"))?;
        } else {
            writeln!(
                out,
                "{} The correct command was: {}\n",
                palette.failure("Wrong."),
                lesson.command
            )?;
        }
    }

    writeln!(out, "Quiz Finished! Score: {}/{}\n", score.correct, score.asked)?;
    out.flush()?;
    debug!(correct = score.correct, asked = score.asked, "quiz finished");

    // Any answer, including none at all, goes back to the menu.
    input.read_line(RETURN_PROMPT)?;
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::ScriptedInput;
    use crate::tutor::catalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Plays the quiz once with a fixed seed, answering through `answer`.
    fn play(seed: u64, questions: usize, answer: impl Fn(&Lesson) -> String) -> (QuizScore, String) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut order: Vec<&Lesson> = LESSONS.iter().collect();
        order.shuffle(&mut rng);

        let answers: Vec<String> = order.iter().take(questions).map(|&l| answer(l)).collect();
        let mut input = ScriptedInput::new(answers);
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let score = quiz_mode(&mut input, &mut out, Palette::plain(), questions, &mut rng).unwrap();
        (score, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_all_correct() {
        let (score, out) = play(7, DEFAULT_QUESTIONS, |l| format!("  {}  ", l.command.to_uppercase()));
        assert_eq!(
            score,
            QuizScore {
                correct: DEFAULT_QUESTIONS,
                asked: DEFAULT_QUESTIONS
            }
        );
        assert_eq!(out.matches("Correct!").count(), DEFAULT_QUESTIONS);
        assert!(out.contains("Quiz Finished! Score: 5/5"));
    }

    #[test]
    fn test_all_wrong_reveals_answer() {
        let (score, out) = play(11, 2, |_| "sudo".to_string());
        assert_eq!(score, QuizScore { correct: 0, asked: 2 });
        assert_eq!(out.matches("Wrong. The correct command was: ").count(), 2);
        assert!(out.contains("Score: 0/2"));
    }

    #[test]
    fn test_question_count_is_clamped_to_catalog() {
        let (score, _) = play(3, 100, |l| l.command.to_string());
        assert_eq!(score.asked, catalog::LESSONS.len());
    }

    #[test]
    fn test_eof_ends_quiz_early() {
        let mut input = ScriptedInput::new(["pwd"]);
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        let score = quiz_mode(&mut input, &mut out, Palette::plain(), 5, &mut rng).unwrap();
        assert_eq!(score.asked, 1);
        assert!(String::from_utf8(out).unwrap().contains("Quiz Finished!"));
    }
}
