use anyhow::Result;
use argh::FromArgs;
use linux_tutor::io_adapters::EditorInput;
use linux_tutor::logging::init_logging;
use linux_tutor::style::Palette;
use linux_tutor::tutor::{DEFAULT_QUESTIONS, Mode, Tutor, TutorConfig};

#[derive(FromArgs)]
/// Learn basic Linux filesystem commands in a safe, simulated terminal.
struct Args {
    #[argh(switch, short = 'n')]
    /// disable colors and screen clearing (also honored via NO_COLOR).
    no_color: bool,

    #[argh(option, default = "Mode::Menu")]
    /// where to start: menu, learn, quiz or shell.
    mode: Mode,

    #[argh(option, default = "DEFAULT_QUESTIONS")]
    /// number of quiz questions.
    questions: usize,

    #[argh(option)]
    /// seed for the quiz order, for reproducible runs.
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    init_logging();

    let config = TutorConfig {
        palette: Palette::from_env(args.no_color),
        questions: args.questions,
        seed: args.seed,
    };
    tracing::debug!(?config, "configuration loaded");

    let mut input = EditorInput::new()?;
    let mut stdout = std::io::stdout();
    Tutor::new(config).run(args.mode, &mut input, &mut stdout)
}
