//! The tutor around the simulator: a command catalog, a learning mode, a quiz and
//! the main menu that ties them to the virtual shell.

pub mod catalog;
mod learn;
mod menu;
mod quiz;

pub use learn::learn_mode;
pub use menu::{Mode, Tutor, TutorConfig};
pub use quiz::{DEFAULT_QUESTIONS, QuizScore, quiz_mode};
