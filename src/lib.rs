//! A small terminal tutor for basic Linux filesystem commands.
//!
//! The heart of the crate is a simulated shell: a flat command dispatcher over an
//! in-memory listing that stands in for a single directory. Nothing here touches the
//! real filesystem. Around it sit a learning mode, a quiz and a main menu that read
//! their material from a static command catalog.
//!
//! The main entry point for the simulator is [`Interpreter`], which owns a
//! [`Session`](session::Session) and a set of pluggable command factories. Input comes
//! from any [`LineSource`](io_adapters::LineSource) and output goes to any
//! `std::io::Write`, so the whole loop can be driven from tests.

mod builtin;
pub mod command;
pub mod error;
pub mod io_adapters;
pub mod listing;
pub mod logging;
mod interpreter;
mod parser;
pub mod session;
pub mod style;
pub mod tutor;

/// Just a convenient re-export of the simulated shell.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::{Interpreter, Outcome};
