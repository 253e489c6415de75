//! User-facing errors of the simulated shell.
//!
//! None of these are fatal: the interpreter prints the message and keeps reading
//! input. The `Display` text mimics what GNU coreutils would print.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// A required argument was absent, e.g. `mkdir` with no name.
    #[error("{verb}: missing {operand}")]
    MissingOperand {
        verb: &'static str,
        operand: &'static str,
    },

    /// Creation conflicts with an existing entry.
    #[error("mkdir: cannot create directory '{name}': File exists")]
    AlreadyExists { name: String },

    /// Removal target is not in the listing.
    #[error("rm: cannot remove '{name}': No such file or directory")]
    NotFound { name: String },

    /// Removal target exists but is a directory, which plain `rm` refuses.
    #[error("rm: cannot remove '{name}': Is a directory")]
    WrongKind { name: String },

    #[error("{verb}: command not found")]
    UnknownCommand { verb: String },
}

impl ShellError {
    pub(crate) fn missing_operand(verb: &'static str) -> Self {
        Self::MissingOperand {
            verb,
            operand: "operand",
        }
    }

    pub(crate) fn missing_file_operand(verb: &'static str) -> Self {
        Self::MissingOperand {
            verb,
            operand: "file operand",
        }
    }
}
