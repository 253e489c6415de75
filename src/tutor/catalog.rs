//! The commands the tutor teaches.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Navigation,
    FileOps,
    System,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Navigation => "Navigation",
            Self::FileOps => "File Ops",
            Self::System => "System",
        })
    }
}

/// One real Linux command with a plain-language explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub command: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub category: Category,
}

pub const LESSONS: &[Lesson] = &[
    Lesson {
        command: "pwd",
        description: "Print Working Directory. Shows you where you are.",
        usage: "pwd",
        category: Category::Navigation,
    },
    Lesson {
        command: "ls",
        description: "List. Shows files and folders in current directory.",
        usage: "ls or ls -l (for details)",
        category: Category::Navigation,
    },
    Lesson {
        command: "cd",
        description: "Change Directory. Moves you to a different folder.",
        usage: "cd <folder_name> or cd .. (to go back)",
        category: Category::Navigation,
    },
    Lesson {
        command: "mkdir",
        description: "Make Directory. Creates a new folder.",
        usage: "mkdir <folder_name>",
        category: Category::FileOps,
    },
    Lesson {
        command: "touch",
        description: "Creates an empty file.",
        usage: "touch <file_name>",
        category: Category::FileOps,
    },
    Lesson {
        command: "rm",
        description: "Remove. Deletes a file.",
        usage: "rm <file_name>",
        category: Category::FileOps,
    },
    Lesson {
        command: "clear",
        description: "Clears the terminal screen.",
        usage: "clear",
        category: Category::System,
    },
    Lesson {
        command: "cat",
        description: "Concatenate. Displays content of a file.",
        usage: "cat <file_name>",
        category: Category::FileOps,
    },
];
