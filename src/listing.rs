//! The single flat directory the simulator pretends to be in.

use crate::error::ShellError;
use tracing::trace;

/// What an entry is. Kept as an explicit tag so nothing ever has to guess from the
/// way a name is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A named item in the simulated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Ordered collection of entries, mutated in place.
///
/// Directory names are unique. File names are not: `touch` appends unconditionally,
/// the same way the classic tutor behaved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    entries: Vec<Entry>,
}

impl Listing {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// The three directories every fresh session starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Entry::directory("home"),
            Entry::directory("docs"),
            Entry::directory("images"),
        ])
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Number of entries carrying `name`. Only ever above one for files.
    pub fn count(&self, name: &str) -> usize {
        self.entries.iter().filter(|e| e.name == name).count()
    }

    /// Appends a directory unless anything with that name already exists.
    pub fn create_dir(&mut self, name: &str) -> Result<(), ShellError> {
        if self.contains(name) {
            return Err(ShellError::AlreadyExists {
                name: name.to_string(),
            });
        }
        trace!(name, "append directory");
        self.entries.push(Entry::directory(name));
        Ok(())
    }

    /// Appends a file. Never fails, duplicates included.
    pub fn create_file(&mut self, name: &str) {
        trace!(name, "append file");
        self.entries.push(Entry::file(name));
    }

    /// Removes the first file called `name`.
    ///
    /// A directory with that name is refused since there is no recursive flag.
    pub fn remove_file(&mut self, name: &str) -> Result<Entry, ShellError> {
        if let Some(pos) = self
            .entries
            .iter()
            .position(|e| e.name == name && e.kind == EntryKind::File)
        {
            trace!(name, pos, "remove file");
            return Ok(self.entries.remove(pos));
        }
        if self.entries.iter().any(|e| e.name == name && e.is_dir()) {
            Err(ShellError::WrongKind {
                name: name.to_string(),
            })
        } else {
            Err(ShellError::NotFound {
                name: name.to_string(),
            })
        }
    }
}
