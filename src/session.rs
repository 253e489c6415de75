use crate::listing::Listing;
use crate::style::Palette;

/// Path shown by `pwd` and in the prompt. The simulator never navigates away from it.
pub const DEFAULT_PATH: &str = "/home/user";
pub const DEFAULT_USER: &str = "user";
pub const HOST: &str = "tutor";

/// Mutable state of one simulator run.
///
/// The session contains:
/// - `listing`: the entries of the single simulated directory.
/// - `current_path`: the cosmetic working directory, constant for the whole run.
/// - `user`: name shown in the prompt.
/// - `palette`: whether output is decorated with ANSI styling.
/// - `should_exit`: a flag the read loop checks to know when to terminate.
///
/// Fields are public to keep the commands short; nothing outside the interpreter
/// holds on to a session.
#[derive(Debug, Clone)]
pub struct Session {
    pub listing: Listing,
    pub current_path: String,
    pub user: String,
    pub palette: Palette,
    pub should_exit: bool,
}

impl Session {
    /// A fresh session: seeded listing, default path, styling as requested.
    pub fn new(palette: Palette) -> Self {
        Self {
            listing: Listing::seeded(),
            current_path: DEFAULT_PATH.to_string(),
            user: DEFAULT_USER.to_string(),
            palette,
            should_exit: false,
        }
    }

    /// Shell prompt in the familiar `user@host:path$ ` shape.
    pub fn prompt(&self) -> String {
        self.palette.prompt(&self.user, HOST, &self.current_path)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Palette::plain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_seeded() {
        let session = Session::default();
        assert_eq!(session.listing, Listing::seeded());
        assert_eq!(session.current_path, "/home/user");
        assert!(!session.should_exit);
        assert_eq!(session.palette, Palette::plain());
    }

    #[test]
    fn test_default_session_never_clears_the_screen() {
        let session = Session::default();
        let mut out = Vec::new();
        session.palette.clear_screen(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_plain_prompt() {
        let session = Session::default();
        assert_eq!(session.prompt(), "user@tutor:/home/user$ ");
    }
}
