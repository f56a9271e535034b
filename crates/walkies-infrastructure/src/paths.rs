//! Path management for Walkies client files.
//!
//! Everything the client persists lives under a single base directory,
//! `~/.walkies` by default:
//!
//! ```text
//! ~/.walkies/
//! └── session.toml    # Persisted login session
//! ```

use std::path::PathBuf;
use walkies_core::error::{Result, WalkiesError};

/// Resolves the on-disk locations of Walkies client files.
pub struct WalkiesPaths;

impl WalkiesPaths {
    /// Returns the base directory, `~/.walkies`.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the home directory cannot be determined.
    pub fn base_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| WalkiesError::config("Cannot find home directory"))?;
        Ok(home_dir.join(".walkies"))
    }

    /// Returns the path to the persisted session file.
    pub fn session_file() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("session.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dir() {
        let base_dir = WalkiesPaths::base_dir().unwrap();
        assert!(base_dir.ends_with(".walkies"));
    }

    #[test]
    fn test_session_file_is_under_base_dir() {
        let session_file = WalkiesPaths::session_file().unwrap();
        assert!(session_file.ends_with("session.toml"));
        let base_dir = WalkiesPaths::base_dir().unwrap();
        assert!(session_file.starts_with(&base_dir));
    }
}
