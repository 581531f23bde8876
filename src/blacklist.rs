//! Common password list
//!
//! Loads the list backing [`Criterion::NotBlacklisted`](crate::Criterion::NotBlacklisted).

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the blacklist file location.
pub const BLACKLIST_PATH_ENV: &str = "PWD_CRITERIA_BLACKLIST_PATH";

const DEFAULT_BLACKLIST_PATH: &str = "./assets/blacklist.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Set of common passwords, stored lowercased.
#[derive(Clone, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

// The entries are passwords; keep them out of debug output.
impl fmt::Debug for Blacklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blacklist")
            .field("len", &self.entries.len())
            .finish()
    }
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_CRITERIA_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn blacklist_path() -> PathBuf {
    std::env::var(BLACKLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
}

impl Blacklist {
    /// Loads the blacklist from the path returned by [`blacklist_path`].
    ///
    /// # Errors
    ///
    /// See [`Blacklist::from_path`].
    pub fn load() -> Result<Self, BlacklistError> {
        Self::from_path(blacklist_path())
    }

    /// Loads the blacklist from a file with one password per line.
    ///
    /// Lines are trimmed and lowercased; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: file not found {}", path.display());
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let blacklist = Self::from_entries(content.lines());

        if blacklist.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: empty file {}", path.display());
            return Err(BlacklistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Blacklist loaded: {} passwords from {}",
            blacklist.len(),
            path.display()
        );

        Ok(blacklist)
    }

    /// Builds a blacklist from in-memory entries, normalized like file lines.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Case-insensitive membership check.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
