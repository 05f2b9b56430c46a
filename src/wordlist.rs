//! Common-password wordlist
//!
//! Holds the process-wide set of known-weak passwords used for penalty
//! matching. Loaded once at startup, read-only afterwards.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

static COMMON_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

/// Builtin fallback table, used when no override file is configured or the
/// wordlist was never initialized. Entries are stored lowercase.
const BUILTIN: &[&str] = &[
    "password", "123456", "123456789", "12345678", "12345", "qwerty",
    "qwerty123", "abc123", "password1", "111111", "123123", "654321",
    "666666", "letmein", "welcome", "admin", "monkey", "dragon", "football",
    "baseball", "iloveyou", "trustno1", "sunshine", "master", "shadow",
    "ashley", "michael", "superman", "batman", "princess", "starwars",
    "whatever", "qazwsx", "freedom", "hello123", "charlie", "donald",
    "login", "access", "mustang", "secret", "ninja", "jordan", "hunter",
];

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
}

/// How a password relates to the wordlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonMatch {
    /// The whole password is a wordlist entry.
    Exact,
    /// Some wordlist entry appears inside the password.
    Substring,
    None,
}

/// Initializes the wordlist.
///
/// # Environment Variable
///
/// Set `PWD_WORDLIST_PATH` to load entries (one per line) from a custom
/// file. Without it, the builtin table is installed.
///
/// # Errors
///
/// Returns error if a configured file does not exist, cannot be read, or
/// is empty. Idempotent: once initialized, later calls return the current
/// entry count without reloading.
pub fn init_wordlist() -> Result<usize, WordlistError> {
    match std::env::var("PWD_WORDLIST_PATH") {
        Ok(path) => init_wordlist_from_path(PathBuf::from(path)),
        Err(_) => install(BUILTIN.iter().map(|w| w.to_string()).collect()),
    }
}

/// Initializes the wordlist from a specific file path.
///
/// Use this when you need to pass the path directly instead of relying on
/// the environment variable.
pub fn init_wordlist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, WordlistError> {
    {
        let guard = COMMON_PASSWORDS.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: FileNotFound {}", path.display());
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: Empty file {}", path.display());
        return Err(WordlistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist initialized: {} entries from {:?}", set.len(), path);

    install(set)
}

fn install(set: HashSet<String>) -> Result<usize, WordlistError> {
    let mut guard = COMMON_PASSWORDS.write().unwrap();
    match guard.as_ref() {
        Some(existing) => Ok(existing.len()),
        None => {
            let count = set.len();
            *guard = Some(set);
            Ok(count)
        }
    }
}

/// Matches a password against the wordlist (case-insensitive).
///
/// An exact hit wins over a substring hit. When the wordlist was never
/// initialized, the builtin table is consulted directly, so matching is
/// always deterministic.
pub fn common_match(password: &str) -> CommonMatch {
    let candidate = password.to_lowercase();
    let guard = COMMON_PASSWORDS.read().unwrap();
    match guard.as_ref() {
        Some(set) => {
            if set.contains(&candidate) {
                CommonMatch::Exact
            } else if set.iter().any(|w| candidate.contains(w.as_str())) {
                CommonMatch::Substring
            } else {
                CommonMatch::None
            }
        }
        None => {
            if BUILTIN.contains(&candidate.as_str()) {
                CommonMatch::Exact
            } else if BUILTIN.iter().any(|w| candidate.contains(w)) {
                CommonMatch::Substring
            } else {
                CommonMatch::None
            }
        }
    }
}

/// Resets the wordlist for testing purposes.
#[cfg(test)]
pub fn reset_wordlist_for_testing() {
    let mut guard = COMMON_PASSWORDS.write().unwrap();
    *guard = None;
}
