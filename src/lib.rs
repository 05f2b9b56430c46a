//! Password strength estimation library
//!
//! This library scores passwords with heuristic rules: length, character
//! variety, repetition, sequential patterns and common-password matching
//! combine into a bounded score, a verdict and improvement suggestions.
//!
//! # Features
//!
//! - `breach` (default): Have-I-Been-Pwned breach lookup via k-anonymity
//!   hash prefixes
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Custom path to a common-password wordlist file,
//!   one entry per line (default: builtin table)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{init_wordlist, score_password};
//! use secrecy::SecretString;
//!
//! // Initialize wordlist (call once at startup)
//! init_wordlist().expect("Failed to load wordlist");
//!
//! // Score a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = score_password(&password);
//!
//! println!("Score: {}/100", result.score);
//! println!("Verdict: {}", result.verdict);
//! ```

// Internal modules
mod report;
mod scorer;
mod signals;
mod types;
mod wordlist;

#[cfg(feature = "breach")]
mod breach;

// Public API
pub use report::render;
pub use scorer::score_password;
pub use signals::estimate_entropy;
pub use types::{ScoreDetails, ScoringResult, Verdict};
pub use wordlist::{CommonMatch, WordlistError, common_match, init_wordlist, init_wordlist_from_path};

#[cfg(feature = "breach")]
pub use breach::{BreachError, BreachStatus, check_breach};
