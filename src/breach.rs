//! Breach-corpus lookup via the Have-I-Been-Pwned range API.
//!
//! Only the first 5 hex characters of the password's SHA-1 digest leave
//! the process (k-anonymity); the returned range is scanned locally.

use std::fmt::Write as _;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;

const RANGE_ENDPOINT: &str = "https://api.pwnedpasswords.com/range";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const PREFIX_LEN: usize = 5;

#[derive(Error, Debug)]
pub enum BreachError {
    #[error("Failed to reach the breach API: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Breach API returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Outcome of a successful range lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachStatus {
    /// Seen in breaches this many times.
    Found(u64),
    NotFound,
}

/// Checks the password against the breach corpus.
///
/// Blocking network call, independent of the scorer. All failures are
/// returned as values; callers report them and continue.
pub fn check_breach(password: &SecretString) -> Result<BreachStatus, BreachError> {
    let digest = Sha1::digest(password.expose_secret().as_bytes());
    let mut hex = String::with_capacity(40);
    for b in digest.iter() {
        let _ = write!(&mut hex, "{:02X}", b);
    }
    let (prefix, suffix) = hex.split_at(PREFIX_LEN);

    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    let response = client.get(format!("{RANGE_ENDPOINT}/{prefix}")).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(BreachError::Status(status));
    }

    let body = response.text()?;
    Ok(scan_range_body(&body, suffix))
}

/// Scans a newline-delimited `SUFFIX:COUNT` range body for the digest
/// suffix, case-insensitively.
fn scan_range_body(body: &str, suffix: &str) -> BreachStatus {
    for line in body.lines() {
        if let Some((hash_suffix, count)) = line.split_once(':') {
            if hash_suffix.trim().eq_ignore_ascii_case(suffix) {
                return BreachStatus::Found(count.trim().parse().unwrap_or(0));
            }
        }
    }
    BreachStatus::NotFound
}
