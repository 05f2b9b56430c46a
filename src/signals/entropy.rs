//! Entropy estimate - pool-based bits calculation.

use secrecy::{ExposeSecret, SecretString};

/// Estimates entropy in bits from the character pool implied by the
/// classes present (lowercase 26, uppercase 26, digits 10, ASCII
/// punctuation 32): `chars * log2(pool)`, rounded to two decimals.
///
/// Informational only; the estimate is not part of the score.
pub fn estimate_entropy(password: &SecretString) -> f64 {
    let pwd = password.expose_secret();
    let mut pool = 0u32;
    if pwd.chars().any(|c| c.is_ascii_lowercase()) {
        pool += 26;
    }
    if pwd.chars().any(|c| c.is_ascii_uppercase()) {
        pool += 26;
    }
    if pwd.chars().any(|c| c.is_ascii_digit()) {
        pool += 10;
    }
    if pwd.chars().any(|c| c.is_ascii_punctuation()) {
        pool += 32;
    }
    if pool == 0 {
        return 0.0;
    }
    let bits = pwd.chars().count() as f64 * f64::from(pool).log2();
    (bits * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_entropy_empty_password() {
        assert_eq!(estimate_entropy(&secret("")), 0.0);
    }

    #[test]
    fn test_entropy_no_pool_for_exotic_input() {
        // Non-ASCII letters contribute no pool
        assert_eq!(estimate_entropy(&secret("日本語")), 0.0);
    }

    #[test]
    fn test_entropy_lowercase_pool() {
        // 8 * log2(26) = 37.6035... -> 37.6
        assert_eq!(estimate_entropy(&secret("aaaaaaaa")), 37.6);
    }

    #[test]
    fn test_entropy_digit_pool() {
        // 5 * log2(10) = 16.6096... -> 16.61
        assert_eq!(estimate_entropy(&secret("97531")), 16.61);
    }

    #[test]
    fn test_entropy_full_pool() {
        // 4 * log2(94) = 26.2183... -> 26.22
        assert_eq!(estimate_entropy(&secret("Aa1!")), 26.22);
    }
}
