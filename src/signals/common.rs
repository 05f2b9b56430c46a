//! Common-password signal - penalty from wordlist matching.

use crate::wordlist::{CommonMatch, common_match};

const EXACT_PENALTY: i32 = 40;
const SUBSTRING_PENALTY: i32 = 25;

/// Signed penalty contribution from wordlist matching. An exact hit
/// outweighs a substring hit.
pub fn common_penalty(password: &str) -> i32 {
    match common_match(password) {
        CommonMatch::Exact => -EXACT_PENALTY,
        CommonMatch::Substring => -SUBSTRING_PENALTY,
        CommonMatch::None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn setup_builtin_wordlist() {
        crate::wordlist::reset_wordlist_for_testing();
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::remove_var("PWD_WORDLIST_PATH");
        }
        let _ = crate::wordlist::init_wordlist();
    }

    #[test]
    #[serial]
    fn test_common_penalty_exact() {
        setup_builtin_wordlist();
        assert_eq!(common_penalty("password"), -40);
        assert_eq!(common_penalty("QWERTY"), -40);
    }

    #[test]
    #[serial]
    fn test_common_penalty_substring() {
        setup_builtin_wordlist();
        assert_eq!(common_penalty("mypassword!"), -25);
        assert_eq!(common_penalty("xXdragonXx"), -25);
    }

    #[test]
    #[serial]
    fn test_common_penalty_clean() {
        setup_builtin_wordlist();
        assert_eq!(common_penalty("Zx9#Qw7!"), 0);
    }
}
