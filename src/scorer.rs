//! Password scorer - combines the per-factor signals into one result.

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};

use crate::signals::{
    ClassPresence, SEQUENTIAL_WINDOW, common_penalty, has_dominant_repeat, has_sequential_run,
    is_uniform_case_alpha, length_score, variety_score,
};
use crate::types::{ScoreDetails, ScoringResult, Verdict};

const REPEAT_PENALTY: i32 = 10;
const SEQ_PENALTY: i32 = 10;
const CASE_PENALTY: i32 = 5;
const CASE_PENALTY_MAX_LEN: usize = 16;
const UNIQUE_BONUS_CAP: i32 = 10;

/// Scores a password against the heuristic rule set.
///
/// Pure given the process-wide wordlist: no I/O, deterministic, and every
/// input (including empty or exotic Unicode) produces a result. Lengths
/// and uniqueness are counted in characters, not bytes.
pub fn score_password(password: &SecretString) -> ScoringResult {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return ScoringResult {
            score: 0,
            verdict: Verdict::VeryWeak,
            feedback: vec!["Password is empty.".to_string()],
            details: None,
        };
    }

    let chars: Vec<char> = pwd.chars().collect();
    let char_count = chars.len();
    let lowered: Vec<char> = pwd.to_lowercase().chars().collect();

    let classes = ClassPresence::classify(pwd);
    let variety_count = classes.count();

    let common = common_penalty(pwd);
    let repeat_flag = has_dominant_repeat(&chars);
    let seq_flag = has_sequential_run(&lowered, SEQUENTIAL_WINDOW);
    let case_flag = char_count < CASE_PENALTY_MAX_LEN && is_uniform_case_alpha(&chars);

    let unique_chars = chars.iter().copied().collect::<HashSet<char>>().len() as i32;
    let unique_bonus = if unique_chars > 3 {
        ((unique_chars - 3) * 2).min(UNIQUE_BONUS_CAP)
    } else {
        0
    };

    let details = ScoreDetails {
        length_score: length_score(char_count),
        variety_count,
        variety_score: variety_score(variety_count),
        common_penalty: common,
        repeat_penalty: if repeat_flag { -REPEAT_PENALTY } else { 0 },
        seq_penalty: if seq_flag { -SEQ_PENALTY } else { 0 },
        case_penalty: if case_flag { -CASE_PENALTY } else { 0 },
        unique_bonus,
    };

    let score = details.contribution_sum().clamp(0, 100) as u8;

    let mut feedback = Vec::new();
    if char_count < 8 {
        feedback.push("Increase length to at least 8 characters; 12 or more is better.".to_string());
    } else if char_count < 12 {
        feedback.push("Consider using 12 or more characters.".to_string());
    }
    if variety_count < 3 {
        feedback.push("Mix uppercase, lowercase, digits and symbols.".to_string());
    }
    if common != 0 {
        feedback.push("Avoid common passwords or obvious words and numbers.".to_string());
    }
    if repeat_flag {
        feedback.push("Avoid repeating the same character many times.".to_string());
    }
    if seq_flag {
        feedback.push("Avoid simple sequences like 'abcd' or '1234'.".to_string());
    }
    if unique_chars < 4 {
        feedback.push("Use more unique characters.".to_string());
    }
    if feedback.is_empty() {
        feedback.push("Looks solid. Use a unique password for every account.".to_string());
    }

    ScoringResult {
        score,
        verdict: Verdict::from_score(score),
        feedback,
        details: Some(details),
    }
}
