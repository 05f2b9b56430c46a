//! Result types produced by the scorer.

use std::fmt;

/// Qualitative strength label derived from the numeric score.
///
/// Ordered from weakest to strongest; the ordering follows the score
/// thresholds, so comparing verdicts compares strength bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verdict {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl Verdict {
    /// Maps a clamped score to its verdict band.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => Verdict::VeryWeak,
            20..=39 => Verdict::Weak,
            40..=59 => Verdict::Fair,
            60..=79 => Verdict::Good,
            _ => Verdict::Strong,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::VeryWeak => "Very Weak",
            Verdict::Weak => "Weak",
            Verdict::Fair => "Fair",
            Verdict::Good => "Good",
            Verdict::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Signed per-factor contributions to the score.
///
/// Penalty fields carry the signed value actually added to the sum
/// (`common_penalty == -40` for an exact wordlist hit). `variety_count` is
/// the number of character classes present; it is reported for context and
/// carries no points of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreDetails {
    pub length_score: i32,
    pub variety_count: i32,
    pub variety_score: i32,
    pub common_penalty: i32,
    pub repeat_penalty: i32,
    pub seq_penalty: i32,
    pub case_penalty: i32,
    pub unique_bonus: i32,
}

impl ScoreDetails {
    /// Ordered `(factor, value)` pairs for presentation.
    pub fn entries(&self) -> [(&'static str, i32); 8] {
        [
            ("length_score", self.length_score),
            ("variety_count", self.variety_count),
            ("variety_score", self.variety_score),
            ("common_penalty", self.common_penalty),
            ("repeat_penalty", self.repeat_penalty),
            ("seq_penalty", self.seq_penalty),
            ("case_penalty", self.case_penalty),
            ("unique_bonus", self.unique_bonus),
        ]
    }

    /// Sum of the point-bearing factors (`variety_count` excluded).
    ///
    /// Clamping this sum to `[0, 100]` must reproduce
    /// [`ScoringResult::score`].
    pub fn contribution_sum(&self) -> i32 {
        self.length_score
            + self.variety_score
            + self.common_penalty
            + self.repeat_penalty
            + self.seq_penalty
            + self.case_penalty
            + self.unique_bonus
    }
}

/// Outcome of a single scoring call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringResult {
    /// Clamped to `[0, 100]`.
    pub score: u8,
    pub verdict: Verdict,
    /// Improvement suggestions, never empty.
    pub feedback: Vec<String>,
    /// `None` only for the empty-password short-circuit.
    pub details: Option<ScoreDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(Verdict::from_score(0), Verdict::VeryWeak);
        assert_eq!(Verdict::from_score(19), Verdict::VeryWeak);
        assert_eq!(Verdict::from_score(20), Verdict::Weak);
        assert_eq!(Verdict::from_score(39), Verdict::Weak);
        assert_eq!(Verdict::from_score(40), Verdict::Fair);
        assert_eq!(Verdict::from_score(59), Verdict::Fair);
        assert_eq!(Verdict::from_score(60), Verdict::Good);
        assert_eq!(Verdict::from_score(79), Verdict::Good);
        assert_eq!(Verdict::from_score(80), Verdict::Strong);
        assert_eq!(Verdict::from_score(100), Verdict::Strong);
    }

    #[test]
    fn test_verdict_ordering_is_monotone() {
        let scores = [0u8, 19, 20, 39, 40, 59, 60, 79, 80, 100];
        let verdicts: Vec<_> = scores.iter().map(|&s| Verdict::from_score(s)).collect();
        assert!(verdicts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::VeryWeak.to_string(), "Very Weak");
        assert_eq!(Verdict::Strong.to_string(), "Strong");
    }

    #[test]
    fn test_contribution_sum_excludes_variety_count() {
        let details = ScoreDetails {
            length_score: 32,
            variety_count: 2,
            variety_score: 10,
            common_penalty: -25,
            repeat_penalty: 0,
            seq_penalty: -10,
            case_penalty: 0,
            unique_bonus: 8,
        };
        assert_eq!(details.contribution_sum(), 32 + 10 - 25 - 10 + 8);
    }

    #[test]
    fn test_entries_order_matches_fields() {
        let details = ScoreDetails {
            length_score: 1,
            variety_count: 2,
            variety_score: 3,
            common_penalty: 4,
            repeat_penalty: 5,
            seq_penalty: 6,
            case_penalty: 7,
            unique_bonus: 8,
        };
        let names: Vec<_> = details.entries().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            [
                "length_score",
                "variety_count",
                "variety_score",
                "common_penalty",
                "repeat_penalty",
                "seq_penalty",
                "case_penalty",
                "unique_bonus"
            ]
        );
    }
}
