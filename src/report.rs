//! Text rendering of scoring results.

use std::fmt::Write as _;

use crate::types::ScoringResult;

/// Renders a result as human-readable text: header, optional echoed
/// password, score line, suggestions and the per-factor breakdown.
pub fn render(result: &ScoringResult, echo: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(&mut out, "Password check");
    if let Some(pwd) = echo {
        let _ = writeln!(&mut out, "Password: {pwd}");
    }
    let _ = writeln!(
        &mut out,
        "Score: {}/100   Verdict: {}",
        result.score, result.verdict
    );
    let _ = writeln!(&mut out, "Suggestions:");
    for item in &result.feedback {
        let _ = writeln!(&mut out, "  - {item}");
    }
    if let Some(details) = &result.details {
        let _ = writeln!(&mut out, "Factors:");
        for (name, value) in details.entries() {
            let _ = writeln!(&mut out, "  {name:<15}{value:+}");
        }
    }
    out
}
