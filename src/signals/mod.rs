//! Per-factor scoring signals
//!
//! Each signal analyzes a specific aspect of password strength.

mod common;
mod entropy;
mod length;
mod pattern;
mod variety;

pub use common::common_penalty;
pub use entropy::estimate_entropy;
pub use length::length_score;
pub use pattern::{SEQUENTIAL_WINDOW, has_dominant_repeat, has_sequential_run};
pub use variety::{ClassPresence, is_uniform_case_alpha, variety_score};
