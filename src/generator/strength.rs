//! Password strength scoring
//!
//! A deliberately simple additive heuristic on a 0-4 scale with a
//! categorical label. Not an entropy estimate.

use serde::{Deserialize, Serialize};

use crate::STRENGTH_MAX;

/// Categorical strength label derived from the numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    /// Map a 0-4 score to its label (0-1 weak, 2-3 medium, 4 strong)
    pub fn from_score(score: u8) -> StrengthLabel {
        match score {
            0 | 1 => StrengthLabel::Weak,
            2 | 3 => StrengthLabel::Medium,
            _ => StrengthLabel::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score a password on the 0-4 scale.
///
/// One point each for: length over 8, length over 12, an uppercase ASCII
/// letter, an ASCII digit, and any character outside ASCII letters and
/// digits. Empty input scores 0; the sum is capped at 4.
pub fn score(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let mut score = 0u8;
    let len = password.chars().count();

    if len > 8 {
        score += 1;
    }
    if len > 12 {
        score += 1;
    }

    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    score.min(STRENGTH_MAX)
}

/// Score a password and derive its label in one call
pub fn evaluate(password: &str) -> (u8, StrengthLabel) {
    let s = score(password);
    (s, StrengthLabel::from_score(s))
}
