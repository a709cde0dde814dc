//! Rule-based password strength scoring
//!
//! A fixed-weight heuristic, not an entropy estimate: points for length and
//! character variety, penalties for repeats and keyboard sequences. The
//! rubric and its boundaries are part of the public contract; the UI meter
//! and its advice lines are driven directly by the result.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::generator::charset::SYMBOLS;

/// Substrings penalized as common sequences (checked case-insensitively)
const COMMON_SEQUENCES: [&str; 5] = ["123", "abc", "qwe", "asd", "zxc"];

/// Highest attainable stored score
const MAX_SCORE: i32 = 6;

/// Strength classification derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Kebab-case label, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
            StrengthLevel::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring a password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    /// Heuristic score in `[0, 6]`
    pub score: u8,
    /// Four-level classification of the score
    pub level: StrengthLevel,
    /// Advisory lines, in rubric order; never empty
    pub feedback: Vec<String>,
}

/// Score a password against the fixed rubric.
///
/// # Example
/// ```
/// use pmcore::{StrengthLevel, check_strength};
///
/// let strength = check_strength("Tr0ub4dor&3xyz");
/// assert_eq!(strength.score, 6);
/// assert_eq!(strength.level, StrengthLevel::VeryStrong);
/// ```
pub fn check_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength {
            score: 0,
            level: StrengthLevel::Weak,
            feedback: vec!["Please enter a password".to_string()],
        };
    }

    let mut score: i32 = 0;
    let mut feedback: Vec<String> = Vec::new();
    let length = password.chars().count();

    if length < 8 {
        feedback.push("Use at least 8 characters".to_string());
    } else if length >= 12 {
        score += 2;
    } else {
        score += 1;
    }

    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_numbers = password.chars().any(|c| c.is_ascii_digit());
    let has_symbols = password.chars().any(|c| SYMBOLS.contains(c));

    score += i32::from(has_uppercase);
    score += i32::from(has_lowercase);
    score += i32::from(has_numbers);
    score += i32::from(has_symbols);

    if !has_uppercase {
        feedback.push("Add uppercase letters".to_string());
    }
    if !has_lowercase {
        feedback.push("Add lowercase letters".to_string());
    }
    if !has_numbers {
        feedback.push("Add numbers".to_string());
    }
    if !has_symbols {
        feedback.push("Add symbols".to_string());
    }

    // Diversity bonus: distinct chars >= 80% of length, in integer form
    let unique_chars = password.chars().collect::<HashSet<_>>().len();
    if unique_chars * 5 >= length * 4 {
        score += 1;
    }

    if has_consecutive_repeat(password) {
        score -= 1;
        feedback.push("Avoid repeated characters".to_string());
    }

    let lowered = password.to_lowercase();
    if COMMON_SEQUENCES.iter().any(|seq| lowered.contains(seq)) {
        score -= 1;
        feedback.push("Avoid common sequences".to_string());
    }

    // Level reads the raw score; the stored score is clamped afterward.
    // The two agree at every published boundary.
    let level = match score {
        i32::MIN..=1 => StrengthLevel::Weak,
        2..=3 => StrengthLevel::Medium,
        4..=5 => StrengthLevel::Strong,
        _ => StrengthLevel::VeryStrong,
    };

    if feedback.is_empty() {
        feedback.push("Great password!".to_string());
    }

    PasswordStrength {
        score: score.clamp(0, MAX_SCORE) as u8,
        level,
        feedback,
    }
}

/// True when any character occurs three or more times in a row
fn has_consecutive_repeat(password: &str) -> bool {
    let mut run = 1usize;
    let mut prev: Option<char> = None;
    for c in password.chars() {
        if prev == Some(c) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 1;
        }
        prev = Some(c);
    }
    false
}
