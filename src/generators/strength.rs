// src/generators/strength.rs
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Strength, StrengthReport};

// Decimal digits in any script, not every numeric character (no fractions or numerals)
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Nd}").expect("valid digit pattern"));

/// Number of character classes present: lowercase, uppercase, digit, punctuation.
pub fn diversity(password: &str) -> u8 {
    let checks = [
        password.chars().any(char::is_lowercase),
        password.chars().any(char::is_uppercase),
        DIGIT_RE.is_match(password),
        password.chars().any(|c| c.is_ascii_punctuation()),
    ];
    checks.iter().filter(|present| **present).count() as u8
}

/// Classify a finished password.
///
/// Rules are checked in order and the first match wins, so a long password
/// with only two character classes is still `Medium`.
pub fn check_strength(password: &str) -> Strength {
    analyze(password).strength
}

pub fn analyze(password: &str) -> StrengthReport {
    let length = password.chars().count();
    let diversity = diversity(password);

    let strength = if length < 8 || diversity < 2 {
        Strength::Weak
    } else if (8..12).contains(&length) || diversity == 2 {
        Strength::Medium
    } else {
        Strength::Strong
    };

    StrengthReport {
        strength,
        length,
        diversity,
    }
}
