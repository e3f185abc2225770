// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
    /// Drop `l`, `1`, `I`, `0` and `O` from the generated (non-word) characters
    pub avoid_ambiguous: bool,
    /// Whitespace-separated words whose characters are mixed into the password
    pub words: Option<String>,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_special: true,
            avoid_ambiguous: false,
            words: None,
        }
    }
}

/// Coarse strength rating of a finished password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Strength label together with the inputs it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    pub strength: Strength,
    pub length: usize,
    pub diversity: u8,
}
