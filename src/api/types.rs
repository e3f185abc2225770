// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Strength;

// HTML form submission. Checkbox fields are presence flags: any value,
// including an empty one, enables the option.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateForm {
    pub length: Option<String>,
    pub upper: Option<String>,
    pub lower: Option<String>,
    pub digits: Option<String>,
    pub special: Option<String>,
    pub avoid: Option<String>,
    pub words: Option<String>,
}

// Generator requests and responses
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationRequest {
    /// Password length, 8 to 128 (default: 16)
    pub length: Option<i64>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include digits (default: true)
    pub include_digits: Option<bool>,
    /// Include punctuation (default: true)
    pub include_special: Option<bool>,
    /// Leave l, 1, I, 0 and O out of generated characters (default: false)
    pub avoid_ambiguous: Option<bool>,
    /// Whitespace-separated words whose characters are mixed in
    pub words: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Strength label of the generated password
    pub strength: Option<Strength>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StrengthRequest {
    /// Password to classify
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StrengthResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Strength label
    pub strength: Strength,
    /// Number of characters
    pub length: usize,
    /// Number of character classes present (0-4)
    pub diversity: u8,
}
