// src/api/utils.rs

use std::num::IntErrorKind;

use crate::api::error::ApiError;
use crate::core::config::Config;

/// Parse and bound-check a requested password length.
///
/// Integers too large for `i64` are reported as out of range rather than as
/// malformed input.
pub fn parse_length(raw: &str, config: &Config) -> Result<usize, ApiError> {
    let length = match raw.trim().parse::<i64>() {
        Ok(n) => n,
        Err(e) => {
            return match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(out_of_range(config)),
                _ => Err(ApiError::InvalidLength),
            }
        }
    };
    check_length(length, config)
}

pub fn check_length(length: i64, config: &Config) -> Result<usize, ApiError> {
    usize::try_from(length)
        .ok()
        .filter(|n| (config.min_length..=config.max_length).contains(n))
        .ok_or_else(|| out_of_range(config))
}

fn out_of_range(config: &Config) -> ApiError {
    ApiError::LengthOutOfRange {
        min: config.min_length,
        max: config.max_length,
    }
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
