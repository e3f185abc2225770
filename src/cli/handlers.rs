// src/cli/handlers.rs
use std::io::Write;

use anyhow::Result;

use crate::api::error::ApiError;
use crate::api::utils::check_length;
use crate::cli::commands::GenerateArgs;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{PasswordGenerationOptions, Strength};

pub fn build_options(args: &GenerateArgs, config: &Config) -> Result<PasswordGenerationOptions, ApiError> {
    Ok(PasswordGenerationOptions {
        length: check_length(args.length, config)?,
        include_uppercase: !args.no_upper,
        include_lowercase: !args.no_lower,
        include_digits: !args.no_digits,
        include_special: !args.no_special,
        avoid_ambiguous: args.avoid_ambiguous,
        words: args.words.clone(),
    })
}

pub fn generate(args: &GenerateArgs, config: &Config) -> Result<(String, Strength)> {
    let options = build_options(args, config)?;
    let generator = PasswordGenerator::new();

    let password = generator.generate_password(&options)?;
    if password.is_empty() {
        return Err(ApiError::EmptyResult.into());
    }
    let report = generator.analyze_password_strength(&password);
    log::debug!("Generated {}-character password from the CLI", report.length);

    Ok((password, report.strength))
}

pub fn handle_generate<W: Write>(args: &GenerateArgs, config: &Config, out: &mut W) -> Result<()> {
    let (password, strength) = generate(args, config)?;
    writeln!(out, "{}", password)?;
    writeln!(out, "Strength: {}", strength)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(length: i64) -> GenerateArgs {
        GenerateArgs {
            length,
            no_upper: false,
            no_lower: false,
            no_digits: false,
            no_special: false,
            avoid_ambiguous: false,
            words: None,
        }
    }

    #[test]
    fn prints_password_then_strength() {
        let mut out = Vec::new();
        handle_generate(&args(24), &Config::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars().count(), 24);
        assert!(lines[1].starts_with("Strength: "));
    }

    #[test]
    fn rejects_bad_length() {
        let err = generate(&args(4), &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "Password length must be between 8 and 128.");
    }

    #[test]
    fn rejects_empty_pool() {
        let mut a = args(12);
        a.no_upper = true;
        a.no_lower = true;
        a.no_digits = true;
        a.no_special = true;
        let err = generate(&a, &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "At least one character type must be selected.");
    }
}
