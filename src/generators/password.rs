// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, RngCore};
use thiserror::Error;

use crate::generators::strength;
use crate::models::{PasswordGenerationOptions, StrengthReport};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Characters that are easy to confuse in most fonts.
pub const AMBIGUOUS: [char; 5] = ['l', '1', 'I', '0', 'O'];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("At least one character type must be selected.")]
    EmptyPool,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String> {
        generate_password(options)
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthReport {
        strength::analyze(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble the pool of characters eligible for random draws.
///
/// Classes are appended in the order uppercase, lowercase, digits,
/// punctuation. Punctuation is never filtered for ambiguity.
pub fn build_pool(options: &PasswordGenerationOptions) -> Vec<char> {
    let mut pool = Vec::new();

    let mut push_class = |alphabet: &str, filter: bool| {
        pool.extend(
            alphabet
                .chars()
                .filter(|c| !(filter && AMBIGUOUS.contains(c))),
        );
    };

    if options.include_uppercase {
        push_class(UPPERCASE, options.avoid_ambiguous);
    }
    if options.include_lowercase {
        push_class(LOWERCASE, options.avoid_ambiguous);
    }
    if options.include_digits {
        push_class(DIGITS, options.avoid_ambiguous);
    }
    if options.include_special {
        push_class(PUNCTUATION, false);
    }

    pool
}

/// Every non-whitespace character of `words`, in random order.
pub fn seed_from_words<R: RngCore + CryptoRng>(words: &str, rng: &mut R) -> Vec<char> {
    let mut seed: Vec<char> = words.split_whitespace().flat_map(str::chars).collect();
    seed.shuffle(rng);
    seed
}

/// Generate a password using the operating system's CSPRNG.
pub fn generate_password(options: &PasswordGenerationOptions) -> Result<String> {
    generate_password_with(options, &mut OsRng)
}

/// Generate a password drawing all randomness from `rng`.
///
/// The result is `options.length` characters long unless the characters
/// taken from `options.words` outnumber it, in which case every word
/// character is kept and the password is that long instead.
pub fn generate_password_with<R: RngCore + CryptoRng>(
    options: &PasswordGenerationOptions,
    rng: &mut R,
) -> Result<String> {
    let pool = build_pool(options);
    if pool.is_empty() {
        return Err(GeneratorError::EmptyPool);
    }

    let mut password = match options.words.as_deref() {
        Some(words) if !words.is_empty() => seed_from_words(words, rng),
        _ => Vec::new(),
    };

    let remaining = options.length.saturating_sub(password.len());
    password.reserve(remaining);
    for _ in 0..remaining {
        // pool is non-empty, so choose always yields
        if let Some(c) = pool.choose(rng) {
            password.push(*c);
        }
    }

    password.shuffle(rng);

    Ok(password.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashMap;

    fn options(length: usize) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length,
            ..Default::default()
        }
    }

    fn counts(s: impl Iterator<Item = char>) -> HashMap<char, usize> {
        let mut map = HashMap::new();
        for c in s {
            *map.entry(c).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn pool_contains_every_class_when_all_enabled() {
        let pool = build_pool(&options(8));
        assert_eq!(pool.len(), 26 + 26 + 10 + 32);
        assert_eq!(pool.first(), Some(&'A'));
        assert_eq!(pool.last(), Some(&'~'));
    }

    #[test]
    fn pool_filters_ambiguous_letters_and_digits() {
        let mut opts = options(8);
        opts.avoid_ambiguous = true;
        let pool = build_pool(&opts);

        assert_eq!(pool.len(), 24 + 25 + 8 + 32);
        for c in AMBIGUOUS {
            assert!(!pool.contains(&c), "pool still contains {c:?}");
        }
    }

    #[test]
    fn punctuation_is_never_filtered() {
        let opts = PasswordGenerationOptions {
            length: 8,
            include_uppercase: false,
            include_lowercase: false,
            include_digits: false,
            include_special: true,
            avoid_ambiguous: true,
            words: None,
        };
        let pool: String = build_pool(&opts).into_iter().collect();
        assert_eq!(pool, PUNCTUATION);
        assert!(PUNCTUATION.chars().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn empty_pool_is_rejected() {
        let opts = PasswordGenerationOptions {
            length: 8,
            include_uppercase: false,
            include_lowercase: false,
            include_digits: false,
            include_special: false,
            avoid_ambiguous: false,
            words: None,
        };
        assert_eq!(generate_password(&opts), Err(GeneratorError::EmptyPool));
        assert_eq!(
            GeneratorError::EmptyPool.to_string(),
            "At least one character type must be selected."
        );
    }

    #[test]
    fn words_do_not_rescue_an_empty_pool() {
        let opts = PasswordGenerationOptions {
            length: 8,
            include_uppercase: false,
            include_lowercase: false,
            include_digits: false,
            include_special: false,
            avoid_ambiguous: false,
            words: Some("correct horse".to_string()),
        };
        assert_eq!(generate_password(&opts), Err(GeneratorError::EmptyPool));
    }

    #[test]
    fn generates_requested_length_from_pool() {
        let opts = options(12);
        let pool = build_pool(&opts);
        let password = generate_password(&opts).unwrap();

        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().all(|c| pool.contains(&c)));
    }

    #[test]
    fn length_is_max_of_target_and_seed() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for (length, words) in [(8, "ab cd"), (10, "abcdefghij"), (8, "averyverylong word")] {
            let mut opts = options(length);
            opts.words = Some(words.to_string());
            let seed_len = words.split_whitespace().map(|w| w.chars().count()).sum::<usize>();

            let password = generate_password_with(&opts, &mut rng).unwrap();
            assert_eq!(password.chars().count(), length.max(seed_len));
        }
    }

    #[test]
    fn seed_longer_than_target_is_kept_whole() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let words = "supercalifragilistic expialidocious";
        let mut opts = options(8);
        opts.words = Some(words.to_string());

        let password = generate_password_with(&opts, &mut rng).unwrap();
        let expected = counts(words.split_whitespace().flat_map(str::chars));
        assert_eq!(counts(password.chars()), expected);
    }

    #[test]
    fn seed_characters_survive_as_a_multiset() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let opts = PasswordGenerationOptions {
            length: 20,
            include_uppercase: false,
            include_lowercase: false,
            include_digits: true,
            include_special: false,
            avoid_ambiguous: true,
            words: Some("  lOl\tI1 ".to_string()),
        };

        let password = generate_password_with(&opts, &mut rng).unwrap();
        let got = counts(password.chars());

        // word characters bypass the ambiguity filter
        for (c, n) in counts("lOlI1".chars()) {
            assert!(got.get(&c).copied().unwrap_or(0) >= n, "missing seed char {c:?}");
        }
        // drawn characters are digits without 0 and 1
        let drawn: usize = got
            .iter()
            .filter(|(c, _)| !"lOI".contains(**c) && **c != '1')
            .map(|(_, n)| *n)
            .sum();
        assert_eq!(drawn, 15);
        assert!(!password.contains('0'));
    }

    #[test]
    fn avoid_ambiguous_keeps_them_out_of_generated_characters() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let mut opts = options(128);
        opts.avoid_ambiguous = true;

        for _ in 0..20 {
            let password = generate_password_with(&opts, &mut rng).unwrap();
            assert!(!password.chars().any(|c| AMBIGUOUS.contains(&c)));
        }
    }

    #[test]
    fn same_rng_seed_gives_same_password() {
        let mut opts = options(32);
        opts.words = Some("hello world".to_string());

        let a = generate_password_with(&opts, &mut ChaCha20Rng::seed_from_u64(99)).unwrap();
        let b = generate_password_with(&opts, &mut ChaCha20Rng::seed_from_u64(99)).unwrap();
        let c = generate_password_with(&opts, &mut ChaCha20Rng::seed_from_u64(100)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn empty_word_string_adds_nothing() {
        let mut opts = options(9);
        opts.words = Some(String::new());
        assert_eq!(generate_password(&opts).unwrap().chars().count(), 9);

        opts.words = Some("   \n ".to_string());
        assert_eq!(generate_password(&opts).unwrap().chars().count(), 9);
    }

    #[test]
    fn seed_from_words_strips_whitespace() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let seed = seed_from_words(" ab\tc  d\n", &mut rng);
        assert_eq!(counts(seed.into_iter()), counts("abcd".chars()));
    }

    #[test]
    fn generator_struct_delegates() {
        let generator = PasswordGenerator::new();
        let password = generator.generate_password(&options(12)).unwrap();
        let report = generator.analyze_password_strength(&password);
        assert_eq!(report.length, 12);
    }
}
