//! Random string generation from a configurable character pool

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::errors::GeneratorError;

/// Always part of the pool
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Appended when numbers are enabled
pub const DIGITS: &str = "0123456789";

/// Appended after digits when symbols are enabled
pub const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Shortest supported string
pub const MIN_LENGTH: usize = 8;
/// Longest supported string
pub const MAX_LENGTH: usize = 64;
/// Length used when none is given
pub const DEFAULT_LENGTH: usize = 16;

/// Generator parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of characters, `MIN_LENGTH..=MAX_LENGTH`
    pub length: usize,
    /// Append `DIGITS` to the pool
    pub include_numbers: bool,
    /// Append `SYMBOLS` to the pool
    pub include_symbols: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GeneratorConfig {
    /// Unvalidated config; see `validate`
    pub fn new(length: usize, include_numbers: bool, include_symbols: bool) -> Self {
        Self {
            length,
            include_numbers,
            include_symbols,
        }
    }

    /// Reject lengths outside `MIN_LENGTH..=MAX_LENGTH`
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(GeneratorError::InvalidLength {
                length: self.length,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }
        Ok(())
    }

    /// Character pool in fixed order: letters, digits, symbols
    pub fn charset(&self) -> String {
        let mut charset = String::from(LETTERS);
        if self.include_numbers {
            charset.push_str(DIGITS);
        }
        if self.include_symbols {
            charset.push_str(SYMBOLS);
        }
        charset
    }
}

/// Generate a random string using the thread-local RNG
pub fn generate(config: &GeneratorConfig) -> Result<String, GeneratorError> {
    generate_with_rng(config, &mut rand::thread_rng())
}

/// Generate a random string from the given RNG
pub fn generate_with_rng<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<String, GeneratorError> {
    config.validate()?;

    // Pool is ASCII, so indexing bytes is indexing chars
    let charset = config.charset();
    let pool = charset.as_bytes();

    let generated: String = (0..config.length)
        .map(|_| pool[rng.gen_range(0..pool.len())] as char)
        .collect();

    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_pool_sizes() {
        assert_eq!(LETTERS.len(), 52);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 29);
        assert_eq!(SYMBOLS.chars().collect::<HashSet<_>>().len(), 29);

        assert_eq!(GeneratorConfig::new(8, false, false).charset().len(), 52);
        assert_eq!(GeneratorConfig::new(8, true, false).charset().len(), 62);
        assert_eq!(GeneratorConfig::new(8, false, true).charset().len(), 81);
        assert_eq!(GeneratorConfig::new(8, true, true).charset().len(), 91);
    }

    #[test]
    fn test_charset_order_is_fixed() {
        let charset = GeneratorConfig::new(8, true, true).charset();
        assert_eq!(charset, format!("{}{}{}", LETTERS, DIGITS, SYMBOLS));
    }

    #[test]
    fn test_length_and_pool_for_every_config() {
        for length in MIN_LENGTH..=MAX_LENGTH {
            for include_numbers in [false, true] {
                for include_symbols in [false, true] {
                    let config = GeneratorConfig::new(length, include_numbers, include_symbols);
                    let generated = generate(&config).unwrap();

                    assert_eq!(generated.chars().count(), length);
                    for c in generated.chars() {
                        let allowed = LETTERS.contains(c)
                            || (include_numbers && DIGITS.contains(c))
                            || (include_symbols && SYMBOLS.contains(c));
                        assert!(allowed, "{:?} not allowed for {:?}", c, config);
                    }
                }
            }
        }
    }

    #[test]
    fn test_letters_only_never_contains_digits_or_symbols() {
        let config = GeneratorConfig::new(MAX_LENGTH, false, false);
        for _ in 0..50 {
            let generated = generate(&config).unwrap();
            assert!(generated.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn test_repeated_calls_differ() {
        let config = GeneratorConfig::new(MIN_LENGTH, false, false);
        for _ in 0..20 {
            let a = generate(&config).unwrap();
            let b = generate(&config).unwrap();
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_invalid_length_rejected() {
        for length in [0, 7, 65, 1000] {
            let config = GeneratorConfig::new(length, true, true);
            assert_eq!(
                generate(&config),
                Err(GeneratorError::InvalidLength { length, min: MIN_LENGTH, max: MAX_LENGTH })
            );
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = GeneratorConfig::default();
        let a = generate_with_rng(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate_with_rng(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), DEFAULT_LENGTH);
    }
}
