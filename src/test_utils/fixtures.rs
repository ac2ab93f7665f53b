//! Option fixtures for consistent test data

use crate::options::PasswordOptions;

/// Upper and lowercase letters only, no minimums
pub fn letters_only_options(length: usize) -> PasswordOptions {
    PasswordOptions::new(length)
        .with_minimum_digits(0)
        .with_minimum_special_characters(0)
}

/// Every class disabled, which the generator must reject
pub fn no_source_options(length: usize) -> PasswordOptions {
    PasswordOptions::new(length)
        .with_uppercase(false)
        .with_lowercase(false)
        .with_minimum_digits(0)
        .with_minimum_special_characters(0)
}

/// Every class enabled with several guaranteed digits and symbols
pub fn strict_options() -> PasswordOptions {
    PasswordOptions::new(32)
        .with_minimum_digits(4)
        .with_minimum_special_characters(4)
        .with_avoid_ambiguous(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures() {
        assert!(letters_only_options(10).has_character_source());
        assert!(!no_source_options(10).has_character_source());
        assert!(strict_options().avoid_ambiguous_characters);
    }
}
