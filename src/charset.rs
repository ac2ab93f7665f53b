//! Character classes used to build passwords
//!
//! The class tables are `&'static str` constants. Pools handed to the generator are always
//! derived from them as fresh values, so stripping ambiguous characters for one call can
//! never leak into another.

use std::fmt;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*";

/// Characters that are easily confused with one another when read back
pub const AMBIGUOUS: &str = "lIO01";

pub const MIN_PASSWORD_LENGTH: usize = 5;
pub const MAX_PASSWORD_LENGTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Special,
    ];

    pub fn characters(self) -> &'static str {
        match self {
            Self::Uppercase => UPPERCASE,
            Self::Lowercase => LOWERCASE,
            Self::Digits => DIGITS,
            Self::Special => SPECIAL,
        }
    }

    /// Builds the pool for this class, without ambiguous characters when requested
    pub fn pool(self, avoid_ambiguous: bool) -> Vec<char> {
        self.characters()
            .chars()
            .filter(|c| !avoid_ambiguous || !is_ambiguous(*c))
            .collect()
    }

    pub fn contains(self, c: char) -> bool {
        self.characters().contains(c)
    }

    /// Returns the class a character belongs to, if any
    pub fn of(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uppercase => "uppercase letters",
            Self::Lowercase => "lowercase letters",
            Self::Digits => "digits",
            Self::Special => "special characters",
        };
        f.write_str(name)
    }
}

pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS.contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_sizes() {
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SPECIAL.len(), 8);
    }

    #[test]
    fn test_pool_without_stripping_is_full_class() {
        for class in CharacterClass::ALL {
            let pool = class.pool(false);
            assert_eq!(pool.iter().collect::<String>(), class.characters());
        }
    }

    #[test]
    fn test_pool_strips_ambiguous_characters() {
        let digits = CharacterClass::Digits.pool(true);
        assert_eq!(digits.len(), 8);
        assert!(!digits.contains(&'0'));
        assert!(!digits.contains(&'1'));

        let upper = CharacterClass::Uppercase.pool(true);
        assert_eq!(upper.len(), 24);
        assert!(!upper.contains(&'I'));
        assert!(!upper.contains(&'O'));

        let lower = CharacterClass::Lowercase.pool(true);
        assert_eq!(lower.len(), 25);
        assert!(!lower.contains(&'l'));

        assert_eq!(CharacterClass::Special.pool(true).len(), 8);
    }

    #[test]
    fn test_stripping_leaves_constants_untouched() {
        let _ = CharacterClass::Digits.pool(true);
        assert_eq!(CharacterClass::Digits.pool(false).len(), 10);
        assert!(DIGITS.contains('0'));
    }

    #[test]
    fn test_class_of() {
        assert_eq!(CharacterClass::of('Q'), Some(CharacterClass::Uppercase));
        assert_eq!(CharacterClass::of('q'), Some(CharacterClass::Lowercase));
        assert_eq!(CharacterClass::of('7'), Some(CharacterClass::Digits));
        assert_eq!(CharacterClass::of('&'), Some(CharacterClass::Special));
        assert_eq!(CharacterClass::of('~'), None);
    }

    #[test]
    fn test_is_ambiguous() {
        for c in "lIO01".chars() {
            assert!(is_ambiguous(c));
        }
        assert!(!is_ambiguous('L'));
        assert!(!is_ambiguous('o'));
    }
}
