use serde::{Deserialize, Serialize};

pub const DEFAULT_LENGTH: usize = 18;
pub const DEFAULT_INCLUDE_UPPERCASE: bool = true;
pub const DEFAULT_INCLUDE_LOWERCASE: bool = true;
pub const DEFAULT_MINIMUM_DIGITS: usize = 1;
pub const DEFAULT_MINIMUM_SPECIAL_CHARACTERS: usize = 1;
pub const DEFAULT_AVOID_AMBIGUOUS_CHARACTERS: bool = false;

/// Requirements for a generated password
///
/// The value does not validate itself; constraints are checked when a password is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub minimum_digits: usize,
    pub minimum_special_characters: usize,
    pub avoid_ambiguous_characters: bool,
}

impl PasswordOptions {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn with_uppercase(mut self, include: bool) -> Self {
        self.include_uppercase = include;
        self
    }

    pub fn with_lowercase(mut self, include: bool) -> Self {
        self.include_lowercase = include;
        self
    }

    pub fn with_minimum_digits(mut self, count: usize) -> Self {
        self.minimum_digits = count;
        self
    }

    pub fn with_minimum_special_characters(mut self, count: usize) -> Self {
        self.minimum_special_characters = count;
        self
    }

    pub fn with_avoid_ambiguous(mut self, avoid: bool) -> Self {
        self.avoid_ambiguous_characters = avoid;
        self
    }

    /// Whether any character class is selected at all
    pub fn has_character_source(&self) -> bool {
        self.include_uppercase
            || self.include_lowercase
            || self.minimum_digits > 0
            || self.minimum_special_characters > 0
    }
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: DEFAULT_INCLUDE_UPPERCASE,
            include_lowercase: DEFAULT_INCLUDE_LOWERCASE,
            minimum_digits: DEFAULT_MINIMUM_DIGITS,
            minimum_special_characters: DEFAULT_MINIMUM_SPECIAL_CHARACTERS,
            avoid_ambiguous_characters: DEFAULT_AVOID_AMBIGUOUS_CHARACTERS,
        }
    }
}
