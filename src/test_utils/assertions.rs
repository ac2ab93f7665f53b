//! Custom assertion helpers for generated passwords

use crate::charset::{is_ambiguous, CharacterClass};
use crate::options::PasswordOptions;

/// Asserts that a Result is Ok and returns the value
pub fn assert_ok<T, E>(result: Result<T, E>) -> T
where
    E: std::fmt::Debug,
{
    match result {
        Ok(value) => value,
        Err(e) => panic!("Expected Ok result, but got Err: {e:?}"),
    }
}

/// Asserts that a Result is Err and returns the error
pub fn assert_err<T, E>(result: Result<T, E>) -> E
where
    T: std::fmt::Debug,
{
    match result {
        Ok(value) => panic!("Expected Err result, but got Ok: {value:?}"),
        Err(e) => e,
    }
}

/// Asserts that a string contains all of the given substrings
pub fn assert_contains_all(haystack: &str, needles: &[&str]) {
    for needle in needles {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}', but it didn't.\nString: {haystack}"
        );
    }
}

/// Asserts that a string contains none of the given substrings
pub fn assert_contains_none(haystack: &str, needles: &[&str]) {
    for needle in needles {
        assert!(
            !haystack.contains(needle),
            "Expected string to NOT contain '{needle}', but it did.\nString: {haystack}"
        );
    }
}

/// Asserts that a password satisfies every rule implied by `options`
pub fn assert_password_matches(password: &str, options: &PasswordOptions) {
    let count = |class: CharacterClass| password.chars().filter(|c| class.contains(*c)).count();

    assert_eq!(
        password.chars().count(),
        options.length,
        "Wrong length for password: {password}"
    );
    assert!(
        count(CharacterClass::Digits) >= options.minimum_digits,
        "Too few digits in password: {password}"
    );
    assert!(
        count(CharacterClass::Special) >= options.minimum_special_characters,
        "Too few special characters in password: {password}"
    );

    for c in password.chars() {
        let allowed = match CharacterClass::of(c) {
            Some(CharacterClass::Uppercase) => options.include_uppercase,
            Some(CharacterClass::Lowercase) => options.include_lowercase,
            Some(CharacterClass::Digits) => options.minimum_digits > 0,
            Some(CharacterClass::Special) => options.minimum_special_characters > 0,
            None => false,
        };
        assert!(allowed, "Unexpected character {c:?} in password: {password}");
    }

    if options.avoid_ambiguous_characters {
        assert!(
            !password.chars().any(is_ambiguous),
            "Ambiguous character in password: {password}"
        );
    }
}
