//! Property-based tests for the public generation API
//!
//! quickcheck drives arbitrary option sets through validation; proptest checks the
//! guarantees of every password that validation lets through.

use password_generator::charset::{AMBIGUOUS, MAX_PASSWORD_LENGTH};
use password_generator::test_utils::assertions::assert_password_matches;
use password_generator::{generate, generate_with_rng, PasswordOptions, ValidationError};
use proptest::prelude::*;
use quickcheck::{Arbitrary, Gen, QuickCheck};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone)]
struct AnyOptions(PasswordOptions);

impl Arbitrary for AnyOptions {
    fn arbitrary(g: &mut Gen) -> Self {
        let length = usize::arbitrary(g) % 140;
        let digits = usize::arbitrary(g) % (length + 2);
        let special = usize::arbitrary(g) % (length + 2);
        AnyOptions(PasswordOptions {
            length,
            include_uppercase: bool::arbitrary(g),
            include_lowercase: bool::arbitrary(g),
            minimum_digits: digits,
            minimum_special_characters: special,
            avoid_ambiguous_characters: bool::arbitrary(g),
        })
    }
}

fn is_valid(options: &PasswordOptions) -> bool {
    (5..=MAX_PASSWORD_LENGTH).contains(&options.length)
        && options.minimum_digits + options.minimum_special_characters <= options.length
        && options.has_character_source()
}

/// Property: generation succeeds exactly when the options are valid
#[test]
fn prop_generation_succeeds_only_for_valid_options() {
    fn check(options: AnyOptions) -> bool {
        let options = options.0;
        match generate(&options) {
            Ok(password) => is_valid(&options) && password.chars().count() == options.length,
            Err(_) => !is_valid(&options),
        }
    }

    QuickCheck::new()
        .tests(300)
        .quickcheck(check as fn(AnyOptions) -> bool);
}

/// Property: an error always carries a message a user can read
#[test]
fn prop_errors_have_messages() {
    fn check(options: AnyOptions) -> bool {
        match generate(&options.0) {
            Ok(_) => true,
            Err(e) => !e.to_string().is_empty(),
        }
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(check as fn(AnyOptions) -> bool);
}

prop_compose! {
    fn valid_options()(length in 5usize..=128)
        (length in Just(length),
         digits in 0..=length,
         special_share in 0.0f64..=1.0,
         upper in any::<bool>(),
         lower in any::<bool>(),
         avoid in any::<bool>())
        -> PasswordOptions
    {
        let special = ((length - digits) as f64 * special_share) as usize;
        let special = if !upper && !lower && digits == 0 && special == 0 { 1 } else { special };
        PasswordOptions {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            minimum_digits: digits,
            minimum_special_characters: special,
            avoid_ambiguous_characters: avoid,
        }
    }
}

proptest! {
    #[test]
    fn prop_password_obeys_every_rule(options in valid_options(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let password = generate_with_rng(&options, &mut rng).unwrap();

        assert_password_matches(&password, &options);
    }

    #[test]
    fn prop_ambiguous_characters_avoided(options in valid_options(), seed in any::<u64>()) {
        let options = options.with_avoid_ambiguous(true);
        let mut rng = StdRng::seed_from_u64(seed);
        let password = generate_with_rng(&options, &mut rng).unwrap();

        prop_assert!(!password.chars().any(|c| AMBIGUOUS.contains(c)));
    }

    #[test]
    fn prop_lengths_outside_range_rejected(length in prop_oneof![0usize..5, 129usize..1000]) {
        let result = generate(&PasswordOptions::new(length));
        prop_assert!(
            matches!(result, Err(ValidationError::LengthOutOfRange { .. })),
            "unexpected result for length {}: {:?}",
            length,
            result
        );
    }
}
