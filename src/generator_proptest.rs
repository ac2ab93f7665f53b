//! Property-based tests for password generation
//!
//! Options are drawn across the whole valid range and the generated passwords are checked
//! against every composition rule. A seeded RNG per case keeps failures reproducible.

#[cfg(test)]
mod tests {
    use crate::charset::{is_ambiguous, CharacterClass, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
    use crate::error::ValidationError;
    use crate::generator::{generate_with_rng, validate};
    use crate::options::PasswordOptions;
    use crate::test_utils::assertions::assert_password_matches;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Strategy for options that pass validation
    prop_compose! {
        fn valid_options()(
            length in MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH,
            include_uppercase in prop::bool::ANY,
            include_lowercase in prop::bool::ANY,
            avoid_ambiguous_characters in prop::bool::ANY,
            digit_share in 0.0f64..=1.0,
            special_share in 0.0f64..=1.0,
        ) -> PasswordOptions {
            let minimum_digits = (length as f64 * digit_share) as usize;
            let minimum_special_characters =
                ((length - minimum_digits) as f64 * special_share) as usize;
            let mut options = PasswordOptions {
                length,
                include_uppercase,
                include_lowercase,
                minimum_digits,
                minimum_special_characters,
                avoid_ambiguous_characters,
            };
            if !options.has_character_source() {
                options.include_lowercase = true;
            }
            options
        }
    }

    fn count_in(password: &str, class: CharacterClass) -> usize {
        password.chars().filter(|c| class.contains(*c)).count()
    }

    fn free_slots(options: &PasswordOptions) -> usize {
        options.length - options.minimum_digits - options.minimum_special_characters
    }

    proptest! {
        #[test]
        fn test_letter_classes_present_when_room(options in valid_options(), seed in any::<u64>()) {
            let password = generate_with_rng(&options, &mut StdRng::seed_from_u64(seed)).unwrap();
            let room = free_slots(&options);
            if options.include_uppercase && room >= 1 {
                prop_assert!(count_in(&password, CharacterClass::Uppercase) >= 1);
            }
            let lowercase_needs = 1 + usize::from(options.include_uppercase);
            if options.include_lowercase && room >= lowercase_needs {
                prop_assert!(count_in(&password, CharacterClass::Lowercase) >= 1);
            }
        }

        #[test]
        fn test_password_obeys_every_rule(options in valid_options(), seed in any::<u64>()) {
            let password = generate_with_rng(&options, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_password_matches(&password, &options);
        }

        #[test]
        fn test_ambiguous_characters_avoided(options in valid_options(), seed in any::<u64>()) {
            let options = options.with_avoid_ambiguous(true);
            let password = generate_with_rng(&options, &mut StdRng::seed_from_u64(seed)).unwrap();
            prop_assert!(!password.chars().any(is_ambiguous));
        }

        #[test]
        fn test_same_seed_is_deterministic(options in valid_options(), seed in any::<u64>()) {
            let first = generate_with_rng(&options, &mut StdRng::seed_from_u64(seed)).unwrap();
            let second = generate_with_rng(&options, &mut StdRng::seed_from_u64(seed)).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_lengths_outside_range_rejected(
            length in prop_oneof![0usize..MIN_PASSWORD_LENGTH, (MAX_PASSWORD_LENGTH + 1)..1000],
        ) {
            let options = PasswordOptions::new(length);
            prop_assert_eq!(validate(&options), Err(ValidationError::LengthOutOfRange { length }));
        }

        #[test]
        fn test_minimums_over_length_rejected(
            length in MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH,
            extra in 1usize..50,
            digit_share in 0.0f64..=1.0,
        ) {
            let total = length + extra;
            let minimum_digits = (total as f64 * digit_share) as usize;
            let options = PasswordOptions::new(length)
                .with_minimum_digits(minimum_digits)
                .with_minimum_special_characters(total - minimum_digits);
            let rejected = matches!(
                validate(&options),
                Err(ValidationError::MinimumsExceedLength { .. })
            );
            prop_assert!(rejected);
        }

        #[test]
        fn test_validation_is_stable(
            length in 0usize..200,
            include_uppercase in prop::bool::ANY,
            include_lowercase in prop::bool::ANY,
            minimum_digits in 0usize..150,
            minimum_special_characters in 0usize..150,
        ) {
            let options = PasswordOptions {
                length,
                include_uppercase,
                include_lowercase,
                minimum_digits,
                minimum_special_characters,
                avoid_ambiguous_characters: false,
            };
            prop_assert_eq!(validate(&options), validate(&options));
        }
    }
}
