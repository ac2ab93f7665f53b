//! Password generation
//!
//! Generation runs in three phases. Guaranteed-inclusion draws satisfy each enabled
//! requirement, the fill phase pads to the requested length from the union of the enabled
//! class pools, and a Fisher-Yates shuffle hides where the guaranteed characters landed.
//!
//! The algorithm is generic over [`rand::Rng`] so callers (and tests) choose the source of
//! randomness. [`generate`] uses the thread-local generator seeded from OS entropy.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::charset::{CharacterClass, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::error::ValidationError;
use crate::options::PasswordOptions;

/// Produces passwords for the interactive prompts and the CLI
#[cfg_attr(test, mockall::automock)]
pub trait PasswordGenerator {
    fn generate(&self, options: &PasswordOptions) -> Result<String, ValidationError>;
}

/// Generator backed by `rand::thread_rng`
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPasswordGenerator;

impl RandomPasswordGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordGenerator for RandomPasswordGenerator {
    fn generate(&self, options: &PasswordOptions) -> Result<String, ValidationError> {
        generate(options)
    }
}

/// Checks the constraints that do not depend on pool contents
pub fn validate(options: &PasswordOptions) -> Result<(), ValidationError> {
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&options.length) {
        return Err(ValidationError::LengthOutOfRange {
            length: options.length,
        });
    }

    let required = options
        .minimum_digits
        .checked_add(options.minimum_special_characters);
    if required.is_none_or(|total| total > options.length) {
        return Err(ValidationError::MinimumsExceedLength {
            minimum_digits: options.minimum_digits,
            minimum_special_characters: options.minimum_special_characters,
            length: options.length,
        });
    }

    if !options.has_character_source() {
        return Err(ValidationError::NoCharacterSource);
    }

    Ok(())
}

pub fn generate(options: &PasswordOptions) -> Result<String, ValidationError> {
    generate_with_rng(options, &mut rand::thread_rng())
}

pub fn generate_with_rng<R: Rng + ?Sized>(
    options: &PasswordOptions,
    rng: &mut R,
) -> Result<String, ValidationError> {
    validate(options)?;

    // Numeric minimums are hard requirements. The single guaranteed upper/lowercase draw
    // only takes a slot when the minimums leave room, so the length is always exact.
    let mut room = options.length - options.minimum_digits - options.minimum_special_characters;
    let mut letter_slot = |include: bool| -> usize {
        if include && room > 0 {
            room -= 1;
            1
        } else {
            0
        }
    };
    let uppercase_draws = letter_slot(options.include_uppercase);
    let lowercase_draws = letter_slot(options.include_lowercase);

    let requirements = [
        (
            CharacterClass::Uppercase,
            options.include_uppercase,
            uppercase_draws,
        ),
        (
            CharacterClass::Lowercase,
            options.include_lowercase,
            lowercase_draws,
        ),
        (
            CharacterClass::Digits,
            options.minimum_digits > 0,
            options.minimum_digits,
        ),
        (
            CharacterClass::Special,
            options.minimum_special_characters > 0,
            options.minimum_special_characters,
        ),
    ];

    let selected = select_pools(&requirements, |class| {
        class.pool(options.avoid_ambiguous_characters)
    })?;

    let mut password = Vec::with_capacity(options.length);
    let mut remaining_pool = Vec::new();

    for (pool, count) in &selected {
        password.extend((0..*count).map(|_| draw(pool, rng)));
        remaining_pool.extend_from_slice(pool);
    }

    while password.len() < options.length {
        password.push(draw(&remaining_pool, rng));
    }

    password.shuffle(rng);

    Ok(password.into_iter().collect())
}

/// Resolves the pool of every enabled requirement, paired with its draw count
///
/// Pools are resolved up front so an empty one fails before any character is drawn.
pub(crate) fn select_pools<F>(
    requirements: &[(CharacterClass, bool, usize)],
    pool_for: F,
) -> Result<Vec<(Vec<char>, usize)>, ValidationError>
where
    F: Fn(CharacterClass) -> Vec<char>,
{
    let mut selected = Vec::with_capacity(requirements.len());
    for &(class, enabled, count) in requirements {
        if !enabled {
            continue;
        }
        let pool = pool_for(class);
        if pool.is_empty() {
            return Err(ValidationError::EmptyCharacterPool { class });
        }
        selected.push((pool, count));
    }
    Ok(selected)
}

fn draw<R: Rng + ?Sized>(pool: &[char], rng: &mut R) -> char {
    pool[rng.gen_range(0..pool.len())]
}
