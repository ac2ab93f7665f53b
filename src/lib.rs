//! Console password generator
//!
//! The core lives in [`generator`]: it validates [`PasswordOptions`] and builds a password
//! from guaranteed per-class draws, a fill phase and an unbiased shuffle. The remaining
//! modules wrap it in an interactive menu and a small command line.

pub mod charset;
pub mod clipboard;
pub mod error;
pub mod generator;
pub mod logging;
pub mod options;
pub mod prompts;
pub mod runner;
pub mod terminal;
pub mod test_utils;
pub mod version;

#[cfg(test)]
mod generator_proptest;

pub use error::{AppError, ValidationError};
pub use generator::{generate, generate_with_rng, PasswordGenerator, RandomPasswordGenerator};
pub use options::PasswordOptions;
pub use runner::PromptRunner;
