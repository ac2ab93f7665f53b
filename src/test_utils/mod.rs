//! Shared test utilities for the password generator
//!
//! Provides a scripted terminal, option fixtures and password assertions used by the unit
//! tests and the integration test suite.

#[cfg(any(test, debug_assertions))]
pub mod terminal;

#[cfg(any(test, debug_assertions))]
pub mod fixtures;

#[cfg(any(test, debug_assertions))]
pub mod assertions;
