//! Password generation: alphabet composition and uniform sampling.
//!
//! Layout:
//! - `alphabet.rs`: character classes and the flag -> class effect table
//! - `sampler.rs`: draws characters from a composed alphabet

pub mod alphabet;
pub mod sampler;

use serde::{Deserialize, Serialize};

pub use alphabet::CharClass;
pub use sampler::{generate, sample};

/// Caller-selected composition rules for one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_special_chars: bool,
}

impl PasswordOptions {
    /// Lower bound of the length slider. Not enforced by the sampler.
    pub const MIN_LENGTH: usize = 5;
    /// Upper bound of the length slider. Not enforced by the sampler.
    pub const MAX_LENGTH: usize = 50;

    /// Returns a copy with `length` clamped to the slider range.
    pub fn with_clamped_length(self, length: usize) -> Self {
        Self {
            length: length.clamp(Self::MIN_LENGTH, Self::MAX_LENGTH),
            ..self
        }
    }
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 15,
            include_uppercase: true,
            include_numbers: false,
            include_special_chars: false,
        }
    }
}
