//! Numeric PIN generation

use crate::error::{CoreError, Result};
use crate::random::{RandomSource, SystemRandom, sample_indices};

/// Digit alphabet for PIN generation
pub const PIN_ALPHABET: &str = "0123456789";

/// Generate a numeric PIN of exactly `length` digits.
///
/// Errors with [`CoreError::InvalidLength`] for a zero length; there is no
/// other failure mode.
pub fn generate_pin(length: usize) -> Result<String> {
    generate_pin_with(length, &mut SystemRandom::new())
}

/// Generate a numeric PIN from an explicit byte source
pub fn generate_pin_with<R: RandomSource>(length: usize, source: &mut R) -> Result<String> {
    if length == 0 {
        return Err(CoreError::InvalidLength(length));
    }

    let digits: Vec<char> = PIN_ALPHABET.chars().collect();
    let pin = sample_indices(source, length, digits.len())
        .into_iter()
        .map(|i| digits[i])
        .collect();
    Ok(pin)
}
