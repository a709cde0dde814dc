//! Secure random sampling
//!
//! Generators never talk to an RNG directly; they draw bytes through the
//! [`RandomSource`] trait so tests can replay a fixed byte script and assert
//! exact output strings.

use rand::RngCore;
use rand::rngs::ThreadRng;

/// Source of random bytes for the generators
pub trait RandomSource {
    /// Fill `dest` entirely with random bytes
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// Default source backed by the operating system CSPRNG
#[derive(Debug)]
pub struct SystemRandom {
    rng: ThreadRng,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }
}

/// Deterministic source replaying a fixed byte script, cycling when the
/// script runs out. Intended for tests.
#[derive(Debug, Clone)]
pub struct FixedBytes {
    bytes: Vec<u8>,
    pos: usize,
}

impl FixedBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        assert!(!bytes.is_empty(), "byte script must not be empty");
        Self { bytes, pos: 0 }
    }
}

impl RandomSource for FixedBytes {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.bytes[self.pos % self.bytes.len()];
            self.pos += 1;
        }
    }
}

/// Draw `count` indices in `[0, alphabet_len)` from `source`.
///
/// Each random byte is reduced modulo `alphabet_len`. For alphabet sizes
/// that do not evenly divide 256 this biases slightly toward low indices;
/// the skew is negligible at the alphabet sizes used here and the reduction
/// is kept so identical byte scripts map to identical outputs.
pub fn sample_indices<R: RandomSource>(
    source: &mut R,
    count: usize,
    alphabet_len: usize,
) -> Vec<usize> {
    debug_assert!(alphabet_len > 0, "alphabet must be non-empty");
    let mut buf = vec![0u8; count];
    source.fill_bytes(&mut buf);
    buf.into_iter().map(|b| b as usize % alphabet_len).collect()
}
