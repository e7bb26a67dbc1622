//! Secure random generation using OS RNG.

use rand::RngCore;
use rand::rngs::OsRng;

/// Port for secure random generation.
///
/// Anything feeding secrets or recovery codes must be a CSPRNG; a
/// general-purpose PRNG here is a critical security defect.
pub trait SecureRandom: Send + Sync {
    /// Generate `length` random bytes.
    fn random_bytes(&self, length: usize) -> Vec<u8>;
}

/// OS-based secure random generator.
pub struct OsRngRandom;

impl OsRngRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OsRngRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureRandom for OsRngRandom {
    fn random_bytes(&self, length: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; length];
        OsRng.fill_bytes(&mut bytes);
        bytes
    }
}

/// Deterministic byte source for tests, cycling over a fixed pattern.
#[cfg(test)]
pub(crate) struct FixedBytes(pub(crate) Vec<u8>);

#[cfg(test)]
impl SecureRandom for FixedBytes {
    fn random_bytes(&self, length: usize) -> Vec<u8> {
        self.0.iter().copied().cycle().take(length).collect()
    }
}
