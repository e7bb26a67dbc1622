//! Shared secret value object.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::{Result, TwoFactorError};
use crate::random::SecureRandom;

/// Number of random bytes in a freshly generated secret.
pub const SECRET_LENGTH: usize = 32;

/// TOTP shared secret, URL-safe base64 without padding.
///
/// Generated once per enrollment and immutable thereafter; rotation
/// means generating a new one. Persistence is the caller's concern.
#[derive(Clone, PartialEq, Eq)]
pub struct TotpSecret {
    encoded: String,
}

impl TotpSecret {
    /// Generate a fresh secret from `SECRET_LENGTH` random bytes.
    pub fn generate(rng: &dyn SecureRandom) -> Self {
        let bytes = rng.random_bytes(SECRET_LENGTH);

        Self {
            encoded: URL_SAFE_NO_PAD.encode(bytes),
        }
    }

    /// Wrap an already-encoded secret with alphabet validation.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is empty or not URL-safe base64.
    pub fn new(encoded: impl Into<String>) -> Result<Self> {
        let encoded = encoded.into();

        if !Self::is_valid_base64url(&encoded) {
            return Err(TwoFactorError::InvalidSecret);
        }

        Ok(Self { encoded })
    }

    #[inline]
    fn is_valid_base64url(s: &str) -> bool {
        if s.is_empty() {
            return false;
        }

        s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    }

    /// Decode to the raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the encoding is malformed.
    pub fn decode(&self) -> Result<Vec<u8>> {
        URL_SAFE_NO_PAD
            .decode(&self.encoded)
            .map_err(|_| TwoFactorError::InvalidSecret)
    }

    /// Returns the encoded secret as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    /// Consume and return the inner value.
    #[inline]
    pub fn into_inner(self) -> String {
        self.encoded
    }
}

impl std::fmt::Debug for TotpSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TotpSecret")
            .field("encoded", &"[REDACTED]")
            .finish()
    }
}
