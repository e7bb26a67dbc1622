//! TOTP generator using HMAC-SHA256.

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::clock::{Clock, SystemClock};
use crate::config::TotpConfig;
use crate::error::{Result, TwoFactorError};
use crate::secret::TotpSecret;

/// Wire algorithm. The otpauth URI advertises the same name, so both
/// must change together.
type HmacSha256 = Hmac<Sha256>;

/// HMAC-based TOTP generator and verifier.
///
/// Stateless and pure modulo the injected clock: one valid token exists
/// per (secret, time slice) pair, recomputed on demand. Replay
/// protection is not handled here and must be layered on by the caller.
pub struct Totp<C: Clock = SystemClock> {
    config: TotpConfig,
    clock: C,
}

impl Totp<SystemClock> {
    /// Create a generator reading the OS clock.
    pub fn new(config: TotpConfig) -> Self {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> Totp<C> {
    /// Create a generator with an explicit clock capability.
    pub fn with_clock(config: TotpConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Get current time counter based on Unix epoch.
    fn time_slice(&self, timestamp: u64) -> u64 {
        timestamp / self.config.period
    }

    /// Generate the code for a specific time slice.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the secret encoding is malformed.
    pub fn generate_at(&self, secret: &TotpSecret, slice: u64) -> Result<String> {
        let key = secret.decode()?;
        generate_code(&key, slice, self.config.digits)
    }

    /// Generate the code for the current time slice.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the secret encoding is malformed.
    pub fn generate(&self, secret: &TotpSecret) -> Result<String> {
        self.generate_at(secret, self.time_slice(self.clock.now()))
    }

    /// Check a submitted token over the configured drift window.
    ///
    /// Returns `false` on empty or malformed input, never an error.
    pub fn verify(&self, token: &str, secret: &str) -> bool {
        self.verify_with_window(token, secret, self.config.window)
    }

    /// Check a submitted token, accepting any slice in
    /// `[current - window, current + window]`.
    ///
    /// Widening the window trades guess/replay surface for drift
    /// tolerance.
    pub fn verify_with_window(&self, token: &str, secret: &str, window: u8) -> bool {
        if token.is_empty() || secret.is_empty() {
            return false;
        }

        let Ok(secret) = TotpSecret::new(secret) else {
            return false;
        };
        let Ok(key) = secret.decode() else {
            return false;
        };

        let current_slice = self.time_slice(self.clock.now());

        for offset in -(window as i64)..=(window as i64) {
            let slice = (current_slice as i64 + offset) as u64;
            let Ok(generated) = generate_code(&key, slice, self.config.digits)
            else {
                return false;
            };

            if constant_time_eq(generated.as_bytes(), token.as_bytes()) {
                tracing::debug!(offset, "TOTP token accepted");
                return true;
            }
        }

        tracing::debug!("TOTP token rejected");
        false
    }
}

/// Generate a code from raw key bytes and a time counter.
///
/// Dynamic truncation (RFC 4226) over the 32-byte SHA-256 digest: the
/// trailing nibble selects an offset in 0..=15, so the 4 extracted
/// bytes always land inside the digest.
fn generate_code(key: &[u8], slice: u64, digits: u32) -> Result<String> {
    let counter_bytes = slice.to_be_bytes();

    let mut mac = HmacSha256::new_from_slice(key).map_err(|err| {
        TwoFactorError::Crypto {
            cause: err.to_string(),
        }
    })?;

    mac.update(&counter_bytes);
    let digest = mac.finalize().into_bytes();

    let offset = (digest[31] & 0x0f) as usize;
    let binary_code = ((digest[offset] as u32 & 0x7f) << 24)
        | ((digest[offset + 1] as u32) << 16)
        | ((digest[offset + 2] as u32) << 8)
        | (digest[offset + 3] as u32);

    let code = binary_code % 10u32.pow(digits);
    Ok(format!("{:0>width$}", code, width = digits as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    // Secret bytes 00..1F; slice = floor(1_700_000_000 / 30).
    const SECRET: &str = "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8";
    const SLICE: u64 = 56_666_666;

    fn totp_at(timestamp: u64) -> Totp<FixedClock> {
        Totp::with_clock(TotpConfig::default(), FixedClock::new(timestamp))
    }

    #[test]
    fn test_pinned_vectors() {
        let totp = totp_at(1_700_000_000);
        let secret = TotpSecret::new(SECRET).unwrap();

        assert_eq!(totp.generate_at(&secret, SLICE - 2).unwrap(), "535955");
        assert_eq!(totp.generate_at(&secret, SLICE - 1).unwrap(), "909593");
        assert_eq!(totp.generate_at(&secret, SLICE).unwrap(), "793923");
        assert_eq!(totp.generate_at(&secret, SLICE + 1).unwrap(), "002052");
        assert_eq!(totp.generate_at(&secret, SLICE + 2).unwrap(), "240069");
    }

    #[test]
    fn test_ascii_key_vector() {
        // 32-byte ASCII key "123456789012...12" at t = 59s (slice 1).
        let secret =
            TotpSecret::new("MTIzNDU2Nzg5MDEyMzQ1Njc4OTAxMjM0NTY3ODkwMTI")
                .unwrap();
        let totp = totp_at(59);

        assert_eq!(totp.generate(&secret).unwrap(), "119246");
        assert_eq!(totp.generate_at(&secret, 0).unwrap(), "920136");
    }

    #[test]
    fn test_generation_deterministic() {
        let totp = totp_at(1_700_000_000);
        let secret = TotpSecret::new(SECRET).unwrap();

        let code1 = totp.generate(&secret).unwrap();
        let code2 = totp.generate(&secret).unwrap();

        assert_eq!(code1, code2);
        assert_eq!(code1, "793923");
    }

    #[test]
    fn test_token_format() {
        let totp = totp_at(1_700_000_000);
        let secret = TotpSecret::new(SECRET).unwrap();
        let format = regex_lite::Regex::new(r"^[0-9]{6}$").unwrap();

        for slice in 0..64 {
            let code = totp.generate_at(&secret, slice).unwrap();
            assert!(format.is_match(&code), "bad token format: {code}");
        }
    }

    #[test]
    fn test_zero_padding() {
        let totp = totp_at(1_700_000_000);
        let secret = TotpSecret::new(SECRET).unwrap();

        // Truncated integer 2052 must render as "002052", not "2052".
        let code = totp.generate_at(&secret, SLICE + 1).unwrap();
        assert_eq!(code, "002052");
        assert_eq!(code.len(), 6);
    }

    #[test]
    fn test_window_tolerance() {
        let totp = totp_at(1_700_000_000);

        // Adjacent slices verify with the default window of 1.
        assert!(totp.verify("909593", SECRET));
        assert!(totp.verify("793923", SECRET));
        assert!(totp.verify("002052", SECRET));

        // Two slices away is out of the default window.
        assert!(!totp.verify("535955", SECRET));
        assert!(!totp.verify("240069", SECRET));

        // A wider window accepts them.
        assert!(totp.verify_with_window("535955", SECRET, 2));
        assert!(totp.verify_with_window("240069", SECRET, 2));
    }

    #[test]
    fn test_empty_inputs_rejected() {
        let totp = totp_at(1_700_000_000);

        assert!(!totp.verify("", SECRET));
        assert!(!totp.verify("793923", ""));
        assert!(!totp.verify("", ""));
    }

    #[test]
    fn test_malformed_secret_rejected() {
        let totp = totp_at(1_700_000_000);

        assert!(!totp.verify("793923", "not base64!"));
    }

    #[test]
    fn test_wrong_token_rejected() {
        let totp = totp_at(1_700_000_000);

        assert!(!totp.verify("000000", SECRET));
        // Unpadded form of a valid token must not match.
        assert!(!totp.verify("2052", SECRET));
    }
}
