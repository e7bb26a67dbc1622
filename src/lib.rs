//! twofactor is a TOTP credential toolkit: secret enrollment with QR
//! provisioning, HMAC-SHA256 token verification, and recovery codes.
//!
//! Every operation is a pure function of its inputs plus one read of
//! secure randomness or the wall clock; nothing is persisted here. The
//! calling authentication layer stores the secret and backup codes and
//! enforces single use.

#![forbid(unsafe_code)]

pub mod backup;
pub mod clock;
pub mod config;
pub mod enrollment;
pub mod error;
pub mod qr;
pub mod random;
pub mod secret;
pub mod totp;

pub use clock::{Clock, SystemClock};
pub use config::TotpConfig;
pub use enrollment::{Enroller, Enrollment};
pub use error::{Result, TwoFactorError};
pub use qr::{PngQrRenderer, QrRenderer};
pub use random::{OsRngRandom, SecureRandom};
pub use secret::TotpSecret;
pub use totp::Totp;

/// Generate a fresh shared secret: 32 random bytes, URL-safe base64
/// without padding.
pub fn generate_secret() -> String {
    TotpSecret::generate(&OsRngRandom::new()).into_inner()
}

/// Create a full enrollment bundle with the default configuration.
///
/// # Errors
///
/// Returns `Err` if QR rendering fails.
pub fn setup_totp(email: &str) -> Result<Enrollment> {
    Enroller::new(TotpConfig::default()).setup(email)
}

/// Verify a submitted token with the default configuration (±1 time
/// step). Returns `false` on empty or malformed input, never an error.
pub fn verify_totp(token: &str, secret: &str) -> bool {
    Totp::new(TotpConfig::default()).verify(token, secret)
}

/// Generate the default set of 8 recovery codes.
pub fn generate_backup_codes() -> Vec<String> {
    backup::generate_codes(&OsRngRandom::new(), backup::DEFAULT_CODE_COUNT)
}

/// Format-only recovery code check; consumption tracking is the
/// caller's concern.
pub fn is_valid_backup_code(code: &str) -> bool {
    backup::is_valid_code(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_secret_shape() {
        let secret = generate_secret();

        assert_eq!(secret.len(), 43);
        assert!(TotpSecret::new(secret).is_ok());
    }

    #[test]
    fn test_setup_and_verify_flow() {
        let enrollment = setup_totp("user@example.com").unwrap();
        let secret = TotpSecret::new(enrollment.secret.as_str()).unwrap();

        let token = Totp::new(TotpConfig::default())
            .generate(&secret)
            .unwrap();

        assert!(verify_totp(&token, &enrollment.secret));
        assert!(!verify_totp("", &enrollment.secret));
    }

    #[test]
    fn test_backup_code_entry_points() {
        let codes = generate_backup_codes();

        assert_eq!(codes.len(), 8);
        assert!(codes.iter().all(|code| is_valid_backup_code(code)));
    }
}
