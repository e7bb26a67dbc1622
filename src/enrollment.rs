//! TOTP enrollment: secret, otpauth URI, QR code, and backup codes.

use serde::Serialize;
use urlencoding::encode;

use crate::backup;
use crate::config::TotpConfig;
use crate::error::Result;
use crate::qr::{PngQrRenderer, QrRenderer};
use crate::random::{OsRngRandom, SecureRandom};
use crate::secret::TotpSecret;

/// Artifacts handed to the caller at setup time.
///
/// Nothing is retained here; the secret and backup codes must be
/// persisted by the caller before the bundle is dropped.
#[derive(Clone, Serialize)]
pub struct Enrollment {
    /// Shared secret, URL-safe base64 without padding.
    pub secret: String,
    /// Provisioning URI for manual authenticator entry.
    pub otpauth_uri: String,
    /// Scannable QR code as a `data:image/png;base64,…` URI.
    pub qr_code: String,
    /// Recovery codes, 8 uppercase hex characters each.
    pub backup_codes: Vec<String>,
}

/// Builds enrollment bundles.
///
/// Randomness and QR rendering are capability parameters so tests can
/// substitute deterministic fakes.
pub struct Enroller<R = OsRngRandom, Q = PngQrRenderer> {
    config: TotpConfig,
    rng: R,
    qr: Q,
}

impl Enroller {
    /// Create an enroller with the OS random source and PNG renderer.
    pub fn new(config: TotpConfig) -> Self {
        Self::with_capabilities(config, OsRngRandom::new(), PngQrRenderer::new())
    }
}

impl<R: SecureRandom, Q: QrRenderer> Enroller<R, Q> {
    /// Create an enroller with explicit capabilities.
    pub fn with_capabilities(config: TotpConfig, rng: R, qr: Q) -> Self {
        Self { config, rng, qr }
    }

    /// Provisioning URI for `secret` labelled with this issuer and
    /// `email`.
    ///
    /// The label and issuer are percent-encoded; the parameter set
    /// (`secret`, `issuer`, `algorithm`, `digits`, `period`) is what
    /// authenticator apps expect, and `SHA256` matches the generator.
    pub fn otpauth_uri(&self, secret: &TotpSecret, email: &str) -> String {
        format!(
            "otpauth://totp/{}:{}?secret={}&issuer={}&algorithm=SHA256&digits={}&period={}",
            encode(&self.config.issuer),
            encode(email),
            secret.as_str(),
            encode(&self.config.issuer),
            self.config.digits,
            self.config.period,
        )
    }

    /// Create the secret, QR code, and backup codes for one enrollment.
    ///
    /// `email` is a display label only; any string is accepted.
    ///
    /// # Errors
    ///
    /// Returns `Err` if QR rendering fails.
    pub fn setup(&self, email: &str) -> Result<Enrollment> {
        let secret = TotpSecret::generate(&self.rng);
        let otpauth_uri = self.otpauth_uri(&secret, email);
        let qr_code = self.qr.render(&otpauth_uri, self.config.qr_size)?;
        let backup_codes =
            backup::generate_codes(&self.rng, backup::DEFAULT_CODE_COUNT);

        tracing::debug!(issuer = %self.config.issuer, "TOTP enrollment created");

        Ok(Enrollment {
            secret: secret.into_inner(),
            otpauth_uri,
            qr_code,
            backup_codes,
        })
    }
}
