//! Configuration for TOTP enrollment and verification.
//!
//! The caller passes an explicit [`TotpConfig`] rather than reading
//! ambient state; defaults follow RFC 6238 with a 30-second period.

use serde::{Deserialize, Serialize};

/// MFA via TOTP configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotpConfig {
    /// Issuer name shown in authenticator apps.
    pub issuer: String,
    /// Number of digits for the code.
    pub digits: u32,
    /// Time step in seconds.
    pub period: u64,
    /// Accepted clock drift, in time steps on each side of now.
    pub window: u8,
    /// Width and height of the rendered QR code, in pixels.
    pub qr_size: u32,
}

impl TotpConfig {
    pub const DEFAULT_DIGITS: u32 = 6;
    /// Fallback issuer when the application does not set its own name.
    pub const DEFAULT_ISSUER: &'static str = "twofactor";
    /// Default time step as per RFC 6238.
    pub const DEFAULT_PERIOD: u64 = 30;
    pub const DEFAULT_QR_SIZE: u32 = 200;
    /// One step each side tolerates ±30s of drift, a 90-second span.
    pub const DEFAULT_WINDOW: u8 = 1;

    /// Create a default configuration under the given issuer name.
    pub fn with_issuer(issuer: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            ..Self::default()
        }
    }
}

impl Default for TotpConfig {
    fn default() -> Self {
        Self {
            issuer: Self::DEFAULT_ISSUER.to_owned(),
            digits: Self::DEFAULT_DIGITS,
            period: Self::DEFAULT_PERIOD,
            window: Self::DEFAULT_WINDOW,
            qr_size: Self::DEFAULT_QR_SIZE,
        }
    }
}
