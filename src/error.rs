//! Error handler for twofactor.

pub type Result<T> = std::result::Result<T, TwoFactorError>;

/// Enum representing credential subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum TwoFactorError {
    #[error("secret is not url-safe base64")]
    InvalidSecret,

    #[error("crypto failure: {cause}")]
    Crypto { cause: String },

    #[error("QR code encoding failed: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error("PNG rendering failed: {0}")]
    Image(#[from] image::ImageError),
}
