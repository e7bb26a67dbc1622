//! Backup codes for account recovery.
//!
//! A parallel factor independent of the TOTP secret. This module only
//! generates and format-checks codes; membership in the issued set and
//! single-use consumption are tracked by the caller's persistence
//! layer.

use crate::random::SecureRandom;

/// Number of codes issued at enrollment.
pub const DEFAULT_CODE_COUNT: usize = 8;

/// Random bytes per code; hex-encodes to twice as many characters.
const CODE_BYTES: usize = 4;

/// Generate `count` recovery codes of 8 uppercase hex characters.
///
/// Codes are not de-duplicated: with 32 bits each and small counts the
/// collision probability is negligible.
pub fn generate_codes(rng: &dyn SecureRandom, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| hex::encode_upper(rng.random_bytes(CODE_BYTES)))
        .collect()
}

/// Format-only check: exactly 8 characters from `[0-9A-F]` after
/// uppercasing.
pub fn is_valid_code(code: &str) -> bool {
    let code = code.to_uppercase();

    code.len() == 2 * CODE_BYTES
        && code.bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F'))
}
