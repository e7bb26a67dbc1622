//! QR code rendering for enrollment.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{GrayImage, ImageFormat, Luma};
use qrcode::QrCode;
use qrcode::types::Color;

use crate::error::Result;

/// Quiet-zone width around the symbol, in modules.
const MARGIN: u32 = 2;

/// Port for rendering enrollment data as a scannable image.
pub trait QrRenderer: Send + Sync {
    /// Render `data` as a `size`×`size` pixel image, returned as a
    /// base64 data URI.
    ///
    /// # Errors
    ///
    /// Returns `Err` if encoding fails; callers propagate it, there is
    /// no fallback image.
    fn render(&self, data: &str, size: u32) -> Result<String>;
}

/// PNG renderer: black modules on white with a fixed 2-module margin.
pub struct PngQrRenderer;

impl PngQrRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PngQrRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl QrRenderer for PngQrRenderer {
    fn render(&self, data: &str, size: u32) -> Result<String> {
        let code = QrCode::new(data)?;
        let modules = code.to_colors();
        let width = code.width() as u32;
        let total = width + 2 * MARGIN;

        // Nearest-neighbor sampling so the output is exactly the
        // requested pixel size.
        let image = GrayImage::from_fn(size, size, |x, y| {
            let mx = x * total / size;
            let my = y * total / size;

            let in_symbol = (MARGIN..MARGIN + width).contains(&mx)
                && (MARGIN..MARGIN + width).contains(&my);
            let dark = in_symbol
                && modules[((my - MARGIN) * width + (mx - MARGIN)) as usize]
                    == Color::Dark;

            if dark { Luma([0u8]) } else { Luma([255u8]) }
        });

        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
    }
}
