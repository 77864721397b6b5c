//! QR image rendering for encoded payloads.
//!
//! Optional downstream step: hands the finished payload text to the
//! `qr_code` crate and returns a terminal-printable text QR, monochrome
//! BMP bytes, or a base64 BMP data URI suitable for an `<img>` tag.
//! Rendering errors are forwarded unchanged as
//! [`PromptPayError::Render`]; nothing here retries or rewrites them.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use qr_code::QrCode;

use crate::errors::{PromptPayError, Result};
use crate::types::PaymentInstruction;

/// Renders `payload` as a block-character QR for terminal display, with a
/// 3-module quiet zone.
pub fn to_text_qr(payload: &str) -> Result<String> {
    let qr_code = QrCode::new(payload)?;
    Ok(qr_code.to_string(true, 3))
}

/// Renders `payload` as a monochrome BMP.
///
/// With `pixel_per_module` the image gets a 1-module white border and
/// each QR module becomes a square of that many pixels; without it the
/// image is 1 pixel per module with no border (scale it with
/// `image-rendering: pixelated` or equivalent).
pub fn to_bmp_bytes(payload: &str, pixel_per_module: Option<u8>) -> Result<Vec<u8>> {
    let qr_code = QrCode::new(payload)?;
    let mut bmp = qr_code.to_bmp();
    if let Some(pixel_per_module) = pixel_per_module {
        bmp = bmp
            .add_white_border(1)
            .map_err(render_err)?
            .mul(pixel_per_module)
            .map_err(render_err)?;
    }
    let mut bytes = Vec::new();
    bmp.write(&mut bytes).map_err(render_err)?;
    Ok(bytes)
}

/// Renders `payload` as a `data:image/bmp;base64,` URI.
pub fn to_base64_uri(payload: &str, pixel_per_module: Option<u8>) -> Result<String> {
    let bytes = to_bmp_bytes(payload, pixel_per_module)?;
    Ok(format!("data:image/bmp;base64,{}", BASE64.encode(bytes)))
}

fn render_err<E: std::fmt::Display>(err: E) -> PromptPayError {
    PromptPayError::Render(err.to_string())
}

impl PaymentInstruction {
    /// Renders this instruction's payload as a terminal text QR.
    pub fn qr_text(&self) -> Result<String> {
        to_text_qr(&self.payload())
    }

    /// Renders this instruction's payload as monochrome BMP bytes.
    pub fn qr_bmp(&self, pixel_per_module: Option<u8>) -> Result<Vec<u8>> {
        to_bmp_bytes(&self.payload(), pixel_per_module)
    }

    /// Renders this instruction's payload as a base64 BMP data URI.
    pub fn qr_base64_uri(&self, pixel_per_module: Option<u8>) -> Result<String> {
        to_base64_uri(&self.payload(), pixel_per_module)
    }
}
