use std::io::Cursor;

use base64::Engine as _;

use crate::foundation::core::Canvas;
use crate::foundation::error::{SigilError, SigilResult};

/// Prefix of a PNG data URI.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encode the canvas as a lossless RGBA8 PNG.
pub fn encode_png(canvas: &Canvas) -> SigilResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(canvas.width(), canvas.height(), canvas.to_straight_rgba8())
        .ok_or_else(|| SigilError::encode("canvas buffer does not match its dimensions"))?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| SigilError::encode(format!("png: {e}")))?;
    Ok(buf)
}

/// Wrap PNG bytes as a `data:` URI (standard, padded base64).
pub fn to_data_uri(png: &[u8]) -> String {
    let mut out = String::with_capacity(PNG_DATA_URI_PREFIX.len() + png.len().div_ceil(3) * 4);
    out.push_str(PNG_DATA_URI_PREFIX);
    base64::engine::general_purpose::STANDARD.encode_string(png, &mut out);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
