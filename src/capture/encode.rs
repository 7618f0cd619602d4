//! PNG + base64 encoding of captured bitmaps

use crate::utils::error::AppResult;
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use image::RgbaImage;
use serde::{Deserialize, Serialize};

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Result of a single capture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureResult {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Base64 encoded PNG
    pub data: String,
}

impl CaptureResult {
    /// The payload as a `data:` URL, ready for an `<img src>`
    pub fn data_url(&self) -> String {
        format!("{PNG_DATA_URL_PREFIX}{}", self.data)
    }
}

/// Encode an RGBA bitmap as base64 PNG
pub fn encode_image(image: &RgbaImage) -> AppResult<CaptureResult> {
    let (width, height) = image.dimensions();

    let mut buf = Vec::new();
    let mut encoder = png::Encoder::new(&mut buf, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;

    Ok(CaptureResult {
        width,
        height,
        data: BASE64_STANDARD.encode(&buf),
    })
}
