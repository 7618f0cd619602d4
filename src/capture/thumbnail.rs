//! Aspect-preserving thumbnail scaling

use crate::utils::error::{AppError, AppResult};
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Fit `original` into `max` while preserving its aspect ratio
///
/// The side that is not bound by `max` is rounded to the nearest pixel.
/// Both sides are at least 1.
pub fn thumbnail_size(original: (u32, u32), max: (u32, u32)) -> AppResult<(u32, u32)> {
    let (original_width, original_height) = original;
    let (max_width, max_height) = max;

    if original_width == 0 || original_height == 0 {
        return Err(AppError::InvalidRegion(format!(
            "cannot scale an empty {original_width}x{original_height} image"
        )));
    }
    if max_width == 0 || max_height == 0 {
        return Err(AppError::InvalidRegion(format!(
            "thumbnail bounds must be positive, got {max_width}x{max_height}"
        )));
    }

    let (ow, oh) = (original_width as u64, original_height as u64);
    let (mw, mh) = (max_width as u64, max_height as u64);

    // mw / mh > ow / oh, cross-multiplied
    let (width, height) = if mw * oh > mh * ow {
        (round_div(mh * ow, oh), mh)
    } else {
        (mw, round_div(mw * oh, ow))
    };

    Ok((width.max(1) as u32, height.max(1) as u32))
}

fn round_div(numerator: u64, denominator: u64) -> u64 {
    (2 * numerator + denominator) / (2 * denominator)
}

/// Downsample `image` to fit within `max_width`x`max_height` (Catmull-Rom)
pub fn make_thumbnail(image: &RgbaImage, max_width: u32, max_height: u32) -> AppResult<RgbaImage> {
    let (width, height) = thumbnail_size(image.dimensions(), (max_width, max_height))?;
    Ok(imageops::resize(image, width, height, FilterType::CatmullRom))
}
