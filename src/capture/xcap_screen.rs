//! Screen capture on Linux and macOS through `xcap`
//!
//! `xcap` only captures whole monitors, so a region is stitched together
//! from every monitor it overlaps. Parts of the region outside all monitors
//! stay black, the same as a GDI copy of the virtual screen.

use super::traits::{DisplayInfo, Point, Rect, ScreenSource};
use crate::utils::error::{AppError, AppResult};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use xcap::Monitor;

/// `xcap`-backed [`ScreenSource`]
///
/// `xcap` has no cursor query, so [`ScreenSource::cursor_position`] always
/// fails and the display under the cursor falls back to display 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct XcapScreen;

impl XcapScreen {
    pub fn new() -> Self {
        Self
    }
}

impl ScreenSource for XcapScreen {
    fn displays(&self) -> AppResult<Vec<DisplayInfo>> {
        let displays: Vec<DisplayInfo> = monitors()?
            .iter()
            .enumerate()
            .map(|(index, monitor)| DisplayInfo {
                index,
                name: monitor.name().unwrap_or_else(|_| format!("Monitor {}", index + 1)),
                bounds: monitor_bounds(monitor),
                is_primary: monitor.is_primary().unwrap_or(index == 0),
            })
            .collect();

        if displays.is_empty() {
            return Err(AppError::CaptureFailed("no active displays".to_string()));
        }
        Ok(displays)
    }

    fn grab(&self, region: Rect) -> AppResult<RgbaImage> {
        if region.is_empty() {
            return Err(AppError::InvalidRegion(format!("{}x{}", region.width, region.height)));
        }

        let mut frames = Vec::new();
        for monitor in monitors()? {
            let bounds = monitor_bounds(&monitor);
            if region.intersection(&bounds).is_none() {
                continue;
            }

            let frame = monitor
                .capture_image()
                .map_err(|e| AppError::CaptureFailed(format!("monitor capture failed: {e}")))?;
            let (width, height) = (frame.width(), frame.height());
            let frame = RgbaImage::from_raw(width, height, frame.into_raw())
                .ok_or_else(|| AppError::CaptureFailed("monitor bitmap size mismatch".to_string()))?;
            frames.push((bounds, frame));
        }

        if frames.is_empty() {
            return Err(AppError::CaptureFailed(format!(
                "region {}x{} at ({}, {}) lies outside every display",
                region.width, region.height, region.x, region.y
            )));
        }

        tracing::debug!("Stitching region from {} monitor frame(s)", frames.len());
        Ok(compose_region(region, &frames))
    }

    fn cursor_position(&self) -> AppResult<Point> {
        Err(AppError::Platform(format!(
            "cursor position is not available on {}",
            std::env::consts::OS
        )))
    }
}

fn monitors() -> AppResult<Vec<Monitor>> {
    Monitor::all().map_err(|e| AppError::CaptureFailed(format!("monitor enumeration failed: {e}")))
}

fn monitor_bounds(monitor: &Monitor) -> Rect {
    let width = monitor.width().unwrap_or(0);
    let height = monitor.height().unwrap_or(0);
    Rect::new(
        monitor.x().unwrap_or(0),
        monitor.y().unwrap_or(0),
        i32::try_from(width).unwrap_or(i32::MAX),
        i32::try_from(height).unwrap_or(i32::MAX),
    )
}

/// Copy the parts of `region` covered by each monitor frame onto one canvas
///
/// Frames whose pixel size differs from their monitor bounds (HiDPI
/// backends report logical bounds) are resampled to the bounds first, so the
/// result is always `region.width`x`region.height`. `region` must be
/// non-empty.
fn compose_region(region: Rect, frames: &[(Rect, RgbaImage)]) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(
        region.width as u32,
        region.height as u32,
        Rgba([0, 0, 0, 0xff]),
    );

    for (bounds, frame) in frames {
        let Some(overlap) = region.intersection(bounds) else {
            continue;
        };

        let (width, height) = (bounds.width as u32, bounds.height as u32);
        let resized;
        let frame = if frame.dimensions() == (width, height) {
            frame
        } else {
            resized = imageops::resize(frame, width, height, FilterType::CatmullRom);
            &resized
        };

        let patch = imageops::crop_imm(
            frame,
            (overlap.x - bounds.x) as u32,
            (overlap.y - bounds.y) as u32,
            overlap.width as u32,
            overlap.height as u32,
        )
        .to_image();
        imageops::replace(
            &mut canvas,
            &patch,
            i64::from(overlap.x - region.x),
            i64::from(overlap.y - region.y),
        );
    }

    canvas
}
