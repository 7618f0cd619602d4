//! Display and region capture
//!
//! Every operation performs a fresh, blocking screen read through a
//! [`ScreenSource`] and returns the pixels as base64 PNG.

use super::encode::{encode_image, CaptureResult};
use super::thumbnail::make_thumbnail;
use super::traits::{DisplayInfo, Point, Rect, ScreenSource};
use crate::utils::error::{AppError, AppResult};
use crate::window;
use serde::{Deserialize, Serialize};

/// Capture of the display under the cursor, with the index that was chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveDisplayCapture {
    pub display_index: usize,
    pub capture: CaptureResult,
}

/// Screen capture operations over a [`ScreenSource`]
pub struct Screenshotter<S> {
    source: S,
}

impl<S: ScreenSource> Screenshotter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Capture the display where the cursor currently is
    pub fn capture_fullscreen(&self) -> AppResult<CaptureResult> {
        self.capture_active_display().map(|active| active.capture)
    }

    /// Capture the display under the cursor and report its index
    pub fn capture_active_display(&self) -> AppResult<ActiveDisplayCapture> {
        let display_index = self.monitor_at_cursor();
        let capture = self.capture_display(display_index)?;
        Ok(ActiveDisplayCapture {
            display_index,
            capture,
        })
    }

    /// Capture an arbitrary screen-space rectangle
    pub fn capture_region(&self, x: i32, y: i32, width: i32, height: i32) -> AppResult<CaptureResult> {
        let region = Rect::new(x, y, width, height);
        if region.is_empty() {
            return Err(AppError::InvalidRegion(format!(
                "region {width}x{height} at ({x}, {y}) has no area"
            )));
        }

        tracing::debug!("Capturing region {}x{} at ({}, {})", width, height, x, y);
        let image = self.source.grab(region)?;
        encode_image(&image)
    }

    /// Capture the full bounds of one display
    pub fn capture_display(&self, index: usize) -> AppResult<CaptureResult> {
        let bounds = self.display_bounds(index)?;
        tracing::info!(
            "Capturing display {} ({}x{} at {}, {})",
            index,
            bounds.width,
            bounds.height,
            bounds.x,
            bounds.y
        );
        self.capture_region(bounds.x, bounds.y, bounds.width, bounds.height)
    }

    /// Number of active displays
    pub fn display_count(&self) -> AppResult<usize> {
        Ok(self.source.displays()?.len())
    }

    /// Bounds of one display
    pub fn display_bounds(&self, index: usize) -> AppResult<Rect> {
        self.source
            .displays()?
            .get(index)
            .map(|display| display.bounds)
            .ok_or(AppError::DisplayNotFound(index))
    }

    /// All active displays, freshly enumerated
    pub fn list_displays(&self) -> AppResult<Vec<DisplayInfo>> {
        self.source.displays()
    }

    /// Capture a display and scale it down to fit within `max_width`x`max_height`
    pub fn capture_display_thumbnail(
        &self,
        index: usize,
        max_width: u32,
        max_height: u32,
    ) -> AppResult<CaptureResult> {
        let bounds = self.display_bounds(index)?;
        if bounds.is_empty() {
            return Err(AppError::InvalidRegion(format!("display {index} has no area")));
        }

        let image = self.source.grab(bounds)?;
        let thumbnail = make_thumbnail(&image, max_width, max_height)?;
        tracing::debug!(
            "Thumbnail for display {}: {}x{} -> {}x{}",
            index,
            image.width(),
            image.height(),
            thumbnail.width(),
            thumbnail.height()
        );
        encode_image(&thumbnail)
    }

    /// Current cursor position in screen coordinates
    pub fn cursor_position(&self) -> AppResult<Point> {
        self.source.cursor_position()
    }

    /// Index of the display containing the cursor, 0 if none does
    pub fn monitor_at_cursor(&self) -> usize {
        window::monitor_at_cursor(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeScreen;
    use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};

    fn dual_screen() -> FakeScreen {
        FakeScreen::new(vec![Rect::new(0, 0, 192, 108), Rect::new(192, 0, 128, 102)])
    }

    #[test]
    fn test_capture_display_matches_bounds() {
        let shooter = Screenshotter::new(dual_screen());
        let count = shooter.display_count().unwrap();
        assert_eq!(count, 2);

        for index in 0..count {
            let bounds = shooter.display_bounds(index).unwrap();
            let result = shooter.capture_display(index).unwrap();
            assert_eq!(result.width as i32, bounds.width);
            assert_eq!(result.height as i32, bounds.height);
        }
    }

    #[test]
    fn test_capture_display_out_of_range() {
        let shooter = Screenshotter::new(dual_screen());
        assert!(matches!(shooter.capture_display(2), Err(AppError::DisplayNotFound(2))));
        assert!(matches!(shooter.display_bounds(7), Err(AppError::DisplayNotFound(7))));
    }

    #[test]
    fn test_capture_region_rejects_empty() {
        let screen = dual_screen();
        let shooter = Screenshotter::new(&screen);
        assert!(matches!(shooter.capture_region(0, 0, 0, 10), Err(AppError::InvalidRegion(_))));
        assert!(matches!(shooter.capture_region(0, 0, 10, -4), Err(AppError::InvalidRegion(_))));
        assert!(screen.grabs().is_empty());
    }

    #[test]
    fn test_capture_region_passes_rect_through() {
        let screen = dual_screen();
        let shooter = Screenshotter::new(&screen);
        let result = shooter.capture_region(-5, 12, 40, 30).unwrap();
        assert_eq!((result.width, result.height), (40, 30));
        assert_eq!(screen.grabs(), vec![Rect::new(-5, 12, 40, 30)]);
        assert!(BASE64_STANDARD.decode(&result.data).is_ok());
    }

    #[test]
    fn test_capture_failure_propagates() {
        let screen = dual_screen().failing_grabs();
        let shooter = Screenshotter::new(&screen);
        assert!(matches!(shooter.capture_region(0, 0, 5, 5), Err(AppError::CaptureFailed(_))));
        assert!(matches!(shooter.capture_display(0), Err(AppError::CaptureFailed(_))));
    }

    #[test]
    fn test_fullscreen_follows_cursor() {
        let screen = dual_screen().with_cursor(Point::new(250, 40));
        let shooter = Screenshotter::new(&screen);

        let active = shooter.capture_active_display().unwrap();
        assert_eq!(active.display_index, 1);
        assert_eq!((active.capture.width, active.capture.height), (128, 102));

        let full = shooter.capture_fullscreen().unwrap();
        assert_eq!(full, active.capture);
    }

    #[test]
    fn test_fullscreen_defaults_to_first_display() {
        let screen = dual_screen().with_cursor(Point::new(5000, 5000));
        let shooter = Screenshotter::new(&screen);
        let active = shooter.capture_active_display().unwrap();
        assert_eq!(active.display_index, 0);
        assert_eq!(screen.grabs(), vec![Rect::new(0, 0, 192, 108)]);
    }

    #[test]
    fn test_thumbnail_fits_requested_box() {
        let shooter = Screenshotter::new(dual_screen());
        let thumb = shooter.capture_display_thumbnail(0, 20, 20).unwrap();
        assert_eq!((thumb.width, thumb.height), (20, 11));

        let thumb = shooter.capture_display_thumbnail(1, 64, 64).unwrap();
        assert!(thumb.width <= 64 && thumb.height <= 64);
        assert_eq!(thumb.width, 64);
    }

    #[test]
    fn test_thumbnail_rejects_zero_box() {
        let shooter = Screenshotter::new(dual_screen());
        assert!(matches!(
            shooter.capture_display_thumbnail(0, 0, 100),
            Err(AppError::InvalidRegion(_))
        ));
    }
}
