//! Window bounds resolution
//!
//! Turns a window handle supplied by the host into a screen rectangle and
//! hands that rectangle to region capture. Also answers "where is the cursor"
//! and "which display is it on".
//!
//! OS queries here are best effort. A failed compositor query falls back to
//! the legacy window rectangle, and any other failed query resolves to an
//! empty rectangle, which means "nothing to capture".

use crate::capture::encode::CaptureResult;
use crate::capture::traits::{DisplayInfo, Point, Rect, ScreenSource};
use crate::capture::Screenshotter;
use crate::utils::error::AppResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Opaque OS window handle, owned and validated by the OS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowHandle(pub isize);

/// Why the compositor's extended frame bounds could not be used
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameBoundsError {
    #[error("compositor API is not available")]
    Unavailable,

    #[error("compositor query failed with HRESULT {0:#010x}")]
    CallFailed(i32),
}

/// Native window operations used by [`WindowResolver`]
pub trait WindowApi {
    fn is_minimized(&self, hwnd: WindowHandle) -> bool;

    /// Restore a minimized window
    fn restore(&self, hwnd: WindowHandle);

    fn bring_to_top(&self, hwnd: WindowHandle) -> bool;

    fn set_foreground(&self, hwnd: WindowHandle) -> bool;

    /// Client rectangle in window-local coordinates
    fn client_rect(&self, hwnd: WindowHandle) -> Option<Rect>;

    fn client_to_screen(&self, hwnd: WindowHandle, point: Point) -> Option<Point>;

    /// Compositor-reported bounds (includes DPI adjustments, excludes shadow)
    fn extended_frame_bounds(&self, hwnd: WindowHandle) -> Result<Rect, FrameBoundsError>;

    /// Legacy window rectangle
    fn window_rect(&self, hwnd: WindowHandle) -> Option<Rect>;
}

/// Resolves window rectangles and captures them
pub struct WindowResolver<W> {
    api: W,
    settle_delay: Duration,
    bring_to_foreground: bool,
}

impl<W: WindowApi> WindowResolver<W> {
    pub fn new(api: W, settle_delay: Duration, bring_to_foreground: bool) -> Self {
        Self {
            api,
            settle_delay,
            bring_to_foreground,
        }
    }

    pub fn api(&self) -> &W {
        &self.api
    }

    /// Make the window visible and active, then wait for it to redraw
    ///
    /// Region capture reads whatever is on screen, so an occluded or
    /// minimized window would otherwise come back as someone else's pixels.
    pub fn bring_window_to_foreground(&self, hwnd: WindowHandle) {
        if self.api.is_minimized(hwnd) {
            tracing::debug!("Restoring minimized window {:?}", hwnd);
            self.api.restore(hwnd);
        }

        if !self.api.bring_to_top(hwnd) {
            tracing::warn!("BringWindowToTop failed for {:?}", hwnd);
        }
        if !self.api.set_foreground(hwnd) {
            tracing::warn!("SetForegroundWindow refused for {:?}", hwnd);
        }

        if !self.settle_delay.is_zero() {
            std::thread::sleep(self.settle_delay);
        }
    }

    /// Screen rectangle of the window's client area
    pub fn client_area_rect(&self, hwnd: WindowHandle) -> Rect {
        let Some(client) = self.api.client_rect(hwnd) else {
            tracing::warn!("GetClientRect failed for {:?}", hwnd);
            return Rect::default();
        };

        let Some(origin) = self.api.client_to_screen(hwnd, Point::new(0, 0)) else {
            tracing::warn!("ClientToScreen failed for {:?}", hwnd);
            return Rect::default();
        };

        Rect::new(origin.x, origin.y, client.width, client.height)
    }

    /// Screen rectangle of the whole window, title bar and borders included
    pub fn full_window_rect(&self, hwnd: WindowHandle) -> Rect {
        match self.api.extended_frame_bounds(hwnd) {
            Ok(rect) => return rect,
            Err(e) => tracing::debug!("Extended frame bounds unusable for {:?} ({}), using GetWindowRect", hwnd, e),
        }

        self.api.window_rect(hwnd).unwrap_or_else(|| {
            tracing::warn!("GetWindowRect failed for {:?}", hwnd);
            Rect::default()
        })
    }

    /// Bring the window forward and resolve the rectangle to capture
    ///
    /// Returns `None` when the window has no area.
    pub fn resolve(&self, hwnd: WindowHandle, exclude_title_bar: bool) -> Option<Rect> {
        if self.bring_to_foreground {
            self.bring_window_to_foreground(hwnd);
        }

        let rect = if exclude_title_bar {
            self.client_area_rect(hwnd)
        } else {
            self.full_window_rect(hwnd)
        };

        if rect.is_empty() {
            tracing::debug!("Window {:?} resolved to empty rect {:?}", hwnd, rect);
            return None;
        }
        Some(rect)
    }

    /// Capture a window by grabbing the screen region it occupies
    ///
    /// `Ok(None)` means there was nothing to capture.
    pub fn capture_window_by_coords<S: ScreenSource>(
        &self,
        screenshotter: &Screenshotter<S>,
        hwnd: WindowHandle,
        exclude_title_bar: bool,
    ) -> AppResult<Option<CaptureResult>> {
        let Some(rect) = self.resolve(hwnd, exclude_title_bar) else {
            return Ok(None);
        };

        tracing::info!(
            "Capturing window {:?} ({}): {}x{} at ({}, {})",
            hwnd,
            if exclude_title_bar { "client area" } else { "full window" },
            rect.width,
            rect.height,
            rect.x,
            rect.y
        );
        screenshotter
            .capture_region(rect.x, rect.y, rect.width, rect.height)
            .map(Some)
    }
}

/// Index of the first display containing `point`, 0 if none does
pub fn display_index_at(point: Point, displays: &[DisplayInfo]) -> usize {
    displays
        .iter()
        .position(|display| display.bounds.contains(point))
        .unwrap_or(0)
}

/// Index of the display under the cursor, 0 if it cannot be determined
pub fn monitor_at_cursor<S: ScreenSource>(source: &S) -> usize {
    let cursor = match source.cursor_position() {
        Ok(cursor) => cursor,
        Err(e) => {
            tracing::warn!("Failed to read cursor position: {}", e);
            return 0;
        }
    };

    match source.displays() {
        Ok(displays) => display_index_at(cursor, &displays),
        Err(e) => {
            tracing::warn!("Failed to enumerate displays: {}", e);
            0
        }
    }
}
