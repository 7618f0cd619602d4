//! Capture commands

use super::{respond, ScreenshotState};
use crate::capture::{ActiveDisplayCapture, CaptureResult, ScreenSource};
use crate::utils::error::ErrorResponse;
use crate::window::{WindowApi, WindowHandle};

/// Capture the display under the cursor
pub fn capture_fullscreen<S: ScreenSource, W: WindowApi>(
    state: &ScreenshotState<S, W>,
) -> Result<CaptureResult, ErrorResponse> {
    respond("capture_fullscreen", state.screenshotter.capture_fullscreen())
}

/// Capture the display under the cursor, reporting which one it was
pub fn capture_active_display<S: ScreenSource, W: WindowApi>(
    state: &ScreenshotState<S, W>,
) -> Result<ActiveDisplayCapture, ErrorResponse> {
    respond("capture_active_display", state.screenshotter.capture_active_display())
}

/// Capture a screen-space rectangle
pub fn capture_region<S: ScreenSource, W: WindowApi>(
    state: &ScreenshotState<S, W>,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) -> Result<CaptureResult, ErrorResponse> {
    respond("capture_region", state.screenshotter.capture_region(x, y, width, height))
}

/// Capture one display by index
pub fn capture_display<S: ScreenSource, W: WindowApi>(
    state: &ScreenshotState<S, W>,
    display_index: usize,
) -> Result<CaptureResult, ErrorResponse> {
    respond("capture_display", state.screenshotter.capture_display(display_index))
}

/// Capture a scaled-down preview of one display
pub fn capture_display_thumbnail<S: ScreenSource, W: WindowApi>(
    state: &ScreenshotState<S, W>,
    display_index: usize,
    max_width: u32,
    max_height: u32,
) -> Result<CaptureResult, ErrorResponse> {
    respond(
        "capture_display_thumbnail",
        state
            .screenshotter
            .capture_display_thumbnail(display_index, max_width, max_height),
    )
}

/// Capture the screen region a window occupies
///
/// `Ok(None)` when the window has no visible area.
pub fn capture_window_by_coords<S: ScreenSource, W: WindowApi>(
    state: &ScreenshotState<S, W>,
    hwnd: WindowHandle,
    exclude_title_bar: bool,
) -> Result<Option<CaptureResult>, ErrorResponse> {
    respond(
        "capture_window_by_coords",
        state
            .windows
            .capture_window_by_coords(&state.screenshotter, hwnd, exclude_title_bar),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{Point, Rect};
    use crate::config::CaptureConfig;
    use crate::testing::{FakeScreen, FakeWindows};

    fn state(screen: FakeScreen, windows: FakeWindows) -> ScreenshotState<FakeScreen, FakeWindows> {
        let config = CaptureConfig {
            settle_delay_ms: 0,
            ..CaptureConfig::default()
        };
        ScreenshotState::new(screen, windows, config)
    }

    #[test]
    fn test_capture_region_error_response() {
        let state = state(FakeScreen::new(vec![Rect::new(0, 0, 100, 100)]), FakeWindows::new());
        let err = capture_region(&state, 0, 0, -1, 10).unwrap_err();
        assert_eq!(err.code, "INVALID_REGION");

        let err = capture_display(&state, 4).unwrap_err();
        assert_eq!(err.code, "DISPLAY_NOT_FOUND");
    }

    #[test]
    fn test_capture_failure_response() {
        let state = state(
            FakeScreen::new(vec![Rect::new(0, 0, 100, 100)]).failing_grabs(),
            FakeWindows::new(),
        );
        assert_eq!(capture_fullscreen(&state).unwrap_err().code, "CAPTURE_FAILED");
    }

    #[test]
    fn test_active_display_serializes_index() {
        let state = state(
            FakeScreen::new(vec![Rect::new(0, 0, 100, 100), Rect::new(100, 0, 50, 40)])
                .with_cursor(Point::new(120, 10)),
            FakeWindows::new(),
        );
        let active = capture_active_display(&state).unwrap();
        let json = serde_json::to_value(&active).unwrap();
        assert_eq!(json["displayIndex"], 1);
        assert_eq!(json["capture"]["width"], 50);
        assert_eq!(json["capture"]["height"], 40);
    }

    #[test]
    fn test_thumbnail_command() {
        let state = state(FakeScreen::new(vec![Rect::new(0, 0, 192, 108)]), FakeWindows::new());
        let thumb = capture_display_thumbnail(&state, 0, 20, 20).unwrap();
        assert_eq!((thumb.width, thumb.height), (20, 11));
    }

    #[test]
    fn test_window_capture_modes() {
        let windows = FakeWindows::new()
            .with_frame_bounds(Ok(Rect::new(10, 10, 80, 60)))
            .with_client_rect(Some(Rect::new(0, 0, 70, 45)))
            .with_client_origin(Some(Point::new(15, 22)));
        let state = state(FakeScreen::new(vec![Rect::new(0, 0, 200, 200)]), windows);

        let full = capture_window_by_coords(&state, WindowHandle(42), false)
            .unwrap()
            .unwrap();
        assert_eq!((full.width, full.height), (80, 60));

        let client = capture_window_by_coords(&state, WindowHandle(42), true)
            .unwrap()
            .unwrap();
        assert_eq!((client.width, client.height), (70, 45));
    }

    #[test]
    fn test_window_without_area_is_none() {
        let state = state(FakeScreen::new(vec![Rect::new(0, 0, 200, 200)]), FakeWindows::new());
        assert_eq!(capture_window_by_coords(&state, WindowHandle(7), false).unwrap(), None);
    }
}
