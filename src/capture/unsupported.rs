//! Window backend for platforms without window capture
//!
//! Window geometry is only resolved on Windows. Elsewhere every window query
//! resolves to nothing, so window capture reports "nothing to capture".

use super::traits::{Point, Rect};
use crate::window::{FrameBoundsError, WindowApi, WindowHandle};

#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedWindows;

impl UnsupportedWindows {
    pub fn new() -> Self {
        Self
    }
}

impl WindowApi for UnsupportedWindows {
    fn is_minimized(&self, _hwnd: WindowHandle) -> bool {
        false
    }

    fn restore(&self, _hwnd: WindowHandle) {}

    fn bring_to_top(&self, _hwnd: WindowHandle) -> bool {
        false
    }

    fn set_foreground(&self, _hwnd: WindowHandle) -> bool {
        false
    }

    fn client_rect(&self, _hwnd: WindowHandle) -> Option<Rect> {
        None
    }

    fn client_to_screen(&self, _hwnd: WindowHandle, _point: Point) -> Option<Point> {
        None
    }

    fn extended_frame_bounds(&self, _hwnd: WindowHandle) -> Result<Rect, FrameBoundsError> {
        Err(FrameBoundsError::Unavailable)
    }

    fn window_rect(&self, _hwnd: WindowHandle) -> Option<Rect> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeScreen;
    use crate::window::WindowResolver;
    use std::time::Duration;

    #[test]
    fn test_window_capture_resolves_to_nothing() {
        let resolver = WindowResolver::new(UnsupportedWindows::new(), Duration::ZERO, true);
        let screen = FakeScreen::new(vec![Rect::new(0, 0, 1920, 1080)]);
        let screenshotter = crate::capture::Screenshotter::new(&screen);

        for exclude_title_bar in [true, false] {
            let result = resolver
                .capture_window_by_coords(&screenshotter, WindowHandle(42), exclude_title_bar)
                .unwrap();
            assert_eq!(result, None);
        }
        assert!(screen.grabs().is_empty());
    }
}
