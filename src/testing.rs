//! In-memory fakes for the OS seams

use crate::capture::traits::{DisplayInfo, Point, Rect, ScreenSource};
use crate::utils::error::{AppError, AppResult};
use crate::window::{FrameBoundsError, WindowApi, WindowHandle};
use image::{Rgba, RgbaImage};
use std::cell::RefCell;

/// Screen with fixed displays that paints a gradient for every grab
pub struct FakeScreen {
    displays: Vec<Rect>,
    cursor: Option<Point>,
    fail_grabs: bool,
    grabs: RefCell<Vec<Rect>>,
}

impl FakeScreen {
    pub fn new(displays: Vec<Rect>) -> Self {
        Self {
            displays,
            cursor: Some(Point::new(0, 0)),
            fail_grabs: false,
            grabs: RefCell::new(Vec::new()),
        }
    }

    pub fn with_cursor(mut self, cursor: Point) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn without_cursor(mut self) -> Self {
        self.cursor = None;
        self
    }

    pub fn failing_grabs(mut self) -> Self {
        self.fail_grabs = true;
        self
    }

    /// Regions grabbed so far, in order
    pub fn grabs(&self) -> Vec<Rect> {
        self.grabs.borrow().clone()
    }
}

impl ScreenSource for FakeScreen {
    fn displays(&self) -> AppResult<Vec<DisplayInfo>> {
        Ok(self
            .displays
            .iter()
            .enumerate()
            .map(|(index, &bounds)| DisplayInfo {
                index,
                name: format!("\\\\.\\DISPLAY{}", index + 1),
                bounds,
                is_primary: index == 0,
            })
            .collect())
    }

    fn grab(&self, region: Rect) -> AppResult<RgbaImage> {
        self.grabs.borrow_mut().push(region);
        if self.fail_grabs {
            return Err(AppError::CaptureFailed("BitBlt failed".to_string()));
        }

        let (width, height) = (region.width as u32, region.height as u32);
        Ok(RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 0x80, 0xff])
        }))
    }

    fn cursor_position(&self) -> AppResult<Point> {
        self.cursor
            .ok_or_else(|| AppError::Platform("GetCursorPos failed".to_string()))
    }
}

/// Scripted window API that records every call
pub struct FakeWindows {
    minimized: bool,
    frame_bounds: Result<Rect, FrameBoundsError>,
    window_rect: Option<Rect>,
    client_rect: Option<Rect>,
    client_origin: Option<Point>,
    log: RefCell<Vec<&'static str>>,
}

impl Default for FakeWindows {
    fn default() -> Self {
        Self {
            minimized: false,
            frame_bounds: Err(FrameBoundsError::Unavailable),
            window_rect: None,
            client_rect: None,
            client_origin: Some(Point::new(0, 0)),
            log: RefCell::new(Vec::new()),
        }
    }
}

impl FakeWindows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minimized(mut self) -> Self {
        self.minimized = true;
        self
    }

    pub fn with_frame_bounds(mut self, bounds: Result<Rect, FrameBoundsError>) -> Self {
        self.frame_bounds = bounds;
        self
    }

    pub fn with_window_rect(mut self, rect: Option<Rect>) -> Self {
        self.window_rect = rect;
        self
    }

    pub fn with_client_rect(mut self, rect: Option<Rect>) -> Self {
        self.client_rect = rect;
        self
    }

    pub fn with_client_origin(mut self, origin: Option<Point>) -> Self {
        self.client_origin = origin;
        self
    }

    pub fn calls(&self, name: &str) -> usize {
        self.log.borrow().iter().filter(|&&call| call == name).count()
    }

    pub fn call_log(&self) -> Vec<&'static str> {
        self.log.borrow().clone()
    }

    fn record(&self, name: &'static str) {
        self.log.borrow_mut().push(name);
    }
}

impl WindowApi for FakeWindows {
    fn is_minimized(&self, _hwnd: WindowHandle) -> bool {
        self.record("is_minimized");
        self.minimized
    }

    fn restore(&self, _hwnd: WindowHandle) {
        self.record("restore");
    }

    fn bring_to_top(&self, _hwnd: WindowHandle) -> bool {
        self.record("bring_to_top");
        true
    }

    fn set_foreground(&self, _hwnd: WindowHandle) -> bool {
        self.record("set_foreground");
        true
    }

    fn client_rect(&self, _hwnd: WindowHandle) -> Option<Rect> {
        self.record("client_rect");
        self.client_rect
    }

    fn client_to_screen(&self, _hwnd: WindowHandle, point: Point) -> Option<Point> {
        self.record("client_to_screen");
        self.client_origin
            .map(|origin| Point::new(origin.x + point.x, origin.y + point.y))
    }

    fn extended_frame_bounds(&self, _hwnd: WindowHandle) -> Result<Rect, FrameBoundsError> {
        self.record("extended_frame_bounds");
        self.frame_bounds
    }

    fn window_rect(&self, _hwnd: WindowHandle) -> Option<Rect> {
        self.record("window_rect");
        self.window_rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_windows_have_no_geometry() {
        let windows = FakeWindows::default();
        let handle = WindowHandle(7);

        assert!(!windows.is_minimized(handle));
        assert_eq!(windows.extended_frame_bounds(handle), Err(FrameBoundsError::Unavailable));
        assert_eq!(windows.window_rect(handle), None);
        assert_eq!(windows.client_rect(handle), None);
        assert_eq!(
            windows.client_to_screen(handle, Point::new(3, 4)),
            Some(Point::new(3, 4))
        );
        assert_eq!(
            windows.call_log(),
            vec![
                "is_minimized",
                "extended_frame_bounds",
                "window_rect",
                "client_rect",
                "client_to_screen"
            ]
        );
    }
}
