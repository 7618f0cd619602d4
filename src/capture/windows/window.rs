//! Win32 window queries and foreground control

use super::library::resolve_proc;
use crate::capture::traits::{Point, Rect};
use crate::window::{FrameBoundsError, WindowApi, WindowHandle};
use std::ffi::c_void;

use windows::{
    core::{s, w},
    Win32::Foundation::{HWND, POINT, RECT},
    Win32::Graphics::Dwm::DWMWA_EXTENDED_FRAME_BOUNDS,
    Win32::Graphics::Gdi::ClientToScreen,
    Win32::UI::WindowsAndMessaging::{
        BringWindowToTop, GetClientRect, GetWindowRect, IsIconic, SetForegroundWindow,
        ShowWindow, SW_RESTORE,
    },
};

pub type DwmGetWindowAttributeFn =
    unsafe extern "system" fn(hwnd: HWND, attribute: u32, value: *mut c_void, size: u32) -> i32;

/// How full-window bounds are obtained, decided once at startup
#[derive(Clone, Copy)]
pub enum FrameBoundsProvider {
    /// `dwmapi!DwmGetWindowAttribute` resolved
    Compositor(DwmGetWindowAttributeFn),
    /// Only `GetWindowRect` is available
    LegacyOnly,
}

impl FrameBoundsProvider {
    pub fn detect() -> Self {
        match unsafe { resolve_proc(w!("dwmapi.dll"), s!("DwmGetWindowAttribute")) } {
            Some(proc) => {
                // SAFETY: signature matches the documented DwmGetWindowAttribute export
                let func: DwmGetWindowAttributeFn = unsafe { std::mem::transmute(proc) };
                Self::Compositor(func)
            }
            None => Self::LegacyOnly,
        }
    }
}

impl std::fmt::Debug for FrameBoundsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compositor(_) => f.write_str("Compositor"),
            Self::LegacyOnly => f.write_str("LegacyOnly"),
        }
    }
}

/// Win32 implementation of [`WindowApi`]
#[derive(Debug, Clone, Copy)]
pub struct Win32Windows {
    frame_bounds: FrameBoundsProvider,
}

impl Win32Windows {
    pub fn new() -> Self {
        let frame_bounds = FrameBoundsProvider::detect();
        tracing::info!("Window bounds provider: {:?}", frame_bounds);
        Self { frame_bounds }
    }

    pub fn frame_bounds_provider(&self) -> FrameBoundsProvider {
        self.frame_bounds
    }
}

impl Default for Win32Windows {
    fn default() -> Self {
        Self::new()
    }
}

fn hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.0 as *mut c_void)
}

fn rect_from(rect: RECT) -> Rect {
    Rect::from_edges(rect.left, rect.top, rect.right, rect.bottom)
}

impl WindowApi for Win32Windows {
    fn is_minimized(&self, handle: WindowHandle) -> bool {
        unsafe { IsIconic(hwnd(handle)) }.as_bool()
    }

    fn restore(&self, handle: WindowHandle) {
        // Returns the previous visibility, not success
        let _ = unsafe { ShowWindow(hwnd(handle), SW_RESTORE) };
    }

    fn bring_to_top(&self, handle: WindowHandle) -> bool {
        unsafe { BringWindowToTop(hwnd(handle)) }.is_ok()
    }

    fn set_foreground(&self, handle: WindowHandle) -> bool {
        unsafe { SetForegroundWindow(hwnd(handle)) }.as_bool()
    }

    fn client_rect(&self, handle: WindowHandle) -> Option<Rect> {
        let mut rect = RECT::default();
        unsafe { GetClientRect(hwnd(handle), &mut rect) }.ok()?;
        Some(rect_from(rect))
    }

    fn client_to_screen(&self, handle: WindowHandle, point: Point) -> Option<Point> {
        let mut pt = POINT {
            x: point.x,
            y: point.y,
        };
        if unsafe { ClientToScreen(hwnd(handle), &mut pt) }.as_bool() {
            Some(Point::new(pt.x, pt.y))
        } else {
            None
        }
    }

    fn extended_frame_bounds(&self, handle: WindowHandle) -> Result<Rect, FrameBoundsError> {
        let FrameBoundsProvider::Compositor(get_window_attribute) = self.frame_bounds else {
            return Err(FrameBoundsError::Unavailable);
        };

        let mut rect = RECT::default();
        let hr = unsafe {
            get_window_attribute(
                hwnd(handle),
                DWMWA_EXTENDED_FRAME_BOUNDS.0 as u32,
                &mut rect as *mut RECT as *mut c_void,
                std::mem::size_of::<RECT>() as u32,
            )
        };

        if hr != 0 {
            return Err(FrameBoundsError::CallFailed(hr));
        }
        Ok(rect_from(rect))
    }

    fn window_rect(&self, handle: WindowHandle) -> Option<Rect> {
        let mut rect = RECT::default();
        unsafe { GetWindowRect(hwnd(handle), &mut rect) }.ok()?;
        Some(rect_from(rect))
    }
}
