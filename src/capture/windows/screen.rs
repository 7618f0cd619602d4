//! Windows screen capture using GDI BitBlt
//!
//! Displays are enumerated with `EnumDisplayMonitors` on every call and
//! pixels are copied out of the screen DC into a top-down 32-bit DIB.

use crate::capture::traits::{DisplayInfo, Point, Rect, ScreenSource};
use crate::utils::error::{AppError, AppResult};
use image::RgbaImage;

use windows::{
    Win32::Foundation::{BOOL, HWND, LPARAM, POINT, RECT},
    Win32::Graphics::Gdi::{
        BitBlt, CreateCompatibleBitmap, CreateCompatibleDC, DeleteDC, DeleteObject,
        EnumDisplayMonitors, GetDC, GetDIBits, GetMonitorInfoW, ReleaseDC, SelectObject,
        BITMAPINFO, BITMAPINFOHEADER, BI_RGB, CAPTUREBLT, DIB_RGB_COLORS, HDC, HMONITOR,
        MONITORINFOEXW, MONITORINFOF_PRIMARY, ROP_CODE, SRCCOPY,
    },
    Win32::UI::WindowsAndMessaging::GetCursorPos,
};

/// GDI-backed [`ScreenSource`]
#[derive(Debug, Default, Clone, Copy)]
pub struct GdiScreen;

impl GdiScreen {
    pub fn new() -> Self {
        Self
    }
}

impl ScreenSource for GdiScreen {
    fn displays(&self) -> AppResult<Vec<DisplayInfo>> {
        let displays = get_displays();
        if displays.is_empty() {
            return Err(AppError::CaptureFailed("no active displays".to_string()));
        }
        Ok(displays)
    }

    fn grab(&self, region: Rect) -> AppResult<RgbaImage> {
        capture_rect(region)
    }

    fn cursor_position(&self) -> AppResult<Point> {
        let mut point = POINT::default();
        unsafe { GetCursorPos(&mut point) }
            .map_err(|e| AppError::Platform(format!("GetCursorPos failed: {e}")))?;
        Ok(Point::new(point.x, point.y))
    }
}

/// Get list of active displays, in OS enumeration order
pub fn get_displays() -> Vec<DisplayInfo> {
    use std::mem::zeroed;

    let mut displays = Vec::new();
    let displays_ptr = &mut displays as *mut Vec<DisplayInfo>;

    unsafe extern "system" fn enum_monitors_callback(
        hmonitor: HMONITOR,
        _hdc: HDC,
        _rect: *mut RECT,
        lparam: LPARAM,
    ) -> BOOL {
        let displays = unsafe { &mut *(lparam.0 as *mut Vec<DisplayInfo>) };

        let mut monitor_info: MONITORINFOEXW = unsafe { zeroed() };
        monitor_info.monitorInfo.cbSize = std::mem::size_of::<MONITORINFOEXW>() as u32;

        if unsafe { GetMonitorInfoW(hmonitor, &mut monitor_info.monitorInfo) }.as_bool() {
            let rect = monitor_info.monitorInfo.rcMonitor;
            let is_primary = (monitor_info.monitorInfo.dwFlags & MONITORINFOF_PRIMARY) != 0;

            let name_len = monitor_info
                .szDevice
                .iter()
                .position(|&c| c == 0)
                .unwrap_or(monitor_info.szDevice.len());
            let name = String::from_utf16_lossy(&monitor_info.szDevice[..name_len]);

            displays.push(DisplayInfo {
                index: displays.len(),
                name,
                bounds: Rect::from_edges(rect.left, rect.top, rect.right, rect.bottom),
                is_primary,
            });
        } else {
            tracing::warn!("GetMonitorInfoW failed for monitor {:?}", hmonitor);
        }

        BOOL::from(true)
    }

    unsafe {
        let _ = EnumDisplayMonitors(
            HDC::default(),
            None,
            Some(enum_monitors_callback),
            LPARAM(displays_ptr as isize),
        );
    }

    displays
}

/// Copy a virtual-screen rectangle into an RGBA bitmap
fn capture_rect(region: Rect) -> AppResult<RgbaImage> {
    use std::mem::zeroed;

    let (width, height) = (region.width, region.height);
    if width <= 0 || height <= 0 {
        return Err(AppError::InvalidRegion(format!("{width}x{height}")));
    }

    unsafe {
        // Screen DC spans the whole virtual screen, origin at the primary display
        let hdc_screen = GetDC(HWND::default());
        if hdc_screen.is_invalid() {
            return Err(AppError::CaptureFailed("GetDC failed".to_string()));
        }

        let hdc_mem = CreateCompatibleDC(hdc_screen);
        if hdc_mem.is_invalid() {
            ReleaseDC(HWND::default(), hdc_screen);
            return Err(AppError::CaptureFailed("CreateCompatibleDC failed".to_string()));
        }

        let hbitmap = CreateCompatibleBitmap(hdc_screen, width, height);
        if hbitmap.is_invalid() {
            let _ = DeleteDC(hdc_mem);
            ReleaseDC(HWND::default(), hdc_screen);
            return Err(AppError::CaptureFailed(format!(
                "CreateCompatibleBitmap failed for {width}x{height}"
            )));
        }

        let old_bitmap = SelectObject(hdc_mem, hbitmap);

        // CAPTUREBLT includes layered windows
        let blit = BitBlt(
            hdc_mem,
            0,
            0,
            width,
            height,
            hdc_screen,
            region.x,
            region.y,
            ROP_CODE(SRCCOPY.0 | CAPTUREBLT.0),
        );

        let mut bmi: BITMAPINFO = zeroed();
        bmi.bmiHeader.biSize = std::mem::size_of::<BITMAPINFOHEADER>() as u32;
        bmi.bmiHeader.biWidth = width;
        bmi.bmiHeader.biHeight = -height; // Negative for top-down
        bmi.bmiHeader.biPlanes = 1;
        bmi.bmiHeader.biBitCount = 32; // BGRA
        bmi.bmiHeader.biCompression = BI_RGB.0;

        let mut buffer = vec![0u8; width as usize * height as usize * 4];

        let lines = if blit.is_ok() {
            GetDIBits(
                hdc_mem,
                hbitmap,
                0,
                height as u32,
                Some(buffer.as_mut_ptr() as *mut _),
                &mut bmi,
                DIB_RGB_COLORS,
            )
        } else {
            0
        };

        // Cleanup
        SelectObject(hdc_mem, old_bitmap);
        let _ = DeleteObject(hbitmap);
        let _ = DeleteDC(hdc_mem);
        ReleaseDC(HWND::default(), hdc_screen);

        if let Err(e) = blit {
            return Err(AppError::CaptureFailed(format!("BitBlt failed: {e}")));
        }
        if lines == 0 {
            return Err(AppError::CaptureFailed("GetDIBits returned no lines".to_string()));
        }

        bgra_to_rgba(&mut buffer);
        RgbaImage::from_raw(width as u32, height as u32, buffer)
            .ok_or_else(|| AppError::CaptureFailed("bitmap size mismatch".to_string()))
    }
}

/// Swap BGRA to RGBA in place and force opaque alpha
///
/// GDI leaves the alpha byte undefined for screen copies.
fn bgra_to_rgba(buffer: &mut [u8]) {
    for pixel in buffer.chunks_exact_mut(4) {
        pixel.swap(0, 2);
        pixel[3] = 0xff;
    }
}
