//! Screen capture
//!
//! Platform backends implement [`ScreenSource`]; [`Screenshotter`] turns
//! their pixels into base64 PNG results.

pub mod dpi;
pub mod encode;
pub mod screenshotter;
pub mod thumbnail;
pub mod traits;
pub mod unsupported;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(not(target_os = "windows"))]
pub mod xcap_screen;

pub use dpi::{declare_dpi_awareness, DpiAwareness};
pub use encode::{encode_image, CaptureResult};
pub use screenshotter::{ActiveDisplayCapture, Screenshotter};
pub use thumbnail::thumbnail_size;
pub use traits::{DisplayInfo, Point, Rect, ScreenSource};

/// Screen backend for the current platform
#[cfg(target_os = "windows")]
pub type NativeScreen = self::windows::GdiScreen;
#[cfg(not(target_os = "windows"))]
pub type NativeScreen = xcap_screen::XcapScreen;

/// Window backend for the current platform
#[cfg(target_os = "windows")]
pub type NativeWindows = self::windows::Win32Windows;
#[cfg(not(target_os = "windows"))]
pub type NativeWindows = unsupported::UnsupportedWindows;
