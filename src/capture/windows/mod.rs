//! Windows capture implementations
//!
//! GDI for pixels and display enumeration, user32/dwmapi for window bounds.

pub mod dpi;
mod library;
pub mod screen;
pub mod window;

pub use screen::{get_displays, GdiScreen};
pub use window::{FrameBoundsProvider, Win32Windows};
