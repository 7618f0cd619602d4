//! Host-facing command handlers
//!
//! These are the operations the GUI shell calls. Each returns either its
//! value or an [`ErrorResponse`] the shell can show as-is.

pub mod capture;
pub mod display;

use crate::capture::{NativeScreen, NativeWindows, ScreenSource, Screenshotter};
use crate::config::CaptureConfig;
use crate::utils::error::{AppResult, ErrorResponse};
use crate::window::{WindowApi, WindowResolver};

/// Capture state shared by all commands
pub struct ScreenshotState<S = NativeScreen, W = NativeWindows> {
    pub screenshotter: Screenshotter<S>,
    pub windows: WindowResolver<W>,
    pub config: CaptureConfig,
}

impl<S: ScreenSource, W: WindowApi> ScreenshotState<S, W> {
    pub fn new(source: S, window_api: W, config: CaptureConfig) -> Self {
        Self {
            screenshotter: Screenshotter::new(source),
            windows: WindowResolver::new(window_api, config.settle_delay(), config.bring_to_foreground),
            config,
        }
    }
}

impl ScreenshotState {
    /// State backed by this platform's capture APIs
    pub fn native(config: CaptureConfig) -> Self {
        Self::new(NativeScreen::new(), NativeWindows::new(), config)
    }
}

/// Log a failed command and convert its error for the shell
fn respond<T>(command: &str, result: AppResult<T>) -> Result<T, ErrorResponse> {
    result.map_err(|e| {
        tracing::error!("{} failed: {}", command, e);
        ErrorResponse::from(e)
    })
}
