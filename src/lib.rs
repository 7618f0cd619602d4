//! Snipshot - screenshot capture core.
//!
//! Captures displays, screen regions and application windows and returns
//! them as base64 PNG for the GUI shell to render.

pub mod capture;
pub mod commands;
pub mod config;
pub mod utils;
pub mod window;

#[cfg(test)]
mod testing;

pub use capture::{CaptureResult, DisplayInfo, DpiAwareness, Point, Rect};
pub use commands::ScreenshotState;
pub use config::CaptureConfig;
pub use utils::error::{AppError, AppResult, ErrorResponse};
pub use window::WindowHandle;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the capture core
///
/// Call once from the host before any capture. Installs logging, declares
/// process DPI awareness and returns the state the commands operate on.
/// Calling it again is harmless: logging and DPI awareness are kept from the
/// first call.
pub fn initialize(config: CaptureConfig) -> ScreenshotState {
    init_logging();
    tracing::info!("Starting Snipshot capture core v{}", env!("CARGO_PKG_VERSION"));

    let awareness = capture::declare_dpi_awareness();
    if awareness == DpiAwareness::Unchanged {
        tracing::debug!("DPI awareness left unchanged; window coordinates may be scaled");
    }

    ScreenshotState::native(config)
}

/// Install the tracing subscriber unless the host already has one
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snipshot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
