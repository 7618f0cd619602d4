//! One-time DPI awareness declaration for the host process

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Awareness mode the process ended up with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DpiAwareness {
    /// Per-monitor aware, coordinates are physical pixels on every display
    PerMonitor,
    /// System aware, physical pixels at the primary display's scale
    System,
    /// Nothing changed: unsupported platform, or already decided elsewhere
    Unchanged,
}

/// Declare DPI awareness; only the first call touches the OS
pub fn declare_dpi_awareness() -> DpiAwareness {
    static AWARENESS: OnceLock<DpiAwareness> = OnceLock::new();

    *AWARENESS.get_or_init(|| {
        let awareness = platform_declare();
        tracing::info!("Process DPI awareness: {:?}", awareness);
        awareness
    })
}

#[cfg(target_os = "windows")]
fn platform_declare() -> DpiAwareness {
    super::windows::dpi::set_process_dpi_aware()
}

#[cfg(not(target_os = "windows"))]
fn platform_declare() -> DpiAwareness {
    DpiAwareness::Unchanged
}
