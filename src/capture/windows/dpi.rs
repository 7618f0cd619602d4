//! Process DPI awareness declaration

use super::library::resolve_proc;
use crate::capture::dpi::DpiAwareness;

use windows::{
    core::{s, w},
    Win32::UI::HiDpi::PROCESS_PER_MONITOR_DPI_AWARE,
    Win32::UI::WindowsAndMessaging::SetProcessDPIAware,
};

type SetProcessDpiAwarenessFn = unsafe extern "system" fn(value: i32) -> i32;

/// Ask for per-monitor awareness (Windows 8.1+), else system awareness
///
/// Without this, window and monitor rectangles come back in scaled
/// coordinates on high-DPI displays and captures land in the wrong place.
pub fn set_process_dpi_aware() -> DpiAwareness {
    if let Some(proc) = unsafe { resolve_proc(w!("shcore.dll"), s!("SetProcessDpiAwareness")) } {
        // SAFETY: signature matches the documented shcore export
        let set_awareness: SetProcessDpiAwarenessFn = unsafe { std::mem::transmute(proc) };
        let hr = unsafe { set_awareness(PROCESS_PER_MONITOR_DPI_AWARE.0) };
        if hr == 0 {
            return DpiAwareness::PerMonitor;
        }
        // E_ACCESSDENIED when the manifest or an earlier call already decided
        tracing::warn!("SetProcessDpiAwareness failed with HRESULT {:#010x}", hr);
        return DpiAwareness::Unchanged;
    }

    if unsafe { SetProcessDPIAware() }.as_bool() {
        DpiAwareness::System
    } else {
        tracing::warn!("SetProcessDPIAware failed");
        DpiAwareness::Unchanged
    }
}
