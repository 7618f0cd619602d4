//! Runtime resolution of optional system DLL exports

use windows::{
    core::{PCSTR, PCWSTR},
    Win32::Foundation::HANDLE,
    Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryExW, LOAD_LIBRARY_SEARCH_SYSTEM32},
};

/// Raw export address as returned by `GetProcAddress`
pub type RawProc = unsafe extern "system" fn() -> isize;

/// Load `library` from the system directory and look up `name`
///
/// Only `%windir%\System32` is searched, so a same-named DLL next to the
/// executable or in the working directory is never picked up. The library
/// stays loaded for the life of the process. Returns `None` when either the
/// library or the export is missing.
///
/// # Safety
///
/// `library` and `name` must be valid null-terminated strings. The caller
/// must transmute the result to the export's real signature.
pub unsafe fn resolve_proc(library: PCWSTR, name: PCSTR) -> Option<RawProc> {
    let module = match unsafe { LoadLibraryExW(library, HANDLE::default(), LOAD_LIBRARY_SEARCH_SYSTEM32) } {
        Ok(module) => module,
        Err(e) => {
            tracing::debug!("LoadLibraryExW({}) failed: {}", unsafe { library.display() }, e);
            return None;
        }
    };

    let proc = unsafe { GetProcAddress(module, name) };
    if proc.is_none() {
        tracing::debug!("{} not exported by {}", unsafe { name.display() }, unsafe { library.display() });
    }
    proc
}
