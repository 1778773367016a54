//! Win32 window manager binding.
//!
//! Production [`WindowManager`] implementation: a toolhelp process
//! snapshot maps the executable name hint to process IDs, then
//! `EnumWindows` collects visible, unowned top-level windows belonging to
//! those processes. Geometry and display-state control go through
//! `SetWindowPos`/`ShowWindow` with the same flags the popup contract
//! expects (`SWP_SHOWWINDOW`, `SW_SHOWNORMAL`).

// ============================================================================
// Imports
// ============================================================================

use tracing::warn;

use windows_sys::Win32::Foundation::{
    BOOL, CloseHandle, FALSE, HWND, INVALID_HANDLE_VALUE, LPARAM, RECT, TRUE,
};
use windows_sys::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, PROCESSENTRY32W, Process32FirstW, Process32NextW, TH32CS_SNAPPROCESS,
};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    BringWindowToTop, EnumWindows, GW_OWNER, GetWindow, GetWindowRect, GetWindowTextLengthW,
    GetWindowTextW, GetWindowThreadProcessId, HWND_TOP, IsWindowVisible, SW_SHOWNORMAL,
    SWP_SHOWWINDOW, SetWindowPos, ShowWindow,
};

use crate::window::geometry::Rect;
use crate::window::manager::{WindowHandle, WindowManager, WindowRef};

// ============================================================================
// Win32WindowManager
// ============================================================================

/// Binds the [`WindowManager`] seam to the Win32 API.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32WindowManager;

impl WindowManager for Win32WindowManager {
    fn windows_for_process(&self, name_hint: &str) -> Vec<WindowRef> {
        let pids = pids_matching(name_hint);
        if pids.is_empty() {
            return Vec::new();
        }
        top_level_windows(&pids)
    }

    fn rect(&self, handle: WindowHandle) -> Option<Rect> {
        let mut raw = RECT {
            left: 0,
            top: 0,
            right: 0,
            bottom: 0,
        };
        // SAFETY: plain FFI call writing into a stack-allocated RECT.
        let ok = unsafe { GetWindowRect(handle.0 as HWND, &mut raw) };
        (ok != FALSE).then(|| Rect::new(raw.left, raw.top, raw.right - raw.left, raw.bottom - raw.top))
    }

    fn set_rect(&self, handle: WindowHandle, rect: Rect) -> bool {
        // SAFETY: plain FFI call; a stale handle makes it return FALSE.
        let ok = unsafe {
            SetWindowPos(
                handle.0 as HWND,
                HWND_TOP,
                rect.left,
                rect.top,
                rect.width,
                rect.height,
                SWP_SHOWWINDOW,
            )
        };
        ok != FALSE
    }

    fn show_normal(&self, handle: WindowHandle) -> bool {
        // SAFETY: plain FFI call; a stale handle makes it return FALSE.
        unsafe { ShowWindow(handle.0 as HWND, SW_SHOWNORMAL) != FALSE }
    }

    fn bring_to_front(&self, handle: WindowHandle) -> bool {
        // SAFETY: plain FFI call; a stale handle makes it return FALSE.
        unsafe { BringWindowToTop(handle.0 as HWND) != FALSE }
    }
}

// ============================================================================
// Process Enumeration
// ============================================================================

/// Collects IDs of running processes whose executable matches the hint.
///
/// The hint is compared case-insensitively against the executable name
/// with its extension stripped, the way process enumeration conventions
/// report names.
fn pids_matching(name_hint: &str) -> Vec<u32> {
    let hint = name_hint.to_lowercase();
    let mut pids = Vec::new();

    // SAFETY: snapshot handle is checked and closed on every path; the
    // PROCESSENTRY32W is stack-allocated with dwSize set before use.
    unsafe {
        let snapshot = CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0);
        if snapshot == INVALID_HANDLE_VALUE {
            warn!("Process snapshot failed; no windows will be found");
            return pids;
        }

        let mut entry: PROCESSENTRY32W = std::mem::zeroed();
        entry.dwSize = std::mem::size_of::<PROCESSENTRY32W>() as u32;

        if Process32FirstW(snapshot, &mut entry) == TRUE {
            loop {
                let name = wide_to_string(&entry.szExeFile);
                if process_name_matches(&name, &hint) {
                    pids.push(entry.th32ProcessID);
                }
                if Process32NextW(snapshot, &mut entry) != TRUE {
                    break;
                }
            }
        }

        CloseHandle(snapshot);
    }

    pids
}

/// Compares an executable file name against a lowercase hint.
fn process_name_matches(exe_name: &str, hint: &str) -> bool {
    let name = exe_name.to_lowercase();
    let stem = name.strip_suffix(".exe").unwrap_or(&name);
    stem == hint
}

/// Converts a NUL-terminated UTF-16 buffer to a `String`.
fn wide_to_string(buffer: &[u16]) -> String {
    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..len])
}

// ============================================================================
// Window Enumeration
// ============================================================================

/// Callback state shared with `EnumWindows`.
struct EnumState {
    /// Process IDs whose windows are wanted.
    pids: Vec<u32>,
    /// Collected visible, unowned top-level windows.
    windows: Vec<WindowRef>,
}

/// Collects visible, unowned top-level windows for the given processes.
fn top_level_windows(pids: &[u32]) -> Vec<WindowRef> {
    let mut state = EnumState {
        pids: pids.to_vec(),
        windows: Vec::new(),
    };

    // SAFETY: the callback only dereferences the EnumState pointer for the
    // duration of this synchronous call.
    unsafe {
        EnumWindows(Some(enum_callback), &raw mut state as LPARAM);
    }

    state.windows
}

/// `EnumWindows` callback: filters to visible, unowned windows of the
/// wanted processes and records handle plus title.
unsafe extern "system" fn enum_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the EnumState pointer passed by top_level_windows.
    let state = unsafe { &mut *(lparam as *mut EnumState) };

    // SAFETY: plain FFI queries on the enumerated handle.
    unsafe {
        if IsWindowVisible(hwnd) == FALSE {
            return TRUE;
        }
        // Owned windows (dialogs, tooltips) are not the browser's main
        // window.
        if GetWindow(hwnd, GW_OWNER) as usize != 0 {
            return TRUE;
        }

        let mut pid = 0u32;
        GetWindowThreadProcessId(hwnd, &mut pid);
        if !state.pids.contains(&pid) {
            return TRUE;
        }

        let len = GetWindowTextLengthW(hwnd);
        let title = if len > 0 {
            let mut buffer = vec![0u16; len as usize + 1];
            let copied = GetWindowTextW(hwnd, buffer.as_mut_ptr(), buffer.len() as i32);
            String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
        } else {
            String::new()
        };

        state.windows.push(WindowRef {
            handle: WindowHandle(hwnd as usize),
            title,
        });
    }

    TRUE
}

// ============================================================================
// Tests
// ============================================================================
