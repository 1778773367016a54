//! Seams to the OS windowing subsystem.
//!
//! The coercer never calls platform APIs directly. It works against
//! [`WindowManager`] (enumeration, geometry, display state) and
//! [`Sleeper`] (inter-attempt delay), so tests run deterministically
//! against an in-memory window registry with zero-duration sleeps.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::thread;
use std::time::Duration;

use crate::window::geometry::Rect;

// ============================================================================
// WindowHandle
// ============================================================================

/// Opaque native window handle.
///
/// On Windows this wraps the raw `HWND` value; fakes hand out arbitrary
/// identifiers. Handles are only ever passed back to the manager that
/// produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub usize);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

// ============================================================================
// WindowRef
// ============================================================================

/// A discovered top-level window: handle plus current title.
///
/// The title is captured at enumeration time; it may already be stale by
/// the time the window is manipulated, which is fine — the predicate only
/// gates discovery.
#[derive(Debug, Clone)]
pub struct WindowRef {
    /// Native handle for follow-up operations.
    pub handle: WindowHandle,
    /// Window title at enumeration time.
    pub title: String,
}

// ============================================================================
// WindowManager
// ============================================================================

/// Window enumeration and control capability.
///
/// All operations are best-effort: windows belong to a foreign process and
/// can vanish between any two calls, so failures surface as `false`/`None`
/// rather than errors.
pub trait WindowManager {
    /// Enumerates top-level windows of processes matching `name_hint`.
    ///
    /// The hint is the executable name without extension ("firefox").
    /// Processes without a top-level window are skipped.
    fn windows_for_process(&self, name_hint: &str) -> Vec<WindowRef>;

    /// Reads a window's current on-screen rectangle.
    fn rect(&self, handle: WindowHandle) -> Option<Rect>;

    /// Applies a rectangle to a window, showing it in the process.
    ///
    /// Returns `false` if the window no longer exists.
    fn set_rect(&self, handle: WindowHandle, rect: Rect) -> bool;

    /// Forces a window out of the minimized state.
    fn show_normal(&self, handle: WindowHandle) -> bool;

    /// Raises a window above its siblings.
    fn bring_to_front(&self, handle: WindowHandle) -> bool;
}

// ============================================================================
// Sleeper
// ============================================================================

/// Injectable delay between discovery attempts.
pub trait Sleeper {
    /// Blocks the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by [`thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

// ============================================================================
// Tests
// ============================================================================
