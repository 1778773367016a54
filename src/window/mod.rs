//! Window discovery and geometry coercion.
//!
//! Some browser families cannot size their own window at creation time.
//! For those, the launcher spawns the process and this module retrofits
//! the geometry: poll OS window enumeration until a window matching the
//! popup's title heuristics appears, then force it to the target size.
//!
//! # Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Rect`], [`PopupSize`] | Screen-coordinate geometry |
//! | [`PollConfig`] | Bounded retry budget |
//! | [`TitleMatchRule`] | Conjunctive title predicate |
//! | [`WindowManager`] | OS windowing subsystem seam |
//! | [`Sleeper`] | Injectable inter-attempt delay |
//! | [`WindowCoercer`] | The bounded poll loop itself |

// ============================================================================
// Submodules
// ============================================================================

/// Bounded poll loop forcing popup geometry.
pub mod coercer;

/// Geometry types and the retry budget.
pub mod geometry;

/// Window enumeration and control seams.
pub mod manager;

/// Win32 window manager binding.
#[cfg(windows)]
pub mod native;

/// Title matching heuristics.
pub mod rule;

// ============================================================================
// Re-exports
// ============================================================================

pub use coercer::WindowCoercer;
pub use geometry::{PollConfig, PopupSize, Rect};
pub use manager::{Sleeper, ThreadSleeper, WindowHandle, WindowManager, WindowRef};
#[cfg(windows)]
pub use native::Win32WindowManager;
pub use rule::TitleMatchRule;
