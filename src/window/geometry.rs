//! Geometry types and the poll retry budget.

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Default popup width in pixels.
pub const DEFAULT_POPUP_WIDTH: i32 = 350;

/// Default popup height in pixels.
pub const DEFAULT_POPUP_HEIGHT: i32 = 525;

/// Default number of discovery attempts.
const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Default delay between discovery attempts.
const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

// ============================================================================
// Rect
// ============================================================================

/// A window rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge, pixels from screen origin.
    pub left: i32,
    /// Top edge, pixels from screen origin.
    pub top: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle.
    #[inline]
    #[must_use]
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Returns this rectangle with a substituted size, origin preserved.
    ///
    /// This is the whole coercion contract: a discovered window keeps its
    /// position and only its size is forced.
    #[inline]
    #[must_use]
    pub const fn with_size(self, size: PopupSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
            ..self
        }
    }
}

// ============================================================================
// PopupSize
// ============================================================================

/// Fixed target dimensions for the authentication popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupSize {
    /// Target width in pixels.
    pub width: i32,
    /// Target height in pixels.
    pub height: i32,
}

impl PopupSize {
    /// Creates a popup size.
    #[inline]
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if both dimensions are positive.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for PopupSize {
    fn default() -> Self {
        Self::new(DEFAULT_POPUP_WIDTH, DEFAULT_POPUP_HEIGHT)
    }
}

// ============================================================================
// PollConfig
// ============================================================================

/// Bounded retry budget for window discovery.
///
/// The coercer performs at most `max_attempts` scan cycles with `interval`
/// sleeps between them, so a launch blocks for at most
/// `max_attempts × interval` before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Maximum number of scan cycles.
    pub max_attempts: u32,
    /// Delay between consecutive scan cycles.
    pub interval: Duration,
}

impl PollConfig {
    /// Creates a poll budget.
    #[inline]
    #[must_use]
    pub const fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
        }
    }

    /// Upper bound on total wall-clock time spent sleeping.
    #[inline]
    #[must_use]
    pub fn budget(&self) -> Duration {
        self.interval * self.max_attempts
    }
}

impl Default for PollConfig {
    /// Default budget: 10 attempts × 500ms, a 5 second ceiling.
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_INTERVAL)
    }
}

// ============================================================================
// Tests
// ============================================================================
