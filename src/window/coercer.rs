//! Bounded poll loop forcing popup geometry.
//!
//! The target window is owned by a separate, just-spawned process. It may
//! not exist yet, may be visible but still untitled during the browser's
//! own startup, or the same executable may own unrelated pre-existing
//! windows. Hence a compound title predicate and a retry budget instead of
//! a single synchronous lookup.
//!
//! The loop is a three-state machine: *searching* while attempts remain,
//! terminating in *found* (some window matched and was resized) or
//! *exhausted* (budget spent, nothing touched).

// ============================================================================
// Imports
// ============================================================================

use tracing::debug;

use crate::window::geometry::{PollConfig, PopupSize};
use crate::window::manager::{Sleeper, WindowManager};
use crate::window::rule::TitleMatchRule;

// ============================================================================
// PollOutcome
// ============================================================================

/// Terminal state of the discovery loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PollOutcome {
    /// At least one matching window was resized on some attempt.
    Found,
    /// The budget ran out without a match; no window was touched.
    Exhausted,
}

// ============================================================================
// WindowCoercer
// ============================================================================

/// Locates a just-spawned popup window and forces its geometry.
pub struct WindowCoercer<'a> {
    /// Windowing subsystem seam.
    manager: &'a dyn WindowManager,
    /// Inter-attempt delay seam.
    sleeper: &'a dyn Sleeper,
}

impl<'a> WindowCoercer<'a> {
    /// Creates a coercer over the given seams.
    #[inline]
    #[must_use]
    pub fn new(manager: &'a dyn WindowManager, sleeper: &'a dyn Sleeper) -> Self {
        Self { manager, sleeper }
    }

    /// Polls for windows matching `rule` and forces them to `size`.
    ///
    /// Every matching window on the first successful attempt is restored
    /// to a normal display state, resized in place (origin preserved) and
    /// raised above its siblings. Returns `true` if any window was resized
    /// within the budget.
    ///
    /// Guarantees:
    ///
    /// - at most `config.max_attempts` scan cycles;
    /// - total sleep strictly below `config.max_attempts × config.interval`
    ///   (no sleep after the final scan);
    /// - on exhaustion nothing is touched and `false` is returned — a
    ///   missing popup is benign, the browser just keeps its default
    ///   window geometry.
    ///
    /// Reapplying to an already-sized window is an observable no-op, so
    /// concurrent invocations racing over the same window are harmless.
    #[must_use]
    pub fn enforce_geometry(
        &self,
        process_hint: &str,
        rule: &TitleMatchRule,
        size: PopupSize,
        config: &PollConfig,
    ) -> bool {
        match self.poll(process_hint, rule, size, config) {
            PollOutcome::Found => true,
            PollOutcome::Exhausted => {
                debug!(
                    process = process_hint,
                    max_attempts = config.max_attempts,
                    "Popup window not found within poll budget"
                );
                false
            }
        }
    }

    /// Runs the discovery loop until a terminal state.
    fn poll(
        &self,
        process_hint: &str,
        rule: &TitleMatchRule,
        size: PopupSize,
        config: &PollConfig,
    ) -> PollOutcome {
        for attempt in 1..=config.max_attempts {
            if self.scan(process_hint, rule, size, attempt) {
                return PollOutcome::Found;
            }
            if attempt < config.max_attempts {
                self.sleeper.sleep(config.interval);
            }
        }
        PollOutcome::Exhausted
    }

    /// One scan cycle: enumerate, filter by title, resize and raise
    /// matches.
    ///
    /// Returns `true` if any window was resized.
    fn scan(&self, process_hint: &str, rule: &TitleMatchRule, size: PopupSize, attempt: u32) -> bool {
        let candidates = self.manager.windows_for_process(process_hint);
        let mut resized = false;

        for window in candidates.iter().filter(|w| rule.matches(&w.title)) {
            self.manager.show_normal(window.handle);

            let Some(current) = self.manager.rect(window.handle) else {
                debug!(handle = %window.handle, "Window vanished before rect read");
                continue;
            };

            if self.manager.set_rect(window.handle, current.with_size(size)) {
                self.manager.bring_to_front(window.handle);
                debug!(
                    handle = %window.handle,
                    attempt,
                    width = size.width,
                    height = size.height,
                    "Popup window resized"
                );
                resized = true;
            }
        }

        resized
    }
}

// ============================================================================
// Tests
// ============================================================================
