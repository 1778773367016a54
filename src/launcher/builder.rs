//! Builder pattern for launcher configuration.
//!
//! Provides a fluent API for configuring and creating [`Launcher`]
//! instances. Every external seam (configuration store, windowing
//! subsystem, sleeper, spawner, embedded control) can be substituted;
//! production defaults bind to the host platform.
//!
//! # Example
//!
//! ```no_run
//! use auth_popup::Launcher;
//!
//! # fn example() -> auth_popup::Result<()> {
//! let launcher = Launcher::builder()
//!     .brand("Flux")
//!     .popup_size(350, 525)
//!     .build()?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use crate::error::{Error, Result};
use crate::identify::source::ConfigSource;
use crate::launcher::core::Launcher;
use crate::launcher::spawn::{EmbeddedBrowser, ProcessSpawner, ShellSpawner};
use crate::window::geometry::{PollConfig, PopupSize};
use crate::window::manager::{Sleeper, ThreadSleeper, WindowManager};
use crate::window::rule::TitleMatchRule;

// ============================================================================
// LauncherBuilder
// ============================================================================

/// Builder for configuring a [`Launcher`] instance.
///
/// Use [`Launcher::builder()`] to create a new builder.
#[derive(Default)]
pub struct LauncherBuilder {
    /// Brand token for popup title matching.
    brand: Option<String>,
    /// Custom state tokens, `None` keeps the defaults.
    state_tokens: Option<Vec<String>>,
    /// Target popup dimensions.
    popup_size: Option<PopupSize>,
    /// Window discovery budget.
    poll: Option<PollConfig>,
    /// Configuration store override.
    config_source: Option<Box<dyn ConfigSource + Send + Sync>>,
    /// Windowing subsystem override.
    window_manager: Option<Box<dyn WindowManager + Send + Sync>>,
    /// Inter-attempt delay override.
    sleeper: Option<Box<dyn Sleeper + Send + Sync>>,
    /// Process launch override.
    spawner: Option<Box<dyn ProcessSpawner + Send + Sync>>,
    /// Embeddable browser control for the legacy path.
    embedded: Option<Box<dyn EmbeddedBrowser + Send + Sync>>,
}

// ============================================================================
// LauncherBuilder Implementation
// ============================================================================

impl LauncherBuilder {
    /// Creates a new launcher builder with no configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the embedding application's brand token.
    ///
    /// Required: the popup title predicate needs it to tell the login
    /// window apart from the user's other browser windows.
    #[inline]
    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Replaces the default state tokens ("Log In", "Authorize").
    #[inline]
    #[must_use]
    pub fn state_tokens(mut self, tokens: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.state_tokens = Some(tokens.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the target popup dimensions in pixels.
    #[inline]
    #[must_use]
    pub fn popup_size(mut self, width: i32, height: i32) -> Self {
        self.popup_size = Some(PopupSize::new(width, height));
        self
    }

    /// Sets the window discovery budget.
    #[inline]
    #[must_use]
    pub fn poll_config(mut self, config: PollConfig) -> Self {
        self.poll = Some(config);
        self
    }

    /// Substitutes the system configuration store.
    #[inline]
    #[must_use]
    pub fn config_source(mut self, source: impl ConfigSource + Send + Sync + 'static) -> Self {
        self.config_source = Some(Box::new(source));
        self
    }

    /// Substitutes the windowing subsystem.
    #[inline]
    #[must_use]
    pub fn window_manager(mut self, manager: impl WindowManager + Send + Sync + 'static) -> Self {
        self.window_manager = Some(Box::new(manager));
        self
    }

    /// Substitutes the inter-attempt sleeper.
    #[inline]
    #[must_use]
    pub fn sleeper(mut self, sleeper: impl Sleeper + Send + Sync + 'static) -> Self {
        self.sleeper = Some(Box::new(sleeper));
        self
    }

    /// Substitutes the process spawner.
    #[inline]
    #[must_use]
    pub fn spawner(mut self, spawner: impl ProcessSpawner + Send + Sync + 'static) -> Self {
        self.spawner = Some(Box::new(spawner));
        self
    }

    /// Injects the embeddable browser control for the legacy path.
    ///
    /// Without one, a legacy default browser falls back to the OS generic
    /// handler action.
    #[inline]
    #[must_use]
    pub fn embedded_browser(
        mut self,
        control: impl EmbeddedBrowser + Send + Sync + 'static,
    ) -> Self {
        self.embedded = Some(Box::new(control));
        self
    }

    /// Builds the launcher with validation.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if no brand token was set
    /// - [`Error::Config`] if the popup dimensions are not positive
    pub fn build(self) -> Result<Launcher> {
        let brand = self.brand.ok_or_else(|| {
            Error::config(
                "Brand token is required. Use .brand() to set it.\n\
                 Example: Launcher::builder().brand(\"Flux\")",
            )
        })?;

        let popup_size = self.popup_size.unwrap_or_default();
        if !popup_size.is_valid() {
            return Err(Error::config("Popup dimensions must be greater than zero"));
        }

        let mut rule = TitleMatchRule::new(brand);
        if let Some(tokens) = self.state_tokens {
            rule = rule.with_state_tokens(tokens);
        }

        Ok(Launcher::new(
            self.config_source,
            rule,
            popup_size,
            self.poll.unwrap_or_default(),
            self.window_manager.unwrap_or_else(default_window_manager),
            self.sleeper.unwrap_or_else(|| Box::new(ThreadSleeper)),
            self.spawner.unwrap_or_else(|| Box::new(ShellSpawner)),
            self.embedded,
        ))
    }
}

// ============================================================================
// Platform Defaults
// ============================================================================

/// Default windowing subsystem for the host platform.
fn default_window_manager() -> Box<dyn WindowManager + Send + Sync> {
    #[cfg(windows)]
    {
        Box::new(crate::window::native::Win32WindowManager)
    }
    #[cfg(not(windows))]
    {
        Box::new(NullWindowManager)
    }
}

/// Placeholder manager for hosts without Win32 window control.
///
/// Only the Unknown launch path is reachable there, so this never runs in
/// practice; it exists to keep the launcher constructible everywhere.
#[cfg(not(windows))]
struct NullWindowManager;

#[cfg(not(windows))]
impl WindowManager for NullWindowManager {
    fn windows_for_process(&self, _name_hint: &str) -> Vec<crate::window::manager::WindowRef> {
        Vec::new()
    }

    fn rect(&self, _handle: crate::window::manager::WindowHandle) -> Option<crate::window::geometry::Rect> {
        None
    }

    fn set_rect(
        &self,
        _handle: crate::window::manager::WindowHandle,
        _rect: crate::window::geometry::Rect,
    ) -> bool {
        false
    }

    fn show_normal(&self, _handle: crate::window::manager::WindowHandle) -> bool {
        false
    }

    fn bring_to_front(&self, _handle: crate::window::manager::WindowHandle) -> bool {
        false
    }
}

// ============================================================================
// Tests
// ============================================================================
