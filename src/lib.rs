//! Default-browser aware launcher for fixed-size authentication popups.
//!
//! Authentication flows that bounce through the system browser want a
//! small, stable popup — not a full-size browser window. This library
//! does two hard things to get one:
//!
//! - **Browser identification**: walk the layered default-handler
//!   configuration (per-user choice, legacy machine-wide registration,
//!   intermediate per-user keys) to find which browser the OS launches
//!   for `http` URLs, and classify it.
//! - **Window coercion**: for browsers with no size-on-launch support,
//!   poll process/window enumeration for the just-spawned popup —
//!   matched by a conjunctive title rule so unrelated windows are never
//!   touched — and force its geometry within a bounded time budget.
//!
//! Key design principles:
//!
//! - The default browser is resolved once per [`Launcher`] and cached
//! - Fully synchronous: `open` blocks the calling thread, bounded by the
//!   poll budget (5s by default)
//! - Identification and coercion failures are absorbed; only launch
//!   failures propagate
//! - Every OS touchpoint sits behind a trait seam, so tests run against
//!   in-memory fakes
//!
//! # Quick Start
//!
//! ```no_run
//! use auth_popup::{Launcher, Result};
//!
//! fn main() -> Result<()> {
//!     let launcher = Launcher::builder()
//!         .brand("Flux")
//!         .popup_size(350, 525)
//!         .build()?;
//!
//!     launcher.open("https://id.example.com/authorize?client_id=flux")?;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`identify`] | Default-browser identification |
//! | [`window`] | Window discovery and geometry coercion |
//! | [`launcher`] | Orchestration: [`Launcher`], its builder and seams |
//! | [`error`] | Error types and [`Result`] alias |

// ============================================================================
// Modules
// ============================================================================

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Default-browser identification.
///
/// Fallback chain over the system configuration store, classifying the
/// resolved handler into a [`BrowserKind`].
pub mod identify;

/// Popup launch orchestration.
///
/// Use [`Launcher::builder()`] to create a configured launcher instance.
pub mod launcher;

/// Window discovery and geometry coercion.
///
/// Bounded polling for the popup window and the seams it runs against.
pub mod window;

/// Shared in-memory fakes for unit tests.
#[cfg(test)]
pub(crate) mod testsupport;

// ============================================================================
// Re-exports
// ============================================================================

// Identification types
#[cfg(windows)]
pub use identify::RegistryConfigSource;
pub use identify::{BrowserDescriptor, BrowserIdentifier, BrowserKind, ConfigSource, Hive};

// Launcher types
pub use launcher::{EmbeddedBrowser, Launcher, LauncherBuilder, ProcessSpawner, ShellSpawner};

// Window types
#[cfg(windows)]
pub use window::Win32WindowManager;
pub use window::{
    PollConfig, PopupSize, Rect, Sleeper, ThreadSleeper, TitleMatchRule, WindowCoercer,
    WindowHandle, WindowManager, WindowRef,
};

// Error types
pub use error::{Error, Result};
