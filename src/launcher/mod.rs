//! Popup launch orchestration.
//!
//! This module composes browser identification and window coercion into
//! the one public operation embedding applications call:
//! [`Launcher::open`].
//!
//! # Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Launcher`] | Orchestrator dispatching on the resolved browser |
//! | [`LauncherBuilder`] | Fluent configuration builder |
//! | [`ProcessSpawner`] | Detached process launch seam |
//! | [`EmbeddedBrowser`] | Legacy embeddable-control seam |
//!
//! # Example
//!
//! ```no_run
//! use auth_popup::{Launcher, Result};
//!
//! fn main() -> Result<()> {
//!     let launcher = Launcher::builder().brand("Flux").build()?;
//!     launcher.open("https://id.example.com/authorize?client_id=flux")?;
//!     Ok(())
//! }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// App-mode bootstrap page for browsers sized at launch.
pub mod assets;

/// Fluent builder pattern for launcher configuration.
pub mod builder;

/// Core launcher implementation.
pub mod core;

/// Process spawn and embedded-control seams.
pub mod spawn;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::LauncherBuilder;
pub use self::core::Launcher;
pub use spawn::{EmbeddedBrowser, ProcessSpawner, ShellSpawner};
