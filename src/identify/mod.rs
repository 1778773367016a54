//! Default-browser identification.
//!
//! This module answers one question: which browser does the host OS launch
//! for `http` URLs right now, and where does its executable live?
//!
//! # Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`BrowserKind`] | Closed classification of known browser families |
//! | [`BrowserDescriptor`] | Resolved kind plus executable path |
//! | [`ConfigSource`] | Read-only system configuration store seam |
//! | [`BrowserIdentifier`] | Layered fallback chain over a [`ConfigSource`] |
//!
//! # Example
//!
//! ```no_run
//! use auth_popup::{BrowserIdentifier, BrowserKind};
//!
//! let identifier = BrowserIdentifier::with_system_source();
//! let browser = identifier.resolve();
//!
//! if browser.kind == BrowserKind::Unknown {
//!     println!("no recognized default browser");
//! }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Browser family classification.
pub mod kind;

/// Windows registry configuration source.
#[cfg(windows)]
pub mod registry;

/// Fallback-chain resolver over a configuration source.
pub mod resolver;

/// Read-only configuration store abstraction.
pub mod source;

// ============================================================================
// Re-exports
// ============================================================================

pub use kind::{BrowserDescriptor, BrowserKind};
#[cfg(windows)]
pub use registry::RegistryConfigSource;
pub use resolver::BrowserIdentifier;
pub use source::{ConfigSource, Hive};
