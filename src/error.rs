//! Error types for the popup launcher.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use auth_popup::{Launcher, Result};
//!
//! fn example(launcher: &Launcher) -> Result<()> {
//!     launcher.open("https://example.com/login")?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Identification | [`Error::ConfigRead`] |
//! | Launch | [`Error::InvalidUrl`], [`Error::LaunchFailed`], [`Error::Embedded`] |
//!
//! Note that [`Error::ConfigRead`] never escapes the public API: browser
//! identification recovers from it internally and defaults to an unknown
//! browser. It exists so [`ConfigSource`](crate::identify::ConfigSource)
//! implementations can distinguish unexpected store failures from the
//! perfectly normal "key absent" outcome (`Ok(None)`).

// ============================================================================
// Imports
// ============================================================================

use std::io::Error as IoError;
use std::result::Result as StdResult;

use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant includes relevant context for debugging.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Builder configuration error.
    ///
    /// Returned when launcher configuration is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// Unexpected failure reading the system configuration store.
    ///
    /// Produced by `ConfigSource` implementations for access failures that
    /// are *not* "key absent". Recovered during browser identification.
    #[error("Configuration read failed: {message}")]
    ConfigRead {
        /// Description of the read failure.
        message: String,
    },

    // ========================================================================
    // Launch Errors
    // ========================================================================
    /// The URL handed to `open` could not be parsed.
    #[error("Invalid URL: {url}")]
    InvalidUrl {
        /// The offending URL string.
        url: String,
        /// Underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// Failed to launch the browser process.
    ///
    /// Returned when the browser executable fails to spawn or the OS
    /// default-handler action fails.
    #[error("Failed to launch browser: {message}")]
    LaunchFailed {
        /// Description of the launch failure.
        message: String,
    },

    /// Embedded browser control navigation failed.
    ///
    /// Returned by the legacy embedded path when the injected control
    /// cannot display the URL.
    #[error("Embedded browser error: {message}")]
    Embedded {
        /// Description of the embedded-control failure.
        message: String,
    },
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a builder configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a configuration-store read error.
    #[inline]
    pub fn config_read(message: impl Into<String>) -> Self {
        Self::ConfigRead {
            message: message.into(),
        }
    }

    /// Creates an invalid URL error.
    #[inline]
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            source,
        }
    }

    /// Creates a launch failure from a spawn error.
    #[inline]
    pub fn launch_failed(err: IoError) -> Self {
        Self::LaunchFailed {
            message: err.to_string(),
        }
    }

    /// Creates an embedded-control error.
    #[inline]
    pub fn embedded(message: impl Into<String>) -> Self {
        Self::Embedded {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this error aborted the launch itself.
    ///
    /// Launch errors are the only ones the embedding flow must surface to
    /// the user; everything else is recovered internally.
    #[inline]
    #[must_use]
    pub fn is_launch_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl { .. } | Self::LaunchFailed { .. } | Self::Embedded { .. }
        )
    }

    /// Returns `true` if this is a configuration-store read error.
    #[inline]
    #[must_use]
    pub fn is_config_read(&self) -> bool {
        matches!(self, Self::ConfigRead { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
