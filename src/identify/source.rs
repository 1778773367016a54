//! Read-only configuration store abstraction.
//!
//! Browser identification walks a chain of hierarchical key/value lookups.
//! The [`ConfigSource`] trait is the seam between that chain and the real
//! OS store: production binds to the Windows registry, tests substitute an
//! in-memory map without touching system state.

// ============================================================================
// Imports
// ============================================================================

use crate::error::Result;

// ============================================================================
// Hive
// ============================================================================

/// Root of the hierarchical configuration store to read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hive {
    /// Per-user configuration (`HKEY_CURRENT_USER`).
    CurrentUser,
    /// Machine-wide handler registrations (`HKEY_CLASSES_ROOT`).
    ClassesRoot,
}

// ============================================================================
// ConfigSource
// ============================================================================

/// A read-only hierarchical key/value store.
///
/// # Contract
///
/// - A missing key or value is a normal outcome: `Ok(None)`, never an error.
/// - Only unexpected access failures (permissions, store corruption) return
///   `Err`, and only with [`Error::ConfigRead`](crate::Error::ConfigRead).
/// - Implementations never write.
pub trait ConfigSource {
    /// Reads a string value under `key` in `hive`.
    ///
    /// An empty `value` name addresses the key's default value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`](crate::Error::ConfigRead) for access
    /// failures other than "not found".
    fn try_read(&self, hive: Hive, key: &str, value: &str) -> Result<Option<String>>;
}

// ============================================================================
// Tests
// ============================================================================
