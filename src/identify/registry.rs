//! Windows registry configuration source.
//!
//! Production [`ConfigSource`] binding. Maps the registry's "file not
//! found" status to the trait's `Ok(None)` contract; every other failure
//! becomes [`Error::ConfigRead`](crate::Error::ConfigRead).

// ============================================================================
// Imports
// ============================================================================

use std::io;

use winreg::RegKey;
use winreg::enums::{HKEY_CLASSES_ROOT, HKEY_CURRENT_USER};

use crate::error::{Error, Result};
use crate::identify::source::{ConfigSource, Hive};

// ============================================================================
// RegistryConfigSource
// ============================================================================

/// Reads handler registrations from the Windows registry.
///
/// Stateless; the registry handles are opened per read and closed on drop.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryConfigSource;

impl ConfigSource for RegistryConfigSource {
    fn try_read(&self, hive: Hive, key: &str, value: &str) -> Result<Option<String>> {
        let root = RegKey::predef(match hive {
            Hive::CurrentUser => HKEY_CURRENT_USER,
            Hive::ClassesRoot => HKEY_CLASSES_ROOT,
        });

        let subkey = match root.open_subkey(key) {
            Ok(subkey) => subkey,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::config_read(format!("open key {key}: {e}"))),
        };

        match subkey.get_value::<String, _>(value) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::config_read(format!("read {key}\\{value}: {e}"))),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Live-registry smoke test: an absent key is a normal Ok(None), not an
    // error, on any healthy system.
    #[test]
    fn test_try_read_absent_key_is_none() {
        let source = RegistryConfigSource;
        let result = source.try_read(
            Hive::CurrentUser,
            r"Software\auth-popup\definitely\missing",
            "",
        );
        assert!(matches!(result, Ok(None)));
    }
}
