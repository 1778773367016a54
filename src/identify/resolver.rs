//! Layered fallback chain for default-browser resolution.
//!
//! The chain mirrors how Windows has recorded the default `http` handler
//! across OS generations, newest mechanism first:
//!
//! 1. Per-user `UserChoice` override → ProgId → registered open command.
//! 2. Legacy machine-wide `HTTP\shell\open\command`.
//! 3. Per-user association key default value (intermediate generations).
//!
//! The first source yielding a usable command wins. The retrieved command
//! string usually carries quoting and trailing argument placeholders
//! (`"C:\...\firefox.exe" -osint -url "%1"`) that are stripped before
//! classification.

// ============================================================================
// Imports
// ============================================================================

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::Result;
use crate::identify::kind::{BrowserDescriptor, BrowserKind};
use crate::identify::source::{ConfigSource, Hive};

// ============================================================================
// Constants
// ============================================================================

/// Per-user `http` URL association key (Vista and newer).
const URL_ASSOCIATION_KEY: &str =
    r"Software\Microsoft\Windows\Shell\Associations\UrlAssociations\http";

/// Per-user choice override subkey (Windows 8 and newer).
const USER_CHOICE_KEY: &str =
    r"Software\Microsoft\Windows\Shell\Associations\UrlAssociations\http\UserChoice";

/// Value holding the chosen handler's ProgId under the UserChoice key.
const PROG_ID_VALUE: &str = "ProgId";

/// Legacy machine-wide `http` handler command key (XP era).
const LEGACY_COMMAND_KEY: &str = r"HTTP\shell\open\command";

/// Executable suffix used to truncate trailing command arguments.
const EXE_SUFFIX: &str = ".exe";

// ============================================================================
// BrowserIdentifier
// ============================================================================

/// Resolves the system default browser from a [`ConfigSource`].
///
/// # Example
///
/// ```no_run
/// use auth_popup::BrowserIdentifier;
///
/// let browser = BrowserIdentifier::with_system_source().resolve();
/// println!("default browser: {}", browser.kind);
/// ```
pub struct BrowserIdentifier {
    /// Configuration store the fallback chain reads from.
    source: Box<dyn ConfigSource + Send + Sync>,
}

impl BrowserIdentifier {
    /// Creates an identifier over the given configuration source.
    #[inline]
    #[must_use]
    pub fn new(source: Box<dyn ConfigSource + Send + Sync>) -> Self {
        Self { source }
    }

    /// Creates an identifier bound to the host system's store.
    ///
    /// On Windows this reads the registry; elsewhere there is no handler
    /// registry to consult and resolution yields
    /// [`BrowserKind::Unknown`](crate::BrowserKind::Unknown).
    #[must_use]
    pub fn with_system_source() -> Self {
        #[cfg(windows)]
        {
            Self::new(Box::new(crate::identify::registry::RegistryConfigSource))
        }
        #[cfg(not(windows))]
        {
            Self::new(Box::new(NullConfigSource))
        }
    }

    /// Resolves the default browser.
    ///
    /// Never fails: unexpected configuration-store errors are logged and
    /// collapse to [`BrowserDescriptor::unknown`], since the launcher can
    /// always fall back to the OS default-handler action.
    #[must_use]
    pub fn resolve(&self) -> BrowserDescriptor {
        let command = match self.probe_command() {
            Ok(Some(command)) => command,
            Ok(None) => {
                debug!("No default browser handler registered");
                return BrowserDescriptor::unknown();
            }
            Err(e) => {
                warn!(error = %e, "Failed to probe default browser configuration");
                return BrowserDescriptor::unknown();
            }
        };

        let Some(path) = normalize_command(&command) else {
            debug!(command = %command, "Handler command has no executable; treating as unknown");
            return BrowserDescriptor::unknown();
        };

        let kind = BrowserKind::classify(&path);
        debug!(kind = %kind, path = %path, "Default browser resolved");

        BrowserDescriptor {
            kind,
            path: Some(PathBuf::from(path)),
        }
    }

    /// Walks the fallback chain, returning the first raw open command.
    ///
    /// A ProgId that cannot be resolved to a command falls through to the
    /// next source rather than failing the chain; the stores these keys
    /// live in are routinely half-populated.
    fn probe_command(&self) -> Result<Option<String>> {
        if let Some(prog_id) = self
            .source
            .try_read(Hive::CurrentUser, USER_CHOICE_KEY, PROG_ID_VALUE)?
        {
            let command_key = format!(r"{prog_id}\shell\open\command");
            if let Some(command) = self.source.try_read(Hive::ClassesRoot, &command_key, "")? {
                return Ok(Some(command));
            }
            debug!(prog_id = %prog_id, "UserChoice ProgId has no open command; falling back");
        }

        if let Some(command) = self.source.try_read(Hive::ClassesRoot, LEGACY_COMMAND_KEY, "")? {
            return Ok(Some(command));
        }

        self.source.try_read(Hive::CurrentUser, URL_ASSOCIATION_KEY, "")
    }
}

// ============================================================================
// Command Normalization
// ============================================================================

/// Normalizes a raw handler command into a bare executable path.
///
/// Lowercases, strips quote characters and surrounding whitespace, then
/// discards anything after the last `.exe` occurrence. Returns `None` when
/// no executable suffix is present at all.
fn normalize_command(raw: &str) -> Option<String> {
    let unquoted = raw.replace('"', "");
    let cleaned = unquoted.trim().to_lowercase();

    if cleaned.is_empty() {
        return None;
    }
    if cleaned.ends_with(EXE_SUFFIX) {
        return Some(cleaned);
    }

    let end = cleaned.rfind(EXE_SUFFIX)? + EXE_SUFFIX.len();
    Some(cleaned[..end].to_string())
}

// ============================================================================
// Null Source (non-Windows)
// ============================================================================

/// Placeholder source for hosts without a handler registry.
#[cfg(not(windows))]
struct NullConfigSource;

#[cfg(not(windows))]
impl ConfigSource for NullConfigSource {
    fn try_read(&self, _hive: Hive, _key: &str, _value: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

// ============================================================================
// Tests
// ============================================================================
