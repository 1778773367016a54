//! Process spawn and embedded-control seams.
//!
//! The launcher never waits on the browser or captures its output; a
//! spawned browser is detached and immediately forgotten. These traits
//! keep the OS process launcher and the legacy embeddable browser control
//! at arm's length so tests can record launches instead of performing
//! them.

// ============================================================================
// Imports
// ============================================================================

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{Error, Result};
use crate::window::geometry::PopupSize;

// ============================================================================
// ProcessSpawner
// ============================================================================

/// Detached process launch capability.
pub trait ProcessSpawner {
    /// Starts `program` with `args`, detached, output discarded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LaunchFailed`] if the process cannot be started.
    fn spawn(&self, program: &Path, args: &[String]) -> Result<()>;

    /// Opens `url` via the OS generic default-handler action.
    ///
    /// Used when the default browser is unrecognized; no sizing control is
    /// attempted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LaunchFailed`] if the handler cannot be invoked.
    fn open_default(&self, url: &str) -> Result<()>;
}

// ============================================================================
// ShellSpawner
// ============================================================================

/// Production spawner backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellSpawner;

impl ProcessSpawner for ShellSpawner {
    fn spawn(&self, program: &Path, args: &[String]) -> Result<()> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(Error::launch_failed)?;

        debug!(pid = child.id(), program = %program.display(), "Browser process spawned");
        Ok(())
    }

    fn open_default(&self, url: &str) -> Result<()> {
        let mut command = default_handler_command(url);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(Error::launch_failed)?;

        debug!(url, "Opened URL via OS default handler");
        Ok(())
    }
}

/// Builds the platform's generic "open this URL" command.
fn default_handler_command(url: &str) -> Command {
    #[cfg(target_os = "windows")]
    {
        // Windows shell launcher; the empty argument is the window title
        // slot `start` would otherwise consume the URL for.
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url]);
        command
    }
    #[cfg(target_os = "macos")]
    {
        let mut command = Command::new("open");
        command.arg(url);
        command
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    }
}

// ============================================================================
// EmbeddedBrowser
// ============================================================================

/// Legacy embeddable browser control boundary.
///
/// The Internet Explorer family is sized through an embeddable control
/// (chrome disabled, explicit dimensions, navigate directly) rather than
/// by spawning a process. The control itself lives in the embedding
/// application; the launcher only drives it through this trait. When no
/// control is injected the launcher falls back to the generic
/// default-handler action.
pub trait EmbeddedBrowser {
    /// Displays `url` in a chromeless control at the given size and brings
    /// it to the foreground.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Embedded`] if navigation fails; this aborts the
    /// launch.
    fn navigate_chromeless(&self, url: &str, size: PopupSize) -> Result<()>;
}

// ============================================================================
// Tests
// ============================================================================
