//! Core launcher implementation.
//!
//! [`Launcher`] is the orchestrator: it resolves the default browser once
//! (cached for its lifetime), then dispatches every [`Launcher::open`]
//! call on the resolved family.
//!
//! # Dispatch
//!
//! | Kind | Strategy |
//! |------|----------|
//! | Chrome | App-mode window with a self-sizing bootstrap page |
//! | Firefox | New window, then post-launch window coercion |
//! | Internet Explorer | Injected chromeless embedded control |
//! | Unknown | OS generic default-handler action, no sizing |
//!
//! Identification and coercion failures are absorbed: a login popup at
//! the browser's default size still lets the user finish the flow. Only
//! launch failures propagate.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};
use url::Url;

use crate::error::{Error, Result};
use crate::identify::kind::{BrowserDescriptor, BrowserKind};
use crate::identify::resolver::BrowserIdentifier;
use crate::identify::source::ConfigSource;
use crate::launcher::assets;
use crate::launcher::builder::LauncherBuilder;
use crate::launcher::spawn::{EmbeddedBrowser, ProcessSpawner};
use crate::window::coercer::WindowCoercer;
use crate::window::geometry::{PollConfig, PopupSize};
use crate::window::manager::{Sleeper, WindowManager};
use crate::window::rule::TitleMatchRule;

// ============================================================================
// Types
// ============================================================================

/// Internal shared state for the launcher.
struct LauncherInner {
    /// Default-browser resolver.
    identifier: BrowserIdentifier,
    /// Descriptor cache, populated on first use.
    resolved: Mutex<Option<BrowserDescriptor>>,
    /// Popup title predicate.
    rule: TitleMatchRule,
    /// Target popup dimensions.
    popup_size: PopupSize,
    /// Window discovery budget.
    poll: PollConfig,
    /// Windowing subsystem seam.
    manager: Box<dyn WindowManager + Send + Sync>,
    /// Inter-attempt delay seam.
    sleeper: Box<dyn Sleeper + Send + Sync>,
    /// Process launch seam.
    spawner: Box<dyn ProcessSpawner + Send + Sync>,
    /// Optional embeddable control for the legacy path.
    embedded: Option<Box<dyn EmbeddedBrowser + Send + Sync>>,
}

// ============================================================================
// Launcher
// ============================================================================

/// Opens login URLs in the default browser as a fixed-size popup.
///
/// Cheap to clone; clones share the cached browser descriptor. Concurrent
/// `open` calls are tolerated: each poll loop only touches windows
/// matching the compound title rule and resizing is idempotent.
///
/// # Example
///
/// ```no_run
/// use auth_popup::Launcher;
///
/// # fn example() -> auth_popup::Result<()> {
/// let launcher = Launcher::builder().brand("Flux").build()?;
/// launcher.open("https://id.example.com/authorize?client_id=flux")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Launcher {
    /// Shared inner state.
    inner: Arc<LauncherInner>,
}

// ============================================================================
// Launcher - Display
// ============================================================================

impl fmt::Debug for Launcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Launcher")
            .field("browser", &*self.inner.resolved.lock())
            .field("popup_size", &self.inner.popup_size)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Launcher - Public API
// ============================================================================

impl Launcher {
    /// Creates a configuration builder for the launcher.
    #[inline]
    #[must_use]
    pub fn builder() -> LauncherBuilder {
        LauncherBuilder::new()
    }

    /// Returns the resolved default browser, resolving on first call.
    #[must_use]
    pub fn browser(&self) -> BrowserDescriptor {
        self.descriptor()
    }

    /// Opens `url` in the default browser as a fixed-size popup.
    ///
    /// Fire-and-forget: the spawned browser is never waited on. A popup
    /// that could not be located and resized is not an error — the flow
    /// continues in a default-sized window.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUrl`] if `url` does not parse
    /// - [`Error::LaunchFailed`] if the browser process cannot be started
    /// - [`Error::Embedded`] if the injected embedded control fails
    pub fn open(&self, url: &str) -> Result<()> {
        let parsed = Url::parse(url).map_err(|e| Error::invalid_url(url, e))?;
        let browser = self.descriptor();

        debug!(kind = %browser.kind, url = %parsed, "Opening login popup");

        match browser.kind {
            BrowserKind::Chrome => self.open_app_mode(&browser, &parsed),
            BrowserKind::Firefox => self.open_coerced(&browser, &parsed),
            BrowserKind::InternetExplorer => self.open_embedded(&parsed),
            BrowserKind::Unknown => self.open_fallback(&parsed),
        }
    }
}

// ============================================================================
// Launcher - Internal API
// ============================================================================

impl Launcher {
    /// Creates a new launcher instance.
    ///
    /// Invoked by [`LauncherBuilder::build`]; `config_source` of `None`
    /// binds identification to the host system's store.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        config_source: Option<Box<dyn ConfigSource + Send + Sync>>,
        rule: TitleMatchRule,
        popup_size: PopupSize,
        poll: PollConfig,
        manager: Box<dyn WindowManager + Send + Sync>,
        sleeper: Box<dyn Sleeper + Send + Sync>,
        spawner: Box<dyn ProcessSpawner + Send + Sync>,
        embedded: Option<Box<dyn EmbeddedBrowser + Send + Sync>>,
    ) -> Self {
        let identifier = match config_source {
            Some(source) => BrowserIdentifier::new(source),
            None => BrowserIdentifier::with_system_source(),
        };

        Self {
            inner: Arc::new(LauncherInner {
                identifier,
                resolved: Mutex::new(None),
                rule,
                popup_size,
                poll,
                manager,
                sleeper,
                spawner,
                embedded,
            }),
        }
    }

    /// Returns the cached descriptor, resolving exactly once.
    fn descriptor(&self) -> BrowserDescriptor {
        let mut cached = self.inner.resolved.lock();
        cached
            .get_or_insert_with(|| {
                let descriptor = self.inner.identifier.resolve();
                info!(kind = %descriptor.kind, "Default browser resolved");
                descriptor
            })
            .clone()
    }

    /// Chrome path: app-mode window with a self-sizing bootstrap page.
    fn open_app_mode(&self, browser: &BrowserDescriptor, url: &Url) -> Result<()> {
        let Some(path) = browser.path.as_deref() else {
            return self.open_fallback(url);
        };

        let arg = assets::app_mode_arg(url, self.inner.popup_size);
        self.inner.spawner.spawn(path, &[arg])?;

        info!(kind = %browser.kind, "Opened app-mode popup");
        Ok(())
    }

    /// Firefox path: spawn a new window, then coerce its geometry.
    fn open_coerced(&self, browser: &BrowserDescriptor, url: &Url) -> Result<()> {
        let Some(path) = browser.path.as_deref() else {
            return self.open_fallback(url);
        };

        self.inner
            .spawner
            .spawn(path, &["-new-window".to_string(), url.as_str().to_string()])?;

        let hint = browser.kind.process_name().unwrap_or_default();
        let coercer = WindowCoercer::new(self.inner.manager.as_ref(), self.inner.sleeper.as_ref());
        let coerced =
            coercer.enforce_geometry(hint, &self.inner.rule, self.inner.popup_size, &self.inner.poll);

        if coerced {
            info!(kind = %browser.kind, "Opened and coerced popup window");
        } else {
            // Benign: the flow continues in a default-sized window.
            debug!(kind = %browser.kind, "Popup not coerced; browser keeps default geometry");
        }
        Ok(())
    }

    /// Legacy path: drive the injected embeddable browser control.
    fn open_embedded(&self, url: &Url) -> Result<()> {
        match self.inner.embedded.as_deref() {
            Some(control) => {
                control.navigate_chromeless(url.as_str(), self.inner.popup_size)?;
                info!(
                    width = self.inner.popup_size.width,
                    height = self.inner.popup_size.height,
                    "Opened embedded chromeless popup"
                );
                Ok(())
            }
            None => {
                debug!("No embedded browser control injected; using default handler");
                self.open_fallback(url)
            }
        }
    }

    /// Unknown path: OS generic default-handler action, no sizing.
    fn open_fallback(&self, url: &Url) -> Result<()> {
        self.inner.spawner.open_default(url.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use crate::identify::source::Hive;
    use crate::testsupport::{
        FakeWindowManager, MemoryConfigSource, RecordingEmbedded, RecordingSleeper,
        RecordingSpawner, SpawnCall,
    };
    use crate::window::geometry::Rect;
    use crate::window::manager::WindowHandle;

    const LEGACY_COMMAND_KEY: &str = r"HTTP\shell\open\command";
    const LOGIN_URL: &str = "https://id.example.com/authorize?client_id=flux";

    fn source_with_default(command: &str) -> MemoryConfigSource {
        let mut source = MemoryConfigSource::default();
        source.insert(Hive::ClassesRoot, LEGACY_COMMAND_KEY, "", command);
        source
    }

    struct Harness {
        launcher: Launcher,
        spawner: RecordingSpawner,
        manager: FakeWindowManager,
        sleeper: RecordingSleeper,
        embedded: RecordingEmbedded,
    }

    fn harness(source: MemoryConfigSource) -> Harness {
        crate::testsupport::init_test_logging();

        let spawner = RecordingSpawner::default();
        let manager = FakeWindowManager::default();
        let sleeper = RecordingSleeper::default();
        let embedded = RecordingEmbedded::default();

        let launcher = Launcher::builder()
            .brand("Flux")
            .poll_config(PollConfig::new(3, Duration::from_millis(10)))
            .config_source(source)
            .window_manager(manager.clone())
            .sleeper(sleeper.clone())
            .spawner(spawner.clone())
            .embedded_browser(embedded.clone())
            .build()
            .expect("valid configuration");

        Harness {
            launcher,
            spawner,
            manager,
            sleeper,
            embedded,
        }
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let h = harness(MemoryConfigSource::default());
        let err = h.launcher.open("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
        assert!(h.spawner.calls().is_empty());
    }

    #[test]
    fn test_unknown_browser_uses_default_handler() {
        let h = harness(MemoryConfigSource::default());
        h.launcher.open(LOGIN_URL).expect("launch succeeds");

        assert_eq!(
            h.spawner.calls(),
            vec![SpawnCall::OpenDefault {
                url: LOGIN_URL.to_string()
            }]
        );
        // No sizing control attempted.
        assert_eq!(h.manager.scan_count(), 0);
    }

    #[test]
    fn test_chrome_launches_app_mode_without_polling() {
        let h = harness(source_with_default(r#""C:\chrome\chrome.exe" -- "%1""#));
        h.launcher.open(LOGIN_URL).expect("launch succeeds");

        let calls = h.spawner.calls();
        let SpawnCall::Spawn { program, args } = &calls[0] else {
            panic!("expected process spawn, got {:?}", calls[0]);
        };
        assert_eq!(program.to_string_lossy(), r"c:\chrome\chrome.exe");
        assert_eq!(args.len(), 1);
        assert!(args[0].starts_with("--app=data:text/html,"));
        assert!(args[0].contains(&urlencoding::encode(LOGIN_URL).into_owned()));

        // The bootstrap page self-sizes; no window coercion happens.
        assert_eq!(h.manager.scan_count(), 0);
        assert_eq!(h.sleeper.sleep_count(), 0);
    }

    #[test]
    fn test_firefox_spawns_new_window_then_coerces() {
        let h = harness(source_with_default(r"C:\ff\firefox.exe -osint -url %1"));
        h.manager.add_window(
            WindowHandle(11),
            "firefox",
            "Log In to Flux - Mozilla Firefox",
            Rect::new(300, 150, 1024, 768),
        );

        h.launcher.open(LOGIN_URL).expect("launch succeeds");

        let calls = h.spawner.calls();
        assert_eq!(
            calls,
            vec![SpawnCall::Spawn {
                program: r"c:\ff\firefox.exe".into(),
                args: vec!["-new-window".to_string(), LOGIN_URL.to_string()],
            }]
        );
        assert_eq!(
            h.manager.rect(WindowHandle(11)),
            Some(Rect::new(300, 150, 350, 525))
        );
    }

    #[test]
    fn test_firefox_coercion_miss_is_absorbed() {
        let h = harness(source_with_default(r"C:\ff\firefox.exe %1"));

        // No matching window ever appears; open must still succeed.
        h.launcher.open(LOGIN_URL).expect("launch succeeds");

        assert_eq!(h.manager.scan_count(), 3);
        assert_eq!(h.manager.set_rect_count(), 0);
    }

    #[test]
    fn test_iexplore_uses_embedded_control() {
        let h = harness(source_with_default(r"C:\ie\iexplore.exe %1"));
        h.launcher.open(LOGIN_URL).expect("launch succeeds");

        assert_eq!(
            h.embedded.calls(),
            vec![(LOGIN_URL.to_string(), PopupSize::default())]
        );
        assert!(h.spawner.calls().is_empty());
    }

    #[test]
    fn test_iexplore_without_control_falls_back() {
        let spawner = RecordingSpawner::default();
        let launcher = Launcher::builder()
            .brand("Flux")
            .config_source(source_with_default(r"C:\ie\iexplore.exe %1"))
            .window_manager(FakeWindowManager::default())
            .sleeper(RecordingSleeper::default())
            .spawner(spawner.clone())
            .build()
            .expect("valid configuration");

        launcher.open(LOGIN_URL).expect("launch succeeds");

        assert_eq!(
            spawner.calls(),
            vec![SpawnCall::OpenDefault {
                url: LOGIN_URL.to_string()
            }]
        );
    }

    #[test]
    fn test_embedded_failure_propagates() {
        let h = harness(source_with_default(r"C:\ie\iexplore.exe %1"));
        h.embedded.fail_next();

        let err = h.launcher.open(LOGIN_URL).unwrap_err();
        assert!(matches!(err, Error::Embedded { .. }));
    }

    #[test]
    fn test_spawn_failure_propagates() {
        let h = harness(source_with_default(r"C:\chrome\chrome.exe %1"));
        h.spawner.fail_next();

        let err = h.launcher.open(LOGIN_URL).unwrap_err();
        assert!(matches!(err, Error::LaunchFailed { .. }));
    }

    #[test]
    fn test_browser_is_resolved_once_and_cached() {
        let source = source_with_default(r"C:\chrome\chrome.exe %1");
        let reads = source.read_counter();
        let h = harness(source);

        h.launcher.open(LOGIN_URL).expect("launch succeeds");
        let after_first = reads.get();
        assert!(after_first > 0);

        h.launcher.open(LOGIN_URL).expect("launch succeeds");
        h.launcher.browser();
        assert_eq!(reads.get(), after_first);
    }

    #[test]
    fn test_clones_share_cached_descriptor() {
        let source = source_with_default(r"C:\ff\firefox.exe %1");
        let reads = source.read_counter();
        let h = harness(source);

        let clone = h.launcher.clone();
        assert_eq!(clone.browser().kind, BrowserKind::Firefox);
        let after_first = reads.get();
        assert_eq!(h.launcher.browser().kind, BrowserKind::Firefox);
        assert_eq!(reads.get(), after_first);
    }

    #[test]
    fn test_launcher_is_debug() {
        let h = harness(MemoryConfigSource::default());
        let formatted = format!("{:?}", h.launcher);
        assert!(formatted.contains("Launcher"));
    }
}
