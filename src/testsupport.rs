//! Shared in-memory fakes for unit tests.
//!
//! Each fake stands in for one external seam: configuration store,
//! windowing subsystem, sleeper, process spawner, embedded control. All
//! are cheaply cloneable handles over shared state so tests can keep a
//! handle for assertions after moving a clone into the launcher.

// ============================================================================
// Imports
// ============================================================================

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};
use crate::identify::source::{ConfigSource, Hive};
use crate::launcher::spawn::{EmbeddedBrowser, ProcessSpawner};
use crate::window::geometry::{PopupSize, Rect};
use crate::window::manager::{Sleeper, WindowHandle, WindowManager, WindowRef};

// ============================================================================
// Logging
// ============================================================================

/// Installs a per-test capturing subscriber, honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call per process wins.
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// MemoryConfigSource
// ============================================================================

/// Key for one stored configuration value.
type ConfigKey = (Hive, String, String);

/// Shared handle counting configuration reads.
#[derive(Debug, Clone, Default)]
pub(crate) struct ReadCounter(Arc<AtomicUsize>);

impl ReadCounter {
    /// Returns the number of reads observed so far.
    pub(crate) fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// In-memory [`ConfigSource`] with injectable read failures.
#[derive(Clone, Default)]
pub(crate) struct MemoryConfigSource {
    /// Stored values.
    entries: Arc<Mutex<HashMap<ConfigKey, String>>>,
    /// Addresses that fail with a read error instead of returning.
    failures: Arc<Mutex<HashSet<ConfigKey>>>,
    /// Read counter shared with test assertions.
    reads: ReadCounter,
}

impl MemoryConfigSource {
    /// Stores a value at the given address.
    pub(crate) fn insert(&mut self, hive: Hive, key: &str, value: &str, data: &str) {
        self.entries
            .lock()
            .insert((hive, key.to_string(), value.to_string()), data.to_string());
    }

    /// Makes reads of the given address fail.
    pub(crate) fn fail_at(&mut self, hive: Hive, key: &str, value: &str) {
        self.failures
            .lock()
            .insert((hive, key.to_string(), value.to_string()));
    }

    /// Returns a handle observing the total read count.
    pub(crate) fn read_counter(&self) -> ReadCounter {
        self.reads.clone()
    }
}

impl ConfigSource for MemoryConfigSource {
    fn try_read(&self, hive: Hive, key: &str, value: &str) -> Result<Option<String>> {
        self.reads.0.fetch_add(1, Ordering::SeqCst);

        let address = (hive, key.to_string(), value.to_string());
        if self.failures.lock().contains(&address) {
            return Err(Error::config_read("injected store failure"));
        }
        Ok(self.entries.lock().get(&address).cloned())
    }
}

// ============================================================================
// FakeWindowManager
// ============================================================================

/// One window in the fake registry.
struct FakeWindow {
    /// Handle handed out to the coercer.
    handle: WindowHandle,
    /// Owning process name (extension-less).
    process: String,
    /// Current title.
    title: String,
    /// Current geometry.
    rect: Rect,
    /// First scan (1-based) on which the window is enumerable.
    appears_at: u32,
    /// Whether `show_normal` was called on it.
    shown_normal: bool,
    /// Whether `bring_to_front` was called on it.
    brought_to_front: bool,
}

/// Mutable registry state.
#[derive(Default)]
struct FakeWindowState {
    /// Registered windows.
    windows: Vec<FakeWindow>,
    /// Number of enumeration calls performed.
    scans: u32,
    /// Number of successful `set_rect` calls.
    set_rects: u32,
}

/// In-memory [`WindowManager`] with scan-dependent window visibility.
#[derive(Clone, Default)]
pub(crate) struct FakeWindowManager {
    /// Shared registry.
    state: Arc<Mutex<FakeWindowState>>,
}

impl FakeWindowManager {
    /// Registers a window visible from the first scan.
    pub(crate) fn add_window(&self, handle: WindowHandle, process: &str, title: &str, rect: Rect) {
        self.add_window_appearing_at(handle, process, title, rect, 1);
    }

    /// Registers a window that only becomes enumerable on scan `scan`.
    pub(crate) fn add_window_appearing_at(
        &self,
        handle: WindowHandle,
        process: &str,
        title: &str,
        rect: Rect,
        scan: u32,
    ) {
        self.state.lock().windows.push(FakeWindow {
            handle,
            process: process.to_string(),
            title: title.to_string(),
            rect,
            appears_at: scan,
            shown_normal: false,
            brought_to_front: false,
        });
    }

    /// Number of enumeration calls performed so far.
    pub(crate) fn scan_count(&self) -> u32 {
        self.state.lock().scans
    }

    /// Number of successful `set_rect` calls so far.
    pub(crate) fn set_rect_count(&self) -> u32 {
        self.state.lock().set_rects
    }

    /// Returns whether `show_normal` was applied to the window.
    pub(crate) fn was_shown_normal(&self, handle: WindowHandle) -> bool {
        self.state
            .lock()
            .windows
            .iter()
            .any(|w| w.handle == handle && w.shown_normal)
    }

    /// Returns whether `bring_to_front` was applied to the window.
    pub(crate) fn was_brought_to_front(&self, handle: WindowHandle) -> bool {
        self.state
            .lock()
            .windows
            .iter()
            .any(|w| w.handle == handle && w.brought_to_front)
    }
}

impl WindowManager for FakeWindowManager {
    fn windows_for_process(&self, name_hint: &str) -> Vec<WindowRef> {
        let mut state = self.state.lock();
        state.scans += 1;
        let scan = state.scans;

        state
            .windows
            .iter()
            .filter(|w| w.process == name_hint && scan >= w.appears_at)
            .map(|w| WindowRef {
                handle: w.handle,
                title: w.title.clone(),
            })
            .collect()
    }

    fn rect(&self, handle: WindowHandle) -> Option<Rect> {
        self.state
            .lock()
            .windows
            .iter()
            .find(|w| w.handle == handle)
            .map(|w| w.rect)
    }

    fn set_rect(&self, handle: WindowHandle, rect: Rect) -> bool {
        let mut state = self.state.lock();
        let Some(window) = state.windows.iter_mut().find(|w| w.handle == handle) else {
            return false;
        };
        window.rect = rect;
        state.set_rects += 1;
        true
    }

    fn show_normal(&self, handle: WindowHandle) -> bool {
        let mut state = self.state.lock();
        let Some(window) = state.windows.iter_mut().find(|w| w.handle == handle) else {
            return false;
        };
        window.shown_normal = true;
        true
    }

    fn bring_to_front(&self, handle: WindowHandle) -> bool {
        let mut state = self.state.lock();
        let Some(window) = state.windows.iter_mut().find(|w| w.handle == handle) else {
            return false;
        };
        window.brought_to_front = true;
        true
    }
}

// ============================================================================
// RecordingSleeper
// ============================================================================

/// [`Sleeper`] that records requested durations without blocking.
#[derive(Clone, Default)]
pub(crate) struct RecordingSleeper {
    /// Requested sleep durations, in order.
    slept: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    /// Number of sleeps requested.
    pub(crate) fn sleep_count(&self) -> usize {
        self.slept.lock().len()
    }

    /// Sum of all requested durations.
    pub(crate) fn total_slept(&self) -> Duration {
        self.slept.lock().iter().sum()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.slept.lock().push(duration);
    }
}

// ============================================================================
// RecordingSpawner
// ============================================================================

/// One recorded launch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SpawnCall {
    /// Detached process spawn.
    Spawn {
        /// Program path as requested.
        program: PathBuf,
        /// Arguments as requested.
        args: Vec<String>,
    },
    /// Generic default-handler action.
    OpenDefault {
        /// URL as requested.
        url: String,
    },
}

/// [`ProcessSpawner`] that records launches instead of performing them.
#[derive(Clone, Default)]
pub(crate) struct RecordingSpawner {
    /// Recorded launch requests, in order.
    calls: Arc<Mutex<Vec<SpawnCall>>>,
    /// When set, the next call fails once.
    fail_next: Arc<AtomicBool>,
}

impl RecordingSpawner {
    /// Recorded launch requests so far.
    pub(crate) fn calls(&self) -> Vec<SpawnCall> {
        self.calls.lock().clone()
    }

    /// Makes the next launch request fail.
    pub(crate) fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Consumes the failure flag.
    fn take_failure(&self) -> bool {
        self.fail_next.swap(false, Ordering::SeqCst)
    }
}

impl ProcessSpawner for RecordingSpawner {
    fn spawn(&self, program: &std::path::Path, args: &[String]) -> Result<()> {
        if self.take_failure() {
            return Err(Error::launch_failed(std::io::Error::other(
                "injected spawn failure",
            )));
        }
        self.calls.lock().push(SpawnCall::Spawn {
            program: program.to_path_buf(),
            args: args.to_vec(),
        });
        Ok(())
    }

    fn open_default(&self, url: &str) -> Result<()> {
        if self.take_failure() {
            return Err(Error::launch_failed(std::io::Error::other(
                "injected handler failure",
            )));
        }
        self.calls.lock().push(SpawnCall::OpenDefault {
            url: url.to_string(),
        });
        Ok(())
    }
}

// ============================================================================
// RecordingEmbedded
// ============================================================================

/// [`EmbeddedBrowser`] that records navigations instead of rendering.
#[derive(Clone, Default)]
pub(crate) struct RecordingEmbedded {
    /// Recorded `(url, size)` navigations, in order.
    calls: Arc<Mutex<Vec<(String, PopupSize)>>>,
    /// When set, the next navigation fails once.
    fail_next: Arc<AtomicBool>,
}

impl RecordingEmbedded {
    /// Recorded navigations so far.
    pub(crate) fn calls(&self) -> Vec<(String, PopupSize)> {
        self.calls.lock().clone()
    }

    /// Makes the next navigation fail.
    pub(crate) fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

impl EmbeddedBrowser for RecordingEmbedded {
    fn navigate_chromeless(&self, url: &str, size: PopupSize) -> Result<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(Error::embedded("injected navigation failure"));
        }
        self.calls.lock().push((url.to_string(), size));
        Ok(())
    }
}
