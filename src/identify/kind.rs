//! Browser family classification.
//!
//! Classification is deliberately dumb: the lowercase basename of the
//! resolved handler executable is checked for brand substrings in a fixed
//! priority order. The first match wins; anything unrecognized is
//! [`BrowserKind::Unknown`].

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::path::PathBuf;

// ============================================================================
// BrowserKind
// ============================================================================

/// Known browser families, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserKind {
    /// Chrome family. Sized at launch via an app-mode bootstrap page.
    Chrome,
    /// Firefox family. Sized after launch by window coercion.
    Firefox,
    /// Internet Explorer family. Sized via the embeddable browser control.
    InternetExplorer,
    /// Unrecognized or undeterminable default browser.
    Unknown,
}

/// Brand substrings checked against the executable basename, in priority
/// order. First containment match wins.
const CLASSIFICATION_ORDER: [(BrowserKind, &str); 3] = [
    (BrowserKind::Chrome, "chrome"),
    (BrowserKind::Firefox, "firefox"),
    (BrowserKind::InternetExplorer, "iexplore"),
];

impl BrowserKind {
    /// Classifies a normalized executable path by its basename.
    ///
    /// The path is expected to be lowercase already (identification
    /// normalizes before classifying), but lowercasing is applied again so
    /// the function is safe to call with arbitrary input.
    #[must_use]
    pub fn classify(path: &str) -> Self {
        let basename = path
            .rsplit(['\\', '/'])
            .next()
            .unwrap_or(path)
            .to_lowercase();

        for (kind, token) in CLASSIFICATION_ORDER {
            if basename.contains(token) {
                return kind;
            }
        }
        Self::Unknown
    }

    /// Returns the process name used to locate this browser's windows.
    ///
    /// Matches the executable name without extension, the way OS process
    /// enumeration reports it. `None` for [`Self::Unknown`].
    #[inline]
    #[must_use]
    pub const fn process_name(self) -> Option<&'static str> {
        match self {
            Self::Chrome => Some("chrome"),
            Self::Firefox => Some("firefox"),
            Self::InternetExplorer => Some("iexplore"),
            Self::Unknown => None,
        }
    }

    /// Returns `true` if this family needs post-launch window coercion.
    ///
    /// Firefox has no command-line sizing option, so its popup must be
    /// located and resized after the fact.
    #[inline]
    #[must_use]
    pub const fn needs_coercion(self) -> bool {
        matches!(self, Self::Firefox)
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
            Self::InternetExplorer => "iexplore",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

// ============================================================================
// BrowserDescriptor
// ============================================================================

/// Resolved default browser: classified kind plus executable path.
///
/// Produced once per launcher by
/// [`BrowserIdentifier`](crate::identify::BrowserIdentifier) and cached for
/// the launcher's lifetime; consumed read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserDescriptor {
    /// Classified browser family.
    pub kind: BrowserKind,
    /// Normalized executable path, `None` when undeterminable.
    pub path: Option<PathBuf>,
}

impl BrowserDescriptor {
    /// Creates a descriptor for an undeterminable default browser.
    #[inline]
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            kind: BrowserKind::Unknown,
            path: None,
        }
    }
}

impl Default for BrowserDescriptor {
    fn default() -> Self {
        Self::unknown()
    }
}

// ============================================================================
// Tests
// ============================================================================
