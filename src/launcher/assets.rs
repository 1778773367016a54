//! App-mode bootstrap page for browsers sized at launch.
//!
//! Chrome has an isolated `--app=<url>` window but no direct
//! size-on-launch flag. The workaround: hand it a tiny `data:` page whose
//! inline script sizes and positions the window itself, then redirects to
//! the real URL.
//!
//! # Launch Flow
//!
//! 1. Chrome opens the data URI in a chromeless app-mode window
//! 2. The inline script calls `window.moveTo` / `window.resizeTo`
//! 3. The script assigns `window.location`, loading the real page
//!    in the now correctly sized window

// ============================================================================
// Imports
// ============================================================================

use url::Url;

use crate::window::geometry::PopupSize;

// ============================================================================
// Constants
// ============================================================================

/// Initial popup position, pixels from the screen origin.
const INITIAL_LEFT: i32 = 200;

/// Initial popup position, pixels from the screen origin.
const INITIAL_TOP: i32 = 100;

/// HTML template for the bootstrap page.
///
/// Sizes the window before redirecting so the target page never renders
/// at the wrong dimensions.
const BOOTSTRAP_HTML_TEMPLATE: &str = "<html><body><script>\
window.moveTo($LEFT,$TOP);\
window.resizeTo($WIDTH,$HEIGHT);\
window.location='$TARGET_URL';\
</script></body></html>";

// ============================================================================
// Public Functions
// ============================================================================

/// Builds the complete `--app=...` argument for an app-mode launch.
#[must_use]
pub(crate) fn app_mode_arg(url: &Url, size: PopupSize) -> String {
    format!("--app={}", build_bootstrap_data_uri(url, size))
}

/// Generates the self-sizing bootstrap page as a `data:` URI.
#[must_use]
pub(crate) fn build_bootstrap_data_uri(url: &Url, size: PopupSize) -> String {
    let html = build_bootstrap_html(url, size);
    format!("data:text/html,{}", urlencoding::encode(&html))
}

// ============================================================================
// Internal Functions
// ============================================================================

/// Builds the bootstrap page content.
fn build_bootstrap_html(url: &Url, size: PopupSize) -> String {
    // A literal quote would terminate the inline script string early.
    let target = url.as_str().replace('\'', "%27");

    BOOTSTRAP_HTML_TEMPLATE
        .replace("$LEFT", &INITIAL_LEFT.to_string())
        .replace("$TOP", &INITIAL_TOP.to_string())
        .replace("$WIDTH", &size.width.to_string())
        .replace("$HEIGHT", &size.height.to_string())
        .replace("$TARGET_URL", &target)
}

// ============================================================================
// Tests
// ============================================================================
