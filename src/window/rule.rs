//! Title matching heuristics for popup discovery.
//!
//! The popup window belongs to a foreign process that may already have
//! unrelated windows open (the user's everyday browsing). A single token
//! is not enough to tell the login popup apart, so the rule is
//! conjunctive: the title must carry a *state* token ("Log In",
//! "Authorize") **and** the embedding application's *brand* token.

// ============================================================================
// Constants
// ============================================================================

/// Default state tokens shown by authentication pages.
const DEFAULT_STATE_TOKENS: [&str; 2] = ["Log In", "Authorize"];

// ============================================================================
// TitleMatchRule
// ============================================================================

/// Conjunctive window-title predicate.
///
/// Matches when the title contains at least one state token AND the brand
/// token. Matching is case-sensitive: page titles render verbatim.
///
/// # Example
///
/// ```
/// use auth_popup::TitleMatchRule;
///
/// let rule = TitleMatchRule::new("Flux");
/// assert!(rule.matches("Log In to Flux - Mozilla Firefox"));
/// assert!(!rule.matches("Flux Dashboard"));        // no state token
/// assert!(!rule.matches("Log In - SomethingElse")); // no brand token
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleMatchRule {
    /// Tokens indicating an authentication page state.
    state_tokens: Vec<String>,
    /// Token naming the embedding application.
    brand_token: String,
}

impl TitleMatchRule {
    /// Creates a rule for the given brand with default state tokens.
    #[must_use]
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            state_tokens: DEFAULT_STATE_TOKENS.iter().map(|t| (*t).to_string()).collect(),
            brand_token: brand.into(),
        }
    }

    /// Replaces the state token set.
    #[inline]
    #[must_use]
    pub fn with_state_tokens(
        mut self,
        tokens: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.state_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the brand token.
    #[inline]
    #[must_use]
    pub fn brand_token(&self) -> &str {
        &self.brand_token
    }

    /// Returns the state tokens.
    #[inline]
    #[must_use]
    pub fn state_tokens(&self) -> &[String] {
        &self.state_tokens
    }

    /// Applies the predicate to a window title.
    #[must_use]
    pub fn matches(&self, title: &str) -> bool {
        if !title.contains(&self.brand_token) {
            return false;
        }
        self.state_tokens.iter().any(|token| title.contains(token))
    }
}

// ============================================================================
// Tests
// ============================================================================
