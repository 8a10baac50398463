//! Async theme suggestions
//!
//! A [`ThemeSuggester`] turns a free-text prompt into overrides, possibly
//! through slow I/O. [`apply_suggestion`] awaits the suggestion without
//! holding the store lock, then records the result as one history entry.
//! When several suggestions race, the last one applied wins.

use async_trait::async_trait;
use theme_core::color::Hsl;
use theme_core::{generate_from_prompt, ColorKey, ThemeOverrides};
use thiserror::Error;
use tracing::{debug, warn};

use crate::store::SharedThemeStore;

/// Suggestion error types
#[derive(Debug, Error)]
pub enum SuggestError {
    /// Prompt was empty after trimming
    #[error("Prompt is empty")]
    EmptyPrompt,

    /// Backend could not produce a theme
    #[error("Suggestion failed: {0}")]
    Backend(String),

    /// Backend produced overrides with an invalid color
    #[error("Invalid color in suggestion: {0}")]
    InvalidColor(String),
}

/// Result type for suggestion operations
pub type Result<T> = std::result::Result<T, SuggestError>;

/// Source of prompt-derived overrides
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThemeSuggester: Send + Sync {
    /// Suggest overrides for a prompt
    async fn suggest(&self, prompt: &str) -> Result<ThemeOverrides>;
}

/// Offline suggester backed by the deterministic prompt generator
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSuggester;

impl KeywordSuggester {
    /// Create a keyword suggester
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ThemeSuggester for KeywordSuggester {
    async fn suggest(&self, prompt: &str) -> Result<ThemeOverrides> {
        if prompt.trim().is_empty() {
            return Err(SuggestError::EmptyPrompt);
        }
        Ok(generate_from_prompt(prompt))
    }
}

/// Rewrite every color override in canonical `"H S% L%"` form
fn canonicalize(mut overrides: ThemeOverrides) -> Result<ThemeOverrides> {
    if let Some(colors) = overrides.colors.as_mut() {
        for key in ColorKey::ALL {
            let Some(value) = colors.get(key) else {
                continue;
            };
            let parsed: Hsl = value
                .parse()
                .map_err(|_| SuggestError::InvalidColor(value.to_string()))?;
            colors.set(key, Some(parsed.to_string()));
        }
    }
    Ok(overrides)
}

/// Ask a suggester for overrides and record them on the store
///
/// The lock is only taken after the suggestion resolves. Colors are stored
/// in canonical form. On error nothing is written and the error is returned.
pub async fn apply_suggestion(
    store: &SharedThemeStore,
    suggester: &dyn ThemeSuggester,
    prompt: &str,
) -> Result<ThemeOverrides> {
    let overrides = match suggester.suggest(prompt).await {
        Ok(overrides) => overrides,
        Err(e) => {
            warn!(error = %e, "Theme suggestion rejected");
            return Err(e);
        }
    };
    let overrides = canonicalize(overrides)?;

    store.lock().set_theme_overrides(overrides.clone());
    debug!(prompt, "Applied theme suggestion");
    Ok(overrides)
}
