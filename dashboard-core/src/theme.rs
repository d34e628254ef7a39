use crate::error::ParseThemeError;
use crate::store::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Default key the theme is persisted under.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Light/dark visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme implied by the platform colour-scheme query. Unknown means light.
    pub fn from_hint(prefers_dark: Option<bool>) -> Theme {
        if prefers_dark == Some(true) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Class applied to the themed root element.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

/// Persisted value first, then the platform hint, then light.
/// A persisted value that does not parse counts as absent.
pub fn resolve_initial_theme(stored: Option<&str>, prefers_dark: Option<bool>) -> Theme {
    if let Some(raw) = stored {
        match raw.parse::<Theme>() {
            Ok(theme) => {
                debug!(theme = %theme, source = "storage", "theme initialised");
                return theme;
            }
            Err(err) => warn!(%err, "ignoring persisted theme"),
        }
    }
    let theme = Theme::from_hint(prefers_dark);
    debug!(theme = %theme, source = "platform", "theme initialised");
    theme
}

/// Owns the current theme and keeps the preference store in step with it.
#[derive(Clone, Debug)]
pub struct ThemeController<S> {
    theme: Theme,
    key: String,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn load(store: S, key: impl Into<String>, prefers_dark: Option<bool>) -> Self {
        let key = key.into();
        let stored = store.load(&key).unwrap_or_else(|err| {
            warn!(%err, "theme preference unreadable, falling back");
            None
        });
        let theme = resolve_initial_theme(stored.as_deref(), prefers_dark);
        Self { theme, key, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flips the theme and persists it. A failed write keeps the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!(theme = %self.theme, "theme toggled");
        if let Err(err) = self.store.save(&self.key, self.theme.as_str()) {
            warn!(%err, "theme preference not persisted");
        }
        self.theme
    }
}
