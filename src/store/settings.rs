// SPDX-License-Identifier: MPL-2.0
//! Theme and language settings store.
//!
//! Theme and language are independent axes that share one snapshot. Every
//! language change is also pushed into the attached locale engine so the
//! active translations follow the stored preference.

use super::persisted::{Persisted, Snapshot};
use crate::config::{DEFAULT_LANGUAGE, DEFAULT_THEME, SETTINGS_KEY};
use crate::error::Error;
use crate::i18n::SharedLocale;
use crate::storage::Storage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Message id of this theme's display name.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    /// Message id of the toggle button label, which names the other theme.
    #[must_use]
    pub fn toggle_label_key(self) -> &'static str {
        match self {
            Theme::Light => "theme-toggle-to-dark",
            Theme::Dark => "theme-toggle-to-light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(Error::InvalidInput(format!("unknown theme '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    De,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::De];

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::De,
            Language::De => Language::En,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Message id of this language's display name.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Language::En => "language-english",
            Language::De => "language-german",
        }
    }

    #[must_use]
    pub fn langid(self) -> LanguageIdentifier {
        self.as_str().parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            other => Err(Error::InvalidInput(format!("unknown language '{other}'"))),
        }
    }
}

/// Persisted fields of the settings store.
///
/// Missing fields take their defaults, so a snapshot written before the
/// language preference existed still hydrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsState {
    pub theme: Theme,
    pub language: Language,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME,
            language: DEFAULT_LANGUAGE,
        }
    }
}

impl Snapshot for SettingsState {
    const KEY: &'static str = SETTINGS_KEY;
}

pub struct SettingsStore {
    inner: Persisted<SettingsState>,
    locale: Option<SharedLocale>,
}

impl SettingsStore {
    /// Hydrates the settings from `storage`, or starts from the defaults.
    pub fn new(storage: Rc<dyn Storage>) -> Self {
        Self {
            inner: Persisted::hydrate(storage),
            locale: None,
        }
    }

    /// Wires the locale engine that every language change must update.
    pub fn attach_locale(&mut self, engine: SharedLocale) {
        self.locale = Some(engine);
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.inner.state().theme
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme() == Theme::Dark
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.inner.state().language
    }

    pub fn toggle_theme(&mut self) {
        self.inner.mutate(|state| state.theme = state.theme.toggled());
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.inner.mutate(|state| state.theme = theme);
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.language().toggled());
    }

    pub fn set_language(&mut self, language: Language) {
        self.inner.mutate(|state| state.language = language);
        self.push_locale(language);
    }

    fn push_locale(&self, language: Language) {
        let Some(engine) = &self.locale else {
            return;
        };
        match engine.try_borrow_mut() {
            Ok(mut engine) => engine.set_current_locale(language),
            Err(_) => tracing::warn!(%language, "locale engine busy, active locale not updated"),
        }
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("inner", &self.inner)
            .field("locale_attached", &self.locale.is_some())
            .finish()
    }
}
