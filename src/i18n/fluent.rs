// SPDX-License-Identifier: MPL-2.0
use super::LocaleEngine;
use crate::config::DEFAULT_LANGUAGE;
use crate::store::settings::Language;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Fluent-backed locale engine.
///
/// Starts in [`DEFAULT_LANGUAGE`], which is also the fallback locale for
/// messages a translation does not define.
pub struct I18n {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    current_locale: Language,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

impl I18n {
    pub fn new() -> Self {
        let mut bundles = HashMap::new();

        for language in Language::ALL {
            let filename = format!("{}.ftl", language.as_str());
            let Some(content) = Asset::get(&filename) else {
                tracing::warn!(%language, "no message table embedded");
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    tracing::warn!(%language, count = errors.len(), "message table has syntax errors");
                    resource
                }
            };
            let mut bundle = FluentBundle::new(vec![language.langid()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(%language, count = errors.len(), "duplicate message ids ignored");
            }
            bundles.insert(language, bundle);
        }

        Self {
            bundles,
            current_locale: DEFAULT_LANGUAGE,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> Language {
        self.current_locale
    }

    /// Identifier of the active locale, e.g. `de`.
    #[must_use]
    pub fn current_langid(&self) -> LanguageIdentifier {
        self.current_locale.langid()
    }

    pub fn set_locale(&mut self, language: Language) {
        self.current_locale = language;
    }

    /// Resolves `key` in the current locale, falling back to English.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.tr_in(self.current_locale, key)
    }

    /// Resolves `key` in `language`, falling back to English.
    #[must_use]
    pub fn tr_in(&self, language: Language, key: &str) -> String {
        self.lookup(language, key)
            .or_else(|| self.lookup(DEFAULT_LANGUAGE, key))
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    fn lookup(&self, language: Language, key: &str) -> Option<String> {
        let bundle = self.bundles.get(&language)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        errors.is_empty().then(|| value.to_string())
    }
}

impl LocaleEngine for I18n {
    fn current_locale(&self) -> Language {
        self.current_locale
    }

    fn set_current_locale(&mut self, language: Language) {
        self.set_locale(language);
    }

    fn tr(&self, key: &str) -> String {
        I18n::tr(self, key)
    }
}
