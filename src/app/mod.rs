// SPDX-License-Identifier: MPL-2.0
//! Application bootstrap: wires the backing store, both stores and the
//! locale engine together.
//!
//! Startup order is fixed: hydrate the counter and settings stores, create
//! the locale engine, push the stored language into it once, then hand the
//! engine to the settings store so later language changes keep it in sync.

pub mod message;
pub mod paths;

pub use message::{Flags, Message};

use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::storage::{self, Storage};
use crate::store::settings::Language;
use crate::store::{sync_locale, CounterStore, SettingsStore};
use std::cell::RefCell;
use std::rc::Rc;

pub struct App {
    counter: CounterStore,
    settings: SettingsStore,
    i18n: Rc<RefCell<I18n>>,
}

impl App {
    /// Starts the application with the backing store selected by `config`.
    pub fn start(config: &Config) -> Self {
        Self::with_storage(storage::from_config(config, paths::get_app_data_dir()))
    }

    /// Starts the application on an explicit backing store.
    pub fn with_storage(storage: Rc<dyn Storage>) -> Self {
        let counter = CounterStore::new(storage.clone());
        let mut settings = SettingsStore::new(storage);

        let i18n = Rc::new(RefCell::new(I18n::new()));
        sync_locale(&settings, &mut *i18n.borrow_mut());
        settings.attach_locale(i18n.clone());

        tracing::debug!(
            count = counter.count(),
            theme = %settings.theme(),
            language = %settings.language(),
            "stores ready"
        );

        Self {
            counter,
            settings,
            i18n,
        }
    }

    #[must_use]
    pub fn counter(&self) -> &CounterStore {
        &self.counter
    }

    #[must_use]
    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// Active locale of the locale engine.
    #[must_use]
    pub fn current_locale(&self) -> Language {
        self.i18n.borrow().current_locale()
    }

    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.i18n.borrow().tr(key)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Increment => self.counter.increment(),
            Message::Decrement => self.counter.decrement(),
            Message::Reset => self.counter.reset(),
            Message::ToggleTheme => self.settings.toggle_theme(),
            Message::SetTheme(theme) => self.settings.set_theme(theme),
            Message::ToggleLanguage => self.settings.toggle_language(),
            Message::SetLanguage(language) => self.settings.set_language(language),
        }
    }

    /// Renders the current state as localized text lines.
    #[must_use]
    pub fn view(&self) -> String {
        let theme = self.settings.theme();
        let language = self.settings.language();
        let locale = self.i18n.borrow().current_langid();
        [
            format!("{} [{}]", self.tr("app-name"), locale),
            format!("{} {}", self.tr("counter-current"), self.counter.count()),
            format!(
                "  can_decrement={} can_reset={}",
                self.counter.can_decrement(),
                self.counter.can_reset()
            ),
            format!("{} {}", self.tr("theme-current"), self.tr(theme.label_key())),
            format!(
                "{} {}",
                self.tr("settings-current-language"),
                self.tr(language.label_key())
            ),
            format!("  [{}]", self.tr(theme.toggle_label_key())),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{COUNTER_KEY, SETTINGS_KEY};
    use crate::storage::MemoryStorage;
    use crate::store::settings::Theme;

    fn app_on(storage: &Rc<MemoryStorage>) -> App {
        App::with_storage(storage.clone())
    }

    #[test]
    fn fresh_start_uses_defaults() {
        let storage = Rc::new(MemoryStorage::new());
        let app = app_on(&storage);

        assert_eq!(app.counter().count(), 0);
        assert_eq!(app.settings().theme(), Theme::Light);
        assert_eq!(app.current_locale(), Language::En);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn startup_applies_persisted_language() {
        let storage = Rc::new(MemoryStorage::new());
        storage.insert(SETTINGS_KEY, "theme = \"dark\"\nlanguage = \"de\"\n");

        let app = app_on(&storage);
        assert_eq!(app.current_locale(), Language::De);
        assert_eq!(app.tr("theme-dark"), "Dunkel");
    }

    #[test]
    fn update_dispatches_to_stores() {
        let storage = Rc::new(MemoryStorage::new());
        let mut app = app_on(&storage);

        app.update(Message::Increment);
        app.update(Message::Increment);
        app.update(Message::Decrement);
        app.update(Message::SetTheme(Theme::Dark));
        app.update(Message::ToggleLanguage);

        assert_eq!(app.counter().count(), 1);
        assert!(app.settings().is_dark());
        assert_eq!(app.current_locale(), Language::De);
        assert!(storage.get(COUNTER_KEY).is_some());
        assert!(storage.get(SETTINGS_KEY).is_some());
    }

    #[test]
    fn view_follows_active_locale() {
        let storage = Rc::new(MemoryStorage::new());
        let mut app = app_on(&storage);
        assert!(app.view().contains("Current count: 0"));

        app.update(Message::SetLanguage(Language::De));
        let view = app.view();
        assert!(view.contains("Aktueller Zählerstand: 0"));
        assert!(view.contains("Aktuelle Sprache: Deutsch"));
        assert!(view.contains("Zu dunklem Modus wechseln"));
        assert!(view.starts_with("Train Stores [de]"));
    }
}
