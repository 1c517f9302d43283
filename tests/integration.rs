// SPDX-License-Identifier: MPL-2.0
use std::rc::Rc;
use tempfile::tempdir;
use train_stores::app::{App, Message};
use train_stores::config::{self, Config, StorageBackend, SETTINGS_KEY};
use train_stores::i18n::fluent::I18n;
use train_stores::storage::{self, FileStorage, MemoryStorage, Storage};
use train_stores::store::{sync_locale, CounterStore, Language, SettingsStore, Theme};

fn file_storage(dir: &std::path::Path) -> Rc<dyn Storage> {
    Rc::new(FileStorage::new(dir.join("storage.cbor")))
}

#[test]
fn decrement_at_zero_stays_at_zero() {
    let mut counter = CounterStore::new(Rc::new(MemoryStorage::new()));
    counter.decrement();
    assert_eq!(counter.count(), 0);
    assert!(!counter.can_decrement());
}

#[test]
fn three_increments_then_one_decrement() {
    let mut counter = CounterStore::new(Rc::new(MemoryStorage::new()));
    counter.increment();
    counter.increment();
    counter.increment();
    assert_eq!(counter.count(), 3);
    counter.decrement();
    assert_eq!(counter.count(), 2);
}

#[test]
fn fresh_settings_are_light_and_english() {
    let settings = SettingsStore::new(Rc::new(MemoryStorage::new()));
    assert_eq!(settings.theme(), Theme::Light);
    assert_eq!(settings.language(), Language::En);
    assert!(!settings.is_dark());
}

#[test]
fn set_language_switches_active_locale() {
    let mut app = App::with_storage(Rc::new(MemoryStorage::new()));
    app.update(Message::SetLanguage(Language::De));
    assert_eq!(app.current_locale(), Language::De);
}

#[test]
fn persisted_language_is_applied_after_restart() {
    let dir = tempdir().expect("create temp dir");

    {
        let mut app = App::with_storage(file_storage(dir.path()));
        app.update(Message::SetLanguage(Language::De));
    }

    let app = App::with_storage(file_storage(dir.path()));
    assert_eq!(app.settings().language(), Language::De);
    assert_eq!(app.current_locale(), Language::De);
    assert_eq!(app.tr("language-toggle"), "Sprache wechseln");
}

#[test]
fn manual_startup_sequence_syncs_locale_once() {
    let storage = Rc::new(MemoryStorage::new());
    storage.insert(SETTINGS_KEY, "theme = \"dark\"\nlanguage = \"de\"\n");

    let settings = SettingsStore::new(storage);
    let mut i18n = I18n::new();
    assert_eq!(i18n.current_locale(), Language::En);

    sync_locale(&settings, &mut i18n);
    assert_eq!(i18n.current_locale(), Language::De);
}

#[test]
fn full_state_survives_restart() {
    let dir = tempdir().expect("create temp dir");

    {
        let mut app = App::with_storage(file_storage(dir.path()));
        for _ in 0..4 {
            app.update(Message::Increment);
        }
        app.update(Message::Decrement);
        app.update(Message::ToggleTheme);
    }

    let app = App::with_storage(file_storage(dir.path()));
    assert_eq!(app.counter().count(), 3);
    assert!(app.counter().can_reset());
    assert_eq!(app.settings().theme(), Theme::Dark);
    assert_eq!(app.settings().language(), Language::En);
    assert_eq!(app.current_locale(), Language::En);
}

#[test]
fn corrupt_storage_file_starts_from_defaults_and_recovers() {
    let dir = tempdir().expect("create temp dir");
    std::fs::write(dir.path().join("storage.cbor"), b"\xff\x00garbage").expect("write file");

    let mut app = App::with_storage(file_storage(dir.path()));
    assert_eq!(app.counter().count(), 0);
    assert_eq!(app.settings().theme(), Theme::Light);

    app.update(Message::Increment);
    let reopened = App::with_storage(file_storage(dir.path()));
    assert_eq!(reopened.counter().count(), 1);
}

#[test]
fn failed_writes_keep_the_session_consistent() {
    let storage = Rc::new(MemoryStorage::new());
    storage.set_fail_writes(true);
    let mut app = App::with_storage(storage.clone());

    app.update(Message::Increment);
    app.update(Message::SetLanguage(Language::De));

    assert_eq!(app.counter().count(), 1);
    assert_eq!(app.current_locale(), Language::De);
    assert_eq!(storage.write_count(), 0);
}

#[test]
fn config_selects_backing_store() {
    let dir = tempdir().expect("create temp dir");
    let config_dir = dir.path().join("config");
    let data_dir = dir.path().join("data");

    let mut cfg = Config::default();
    cfg.storage.file_name = "stores.cbor".to_string();
    config::save_with_override(&cfg, Some(config_dir.clone())).expect("save config");

    let (loaded, warning) = config::load_with_override(Some(config_dir));
    assert!(warning.is_none());
    assert_eq!(loaded.storage.backend, StorageBackend::File);

    let backing = storage::from_config(&loaded, Some(data_dir.clone()));
    let mut counter = CounterStore::new(backing);
    counter.increment();

    assert!(data_dir.join("stores.cbor").exists());
}
