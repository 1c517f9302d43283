// SPDX-License-Identifier: MPL-2.0
//! Startup locale synchronization.

use super::settings::SettingsStore;
use crate::i18n::LocaleEngine;

/// Applies the stored language to the locale engine.
///
/// Runs once, after hydration and before anything is shown. It only reads
/// the settings; later language changes reach the engine through the
/// settings store's own actions.
pub fn sync_locale(settings: &SettingsStore, engine: &mut dyn LocaleEngine) {
    let language = settings.language();
    if engine.current_locale() != language {
        tracing::debug!(%language, "switching locale to stored language");
    }
    engine.set_current_locale(language);
}
