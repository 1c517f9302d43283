// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! The locale engine owns the active locale and resolves message ids against
//! Fluent message tables. The stores never own it: the settings store holds
//! a shared handle so language changes can update the active locale.
//!
//! # Features
//!
//! - Embedded `.ftl` message tables for every supported [`Language`]
//! - Runtime language switching
//! - Fallback to English for messages missing in the active locale

pub mod fluent;

use crate::store::settings::Language;
use std::cell::RefCell;
use std::rc::Rc;

/// Message-resolution system keyed by the current locale.
pub trait LocaleEngine {
    fn current_locale(&self) -> Language;

    fn set_current_locale(&mut self, language: Language);

    /// Resolves `key` in the current locale.
    fn tr(&self, key: &str) -> String;
}

/// Single-threaded handle to the locale engine shared with the settings store.
pub type SharedLocale = Rc<RefCell<dyn LocaleEngine>>;
