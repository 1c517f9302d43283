// SPDX-License-Identifier: MPL-2.0
//! Persisted state stores.
//!
//! - [`counter`]: bounded counter persisted under `"counter"`
//! - [`settings`]: theme and language persisted under `"settings"`
//! - [`sync`]: one-shot startup push of the stored language into the locale engine
//!
//! Stores are hydrated once at startup, mutated only through their own
//! actions, and write their snapshot back after every action.

pub mod counter;
pub mod persisted;
pub mod settings;
pub mod sync;

pub use counter::{CounterState, CounterStore};
pub use settings::{Language, SettingsState, SettingsStore, Theme};
pub use sync::sync_locale;
