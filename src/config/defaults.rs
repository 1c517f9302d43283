// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all store and configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Counter**: Lower bound and initial value of the counter store
//! - **Settings**: Default theme and language
//! - **Storage**: Backing-store keys and file names

use crate::store::settings::{Language, Theme};

// ==========================================================================
// Counter Defaults
// ==========================================================================

/// Smallest value the counter may ever hold.
pub const LOWER_BOUND: i64 = 0;

/// Value of a fresh counter and the target of `reset`.
pub const INITIAL_VALUE: i64 = 0;

// ==========================================================================
// Settings Defaults
// ==========================================================================

/// Theme used when no settings snapshot exists.
pub const DEFAULT_THEME: Theme = Theme::Light;

/// Language used when no settings snapshot exists. Also the locale engine's
/// compiled-in default and fallback locale.
pub const DEFAULT_LANGUAGE: Language = Language::En;

// ==========================================================================
// Storage Defaults
// ==========================================================================

/// Backing-store key of the counter snapshot.
pub const COUNTER_KEY: &str = "counter";

/// Backing-store key of the settings snapshot.
pub const SETTINGS_KEY: &str = "settings";

/// File holding every persisted snapshot when using the file backend.
pub const DEFAULT_STORAGE_FILE: &str = "storage.cbor";

/// Log filter applied when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = {
    // The initial value cannot be lower than the lower bound.
    assert!(INITIAL_VALUE >= LOWER_BOUND);

    assert!(!COUNTER_KEY.is_empty());
    assert!(!SETTINGS_KEY.is_empty());
    assert!(!str_eq(COUNTER_KEY, SETTINGS_KEY));
    assert!(!DEFAULT_STORAGE_FILE.is_empty());
};
