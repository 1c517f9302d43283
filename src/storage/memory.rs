// SPDX-License-Identifier: MPL-2.0
use super::Storage;
use crate::error::{Error, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory backing store.
///
/// Used for tests and for the `memory` backend. Writes can be made to fail
/// with [`MemoryStorage::set_fail_writes`] to exercise best-effort persistence.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw snapshot, bypassing the write counter and failure switch.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Raw snapshot currently stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// When `true`, every `save` fails as if the quota were exceeded.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful `save` calls so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.get() {
            return Err(Error::Storage(format!("quota exceeded writing '{key}'")));
        }
        self.insert(key, value);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
