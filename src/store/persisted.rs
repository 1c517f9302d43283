// SPDX-License-Identifier: MPL-2.0
//! Hydration and write-through persistence shared by every store.
//!
//! A store's persisted fields form a [`Snapshot`], encoded as TOML text and
//! stored under the snapshot's fixed key. [`Persisted`] owns the in-memory
//! snapshot and the backing-store handle:
//!
//! 1. [`Persisted::hydrate`] loads the snapshot, falling back to defaults when
//!    it is missing, unreadable, unparsable or violates the store's invariants.
//! 2. [`Persisted::mutate`] applies a mutation and immediately writes the full
//!    snapshot back. Write failures are logged, never returned.

use crate::error::{Error, Result};
use crate::storage::Storage;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;

/// Persisted field set of a store.
pub trait Snapshot: Serialize + DeserializeOwned + Default {
    /// Backing-store key the snapshot lives under.
    const KEY: &'static str;

    /// Whether the decoded value satisfies the store's invariants.
    fn is_valid(&self) -> bool {
        true
    }
}

/// Serializes a snapshot to its stored text form.
pub fn encode<S: Snapshot>(state: &S) -> Result<String> {
    toml::to_string(state).map_err(|err| Error::Snapshot(err.to_string()))
}

/// Parses stored text back into a snapshot, rejecting invariant violations.
pub fn decode<S: Snapshot>(text: &str) -> Result<S> {
    let state: S = toml::from_str(text).map_err(|err| Error::Snapshot(err.to_string()))?;
    if !state.is_valid() {
        return Err(Error::Snapshot(format!(
            "snapshot '{}' violates store invariants",
            S::KEY
        )));
    }
    Ok(state)
}

/// In-memory store state bound to its slot in the backing store.
pub struct Persisted<S: Snapshot> {
    state: S,
    storage: Rc<dyn Storage>,
}

impl<S: Snapshot> Persisted<S> {
    /// Restores the state from the backing store, or starts from defaults.
    pub fn hydrate(storage: Rc<dyn Storage>) -> Self {
        let state = match storage.load(S::KEY) {
            Ok(Some(text)) => match decode::<S>(&text) {
                Ok(state) => {
                    tracing::debug!(key = S::KEY, "hydrated store from snapshot");
                    state
                }
                Err(err) => {
                    tracing::warn!(key = S::KEY, error = %err, "ignoring corrupt snapshot, using defaults");
                    S::default()
                }
            },
            Ok(None) => {
                tracing::debug!(key = S::KEY, "no snapshot, using defaults");
                S::default()
            }
            Err(err) => {
                tracing::warn!(key = S::KEY, error = %err, "failed to read snapshot, using defaults");
                S::default()
            }
        };
        Self { state, storage }
    }

    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Applies `mutation` then persists the resulting snapshot.
    pub fn mutate(&mut self, mutation: impl FnOnce(&mut S)) {
        mutation(&mut self.state);
        self.persist();
    }

    /// Writes the current snapshot under its key. Best-effort: the in-memory
    /// state stays authoritative when the write fails.
    pub fn persist(&self) {
        let result = encode(&self.state).and_then(|text| self.storage.save(S::KEY, &text));
        match result {
            Ok(()) => tracing::debug!(key = S::KEY, "persisted snapshot"),
            Err(err) => {
                tracing::warn!(key = S::KEY, error = %err, "failed to persist snapshot");
            }
        }
    }
}

impl<S: Snapshot + std::fmt::Debug> std::fmt::Debug for Persisted<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persisted")
            .field("key", &S::KEY)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
