// SPDX-License-Identifier: MPL-2.0
//! Bounded counter store.
//!
//! The count never drops below [`LOWER_BOUND`]: `decrement` checks the bound
//! before mutating and silently does nothing at the bound. `reset` always
//! returns to [`INITIAL_VALUE`]. The derived flags are computed from the
//! count on every read.

use super::persisted::{Persisted, Snapshot};
use crate::config::{COUNTER_KEY, INITIAL_VALUE, LOWER_BOUND};
use crate::storage::Storage;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Persisted fields of the counter store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterState {
    pub count: i64,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            count: INITIAL_VALUE,
        }
    }
}

impl Snapshot for CounterState {
    const KEY: &'static str = COUNTER_KEY;

    fn is_valid(&self) -> bool {
        self.count >= LOWER_BOUND
    }
}

#[derive(Debug)]
pub struct CounterStore {
    inner: Persisted<CounterState>,
}

impl CounterStore {
    /// Hydrates the counter from `storage`, or starts at [`INITIAL_VALUE`].
    pub fn new(storage: Rc<dyn Storage>) -> Self {
        Self {
            inner: Persisted::hydrate(storage),
        }
    }

    #[must_use]
    pub fn count(&self) -> i64 {
        self.inner.state().count
    }

    /// Whether `decrement` would change the count.
    #[must_use]
    pub fn can_decrement(&self) -> bool {
        self.count() > LOWER_BOUND
    }

    /// Whether the count differs from its initial value.
    #[must_use]
    pub fn can_reset(&self) -> bool {
        self.count() != INITIAL_VALUE
    }

    pub fn increment(&mut self) {
        self.inner
            .mutate(|state| state.count = state.count.saturating_add(1));
    }

    /// Decrements the count unless it sits at the lower bound.
    pub fn decrement(&mut self) {
        if !self.can_decrement() {
            return;
        }
        self.inner.mutate(|state| state.count -= 1);
    }

    pub fn reset(&mut self) {
        self.inner.mutate(|state| state.count = INITIAL_VALUE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::persisted::decode;
    use crate::storage::MemoryStorage;
    use proptest::prelude::*;

    fn fresh() -> (Rc<MemoryStorage>, CounterStore) {
        let storage = Rc::new(MemoryStorage::new());
        let counter = CounterStore::new(storage.clone());
        (storage, counter)
    }

    fn assert_derived_flags(counter: &CounterStore) {
        assert!(counter.count() >= LOWER_BOUND);
        assert_eq!(counter.can_decrement(), counter.count() > 0);
        assert_eq!(counter.can_reset(), counter.count() != 0);
    }

    #[test]
    fn fresh_counter_starts_at_initial_value() {
        let (_, counter) = fresh();
        assert_eq!(counter.count(), INITIAL_VALUE);
        assert!(!counter.can_decrement());
        assert!(!counter.can_reset());
    }

    #[test]
    fn decrement_at_lower_bound_is_ignored() {
        let (storage, mut counter) = fresh();

        counter.decrement();

        assert_eq!(counter.count(), 0);
        assert!(!counter.can_decrement());
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn increments_then_decrement() {
        let (_, mut counter) = fresh();
        counter.increment();
        counter.increment();
        counter.increment();
        assert_eq!(counter.count(), 3);

        counter.decrement();
        assert_eq!(counter.count(), 2);
        assert!(counter.can_decrement());
        assert!(counter.can_reset());
        assert_derived_flags(&counter);
    }

    #[test]
    fn reset_is_idempotent() {
        let (_, mut counter) = fresh();
        counter.increment();

        counter.reset();
        assert_eq!(counter.count(), 0);
        counter.reset();
        assert_eq!(counter.count(), 0);
        assert!(!counter.can_reset());
        assert_derived_flags(&counter);
    }

    #[test]
    fn every_action_persists_the_new_count() {
        let (storage, mut counter) = fresh();

        counter.increment();
        counter.increment();
        counter.decrement();
        counter.reset();

        assert_eq!(storage.write_count(), 4);
        let stored = storage.get(COUNTER_KEY).expect("counter snapshot");
        assert_eq!(decode::<CounterState>(&stored).expect("decode").count, 0);
    }

    #[test]
    fn hydrates_from_existing_snapshot() {
        let storage = Rc::new(MemoryStorage::new());
        storage.insert(COUNTER_KEY, "count = 5\n");

        let counter = CounterStore::new(storage);
        assert_eq!(counter.count(), 5);
        assert!(counter.can_decrement());
    }

    #[test]
    fn negative_snapshot_falls_back_to_initial_value() {
        let storage = Rc::new(MemoryStorage::new());
        storage.insert(COUNTER_KEY, "count = -4\n");

        let counter = CounterStore::new(storage);
        assert_eq!(counter.count(), INITIAL_VALUE);
    }

    #[test]
    fn garbage_snapshot_falls_back_to_initial_value() {
        let storage = Rc::new(MemoryStorage::new());
        storage.insert(COUNTER_KEY, "{\"count\": 3}");

        let counter = CounterStore::new(storage);
        assert_eq!(counter.count(), INITIAL_VALUE);
    }

    #[test]
    fn round_trip_through_storage() {
        let (storage, mut counter) = fresh();
        for _ in 0..7 {
            counter.increment();
        }

        let restored = CounterStore::new(storage);
        assert_eq!(restored.count(), 7);
    }

    #[test]
    fn persist_failure_keeps_counting() {
        let (storage, mut counter) = fresh();
        storage.set_fail_writes(true);

        counter.increment();
        counter.increment();

        assert_eq!(counter.count(), 2);
        assert!(storage.get(COUNTER_KEY).is_none());
    }

    #[derive(Debug, Clone, Copy)]
    enum Action {
        Increment,
        Decrement,
        Reset,
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            Just(Action::Increment),
            Just(Action::Decrement),
            Just(Action::Reset),
        ]
    }

    proptest! {
        #[test]
        fn count_stays_in_bounds_for_any_action_sequence(
            actions in prop::collection::vec(action(), 0..64)
        ) {
            let (storage, mut counter) = fresh();
            let mut expected = INITIAL_VALUE;

            for action in actions {
                match action {
                    Action::Increment => {
                        counter.increment();
                        expected += 1;
                    }
                    Action::Decrement => {
                        counter.decrement();
                        expected = (expected - 1).max(LOWER_BOUND);
                    }
                    Action::Reset => {
                        counter.reset();
                        expected = INITIAL_VALUE;
                    }
                }
                prop_assert_eq!(counter.count(), expected);
                prop_assert!(counter.count() >= LOWER_BOUND);
                prop_assert_eq!(counter.can_decrement(), counter.count() > 0);
                prop_assert_eq!(counter.can_reset(), counter.count() != 0);
            }

            let restored = CounterStore::new(storage);
            prop_assert_eq!(restored.count(), counter.count());
        }
    }
}
