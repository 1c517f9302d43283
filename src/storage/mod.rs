// SPDX-License-Identifier: MPL-2.0
//! Durable key/value backing stores.
//!
//! Every store persists one opaque snapshot string under a fixed key. The
//! backing store is shared by all stores and addressed only by key, so it is
//! handed around as an `Rc<dyn Storage>` and takes `&self` everywhere.
//!
//! - [`MemoryStorage`] keeps snapshots in a map; it is the test double and
//!   can simulate a full disk.
//! - [`FileStorage`] keeps every key in one CBOR file in the data directory.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::config::{Config, StorageBackend};
use crate::error::Result;
use std::path::PathBuf;
use std::rc::Rc;

/// Key/value capability the stores hydrate from and persist into.
pub trait Storage {
    /// Returns the snapshot stored under `key`, or `None` if there is none.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the snapshot stored under `key`.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// Builds the backing store selected by the configuration.
///
/// Falls back to an in-memory store when the file backend is selected but
/// no data directory can be determined.
pub fn from_config(config: &Config, data_dir: Option<PathBuf>) -> Rc<dyn Storage> {
    match config.storage.backend {
        StorageBackend::Memory => Rc::new(MemoryStorage::new()),
        StorageBackend::File => match data_dir {
            Some(dir) => Rc::new(FileStorage::new(dir.join(&config.storage.file_name))),
            None => {
                tracing::warn!("no data directory available, state will not outlive this session");
                Rc::new(MemoryStorage::new())
            }
        },
    }
}
