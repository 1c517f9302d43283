// SPDX-License-Identifier: MPL-2.0
use super::Storage;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Durable backing store: one CBOR map of `key -> snapshot` on disk.
///
/// The file is read on every `load` and rewritten on every `save`, so two
/// stores sharing the same file never clobber each other's keys.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

type Entries = BTreeMap<String, String>;

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }
        let reader = BufReader::new(fs::File::open(&self.path)?);
        Ok(ciborium::from_reader(reader)?)
    }

    fn write_entries(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(fs::File::create(&self.path)?);
        ciborium::into_writer(entries, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        // Only undecodable content is replaced; I/O failures must not wipe other keys.
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(err @ Error::Storage(_)) => {
                tracing::warn!(path = %self.path.display(), error = %err, "discarding undecodable storage file");
                Entries::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}
