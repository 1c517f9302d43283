// SPDX-License-Identifier: MPL-2.0
//! Error types shared by the storage, configuration and CLI layers.
//!
//! Store actions themselves never fail: hydration problems fall back to
//! defaults and persist failures are logged. These errors surface only from
//! the lower-level APIs (backing stores, config files, text parsing).

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    /// The backing store rejected a read or write (e.g. quota exceeded).
    #[error("Storage Error: {0}")]
    Storage(String),

    /// A persisted snapshot could not be encoded or decoded.
    #[error("Snapshot Error: {0}")]
    Snapshot(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// A textual value fell outside its closed domain (theme, language, command).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<ciborium::de::Error<std::io::Error>> for Error {
    fn from(err: ciborium::de::Error<std::io::Error>) -> Self {
        match err {
            // A truncated file is bad content, not a failing device.
            ciborium::de::Error::Io(err) if err.kind() != std::io::ErrorKind::UnexpectedEof => {
                Error::Io(err.to_string())
            }
            other => Error::Storage(other.to_string()),
        }
    }
}

impl From<ciborium::ser::Error<std::io::Error>> for Error {
    fn from(err: ciborium::ser::Error<std::io::Error>) -> Self {
        Error::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
