// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::{Error, Result};
use crate::store::settings::{Language, Theme};

/// Store actions consumed by `App::update`, one per public store action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Increment,
    Decrement,
    Reset,
    ToggleTheme,
    SetTheme(Theme),
    ToggleLanguage,
    SetLanguage(Language),
}

impl Message {
    /// Parses a CLI command and its optional argument.
    ///
    /// Out-of-domain theme or language values are rejected here, before any
    /// store sees them.
    pub fn parse(command: &str, value: Option<&str>) -> Result<Self> {
        let message = match command {
            "increment" => Message::Increment,
            "decrement" => Message::Decrement,
            "reset" => Message::Reset,
            "toggle-theme" => Message::ToggleTheme,
            "toggle-language" => Message::ToggleLanguage,
            "set-theme" => Message::SetTheme(required(command, value)?.parse()?),
            "set-language" => Message::SetLanguage(required(command, value)?.parse()?),
            other => return Err(Error::InvalidInput(format!("unknown command '{other}'"))),
        };
        Ok(message)
    }
}

fn required<'a>(command: &str, value: Option<&'a str>) -> Result<&'a str> {
    value.ok_or_else(|| Error::InvalidInput(format!("'{command}' needs a value")))
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// Optional data directory override (for the storage file).
    /// Takes precedence over `TRAIN_STORES_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TRAIN_STORES_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Command to run; `None` only prints the current state.
    pub command: Option<String>,
    /// Argument of `set-theme` / `set-language`.
    pub value: Option<String>,
}

impl Flags {
    /// Splits the command line into directory overrides, command and value.
    ///
    /// Unknown flags and extra positional arguments are rejected.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self> {
        let data_dir = args
            .opt_value_from_str("--data-dir")
            .map_err(|err| Error::InvalidInput(err.to_string()))?;
        let config_dir = args
            .opt_value_from_str("--config-dir")
            .map_err(|err| Error::InvalidInput(err.to_string()))?;

        let mut free = Vec::new();
        for arg in args.finish() {
            let arg = arg
                .into_string()
                .map_err(|arg| Error::InvalidInput(format!("non UTF-8 argument {arg:?}")))?;
            if arg.starts_with('-') {
                return Err(Error::InvalidInput(format!("unknown flag '{arg}'")));
            }
            free.push(arg);
        }
        if free.len() > 2 {
            return Err(Error::InvalidInput(format!(
                "unexpected arguments: {}",
                free[2..].join(" ")
            )));
        }

        let mut free = free.into_iter();
        Ok(Self {
            data_dir,
            config_dir,
            command: free.next(),
            value: free.next(),
        })
    }
}
