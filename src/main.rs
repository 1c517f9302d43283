// SPDX-License-Identifier: MPL-2.0
use std::process::ExitCode;
use train_stores::app::{paths, App, Flags, Message};
use train_stores::config;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: train-stores [--data-dir DIR] [--config-dir DIR] [COMMAND [VALUE]]

Commands:
  show                     Print the current state (default)
  increment | decrement | reset
  toggle-theme | set-theme <light|dark>
  toggle-language | set-language <en|de>";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let flags = match Flags::from_args(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    let (config, config_warning) = config::load();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    if let Some(warning) = config_warning {
        tracing::warn!(%warning, "using default configuration");
    }

    let message = match flags.command.as_deref() {
        None | Some("show") => None,
        Some(command) => match Message::parse(command, flags.value.as_deref()) {
            Ok(message) => Some(message),
            Err(err) => {
                eprintln!("{err}\n\n{USAGE}");
                return ExitCode::FAILURE;
            }
        },
    };

    let mut app = App::start(&config);
    if let Some(message) = message {
        app.update(message);
    }
    println!("{}", app.view());
    ExitCode::SUCCESS
}
