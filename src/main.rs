// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Get | List | Prefix | Map | SelfTest | Version
//! ```

use std::io::Write;
use std::process::ExitCode;

use envkit::cli::global::GlobalOptions;
use envkit::cli::{self, Command};
use envkit::cmd::get::run_get_command;
use envkit::cmd::list::run_list_command;
use envkit::cmd::prefix::{run_map_command, run_prefix_command};
use envkit::cmd::selftest::run_self_test_command;
use envkit::config::loader::ConfigLoader;
use envkit::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use envkit::environment::Environment;
use envkit::logging::init_logging;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&config.log) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let env = Environment::from_process(config.environment);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    tracing::debug!(options = ?config.environment, "environment ready");

    let result = match &cli.command {
        Some(Command::Version) => writeln!(out, "{}", env!("CARGO_PKG_VERSION")).map_err(Into::into),
        Some(Command::Get(args)) => run_get_command(args, &env, &mut out),
        Some(Command::List) => run_list_command(&env, &mut out),
        Some(Command::Prefix(args)) => run_prefix_command(args, &env, &mut out),
        Some(Command::Map(args)) => run_map_command(args, &env, &mut out),
        Some(Command::SelfTest(args)) => run_self_test_command(args, &mut out),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> envkit::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    loader.build()
}
