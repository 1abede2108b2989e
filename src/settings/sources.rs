use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};

use crate::cli::CliArgs;
use theme_switch::app_dirs;

const ENV_PREFIX: &str = "theme_switch";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_settings {
        for path in default_settings_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.settings {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("settings builder is frozen"),
        other => other.into(),
    })
}

/// Discover the default settings file locations, lowest precedence first.
pub(super) fn default_settings_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("settings.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".theme-switch.toml"));
        files.push(current_dir.join("theme-switch.toml"));
    }

    files
}
