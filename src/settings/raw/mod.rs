use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod link;
mod themes;

use link::LinkSection;
use themes::ThemesSection;

/// Mirror of the settings file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    themes: ThemesSection,
    link: LinkSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw settings values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.themes.apply_cli_overrides(cli);
        self.link.apply_cli_overrides(cli);
    }

    /// Convert the raw settings into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            themes_file: detect_source(
                cli.themes_file.is_some(),
                self.themes.file.is_some(),
                "THEME_SWITCH__THEMES__FILE",
                "--themes-file",
                "themes.file",
            ),
            link_kind: detect_source(
                cli.link_kind.is_some(),
                self.link.kind.is_some(),
                "THEME_SWITCH__LINK__KIND",
                "--link-kind",
                "link.kind",
            ),
        };

        let link = self
            .link
            .resolve(sources.source_for_link_kind())
            .map_err(Error::new)?;

        let config = ResolvedConfig {
            themes_file: self.themes.resolve(),
            link,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
