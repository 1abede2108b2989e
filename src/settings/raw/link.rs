use serde::Deserialize;

use theme_switch::{LinkKind, LinkOptions};

use super::super::resolved::{ConfigError, SettingSource};
use crate::cli::CliArgs;

/// Link behaviour as read from settings, before the kind name is parsed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LinkSection {
    pub(super) kind: Option<String>,
}

impl LinkSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(kind) = cli.link_kind {
            self.kind = Some(kind.as_str().to_string());
        }
    }

    pub(super) fn resolve(self, origin: SettingSource) -> Result<LinkOptions, ConfigError> {
        let kind = match self.kind {
            Some(value) => value.parse::<LinkKind>().map_err(|err| {
                ConfigError::invalid("link.kind", value.clone(), origin, err.to_string())
            })?,
            None => LinkKind::default(),
        };
        Ok(LinkOptions::new(kind))
    }
}
