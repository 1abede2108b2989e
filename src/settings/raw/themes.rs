use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

pub(super) const DEFAULT_THEMES_FILE: &str = "./config.json";

/// Location of the themes document as read from settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ThemesSection {
    pub(super) file: Option<PathBuf>,
}

impl ThemesSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(file) = cli.themes_file.clone() {
            self.file = Some(file);
        }
    }

    /// Relative paths stay relative to the working directory.
    pub(super) fn resolve(self) -> PathBuf {
        self.file.unwrap_or_else(|| PathBuf::from(DEFAULT_THEMES_FILE))
    }
}
