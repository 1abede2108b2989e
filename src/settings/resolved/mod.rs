use std::path::PathBuf;

use theme_switch::LinkOptions;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Settings ready for use, derived from settings files, the environment,
/// CLI flags and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
	pub themes_file: PathBuf,
	pub link: LinkOptions,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective settings.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
