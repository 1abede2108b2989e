use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.themes_file.as_os_str().is_empty() {
		return Err(ConfigError::invalid(
			"themes.file",
			"",
			sources.source_for_themes_file(),
			"must not be empty",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use theme_switch::LinkOptions;

	use super::super::SettingSource;
	use super::*;

	#[test]
	fn validation_rejects_empty_themes_file() {
		let config = ResolvedConfig {
			themes_file: PathBuf::new(),
			link: LinkOptions::default(),
		};
		let sources = ConfigSources {
			themes_file: Some(SettingSource::Environment("THEME_SWITCH__THEMES__FILE")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "themes.file");
		let message = err.to_string();
		assert!(message.contains("must not be empty"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_accepts_defaults() {
		let config = ResolvedConfig {
			themes_file: PathBuf::from("config.json"),
			link: LinkOptions::default(),
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}
}
