use std::fmt;

/// Where an effective setting value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "settings key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) themes_file: Option<SettingSource>,
	pub(crate) link_kind: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_themes_file(&self) -> SettingSource {
		self.themes_file
			.clone()
			.unwrap_or(SettingSource::ConfigKey("themes.file"))
	}

	pub(crate) fn source_for_link_kind(&self) -> SettingSource {
		self.link_kind
			.clone()
			.unwrap_or(SettingSource::ConfigKey("link.kind"))
	}
}
