use std::fs;
use std::path::Path;

use log::debug;

use super::registry::ThemeRegistry;
use super::types::Theme;
use crate::error::{Result, ThemeError};

const INLINE_ORIGIN: &str = "<inline>";

/// Read and parse the themes document at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<ThemeRegistry> {
	let path = path.as_ref();
	let text = fs::read_to_string(path).map_err(|source| ThemeError::ConfigRead {
		path: path.to_path_buf(),
		source,
	})?;
	let registry = parse_document(&text, &path.display().to_string())?;
	debug!(
		"loaded {} theme(s) from {}",
		registry.len(),
		path.display()
	);
	Ok(registry)
}

/// Parse a themes document held in memory.
pub fn parse(text: &str) -> Result<ThemeRegistry> {
	parse_document(text, INLINE_ORIGIN)
}

/// Serialize a registry back to the themes document shape.
pub fn to_json(registry: &ThemeRegistry) -> Result<String> {
	serde_json::to_string_pretty(registry)
		.map_err(|err| ThemeError::format(INLINE_ORIGIN, err.to_string()))
}

fn parse_document(text: &str, origin: &str) -> Result<ThemeRegistry> {
	let themes: Vec<Theme> =
		serde_json::from_str(text).map_err(|err| ThemeError::format(origin, err.to_string()))?;

	for (index, theme) in themes.iter().enumerate() {
		check_theme(index, theme).map_err(|reason| ThemeError::format(origin, reason))?;
	}

	let registry = ThemeRegistry::new(themes);
	let duplicates = registry.duplicate_names();
	if !duplicates.is_empty() {
		debug!(
			"{origin}: duplicate theme names {duplicates:?}; the first occurrence is used"
		);
	}
	Ok(registry)
}

fn check_theme(index: usize, theme: &Theme) -> Result<(), String> {
	if theme.name().is_empty() {
		return Err(format!("theme at index {index} has an empty name"));
	}

	for (app, binding) in theme.apps() {
		if binding.live_path().as_os_str().is_empty() {
			return Err(format!(
				"app '{app}' in theme '{}' has an empty real_cfg_path",
				theme.name()
			));
		}
		if binding.source_path().as_os_str().is_empty() {
			return Err(format!(
				"app '{app}' in theme '{}' has an empty theme_cfg",
				theme.name()
			));
		}
	}

	Ok(())
}
