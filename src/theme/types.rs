use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Associates one application with its live configuration and the theme's
/// variant of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfigBinding {
	/// Where the application reads its active configuration.
	#[serde(rename = "real_cfg_path", alias = "app_cfg_path")]
	pub live_path: PathBuf,
	/// The theme-provided configuration linked in at the live path.
	#[serde(rename = "theme_cfg", alias = "app_theme_cfg")]
	pub source_path: PathBuf,
}

impl AppConfigBinding {
	/// Creates a binding from a live path and a theme source path.
	pub fn new(live_path: impl Into<PathBuf>, source_path: impl Into<PathBuf>) -> Self {
		Self {
			live_path: live_path.into(),
			source_path: source_path.into(),
		}
	}

	#[must_use]
	pub fn live_path(&self) -> &Path {
		&self.live_path
	}

	#[must_use]
	pub fn source_path(&self) -> &Path {
		&self.source_path
	}
}

/// A named bundle of per-application configuration sources.
///
/// Bindings are keyed by application name and iterate in lexical order, which
/// is also the order they are applied in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
	name: String,
	#[serde(rename = "apps_cfg")]
	apps: BTreeMap<String, AppConfigBinding>,
}

impl Theme {
	/// Creates an empty theme with the given name.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			apps: BTreeMap::new(),
		}
	}

	/// Adds or replaces the binding for an application.
	pub fn with_app(mut self, app: impl Into<String>, binding: AppConfigBinding) -> Self {
		self.apps.insert(app.into(), binding);
		self
	}

	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Iterates the bindings in apply order.
	pub fn apps(&self) -> impl Iterator<Item = (&str, &AppConfigBinding)> {
		self.apps.iter().map(|(app, binding)| (app.as_str(), binding))
	}

	#[must_use]
	pub fn binding(&self, app: &str) -> Option<&AppConfigBinding> {
		self.apps.get(app)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.apps.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.apps.is_empty()
	}
}
