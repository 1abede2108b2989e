use anyhow::{Result, anyhow};
use log::debug;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load settings by combining CLI arguments, settings files and environment
/// variables.
///
/// The result says which themes document to read (`themes.file`) and how live
/// paths are linked to theme sources (`link.kind`).
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize settings: {err}"))?;
	raw.apply_cli_overrides(cli);
	let resolved = raw.resolve(cli)?;
	debug!(
		"settings: themes file {}, link kind {}",
		resolved.themes_file.display(),
		resolved.link.kind
	);
	Ok(resolved)
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use clap::Parser;
	use theme_switch::LinkKind;

	use super::*;

	#[test]
	fn flags_drive_the_resolved_settings() {
		let cli = CliArgs::parse_from([
			"theme-switch",
			"--no-settings",
			"--themes-file",
			"themes/all.json",
			"--link-kind",
			"symlink",
			"list",
		]);

		let resolved = load(&cli).expect("loads");

		assert_eq!(resolved.themes_file, PathBuf::from("themes/all.json"));
		assert_eq!(resolved.link.kind, LinkKind::Symlink);
	}
}
