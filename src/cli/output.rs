use std::io::{self, Write};

use anyhow::Result;
use theme_switch::{ApplyReport, ThemeRegistry};

use super::OutputFormat;

/// Print the theme names in the chosen format.
pub(crate) fn print_theme_names(registry: &ThemeRegistry, format: OutputFormat) -> Result<()> {
	let stdout = io::stdout();
	write_theme_names(&mut stdout.lock(), registry, format)
}

/// Write the theme names, one per line after a header, or as a JSON array.
pub(crate) fn write_theme_names(
	out: &mut impl Write,
	registry: &ThemeRegistry,
	format: OutputFormat,
) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			writeln!(out, "Available themes:")?;
			for name in registry.names() {
				writeln!(out, "{name}")?;
			}
		}
		OutputFormat::Json => {
			let names: Vec<&str> = registry.names().collect();
			writeln!(out, "{}", serde_json::to_string_pretty(&names)?)?;
		}
	}
	Ok(())
}

/// Print the confirmation for a theme that was applied.
pub(crate) fn print_applied(report: &ApplyReport) -> Result<()> {
	let stdout = io::stdout();
	write_applied(&mut stdout.lock(), report)
}

pub(crate) fn write_applied(out: &mut impl Write, report: &ApplyReport) -> Result<()> {
	writeln!(out, "Theme '{}' has been set.", report.theme)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;
	use theme_switch::{LinkKind, Theme};

	use super::*;

	fn render(registry: &ThemeRegistry, format: OutputFormat) -> String {
		let mut buffer = Vec::new();
		write_theme_names(&mut buffer, registry, format).expect("writes");
		String::from_utf8(buffer).expect("utf8")
	}

	#[test]
	fn plain_listing_has_header_and_names() {
		let registry = ThemeRegistry::new(vec![Theme::new("dark"), Theme::new("light")]);
		assert_eq!(
			render(&registry, OutputFormat::Plain),
			"Available themes:\ndark\nlight\n"
		);
	}

	#[test]
	fn empty_registry_prints_only_the_header() {
		assert_eq!(
			render(&ThemeRegistry::default(), OutputFormat::Plain),
			"Available themes:\n"
		);
	}

	#[test]
	fn json_listing_is_an_array_of_names() {
		let registry = ThemeRegistry::new(vec![Theme::new("dark"), Theme::new("light")]);
		let value: Value =
			serde_json::from_str(&render(&registry, OutputFormat::Json)).expect("parse");
		assert_eq!(value, serde_json::json!(["dark", "light"]));
	}

	#[test]
	fn confirmation_names_the_theme() {
		let report = ApplyReport {
			theme: "dark".into(),
			kind: LinkKind::Hardlink,
			applied: Vec::new(),
		};
		let mut buffer = Vec::new();
		write_applied(&mut buffer, &report).expect("writes");
		assert_eq!(buffer, b"Theme 'dark' has been set.\n");
	}
}
