use std::io::{self, Write};

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	let stdout = io::stdout();
	let _ = write_summary(&mut stdout.lock(), config);
}

pub(super) fn write_summary(out: &mut impl Write, config: &ResolvedConfig) -> io::Result<()> {
	writeln!(out, "Effective configuration:")?;
	writeln!(out, "  Themes file: {}", config.themes_file.display())?;
	writeln!(out, "  Link kind: {}", config.link.kind)?;
	Ok(())
}
