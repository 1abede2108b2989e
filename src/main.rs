mod cli;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::{Command, parse_cli, print_applied, print_theme_names};
use log::error;
use theme_switch::{ThemeError, logging};
use workflow::ThemeWorkflow;

fn main() -> Result<ExitCode> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = ThemeWorkflow::from_config(resolved)?;

	match &cli.command {
		Command::List { output } => {
			print_theme_names(workflow.registry(), *output)?;
			Ok(ExitCode::SUCCESS)
		}
		Command::Set { theme } => run_set(&workflow, theme),
	}
}

/// Apply a theme and report the outcome.
fn run_set(workflow: &ThemeWorkflow, name: &str) -> Result<ExitCode> {
	match workflow.set(name) {
		Ok(report) => {
			print_applied(&report)?;
			Ok(ExitCode::SUCCESS)
		}
		Err(err @ ThemeError::ThemeNotFound { .. }) => {
			eprintln!("{err}");
			Ok(ExitCode::FAILURE)
		}
		Err(err) => {
			error!("applying theme '{name}' stopped; apps linked before the failure stay linked");
			Err(err.into())
		}
	}
}
