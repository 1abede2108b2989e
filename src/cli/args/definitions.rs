use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, ColorChoice, Parser, Subcommand};

use super::options::{LinkKindArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `theme-switch` binary.
#[derive(Parser, Debug)]
#[command(
    name = "theme-switch",
    version,
    long_version = long_version(),
    about = "Utility for managing themes",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[command(subcommand)]
    pub(crate) command: Command,
    #[arg(
        short = 'f',
        long = "themes-file",
        value_name = "FILE",
        env = "THEME_SWITCH_THEMES_FILE",
        global = true,
        help = "Themes document to read (default: ./config.json)"
    )]
    pub(crate) themes_file: Option<PathBuf>,
    #[arg(
        short = 'k',
        long = "link-kind",
        value_enum,
        global = true,
        help = "How live paths are linked to theme sources (default: hardlink)"
    )]
    pub(crate) link_kind: Option<LinkKindArg>,
    #[arg(
        short = 's',
        long = "settings",
        value_name = "FILE",
        action = ArgAction::Append,
        global = true,
        help = "Additional settings file to merge (default: none)"
    )]
    pub(crate) settings: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-settings",
        global = true,
        help = "Skip loading default settings files (default: disabled)"
    )]
    pub(crate) no_settings: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        global = true,
        help = "Print the resolved settings before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase log verbosity (repeat for more detail)"
    )]
    pub(crate) verbose: u8,
}

/// Actions supported by the tool.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// List the themes defined in the themes document.
    List {
        #[arg(
            short = 'o',
            long = "output",
            value_enum,
            default_value_t = OutputFormat::Plain,
            help = "Choose how to print the theme names"
        )]
        output: OutputFormat,
    },
    /// Link every application of a theme to its theme configuration.
    Set {
        #[arg(
            short = 't',
            long = "theme",
            value_name = "NAME",
            required = true,
            value_parser = NonEmptyStringValueParser::new(),
            help = "Theme to set"
        )]
        theme: String,
    },
}
