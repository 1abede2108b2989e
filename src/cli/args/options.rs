use clap::ValueEnum;

/// Link kinds accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LinkKindArg {
    Hardlink,
    Symlink,
}

impl LinkKindArg {
    /// Return the string representation consumed by settings loading.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            LinkKindArg::Hardlink => "hardlink",
            LinkKindArg::Symlink => "symlink",
        }
    }
}

/// Output formats supported by the `list` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
