use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::link::LinkKind;

/// Errors raised while loading a themes document or applying a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The themes document could not be opened or read.
    #[error("failed to read themes file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The themes document is not a list of well-formed theme objects.
    #[error("invalid themes document {origin}: {reason}")]
    ConfigFormat { origin: String, reason: String },

    /// A binding points at a theme source that does not exist.
    #[error("source for '{app}' not found: {}", path.display())]
    SourceMissing { app: String, path: PathBuf },

    /// A live path names the theme source itself, so clearing it would
    /// destroy the source.
    #[error("live path for '{app}' is the theme source itself: {}", path.display())]
    LiveIsSource { app: String, path: PathBuf },

    /// The existing entry at a live path could not be removed.
    #[error("failed to clear live path for '{app}' at {}", path.display())]
    LivePathClear {
        app: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating the link failed after the live path was cleared.
    #[error(
        "failed to {kind} {} -> {} for '{app}'",
        live_path.display(),
        source_path.display()
    )]
    LinkCreate {
        app: String,
        live_path: PathBuf,
        source_path: PathBuf,
        kind: LinkKind,
        #[source]
        source: io::Error,
    },

    /// No theme with the requested name exists in the registry.
    #[error("Theme '{name}' not found.")]
    ThemeNotFound { name: String },
}

impl ThemeError {
    pub(crate) fn format<O, R>(origin: O, reason: R) -> Self
    where
        O: Into<String>,
        R: Into<String>,
    {
        Self::ConfigFormat {
            origin: origin.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ThemeNotFound { name: name.into() }
    }
}

pub type Result<T, E = ThemeError> = std::result::Result<T, E>;
