use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a live path is linked to its theme source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// A second directory entry for the source's data. Requires both paths on
    /// the same filesystem.
    #[default]
    Hardlink,
    /// An entry storing the source path. Dangles if the source is removed.
    Symlink,
}

impl LinkKind {
    pub const ALL: [LinkKind; 2] = [LinkKind::Hardlink, LinkKind::Symlink];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LinkKind::Hardlink => "hardlink",
            LinkKind::Symlink => "symlink",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a link kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown link kind '{0}' (expected one of: hardlink, symlink)")]
pub struct ParseLinkKindError(String);

impl FromStr for LinkKind {
    type Err = ParseLinkKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hardlink" | "hard" => Ok(LinkKind::Hardlink),
            "symlink" | "symbolic" | "soft" => Ok(LinkKind::Symlink),
            _ => Err(ParseLinkKindError(value.to_string())),
        }
    }
}

/// Options passed to [`apply_theme`](super::apply_theme).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkOptions {
    pub kind: LinkKind,
}

impl LinkOptions {
    pub fn new(kind: LinkKind) -> Self {
        Self { kind }
    }
}
