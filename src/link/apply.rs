use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{self, Path, PathBuf};

use log::{debug, info};

use super::kind::{LinkKind, LinkOptions};
use crate::error::{Result, ThemeError};
use crate::theme::{AppConfigBinding, Theme};

/// A binding that was linked successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedBinding {
    pub app: String,
    /// Whether an entry had to be removed from the live path first.
    pub replaced: bool,
}

/// Summary of a successful [`apply_theme`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub theme: String,
    pub kind: LinkKind,
    pub applied: Vec<AppliedBinding>,
}

/// Link every live path of `theme` to its theme source.
///
/// Bindings are processed one at a time in application-name order. The first
/// failure stops the run; bindings linked before it are left in place.
pub fn apply_theme(theme: &Theme, options: &LinkOptions) -> Result<ApplyReport> {
    let mut applied = Vec::with_capacity(theme.len());

    for (app, binding) in theme.apps() {
        let replaced = apply_binding(app, binding, options.kind)?;
        info!(
            "{app}: linked {} -> {} ({})",
            binding.live_path().display(),
            binding.source_path().display(),
            options.kind
        );
        applied.push(AppliedBinding {
            app: app.to_string(),
            replaced,
        });
    }

    Ok(ApplyReport {
        theme: theme.name().to_string(),
        kind: options.kind,
        applied,
    })
}

fn apply_binding(app: &str, binding: &AppConfigBinding, kind: LinkKind) -> Result<bool> {
    let live = binding.live_path();
    let source = binding.source_path();

    if !source.exists() {
        return Err(ThemeError::SourceMissing {
            app: app.to_string(),
            path: source.to_path_buf(),
        });
    }

    if live_names_source(live, source) {
        return Err(ThemeError::LiveIsSource {
            app: app.to_string(),
            path: live.to_path_buf(),
        });
    }

    let replaced = clear_live_path(live).map_err(|source| ThemeError::LivePathClear {
        app: app.to_string(),
        path: live.to_path_buf(),
        source,
    })?;

    create_link(source, live, kind).map_err(|err| ThemeError::LinkCreate {
        app: app.to_string(),
        live_path: live.to_path_buf(),
        source_path: source.to_path_buf(),
        kind,
        source: err,
    })?;

    Ok(replaced)
}

/// Whether clearing `live` would delete the source entry or the file a
/// symlinked source resolves to.
fn live_names_source(live: &Path, source: &Path) -> bool {
    let Some(live_entry) = entry_path(live) else {
        return false;
    };
    entry_path(source).as_ref() == Some(&live_entry)
        || fs::canonicalize(source).ok().as_ref() == Some(&live_entry)
}

/// Canonical location of the directory entry at `path`, resolving every
/// component except the last. `None` when the parent does not exist.
fn entry_path(path: &Path) -> Option<PathBuf> {
    let Some(name) = path.file_name() else {
        return fs::canonicalize(path).ok();
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::canonicalize(parent).ok().map(|parent| parent.join(name))
}

/// Remove whatever sits at `path` without following links. Only empty
/// directories can be removed.
fn clear_live_path(path: &Path) -> io::Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err),
    };

    if metadata.is_dir() {
        debug!("removing directory {}", path.display());
        fs::remove_dir(path)?;
    } else {
        debug!("removing {}", path.display());
        fs::remove_file(path)?;
    }
    Ok(true)
}

fn create_link(source: &Path, live: &Path, kind: LinkKind) -> io::Result<()> {
    match kind {
        // hard_link does not follow a symlinked source on every platform
        LinkKind::Hardlink => fs::hard_link(fs::canonicalize(source)?, live),
        LinkKind::Symlink => {
            let target = symlink_target(source)?;
            symlink_file(&target, live)
        }
    }
}

/// Relative targets would resolve against the link's directory, so anchor
/// them to the working directory the existence check used.
fn symlink_target(source: &Path) -> io::Result<Cow<'_, Path>> {
    if source.is_absolute() {
        Ok(Cow::Borrowed(source))
    } else {
        path::absolute(source).map(Cow::Owned)
    }
}

#[cfg(unix)]
fn symlink_file(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_file(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
