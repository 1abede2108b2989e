//! Switch application configuration themes by relinking files.
//!
//! A themes document lists named themes. Each theme maps application names to
//! a live configuration path and a theme source file. Applying a theme
//! replaces every live path with a hard or symbolic link to its source.

pub mod app_dirs;
pub mod error;
pub mod link;
pub mod logging;
pub mod theme;

pub use error::ThemeError;
pub use link::{AppliedBinding, ApplyReport, LinkKind, LinkOptions, apply_theme};
pub use theme::{AppConfigBinding, Theme, ThemeRegistry};
