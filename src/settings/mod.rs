//! Settings loading and resolution.
//!
//! `load` merges settings files, `THEME_SWITCH__*` environment variables and
//! CLI flags into a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
