//! Theme documents: the data model, the JSON loader and name lookup.

mod loader;
mod registry;
mod types;

pub use loader::{load, parse, to_json};
pub use registry::ThemeRegistry;
pub use types::{AppConfigBinding, Theme};
