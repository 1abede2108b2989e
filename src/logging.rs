//! Log setup for the command-line tool.
//!
//! Library code only emits records through the `log` macros; the binary calls
//! [`initialize`] once to route them to stderr.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Environment variable holding an `env_logger` filter, e.g. `debug` or
/// `theme_switch::link=trace`. Overrides the verbosity flag when set.
pub const LOG_ENV: &str = "THEME_SWITCH_LOG";

/// Map the number of `-v` flags to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. Later calls are ignored.
pub fn initialize(verbosity: u8) {
    let mut builder = Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .format_timestamp(None)
        .format_target(false)
        .parse_env(Env::new().filter(LOG_ENV));
    let _ = builder.try_init();
}
