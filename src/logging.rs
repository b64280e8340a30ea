//! Process-wide logging setup
//!
//! One `env_logger` backend, initialized once in `main`. Default level is
//! Warn so library diagnostics stay quiet in normal use; `--debug` raises
//! it and `RUST_LOG` overrides everything.

use log::LevelFilter;
use std::env;

/// Initialize the logger for the process.
///
/// `debug_enabled` raises the default level from Warn to Debug. An explicit
/// `RUST_LOG` spec takes precedence over both.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
    log::debug!("Logger initialized at {level:?} level");
}
