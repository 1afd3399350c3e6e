//! Minimal stderr backend for the `log` facade.
//!
//! The level comes from `SEASON_STATS_LOG` (`error`, `warn`, `info`,
//! `debug`, `trace`, `off`) and defaults to `warn`. Verbose mode forces
//! `debug`.

use log::{LevelFilter, Log, Metadata, Record};
use std::env;

pub const LOG_ENV: &str = "SEASON_STATS_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Resolve the level filter from an optional env value and the verbose flag.
pub fn level_filter(env_value: Option<&str>, verbose: bool) -> LevelFilter {
    if verbose {
        return LevelFilter::Debug;
    }
    env_value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. Later calls only adjust the level.
pub fn init(verbose: bool) {
    let env_value = env::var(LOG_ENV).ok();
    let level = level_filter(env_value.as_deref(), verbose);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_warn() {
        assert_eq!(level_filter(None, false), LevelFilter::Warn);
    }

    #[test]
    fn test_env_level() {
        assert_eq!(level_filter(Some("info"), false), LevelFilter::Info);
        assert_eq!(level_filter(Some("TRACE"), false), LevelFilter::Trace);
        assert_eq!(level_filter(Some("off"), false), LevelFilter::Off);
    }

    #[test]
    fn test_unknown_env_level_falls_back() {
        assert_eq!(level_filter(Some("loud"), false), LevelFilter::Warn);
    }

    #[test]
    fn test_verbose_overrides_env() {
        assert_eq!(level_filter(Some("error"), true), LevelFilter::Debug);
    }
}
