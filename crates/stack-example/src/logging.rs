//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with console output on stdout.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Filter directive for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter: an explicit directive wins over the verbosity count.
pub fn filter_for(config: &Config) -> anyhow::Result<EnvFilter> {
    match &config.log_filter {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter '{}'", directive)),
        None => Ok(EnvFilter::new(level_for(config.verbosity))),
    }
}

/// Install the global subscriber.
pub fn init(config: &Config) -> anyhow::Result<()> {
    let filter = filter_for(config)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn explicit_filter_wins() {
        let config = Config {
            verbosity: 3,
            log_filter: Some("chainline_dispatch=debug".into()),
            ..Config::default()
        };
        let filter = filter_for(&config).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn verbosity_drives_default_filter() {
        let config = Config {
            verbosity: 3,
            ..Config::default()
        };
        let filter = filter_for(&config).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn bad_filter_is_reported() {
        let config = Config {
            log_filter: Some("chainline_dispatch=loudest".into()),
            ..Config::default()
        };
        let err = filter_for(&config).unwrap_err();
        assert!(err.to_string().contains("invalid log filter"));
    }
}
