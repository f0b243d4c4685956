//! Console configuration.
//!
//! Settings resolve in order: command-line flag, environment variable,
//! built-in default.

use chainline_input::env::EnvReader;

use crate::cli::Cli;

/// Environment variable overriding the prompt.
pub const PROMPT_ENV_VAR: &str = "CHAINLINE_PROMPT";

/// Environment variable switching the banner off (`0`, `false`, `no`, `off`).
pub const BANNER_ENV_VAR: &str = "CHAINLINE_BANNER";

/// Environment variable holding a `tracing` filter directive, e.g. `debug`
/// or `chainline_dispatch=trace`.
pub const LOG_ENV_VAR: &str = "CHAINLINE_LOG";

/// Prompt used when neither flag nor environment sets one.
pub const DEFAULT_PROMPT: &str = "> ";

/// Resolved console settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    pub counted: bool,
    pub banner: bool,
    pub verbosity: u8,
    /// Explicit filter directive; wins over `verbosity` when set.
    pub log_filter: Option<String>,
}

impl Config {
    /// Resolve settings from parsed arguments and the environment.
    pub fn resolve(cli: &Cli, env: &impl EnvReader) -> Self {
        let prompt = cli
            .prompt
            .clone()
            .or_else(|| env.var(PROMPT_ENV_VAR))
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

        let banner = !cli.quiet && env.flag(BANNER_ENV_VAR).unwrap_or(true);

        let log_filter = env
            .var(LOG_ENV_VAR)
            .filter(|directive| !directive.trim().is_empty());

        Self {
            prompt,
            counted: cli.counted,
            banner,
            verbosity: cli.verbose,
            log_filter,
        }
    }

    /// The prompt for a stack holding `depth` items.
    pub fn prompt_for(&self, depth: usize) -> String {
        if self.counted {
            format!("[{}]{}", depth, self.prompt)
        } else {
            self.prompt.clone()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            counted: false,
            banner: true,
            verbosity: 0,
            log_filter: None,
        }
    }
}
