//! Environment abstractions for testability.
//!
//! Console launchers read their settings from environment variables. Going
//! through [`EnvReader`] lets tests supply a [`MockEnv`] instead of mutating
//! the process environment.

use std::collections::HashMap;

/// Abstraction over environment variables.
pub trait EnvReader {
    /// Get an environment variable value.
    fn var(&self, name: &str) -> Option<String>;

    /// Get a variable interpreted as a boolean switch.
    ///
    /// `1`, `true`, `yes` and `on` are true; `0`, `false`, `no` and `off` are
    /// false (case-insensitive). Anything else, or an unset variable, is `None`.
    fn flag(&self, name: &str) -> Option<bool> {
        let value = self.var(name)?;
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        }
    }
}

/// Real environment variable reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Mock environment variable reader for testing.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    /// Create an empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an environment variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
