//! Error types for dispatch.

use std::io;

use chainline_input::InputError;
use thiserror::Error;

/// Errors that can occur while registering handlers or dispatching lines.
///
/// A line that no handler matches is not an error; see
/// [`Dispatched::Unmatched`](crate::Dispatched::Unmatched).
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A handler pattern failed to compile. Raised at registration time; the
    /// handler is never linked into the chain.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Dispatch was attempted on a chain with no handlers.
    #[error("dispatch on an empty handler chain")]
    EmptyChain,

    /// A handler's action failed. The dispatcher does not recover from these.
    #[error("command '{line}' failed: {source}")]
    Action {
        line: String,
        #[source]
        source: anyhow::Error,
    },

    /// Reading the next line failed.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Writing to the output sink failed.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl DispatchError {
    /// Create an invalid-pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Returns true if this error came from a handler action.
    pub fn is_action(&self) -> bool {
        matches!(self, DispatchError::Action { .. })
    }
}

/// Result type for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
