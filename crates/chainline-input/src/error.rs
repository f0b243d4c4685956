//! Error types for line input.

use std::io;

/// Errors that can occur while reading a line of input.
///
/// End-of-input is deliberately absent: sources report it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Failed to read from the underlying reader.
    #[error("Failed to read input: {0}")]
    ReadFailed(#[source] io::Error),

    /// Failed to write the prompt.
    #[error("Failed to write prompt: {0}")]
    PromptFailed(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_failed_display() {
        let err = InputError::ReadFailed(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert_eq!(err.to_string(), "Failed to read input: gone");
    }

    #[test]
    fn prompt_failed_keeps_source() {
        use std::error::Error;

        let err = InputError::PromptFailed(io::Error::other("closed"));
        assert!(err.source().is_some());
    }
}
