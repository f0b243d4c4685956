//! Line sources.
//!
//! A [`LineSource`] yields one line per call. End-of-input is not an error:
//! it is reported as `Ok(None)` so the caller can decide what it means.

use std::collections::VecDeque;
use std::rc::Rc;

use crate::terminal::{RealTerminal, TerminalIO};
use crate::InputError;

/// A source of input lines.
///
/// # Implementation Guidelines
///
/// - Return `Ok(Some(line))` with the line terminator removed.
/// - Return `Ok(None)` once the input is exhausted. Callers may keep asking;
///   an exhausted source keeps answering `Ok(None)`.
/// - Return `Err` only for actual I/O failures.
pub trait LineSource {
    /// Show `prompt` (if the source is interactive) and read one line.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        (**self).read_line(prompt)
    }
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        (**self).read_line(prompt)
    }
}

/// Remove a single trailing `\n` or `\r\n`. Other whitespace is kept.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Read lines from the terminal (or piped stdin).
///
/// The prompt is written only when stdin is interactive, so piping a script
/// into a console does not litter stdout with prompts.
///
/// # Testing
///
/// Use [`TerminalSource::with_terminal`] to inject a [`MockTerminal`](crate::MockTerminal).
/// The terminal is held behind an `Rc`, so a test can keep a handle and
/// inspect the prompts afterwards.
#[derive(Debug, Clone)]
pub struct TerminalSource<T: TerminalIO = RealTerminal> {
    terminal: Rc<T>,
}

impl TerminalSource<RealTerminal> {
    /// Create a source reading from the process stdin.
    pub fn new() -> Self {
        Self {
            terminal: Rc::new(RealTerminal),
        }
    }
}

impl Default for TerminalSource<RealTerminal> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TerminalIO> TerminalSource<T> {
    /// Create a source backed by a custom terminal.
    pub fn with_terminal(terminal: T) -> Self {
        Self {
            terminal: Rc::new(terminal),
        }
    }

    /// Create a source sharing an existing terminal handle.
    pub fn with_shared(terminal: Rc<T>) -> Self {
        Self { terminal }
    }
}

impl<T: TerminalIO> LineSource for TerminalSource<T> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        if self.terminal.is_terminal() {
            self.terminal
                .write_prompt(prompt)
                .map_err(InputError::PromptFailed)?;
        }

        let line = self.terminal.read_line().map_err(InputError::ReadFailed)?;

        // Zero bytes read: the user pressed Ctrl+D or the pipe closed
        if line.is_empty() {
            tracing::trace!("terminal reached end of input");
            return Ok(None);
        }

        Ok(Some(strip_line_ending(&line).to_string()))
    }
}

/// Yield a fixed sequence of lines, then end-of-input.
///
/// Useful for tests and for replaying a canned session. Every prompt the
/// source was asked to show is recorded.
///
/// # Example
///
/// ```
/// use chainline_input::{LineSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new(["push 1", "show"]);
/// assert_eq!(source.read_line("> ").unwrap(), Some("push 1".to_string()));
/// assert_eq!(source.read_line("> ").unwrap(), Some("show".to_string()));
/// assert_eq!(source.read_line("> ").unwrap(), None);
/// assert_eq!(source.prompts().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedSource {
    /// Create a source that yields `lines` in order.
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Create a source that is exhausted from the start.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Prompts shown so far, oldest first.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Number of lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}
