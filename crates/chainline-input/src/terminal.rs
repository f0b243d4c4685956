//! Terminal I/O abstraction.
//!
//! [`TerminalSource`](crate::TerminalSource) talks to the terminal only
//! through [`TerminalIO`], so consoles can be driven by [`MockTerminal`] in
//! tests.

use std::cell::{Cell, RefCell};
use std::io::{self, BufRead, IsTerminal, Write};

/// Abstraction over terminal I/O for testability.
pub trait TerminalIO {
    /// Check if stdin is a terminal.
    fn is_terminal(&self) -> bool;

    /// Write a prompt to stdout, without a trailing newline.
    fn write_prompt(&self, prompt: &str) -> io::Result<()>;

    /// Read a line from stdin.
    ///
    /// The returned string keeps its line terminator. An empty string means
    /// end-of-input, as with [`BufRead::read_line`].
    fn read_line(&self) -> io::Result<String>;
}

/// Real terminal I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalIO for RealTerminal {
    fn is_terminal(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        print!("{}", prompt);
        io::stdout().flush()
    }

    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Mock terminal for testing line sources.
///
/// Returns the configured responses in order, then end-of-input. Every prompt
/// written is recorded and can be inspected with [`prompts`](Self::prompts).
#[derive(Debug, Clone)]
pub struct MockTerminal {
    is_terminal: bool,
    responses: Vec<String>,
    /// Index of the next response to return.
    response_index: Cell<usize>,
    prompts: RefCell<Vec<String>>,
}

impl MockTerminal {
    /// Create a mock interactive terminal that returns the given responses in
    /// sequence.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            is_terminal: true,
            responses: responses.into_iter().map(Into::into).collect(),
            response_index: Cell::new(0),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// Create a mock interactive terminal that returns a single response.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::with_responses([response.into()])
    }

    /// Create a mock that simulates piped (non-terminal) stdin.
    pub fn piped(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            is_terminal: false,
            ..Self::with_responses(responses)
        }
    }

    /// Create a mock that simulates EOF (Ctrl+D) on the first read.
    pub fn eof() -> Self {
        Self::with_responses(Vec::<String>::new())
    }

    /// Prompts written so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl TerminalIO for MockTerminal {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(())
    }

    fn read_line(&self) -> io::Result<String> {
        let idx = self.response_index.get();
        self.response_index.set(idx + 1);
        match self.responses.get(idx) {
            // Add newline like real read_line does
            Some(response) => Ok(format!("{}\n", response)),
            None => Ok(String::new()),
        }
    }
}
