//! The handler chain and the console loop.

use std::fmt;
use std::io::{self, Write};

use chainline_input::{LineSource, Prompt};

use crate::builtins::{ExitHandler, HelpHandler, EXIT_COMMAND};
use crate::captures::Captures;
use crate::context::{ChainView, CommandContext};
use crate::error::{DispatchError, Result};
use crate::handler::{FnHandler, Handler, HandlerResult};

/// Outcome of dispatching one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    /// The handler at `index` in the chain matched and acted.
    Handled { index: usize },
    /// No handler matched; the line was dropped.
    Unmatched,
}

impl Dispatched {
    /// Returns true if a handler acted on the line.
    pub fn is_handled(&self) -> bool {
        matches!(self, Dispatched::Handled { .. })
    }

    /// Chain position of the handler that acted, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Dispatched::Handled { index } => Some(*index),
            Dispatched::Unmatched => None,
        }
    }
}

/// An ordered chain of handlers and the loop that feeds it.
///
/// Handlers are tried in registration order; the first whose pattern matches
/// acts and the rest are skipped. A line nobody matches is dropped silently,
/// so applications that want to report unknown commands register a catch-all
/// (`.*`) last.
///
/// The built-in `help` and `exit` handlers are always at positions 0 and 1.
///
/// # Example
///
/// ```rust
/// use std::io::Write;
/// use chainline_dispatch::{Dispatcher, SharedOutput};
/// use chainline_input::ScriptedSource;
///
/// let out = SharedOutput::new();
/// let mut dispatcher = Dispatcher::with_output(out.clone());
/// dispatcher.register_pattern(r"say (.+)", |caps, _text, ctx| {
///     writeln!(ctx.out(), "{}", caps.get(0).unwrap_or_default())?;
///     Ok(())
/// }, Some("say <text>: repeat text"))?;
///
/// dispatcher.run_loop(ScriptedSource::new(["say hi", "exit"]), "> ")?;
/// assert_eq!(out.contents(), "hi\n");
/// # Ok::<(), chainline_dispatch::DispatchError>(())
/// ```
pub struct Dispatcher {
    handlers: Vec<Box<dyn Handler>>,
    running: bool,
    out: Box<dyn Write>,
}

impl Dispatcher {
    /// Create a dispatcher writing to stdout.
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }

    /// Create a dispatcher writing to `out`.
    pub fn with_output(out: impl Write + 'static) -> Self {
        let mut dispatcher = Self {
            handlers: Vec::new(),
            running: true,
            out: Box::new(out),
        };
        dispatcher.add(HelpHandler::new()).add(ExitHandler::new());
        dispatcher
    }

    /// Append an already constructed handler to the end of the chain.
    pub fn add<H: Handler + 'static>(&mut self, handler: H) -> &mut Self {
        tracing::debug!(
            pattern = handler.matcher().pattern(),
            index = self.handlers.len(),
            "registered handler"
        );
        self.handlers.push(Box::new(handler));
        self
    }

    /// Build a handler with `factory` and append it.
    ///
    /// A factory error (typically [`DispatchError::InvalidPattern`]) is
    /// returned immediately and the chain is left unchanged.
    ///
    /// ```rust,ignore
    /// dispatcher
    ///     .register(PopHandler::new)?
    ///     .register(|| PushHandler::new(stack.clone()))?;
    /// ```
    pub fn register<H, F>(&mut self, factory: F) -> Result<&mut Self>
    where
        H: Handler + 'static,
        F: FnOnce() -> Result<H>,
    {
        let handler = factory()?;
        Ok(self.add(handler))
    }

    /// Append an anonymous handler made of `pattern` and `action`.
    pub fn register_pattern<F>(
        &mut self,
        pattern: &str,
        action: F,
        help: Option<&str>,
    ) -> Result<&mut Self>
    where
        F: FnMut(&Captures, &str, &mut CommandContext<'_>) -> HandlerResult + 'static,
    {
        let handler = FnHandler::new(pattern, action)?;
        let handler = match help {
            Some(help) => handler.with_help(help),
            None => handler,
        };
        Ok(self.add(handler))
    }

    /// Route `text` to the first handler whose pattern matches it.
    ///
    /// Action errors are wrapped in [`DispatchError::Action`] and returned
    /// without further handling.
    pub fn dispatch(&mut self, text: &str) -> Result<Dispatched> {
        if self.handlers.is_empty() {
            return Err(DispatchError::EmptyChain);
        }

        let Some(index) = self.handlers.iter_mut().position(|h| h.matches(text)) else {
            tracing::trace!(line = text, "no handler matched");
            return Ok(Dispatched::Unmatched);
        };
        tracing::debug!(
            line = text,
            index,
            pattern = self.handlers[index].matcher().pattern(),
            "dispatching"
        );

        let current = self.handlers[index].describe();
        let (before, rest) = self.handlers.split_at_mut(index);
        let [handler, after @ ..] = rest else {
            unreachable!("position() returned an index inside the chain");
        };

        let chain = ChainView::new(before, current, after);
        let mut ctx = CommandContext::new(&mut *self.out, &mut self.running, chain);
        handler
            .act(text, &mut ctx)
            .map_err(|source| DispatchError::Action {
                line: text.to_string(),
                source,
            })?;

        self.out.flush().map_err(DispatchError::Output)?;
        Ok(Dispatched::Handled { index })
    }

    /// Stop the loop at its next boundary.
    pub fn halt(&mut self) {
        tracing::debug!("halt requested");
        self.running = false;
    }

    /// Returns true until something halts the dispatcher.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Read and dispatch lines until halted.
    ///
    /// The prompt is rendered afresh before every read. End-of-input is
    /// dispatched as [`EXIT_COMMAND`], which is also echoed to the output so
    /// the user sees why the console ended.
    pub fn run_loop<S: LineSource>(
        &mut self,
        mut source: S,
        prompt: impl Into<Prompt>,
    ) -> Result<()> {
        let prompt = prompt.into();
        tracing::debug!(handlers = self.handlers.len(), "console loop started");

        while self.running {
            let line = match source.read_line(&prompt.render())? {
                Some(line) => line,
                None => {
                    tracing::info!("end of input, dispatching '{}'", EXIT_COMMAND);
                    writeln!(self.out, "{}", EXIT_COMMAND).map_err(DispatchError::Output)?;
                    EXIT_COMMAND.to_string()
                }
            };
            self.dispatch(&line)?;
        }

        tracing::debug!("console loop finished");
        Ok(())
    }

    /// Help text of every handler that documents itself, in chain order.
    pub fn descriptions(&self) -> Vec<String> {
        self.handlers.iter().filter_map(|h| h.describe()).collect()
    }

    /// Number of handlers, built-ins included.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if the chain has no handlers. Never true for a
    /// dispatcher built through its constructors.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field(
                "patterns",
                &self
                    .handlers
                    .iter()
                    .map(|h| h.matcher().pattern())
                    .collect::<Vec<_>>(),
            )
            .field("running", &self.running)
            .finish()
    }
}
