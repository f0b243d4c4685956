//! Command handler types.
//!
//! A handler is one pattern plus one action. The dispatcher tries handlers in
//! registration order and lets the first whose pattern matches act on the
//! line.
//!
//! # Core Types
//!
//! - [`Handler`]: Trait for handlers with their own state and logic
//! - [`FnHandler`]: A handler built from a pattern and a closure
//! - [`HandlerResult`]: The result type for actions
//!
//! # Errors in actions
//!
//! Action errors are not caught by the dispatcher: they end the current
//! dispatch and, unless the caller handles them, the console loop. Handlers
//! that want to degrade gracefully ("stack empty") report the condition
//! themselves and return `Ok(())`.

use std::fmt;

use crate::captures::Captures;
use crate::context::CommandContext;
use crate::error::Result;
use crate::matcher::Matcher;

/// The result type for handler actions.
pub type HandlerResult = std::result::Result<(), anyhow::Error>;

/// Trait for command handlers.
///
/// Implementors own a [`Matcher`] and expose it; matching and capture
/// bookkeeping are provided.
///
/// The [`Dispatcher`](crate::Dispatcher) walks the chain itself. Once a
/// handler's [`matches`](Self::matches) returns true it acts and the line
/// goes no further, so a handler cannot act and then pass the line on.
/// Overriding `matches` is the one way to decline a line the pattern would
/// accept.
///
/// # Example
///
/// ```rust
/// use std::io::Write;
/// use chainline_dispatch::{CommandContext, DispatchError, Handler, HandlerResult, Matcher};
///
/// struct Greet {
///     matcher: Matcher,
/// }
///
/// impl Greet {
///     fn new() -> Result<Self, DispatchError> {
///         Ok(Self { matcher: Matcher::new(r"hello (?<name>\w+)")? })
///     }
/// }
///
/// impl Handler for Greet {
///     fn matcher(&self) -> &Matcher {
///         &self.matcher
///     }
///
///     fn matcher_mut(&mut self) -> &mut Matcher {
///         &mut self.matcher
///     }
///
///     fn act(&mut self, _text: &str, ctx: &mut CommandContext<'_>) -> HandlerResult {
///         let name = self.captures().name("name").unwrap_or("stranger").to_string();
///         writeln!(ctx.out(), "Hello, {}!", name)?;
///         Ok(())
///     }
///
///     fn describe(&self) -> Option<String> {
///         Some("hello <name>: say hello".into())
///     }
/// }
/// ```
pub trait Handler {
    /// The handler's pattern and capture state.
    fn matcher(&self) -> &Matcher;

    /// Mutable access to the pattern and capture state.
    fn matcher_mut(&mut self) -> &mut Matcher;

    /// Try to match `text`, replacing this handler's captures.
    fn matches(&mut self, text: &str) -> bool {
        self.matcher_mut().matches(text)
    }

    /// Captures of the most recent successful match.
    ///
    /// # Panics
    ///
    /// Panics if the last match attempt failed or none was made.
    fn captures(&self) -> &Captures {
        self.matcher().captures()
    }

    /// Perform the command. Only called right after [`matches`](Self::matches)
    /// succeeded on the same `text`.
    fn act(&mut self, text: &str, ctx: &mut CommandContext<'_>) -> HandlerResult;

    /// Help text for this handler, or `None` to stay out of `help`.
    fn describe(&self) -> Option<String> {
        None
    }
}

/// A handler built from a pattern and a closure.
///
/// The closure receives the captures, the full line and the context.
///
/// # Example
///
/// ```rust
/// use std::io::Write;
/// use chainline_dispatch::{Captures, CommandContext, FnHandler, Handler};
///
/// let handler = FnHandler::new(r"echo (.*)", |caps: &Captures, _text: &str, ctx: &mut CommandContext<'_>| {
///     writeln!(ctx.out(), "{}", caps.get(0).unwrap_or_default())?;
///     Ok(())
/// })?
/// .with_help("echo <text>: print text");
///
/// assert_eq!(handler.describe().as_deref(), Some("echo <text>: print text"));
/// # Ok::<(), chainline_dispatch::DispatchError>(())
/// ```
pub struct FnHandler<F> {
    matcher: Matcher,
    action: F,
    help: Option<String>,
}

impl<F> FnHandler<F>
where
    F: FnMut(&Captures, &str, &mut CommandContext<'_>) -> HandlerResult,
{
    /// Creates a new FnHandler; fails if `pattern` does not compile.
    pub fn new(pattern: &str, action: F) -> Result<Self> {
        Ok(Self {
            matcher: Matcher::new(pattern)?,
            action,
            help: None,
        })
    }

    /// Attach help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl<F> Handler for FnHandler<F>
where
    F: FnMut(&Captures, &str, &mut CommandContext<'_>) -> HandlerResult,
{
    fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    fn matcher_mut(&mut self) -> &mut Matcher {
        &mut self.matcher
    }

    fn act(&mut self, text: &str, ctx: &mut CommandContext<'_>) -> HandlerResult {
        (self.action)(self.matcher.captures(), text, ctx)
    }

    fn describe(&self) -> Option<String> {
        self.help.clone()
    }
}

impl<F> fmt::Debug for FnHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler")
            .field("pattern", &self.matcher.pattern())
            .field("help", &self.help)
            .finish()
    }
}
