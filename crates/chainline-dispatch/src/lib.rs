//! Pattern-matched line dispatch for small interactive consoles.
//!
//! `chainline-dispatch` takes a line of text, tries it against an ordered
//! chain of handlers, and lets the first handler whose pattern matches act on
//! it. A loop on top reads lines and dispatches them until something halts
//! it.
//!
//! # Features
//!
//! - **Ordered matching**: Handlers are tried in registration order; first match wins
//! - **Typed captures**: Named, positional or whole-line, decided by the pattern
//! - **Closure handlers**: Register a pattern and a closure, no type needed
//! - **Built-ins**: `help` lists every handler's description, `exit` halts
//! - **Pluggable input**: Any [`chainline_input::LineSource`]; end-of-input acts as `exit`
//!
//! # Matching
//!
//! Patterns are regular expressions anchored at the start of the line. They
//! need not consume the whole line: `pop` matches `pop 3`. The shape of the
//! captured data follows the pattern's groups:
//!
//! ```text
//! add (?<item>.+)   → Captures::Named([("item", ...)])
//! add (.+)          → Captures::Positional([...])
//! show              → Captures::WholeText("show ...")
//! ```
//!
//! A line no handler matches is dropped. Register a catch-all (`.*`) last to
//! report unknown commands.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::io::Write;
//! use chainline_dispatch::Dispatcher;
//! use chainline_input::TerminalSource;
//!
//! let mut console = Dispatcher::new();
//! console
//!     .register_pattern(r"greet (?<name>\w+)", |caps, _text, ctx| {
//!         writeln!(ctx.out(), "hello, {}", caps.name("name").unwrap_or("you"))?;
//!         Ok(())
//!     }, Some("greet <name>: say hello"))?
//!     .register_pattern(".*", |_caps, text, ctx| {
//!         writeln!(ctx.out(), "Unknown command: {}", text)?;
//!         Ok(())
//!     }, None)?;
//!
//! console.run_loop(TerminalSource::new(), "> ")?;
//! # Ok::<(), chainline_dispatch::DispatchError>(())
//! ```
//!
//! # Errors
//!
//! Bad patterns fail at registration. Errors returned by actions are not
//! caught: they come back from [`Dispatcher::dispatch`] and end
//! [`Dispatcher::run_loop`].

// Core modules
mod builtins;
mod captures;
mod context;
mod dispatcher;
mod error;
mod handler;
mod matcher;
mod output;

// Re-export core types
pub use builtins::{ExitHandler, HelpHandler, EXIT_COMMAND, HELP_COMMAND};
pub use captures::{CaptureShape, Captures};
pub use context::CommandContext;
pub use dispatcher::{Dispatched, Dispatcher};
pub use error::{DispatchError, Result};
pub use handler::{FnHandler, Handler, HandlerResult};
pub use matcher::Matcher;
pub use output::SharedOutput;
