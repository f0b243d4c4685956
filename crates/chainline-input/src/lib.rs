//! Line input for interactive consoles.
//!
//! `chainline-input` is the input boundary of a chainline console: it reads
//! one line per iteration from a terminal, a pipe or a script, and reports
//! end-of-input as a distinguished value rather than an error.
//!
//! # Quick Start
//!
//! ```no_run
//! use chainline_input::{LineSource, Prompt, TerminalSource};
//!
//! let prompt = Prompt::from("> ");
//! let mut source = TerminalSource::new();
//! while let Some(line) = source.read_line(&prompt.render())? {
//!     println!("you said: {}", line);
//! }
//! # Ok::<(), chainline_input::InputError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! LineSource
//! ├── TerminalSource<T: TerminalIO>  → stdin, prompt only when interactive
//! └── ScriptedSource                 → fixed lines, then end-of-input
//! ```
//!
//! # Testing
//!
//! Terminal access goes through [`TerminalIO`], environment access through
//! [`env::EnvReader`]. Both have mock implementations:
//!
//! ```
//! use chainline_input::{LineSource, MockTerminal, TerminalSource};
//!
//! let mut source = TerminalSource::with_terminal(MockTerminal::with_responses(["help"]));
//! assert_eq!(source.read_line("> ").unwrap(), Some("help".to_string()));
//! assert_eq!(source.read_line("> ").unwrap(), None);
//! ```

pub mod env;
mod error;
mod prompt;
mod source;
mod terminal;

pub use error::InputError;
pub use prompt::Prompt;
pub use source::{strip_line_ending, LineSource, ScriptedSource, TerminalSource};
pub use terminal::{MockTerminal, RealTerminal, TerminalIO};

// Re-export mock types for testing
pub use env::{EnvReader, MockEnv, RealEnv};
