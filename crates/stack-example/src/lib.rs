//! A worked example of a chainline console.
//!
//! The console keeps a stack of strings:
//!
//! ```text
//! > add apples
//! > add pears
//! > show
//! ["apples", "pears"]
//! > pop
//! pears
//! > help
//! help: show this help
//! exit: leave the console
//! add <item>: push an item
//! ...
//! ```
//!
//! Everything the `stack` binary does is available here so it can be driven
//! by scripted input in tests.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod stack;

use std::io::Write;

use chainline_dispatch::{DispatchError, Dispatcher};
use chainline_input::Prompt;

pub use commands::{install, StackCommand, StackOp};
pub use config::Config;
pub use stack::{SharedStack, Stack};

/// Text printed before the first prompt.
pub const BANNER: &str = "Stack console. Type 'help' for commands, 'exit' or Ctrl+D to leave.";

/// Build a console operating on `stack` and writing to `out`.
pub fn build_console(
    stack: &SharedStack,
    out: impl Write + 'static,
) -> Result<Dispatcher, DispatchError> {
    let mut console = Dispatcher::with_output(out);
    install(&mut console, stack)?;
    Ok(console)
}

/// The prompt described by `config`, tracking `stack` when counted.
pub fn prompt(config: &Config, stack: &SharedStack) -> Prompt {
    if config.counted {
        let config = config.clone();
        let stack = stack.clone();
        Prompt::dynamic(move || config.prompt_for(stack.borrow().len()))
    } else {
        Prompt::from(config.prompt.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_prompt_ignores_stack() {
        let stack = SharedStack::default();
        let prompt = prompt(&Config::default(), &stack);
        stack.borrow_mut().push("a");
        assert_eq!(prompt.render(), "> ");
    }

    #[test]
    fn counted_prompt_follows_stack() {
        let stack = SharedStack::default();
        let config = Config {
            counted: true,
            ..Config::default()
        };
        let prompt = prompt(&config, &stack);
        assert_eq!(prompt.render(), "[0]> ");
        stack.borrow_mut().push("a");
        assert_eq!(prompt.render(), "[1]> ");
    }
}
