//! Built-in `help` and `exit` handlers.
//!
//! Every [`Dispatcher`](crate::Dispatcher) installs these first, `help` then
//! `exit`, so they are tried before anything an application registers.
//!
//! Both match their keyword as the whole line (trailing whitespace allowed):
//! `exit` halts, `exitnow` falls through to later handlers.

use std::io::Write;

use crate::context::CommandContext;
use crate::handler::{Handler, HandlerResult};
use crate::matcher::Matcher;

/// Line that ends the console loop. End-of-input is dispatched as this.
pub const EXIT_COMMAND: &str = "exit";

/// Line that prints the help listing.
pub const HELP_COMMAND: &str = "help";

fn keyword_matcher(keyword: &str) -> Matcher {
    Matcher::new(&format!(r"{}\s*$", regex::escape(keyword)))
        .expect("built-in keyword patterns are valid")
}

/// Prints the description of every handler in the chain.
#[derive(Debug)]
pub struct HelpHandler {
    matcher: Matcher,
}

impl HelpHandler {
    pub fn new() -> Self {
        Self {
            matcher: keyword_matcher(HELP_COMMAND),
        }
    }
}

impl Default for HelpHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for HelpHandler {
    fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    fn matcher_mut(&mut self) -> &mut Matcher {
        &mut self.matcher
    }

    fn act(&mut self, _text: &str, ctx: &mut CommandContext<'_>) -> HandlerResult {
        let listing = ctx.descriptions().join("\n");
        writeln!(ctx.out(), "{}", listing)?;
        Ok(())
    }

    fn describe(&self) -> Option<String> {
        Some("help: show this help".to_string())
    }
}

/// Halts the owning dispatcher.
#[derive(Debug)]
pub struct ExitHandler {
    matcher: Matcher,
}

impl ExitHandler {
    pub fn new() -> Self {
        Self {
            matcher: keyword_matcher(EXIT_COMMAND),
        }
    }
}

impl Default for ExitHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for ExitHandler {
    fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    fn matcher_mut(&mut self) -> &mut Matcher {
        &mut self.matcher
    }

    fn act(&mut self, _text: &str, ctx: &mut CommandContext<'_>) -> HandlerResult {
        tracing::debug!("exit requested");
        ctx.halt();
        Ok(())
    }

    fn describe(&self) -> Option<String> {
        Some("exit: leave the console".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_matches_whole_keyword_only() {
        let mut exit = ExitHandler::new();
        assert!(exit.matches("exit"));
        assert!(exit.matches("exit  "));
        assert!(!exit.matches("exitnow"));
        assert!(!exit.matches("exit now"));
        assert!(!exit.matches(" exit"));
    }

    #[test]
    fn help_matches_keyword() {
        let mut help = HelpHandler::new();
        assert!(help.matches("help"));
        assert!(!help.matches("helpme"));
    }

    #[test]
    fn builtins_describe_themselves() {
        assert!(HelpHandler::new().describe().unwrap().starts_with("help"));
        assert!(ExitHandler::new().describe().unwrap().starts_with("exit"));
    }
}
