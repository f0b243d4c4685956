//! Stack console commands.
//!
//! `add` is a closure handler; the argument-less commands share one handler
//! type, [`StackCommand`], parameterised by [`StackOp`].

use std::io::Write;

use chainline_dispatch::{
    CommandContext, DispatchError, Dispatcher, Handler, HandlerResult, Matcher,
};

use crate::stack::SharedStack;

/// Printed by `pop` and `peek` when there is nothing to show.
pub const EMPTY_MESSAGE: &str = "Stack empty!";

/// The argument-less stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOp {
    Pop,
    Peek,
    Clear,
    Show,
}

impl StackOp {
    pub const ALL: [StackOp; 4] = [StackOp::Pop, StackOp::Peek, StackOp::Clear, StackOp::Show];

    /// The command keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            StackOp::Pop => "pop",
            StackOp::Peek => "peek",
            StackOp::Clear => "clear",
            StackOp::Show => "show",
        }
    }

    fn help(self) -> &'static str {
        match self {
            StackOp::Pop => "pop: remove and print the top item",
            StackOp::Peek => "peek: print the top item",
            StackOp::Clear => "clear: remove every item",
            StackOp::Show => "show: print the whole stack, bottom first",
        }
    }
}

/// Handler for one argument-less stack operation.
#[derive(Debug)]
pub struct StackCommand {
    op: StackOp,
    matcher: Matcher,
    stack: SharedStack,
}

impl StackCommand {
    pub fn new(op: StackOp, stack: SharedStack) -> Result<Self, DispatchError> {
        Ok(Self {
            op,
            matcher: Matcher::new(&format!(r"{}\s*$", op.keyword()))?,
            stack,
        })
    }
}

impl Handler for StackCommand {
    fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    fn matcher_mut(&mut self) -> &mut Matcher {
        &mut self.matcher
    }

    fn act(&mut self, _text: &str, ctx: &mut CommandContext<'_>) -> HandlerResult {
        let mut stack = self.stack.borrow_mut();
        match self.op {
            StackOp::Pop => match stack.pop() {
                Some(item) => writeln!(ctx.out(), "{}", item)?,
                None => writeln!(ctx.out(), "{}", EMPTY_MESSAGE)?,
            },
            StackOp::Peek => match stack.peek() {
                Some(item) => writeln!(ctx.out(), "{}", item)?,
                None => writeln!(ctx.out(), "{}", EMPTY_MESSAGE)?,
            },
            StackOp::Clear => {
                tracing::debug!(dropped = stack.len(), "clearing stack");
                stack.clear();
            }
            StackOp::Show => writeln!(ctx.out(), "{}", stack)?,
        }
        Ok(())
    }

    fn describe(&self) -> Option<String> {
        Some(self.op.help().to_string())
    }
}

/// Register every stack command on `console`, followed by the blank-line and
/// unknown-command handlers.
pub fn install(console: &mut Dispatcher, stack: &SharedStack) -> Result<(), DispatchError> {
    // Blank lines are not commands
    console.register_pattern(r"\s*$", |_, _, _| Ok(()), None)?;

    let target = stack.clone();
    console.register_pattern(
        r"add (.+)",
        move |caps, _text, _ctx| {
            if let Some(item) = caps.get(0) {
                target.borrow_mut().push(item);
            }
            Ok(())
        },
        Some("add <item>: push an item"),
    )?;

    for op in StackOp::ALL {
        console.register(|| StackCommand::new(op, stack.clone()))?;
    }

    console.register_pattern(
        ".*",
        |_caps, text, ctx| {
            writeln!(ctx.out(), "Unknown command: {} (try 'help')", text)?;
            Ok(())
        },
        None,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainline_dispatch::SharedOutput;

    fn console() -> (Dispatcher, SharedStack, SharedOutput) {
        let out = SharedOutput::new();
        let stack = SharedStack::default();
        let mut console = Dispatcher::with_output(out.clone());
        install(&mut console, &stack).unwrap();
        (console, stack, out)
    }

    #[test]
    fn add_pushes_the_rest_of_the_line() {
        let (mut console, stack, out) = console();
        console.dispatch("add two words").unwrap();
        assert_eq!(stack.borrow().peek(), Some("two words"));
        assert_eq!(out.contents(), "");
    }

    #[test]
    fn pop_prints_top() {
        let (mut console, stack, out) = console();
        stack.borrow_mut().push("a");
        stack.borrow_mut().push("b");

        console.dispatch("pop").unwrap();

        assert_eq!(out.contents(), "b\n");
        assert_eq!(stack.borrow().len(), 1);
    }

    #[test]
    fn pop_on_empty_reports_instead_of_failing() {
        let (mut console, _, out) = console();
        assert!(console.dispatch("pop").is_ok());
        assert_eq!(out.contents(), "Stack empty!\n");
    }

    #[test]
    fn peek_keeps_item() {
        let (mut console, stack, out) = console();
        stack.borrow_mut().push("a");
        console.dispatch("peek").unwrap();
        assert_eq!(out.contents(), "a\n");
        assert_eq!(stack.borrow().len(), 1);
    }

    #[test]
    fn clear_and_show() {
        let (mut console, stack, out) = console();
        stack.borrow_mut().push("a");
        console.dispatch("show").unwrap();
        console.dispatch("clear").unwrap();
        console.dispatch("show").unwrap();
        assert_eq!(out.lines(), vec![r#"["a"]"#, "[]"]);
        assert!(stack.borrow().is_empty());
    }

    #[test]
    fn keywords_require_the_whole_line() {
        let (mut console, stack, out) = console();
        stack.borrow_mut().push("a");
        console.dispatch("popcorn").unwrap();
        assert_eq!(out.contents(), "Unknown command: popcorn (try 'help')\n");
        assert_eq!(stack.borrow().len(), 1);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let (mut console, _, out) = console();
        console.dispatch("").unwrap();
        console.dispatch("   ").unwrap();
        assert_eq!(out.contents(), "");
    }

    #[test]
    fn add_without_item_is_unknown() {
        let (mut console, stack, out) = console();
        console.dispatch("add").unwrap();
        assert!(stack.borrow().is_empty());
        assert!(out.contents().starts_with("Unknown command: add"));
    }
}
