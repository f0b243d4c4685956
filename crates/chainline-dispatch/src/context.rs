//! Execution context passed to handler actions.

use std::io::Write;

use crate::handler::Handler;

/// Environment a handler acts in.
///
/// Gives the acting handler the dispatcher's output sink, a way to stop the
/// console loop, and read access to the rest of the chain.
pub struct CommandContext<'a> {
    out: &'a mut dyn Write,
    running: &'a mut bool,
    chain: ChainView<'a>,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(out: &'a mut dyn Write, running: &'a mut bool, chain: ChainView<'a>) -> Self {
        Self {
            out,
            running,
            chain,
        }
    }

    /// The output sink.
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// Ask the console loop to stop.
    ///
    /// Takes effect at the next loop boundary; the current action runs to
    /// completion.
    pub fn halt(&mut self) {
        *self.running = false;
    }

    /// Returns true if the loop will stop after this action.
    pub fn is_halting(&self) -> bool {
        !*self.running
    }

    /// Help text of every handler that documents itself, in chain order.
    pub fn descriptions(&self) -> Vec<String> {
        self.chain.descriptions()
    }
}

/// Read-only view of a chain around the handler currently acting.
///
/// The acting handler is borrowed mutably, so its own description is taken
/// before it acts.
pub(crate) struct ChainView<'a> {
    before: &'a [Box<dyn Handler>],
    current: Option<String>,
    after: &'a [Box<dyn Handler>],
}

impl<'a> ChainView<'a> {
    pub(crate) fn new(
        before: &'a [Box<dyn Handler>],
        current: Option<String>,
        after: &'a [Box<dyn Handler>],
    ) -> Self {
        Self {
            before,
            current,
            after,
        }
    }

    fn descriptions(&self) -> Vec<String> {
        self.before
            .iter()
            .filter_map(|h| h.describe())
            .chain(self.current.clone())
            .chain(self.after.iter().filter_map(|h| h.describe()))
            .collect()
    }
}
