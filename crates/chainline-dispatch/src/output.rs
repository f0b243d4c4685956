//! In-memory output sink.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// A cloneable in-memory writer.
///
/// Hand one clone to [`Dispatcher::with_output`](crate::Dispatcher::with_output)
/// and keep another to read what handlers printed. Used by tests and by
/// embedders that display console output themselves.
#[derive(Debug, Clone, Default)]
pub struct SharedOutput {
    buffer: Rc<RefCell<Vec<u8>>>,
}

impl SharedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.borrow()).into_owned()
    }

    /// Written text split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    /// Discard everything written so far.
    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_buffer() {
        let out = SharedOutput::new();
        let mut writer = out.clone();
        writeln!(writer, "one").unwrap();
        write!(writer, "two").unwrap();

        assert_eq!(out.contents(), "one\ntwo");
        assert_eq!(out.lines(), vec!["one", "two"]);

        out.clear();
        assert_eq!(out.contents(), "");
    }
}
