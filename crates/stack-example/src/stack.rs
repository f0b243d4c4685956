//! The stack the console manipulates.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A stack handle shared by every command of one console.
pub type SharedStack = Rc<RefCell<Stack>>;

/// A last-in, first-out stack of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    items: Vec<String>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&str> {
        self.items.last().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Bottom first, as a bracketed list: `["a", "b"]`.
impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.items)
    }
}
