//! Prompt text shown before each line is read.

use std::fmt;

/// The prompt a console shows before reading a line.
///
/// A prompt is either fixed text or a closure evaluated fresh on every
/// iteration, so it can reflect application state (a counter, a mode, a
/// working directory).
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use chainline_input::Prompt;
///
/// let fixed = Prompt::from("> ");
/// assert_eq!(fixed.render(), "> ");
///
/// let depth = Rc::new(Cell::new(0));
/// let shown = depth.clone();
/// let dynamic = Prompt::dynamic(move || format!("[{}]> ", shown.get()));
/// assert_eq!(dynamic.render(), "[0]> ");
/// depth.set(2);
/// assert_eq!(dynamic.render(), "[2]> ");
/// ```
pub enum Prompt {
    /// Fixed prompt text.
    Static(String),
    /// Prompt text produced on demand.
    Dynamic(Box<dyn Fn() -> String>),
}

impl Prompt {
    /// Create a prompt computed by `f` each time it is rendered.
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn() -> String + 'static,
    {
        Prompt::Dynamic(Box::new(f))
    }

    /// Produce the prompt text for this iteration.
    pub fn render(&self) -> String {
        match self {
            Prompt::Static(text) => text.clone(),
            Prompt::Dynamic(f) => f(),
        }
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Prompt::Static("> ".to_string())
    }
}

impl From<&str> for Prompt {
    fn from(text: &str) -> Self {
        Prompt::Static(text.to_string())
    }
}

impl From<String> for Prompt {
    fn from(text: String) -> Self {
        Prompt::Static(text)
    }
}

impl fmt::Debug for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prompt::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Prompt::Dynamic(_) => f.debug_tuple("Dynamic").field(&"<fn>").finish(),
        }
    }
}
