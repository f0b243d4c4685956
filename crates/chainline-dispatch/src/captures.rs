//! Capture results.
//!
//! The shape of a handler's captures is decided by its pattern alone:
//!
//! | Pattern declares | Captures |
//! |------------------|----------|
//! | named groups | [`Captures::Named`]: group name → value |
//! | only unnamed groups | [`Captures::Positional`]: values in group order |
//! | no groups | [`Captures::WholeText`]: the entire input line |
//!
//! Named groups win when a pattern mixes both kinds; the unnamed ones are
//! then not reported. Groups that did not take part in the match are `None`.

use regex::Regex;

/// Which [`Captures`] variant a pattern produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureShape {
    Named,
    Positional,
    WholeText,
}

impl CaptureShape {
    /// Determine the capture shape from the groups a regex declares.
    pub fn of(regex: &Regex) -> Self {
        if regex.capture_names().flatten().next().is_some() {
            CaptureShape::Named
        } else if regex.captures_len() > 1 {
            CaptureShape::Positional
        } else {
            CaptureShape::WholeText
        }
    }
}

/// Data captured by a successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Captures {
    /// Named groups and their captured text, in declaration order.
    Named(Vec<(String, Option<String>)>),
    /// Unnamed groups in declaration order.
    Positional(Vec<Option<String>>),
    /// The full input text the pattern was matched against.
    WholeText(String),
}

impl Captures {
    /// Build captures of the given shape from a regex match on `text`.
    pub(crate) fn extract(
        regex: &Regex,
        shape: CaptureShape,
        caps: &regex::Captures<'_>,
        text: &str,
    ) -> Self {
        match shape {
            CaptureShape::Named => Captures::Named(
                regex
                    .capture_names()
                    .flatten()
                    .map(|name| {
                        let value = caps.name(name).map(|m| m.as_str().to_string());
                        (name.to_string(), value)
                    })
                    .collect(),
            ),
            CaptureShape::Positional => Captures::Positional(
                caps.iter()
                    .skip(1)
                    .map(|group| group.map(|m| m.as_str().to_string()))
                    .collect(),
            ),
            CaptureShape::WholeText => Captures::WholeText(text.to_string()),
        }
    }

    /// The shape of these captures.
    pub fn shape(&self) -> CaptureShape {
        match self {
            Captures::Named(_) => CaptureShape::Named,
            Captures::Positional(_) => CaptureShape::Positional,
            Captures::WholeText(_) => CaptureShape::WholeText,
        }
    }

    /// Value of a named group.
    ///
    /// Returns `None` if the group is unknown, did not participate, or these
    /// captures are not [`Captures::Named`].
    pub fn name(&self, key: &str) -> Option<&str> {
        match self {
            Captures::Named(groups) => groups
                .iter()
                .find(|(name, _)| name == key)
                .and_then(|(_, v)| v.as_deref()),
            _ => None,
        }
    }

    /// Value of the positional group at `index` (0 is the first group).
    ///
    /// Returns `None` if out of range, the group did not participate, or
    /// these captures are not [`Captures::Positional`].
    pub fn get(&self, index: usize) -> Option<&str> {
        match self {
            Captures::Positional(groups) => groups.get(index).and_then(|v| v.as_deref()),
            _ => None,
        }
    }

    /// The full input text, for patterns without groups.
    pub fn whole_text(&self) -> Option<&str> {
        match self {
            Captures::WholeText(text) => Some(text),
            _ => None,
        }
    }

    /// Number of captured entries (1 for whole text).
    pub fn len(&self) -> usize {
        match self {
            Captures::Named(groups) => groups.len(),
            Captures::Positional(groups) => groups.len(),
            Captures::WholeText(_) => 1,
        }
    }

    /// Returns true if no groups were captured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
