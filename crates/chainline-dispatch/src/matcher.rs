//! Pattern matching with per-handler capture state.

use regex::Regex;

use crate::captures::{CaptureShape, Captures};
use crate::error::{DispatchError, Result};

/// A compiled pattern plus the captures of its most recent match attempt.
///
/// Patterns are anchored at the start of the line but need not consume all
/// of it: `pop` matches `pop` and `pop 2` but not `  pop`. Add `$` to a
/// pattern to require the whole line.
///
/// The capture state is scratch space: each call to
/// [`matches`](Self::matches) replaces it.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: String,
    regex: Regex,
    shape: CaptureShape,
    state: MatchState,
}

#[derive(Debug, Clone)]
enum MatchState {
    NotAttempted,
    Missed,
    Matched(Captures),
}

impl Matcher {
    /// Compile `pattern`.
    ///
    /// Fails with [`DispatchError::InvalidPattern`] if the pattern is not a
    /// valid regular expression.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex =
            Regex::new(pattern).map_err(|e| DispatchError::invalid_pattern(pattern, e))?;

        Ok(Self {
            pattern: pattern.to_string(),
            shape: CaptureShape::of(&regex),
            regex,
            state: MatchState::NotAttempted,
        })
    }

    /// The pattern as it was given.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The capture shape this pattern produces.
    pub fn shape(&self) -> CaptureShape {
        self.shape
    }

    /// Try to match `text`, replacing the stored captures.
    pub fn matches(&mut self, text: &str) -> bool {
        // Leftmost-first search reports a match starting at 0 whenever one
        // exists, so a later start means the line does not begin with the
        // pattern.
        let found = self
            .regex
            .captures(text)
            .filter(|caps| caps.get(0).is_some_and(|m| m.start() == 0));
        self.state = match found {
            Some(caps) => {
                MatchState::Matched(Captures::extract(&self.regex, self.shape, &caps, text))
            }
            None => MatchState::Missed,
        };
        matches!(self.state, MatchState::Matched(_))
    }

    /// Captures from the most recent attempt, or `None` if it missed or no
    /// attempt has been made.
    pub fn try_captures(&self) -> Option<&Captures> {
        match &self.state {
            MatchState::Matched(captures) => Some(captures),
            _ => None,
        }
    }

    /// Captures from the most recent, successful attempt.
    ///
    /// # Panics
    ///
    /// Panics if the most recent attempt missed or no attempt has been made.
    /// Handlers only read captures from `act`, which runs right after a
    /// successful match.
    pub fn captures(&self) -> &Captures {
        match &self.state {
            MatchState::Matched(captures) => captures,
            MatchState::Missed => panic!(
                "captures of pattern '{}' read after a failed match",
                self.pattern
            ),
            MatchState::NotAttempted => panic!(
                "captures of pattern '{}' read before any match attempt",
                self.pattern
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_fails_fast() {
        let err = Matcher::new("add (").unwrap_err();
        assert!(matches!(err, DispatchError::InvalidPattern { ref pattern, .. } if pattern == "add ("));
    }

    #[test]
    fn unbalanced_pattern_cannot_escape_anchor() {
        assert!(Matcher::new("a)|(b").is_err());
    }

    #[test]
    fn verbose_pattern_with_trailing_comment() {
        let mut m = Matcher::new("(?x) pop  # remove the top item").unwrap();
        assert!(m.matches("pop"));
        assert!(m.matches("pop 2"));
        assert!(!m.matches("push pop"));
    }

    #[test]
    fn later_match_in_line_is_a_miss() {
        let mut m = Matcher::new(r"(\d+)").unwrap();
        assert!(!m.matches("add 42"));
        assert!(m.try_captures().is_none());
        assert!(m.matches("42 apples"));
        assert_eq!(m.captures().get(0), Some("42"));
    }

    #[test]
    fn anchored_at_start_prefix_match() {
        let mut m = Matcher::new("pop").unwrap();
        assert!(m.matches("pop"));
        assert!(m.matches("pop 2"));
        assert!(m.matches("popcorn"));
        assert!(!m.matches(" pop"));
        assert!(!m.matches("xpop"));
    }

    #[test]
    fn alternation_stays_anchored() {
        let mut m = Matcher::new("quit|exit").unwrap();
        assert!(m.matches("exit"));
        assert!(!m.matches("please exit"));
    }

    #[test]
    fn named_groups() {
        let mut m = Matcher::new(r"(?<x>\d+),(?<y>\d+)").unwrap();
        assert_eq!(m.shape(), CaptureShape::Named);
        assert!(m.matches("3,4"));
        assert_eq!(m.captures().name("x"), Some("3"));
        assert_eq!(m.captures().name("y"), Some("4"));
    }

    #[test]
    fn positional_groups() {
        let mut m = Matcher::new(r"(\w+) (\w+)").unwrap();
        assert!(m.matches("swap top"));
        assert_eq!(
            m.captures(),
            &Captures::Positional(vec![Some("swap".into()), Some("top".into())])
        );
    }

    #[test]
    fn no_groups_captures_full_input() {
        let mut m = Matcher::new("show").unwrap();
        assert!(m.matches("show all of it"));
        assert_eq!(m.captures(), &Captures::WholeText("show all of it".into()));
    }

    #[test]
    fn rematch_replaces_captures() {
        let mut m = Matcher::new(r"add (.+)").unwrap();
        assert!(m.matches("add one"));
        assert!(m.matches("add two"));
        assert_eq!(m.captures().get(0), Some("two"));
        assert_eq!(m.captures().len(), 1);

        assert!(!m.matches("pop"));
        assert!(m.try_captures().is_none());
    }

    #[test]
    #[should_panic(expected = "before any match attempt")]
    fn captures_before_attempt_panics() {
        let m = Matcher::new("pop").unwrap();
        let _ = m.captures();
    }

    #[test]
    #[should_panic(expected = "after a failed match")]
    fn captures_after_miss_panics() {
        let mut m = Matcher::new("pop").unwrap();
        m.matches("push");
        let _ = m.captures();
    }
}
