//! Property-based tests for dispatch ordering using proptest.

use std::cell::RefCell;
use std::rc::Rc;

use chainline_dispatch::{Dispatched, Dispatcher, SharedOutput};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

/// Registers `count` handlers with distinct keywords `cmd0..cmdN` and returns
/// the log of which handler fired.
fn keyword_chain(count: usize) -> (Dispatcher, Rc<RefCell<Vec<usize>>>) {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = Dispatcher::with_output(SharedOutput::new());
    for id in 0..count {
        let log = fired.clone();
        dispatcher
            .register_pattern(
                &format!(r"cmd{}\b", id),
                move |_, _, _| {
                    log.borrow_mut().push(id);
                    Ok(())
                },
                None,
            )
            .unwrap();
    }
    (dispatcher, fired)
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Exactly the one matching handler fires, whatever surrounds it.
    #[test]
    fn only_the_matching_handler_fires(
        (count, target) in (1usize..12).prop_flat_map(|n| (Just(n), 0..n)),
        suffix in "( [a-z0-9]{0,8})?",
    ) {
        let (mut dispatcher, fired) = keyword_chain(count);

        let result = dispatcher.dispatch(&format!("cmd{}{}", target, suffix)).unwrap();

        // Two built-ins sit in front of the application handlers
        prop_assert_eq!(result, Dispatched::Handled { index: target + 2 });
        prop_assert_eq!(fired.borrow().clone(), vec![target]);
    }

    /// Lines that no keyword matches never fire anything.
    #[test]
    fn unmatched_lines_fire_nothing(
        count in 1usize..12,
        line in "[a-z ]{0,20}",
    ) {
        prop_assume!(!line.starts_with("cmd") && !line.starts_with("help") && !line.starts_with("exit"));
        let (mut dispatcher, fired) = keyword_chain(count);

        let result = dispatcher.dispatch(&line).unwrap();

        prop_assert_eq!(result, Dispatched::Unmatched);
        prop_assert!(fired.borrow().is_empty());
        prop_assert!(dispatcher.is_running());
    }

    /// Whatever the earlier history, a handler's captures reflect only the
    /// latest line it matched.
    #[test]
    fn captures_track_latest_line(values in prop::collection::vec("[a-z]{1,6}", 1..8)) {
        let last = Rc::new(RefCell::new(String::new()));
        let slot = last.clone();
        let mut dispatcher = Dispatcher::with_output(SharedOutput::new());
        dispatcher
            .register_pattern(
                r"set (?<v>\w+)",
                move |caps, _, _| {
                    *slot.borrow_mut() = caps.name("v").unwrap_or_default().to_string();
                    Ok(())
                },
                None,
            )
            .unwrap();

        for value in &values {
            dispatcher.dispatch(&format!("set {}", value)).unwrap();
        }

        prop_assert_eq!(last.borrow().clone(), values.last().unwrap().clone());
    }
}
