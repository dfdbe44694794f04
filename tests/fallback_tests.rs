//! Unit tests for the Fallback combinators.
//!
//! The `or_*` family substitutes an alternative for an absent value. The
//! factory forms must not run when the source is present.

#![cfg(feature = "option")]

use rstest::rstest;
use slim_monads::option::{Fallback, Maybe, OptionLike};
use std::cell::{Cell, RefCell};

// =============================================================================
// or_value / or_value_with
// =============================================================================

#[rstest]
#[case(Maybe::some(5), 5)]
#[case(Maybe::none(), 9)]
fn or_value_returns_payload_or_alternative(#[case] source: Maybe<i32>, #[case] expected: i32) {
    assert_eq!(source.or_value(9), expected);
}

#[rstest]
fn or_value_with_does_not_run_factory_when_present() {
    let result = Maybe::some(5).or_value_with(|| panic!("factory must not run"));
    assert_eq!(result, 5);
}

#[rstest]
fn or_value_with_runs_factory_when_absent() {
    assert_eq!(Maybe::none().or_value_with(|| 7), 7);
}

#[rstest]
#[should_panic(expected = "lookup failed")]
fn or_value_with_propagates_factory_panic() {
    let _ = Maybe::<i32>::none().or_value_with(|| panic!("lookup failed"));
}

// =============================================================================
// or_option / or_option_with
// =============================================================================

#[rstest]
#[case(Maybe::some(5), Maybe::some(9), Maybe::some(5))]
#[case(Maybe::none(), Maybe::some(9), Maybe::some(9))]
#[case(Maybe::some(5), Maybe::none(), Maybe::some(5))]
#[case(Maybe::none(), Maybe::none(), Maybe::none())]
fn or_option_prefers_source(
    #[case] source: Maybe<i32>,
    #[case] alternative: Maybe<i32>,
    #[case] expected: Maybe<i32>,
) {
    assert_eq!(source.or_option(alternative), expected);
}

#[rstest]
fn or_option_with_may_produce_none() {
    let result: Maybe<i32> = Maybe::none().or_option_with(Maybe::none);
    assert_eq!(result, Maybe::none());
}

#[rstest]
fn or_option_with_does_not_run_factory_when_present() {
    let calls = Cell::new(0);
    let result = Maybe::some("cached").or_option_with(|| {
        calls.set(calls.get() + 1);
        Maybe::some("database")
    });
    assert_eq!(result, Maybe::some("cached"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn or_option_with_chains_in_order() {
    let visited = RefCell::new(Vec::new());
    let lookup = |name: &'static str, hit: bool| {
        visited.borrow_mut().push(name);
        if hit { Maybe::some(name) } else { Maybe::none() }
    };

    let result = Maybe::none()
        .or_option_with(|| lookup("memory", false))
        .or_option_with(|| lookup("disk", true))
        .or_option_with(|| lookup("network", true));

    assert_eq!(result, Maybe::some("disk"));
    assert_eq!(*visited.borrow(), vec!["memory", "disk"]);
}

// =============================================================================
// Fallible factories
// =============================================================================

#[rstest]
fn try_or_value_with_returns_factory_error_unchanged() {
    let result: Result<i32, String> =
        Maybe::none().try_or_value_with(|| Err("connection refused".to_string()));
    assert_eq!(result, Err("connection refused".to_string()));
}

#[rstest]
fn try_or_value_with_skips_failing_factory_when_present() {
    let result: Result<i32, String> =
        Maybe::some(3).try_or_value_with(|| Err("never evaluated".to_string()));
    assert_eq!(result, Ok(3));
}

#[rstest]
#[case(Maybe::some(1), Ok(Maybe::some(1)))]
#[case(Maybe::none(), Err("missing"))]
fn try_or_option_with_cases(
    #[case] source: Maybe<i32>,
    #[case] expected: Result<Maybe<i32>, &'static str>,
) {
    assert_eq!(source.try_or_option_with(|| Err("missing")), expected);
}

// =============================================================================
// Generic over OptionLike
// =============================================================================

/// A cache slot that is either filled or empty.
enum Slot {
    Filled(i32),
    Empty,
}

impl OptionLike<i32> for Slot {
    fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(i32) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Filled(value) => on_some(value),
            Self::Empty => on_none(),
        }
    }
}

#[rstest]
fn fallback_works_for_custom_option_like() {
    assert_eq!(Slot::Filled(1).or_value(2), 1);
    assert_eq!(Slot::Empty.or_value(2), 2);
    assert_eq!(Slot::Empty.or_option(Maybe::some(3)), Maybe::some(3));
    assert_eq!(
        Slot::Filled(4).or_option_with(|| panic!("not needed")),
        Maybe::some(4)
    );
}

#[rstest]
fn fallback_works_for_std_option() {
    assert_eq!(Some(1).or_value(2), 1);
    assert_eq!(None::<i32>.or_option(Maybe::some(2)), Maybe::some(2));
}

fn first_or_default<O: Fallback<i32>>(source: O) -> i32 {
    source.or_value(-1)
}

#[rstest]
fn fallback_as_generic_bound() {
    assert_eq!(first_or_default(Maybe::some(8)), 8);
    assert_eq!(first_or_default(None::<i32>), -1);
    assert_eq!(first_or_default(Slot::Empty), -1);
}
