//! Property-based tests for Maybe laws.
//!
//! - **Elimination**: `some(v).match_with(f, g) == f(v)`, `none().match_with(f, g) == g()`
//! - **Functor Identity**: `m.map(|x| x) == m`
//! - **Functor Composition**: `m.map(f).map(g) == m.map(|x| g(f(x)))`
//! - **Monad Left Identity**: `some(a).flat_map(f) == f(a)`
//! - **Monad Right Identity**: `m.flat_map(Maybe::some) == m`
//! - **Fallback Identity**: `m.or_option(none()) == m`, `none().or_option(m) == m`

#![cfg(feature = "option")]

use proptest::prelude::*;
use slim_monads::option::{Fallback, Maybe, OptionLike, null_to_none};

fn maybe_strategy<T: Arbitrary>() -> impl Strategy<Value = Maybe<T>> {
    any::<Option<T>>().prop_map(null_to_none)
}

proptest! {
    #[test]
    fn prop_some_eliminates_to_some_branch(value in any::<i32>()) {
        let result = Maybe::some(value).match_with(|x| x.wrapping_mul(3), || 0);
        prop_assert_eq!(result, value.wrapping_mul(3));
    }

    #[test]
    fn prop_none_eliminates_to_none_branch(fallback in any::<i32>()) {
        let result = Maybe::<i32>::none().match_with(|_| unreachable!(), || fallback);
        prop_assert_eq!(result, fallback);
    }

    #[test]
    fn prop_null_to_none_agrees_with_std(value in any::<Option<i64>>()) {
        prop_assert_eq!(null_to_none(value).into_option(), value);
    }

    #[test]
    fn prop_functor_identity(maybe in maybe_strategy::<String>()) {
        prop_assert_eq!(maybe.clone().map(|x| x), maybe);
    }

    #[test]
    fn prop_functor_composition(maybe in maybe_strategy::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = maybe.map(function1).map(function2);
        let right = maybe.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_monad_left_identity(value in any::<i32>()) {
        let function = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };
        prop_assert_eq!(Maybe::some(value).flat_map(function), function(value));
    }

    #[test]
    fn prop_monad_right_identity(maybe in maybe_strategy::<i32>()) {
        prop_assert_eq!(maybe.flat_map(Maybe::some), maybe);
    }

    #[test]
    fn prop_or_option_none_is_identity(maybe in maybe_strategy::<i32>()) {
        prop_assert_eq!(maybe.or_option(Maybe::none()), maybe);
        prop_assert_eq!(Maybe::none().or_option(maybe), maybe);
    }

    #[test]
    fn prop_or_value_matches_std_unwrap_or(
        value in any::<Option<i32>>(),
        alternative in any::<i32>()
    ) {
        prop_assert_eq!(null_to_none(value).or_value(alternative), value.unwrap_or(alternative));
    }
}
