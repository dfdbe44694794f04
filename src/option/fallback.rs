//! Fallback combinators for [`OptionLike`] values.
//!
//! The [`Fallback`] trait is implemented for every `OptionLike` type and
//! substitutes an alternative when the source is absent. It comes in an eager
//! and a lazy form for both a raw alternative value and an alternative
//! `Maybe`:
//!
//! | Method | When absent | When present | Returns |
//! |---|---|---|---|
//! | `or_value` | the given value | the payload | `T` |
//! | `or_value_with` | `factory()` | the payload | `T` |
//! | `or_option` | the given `Maybe` | `Maybe::Some(payload)` | `Maybe<T>` |
//! | `or_option_with` | `factory()` | `Maybe::Some(payload)` | `Maybe<T>` |
//!
//! Factories run only when the source is absent, so an expensive or
//! side-effecting fallback costs nothing on the present path.
//!
//! ```rust
//! use slim_monads::option::{Fallback, Maybe};
//!
//! let cached = Maybe::some(5);
//! let value = cached.or_value_with(|| panic!("never called for a present value"));
//! assert_eq!(value, 5);
//! ```

use super::{Maybe, OptionLike};

/// Substitutes an alternative for an absent [`OptionLike`] value.
///
/// Blanket-implemented for every `OptionLike<T>`, including [`Maybe<T>`] and
/// `std::option::Option<T>`.
pub trait Fallback<T>: OptionLike<T> {
    /// Returns the payload, or `alternative` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slim_monads::option::{Fallback, Maybe};
    ///
    /// assert_eq!(Maybe::some(5).or_value(7), 5);
    /// assert_eq!(Maybe::none().or_value(7), 7);
    /// ```
    #[inline]
    fn or_value(self, alternative: T) -> T {
        self.match_with(|value| value, || alternative)
    }

    /// Returns the payload, or the result of `factory` if absent.
    ///
    /// `factory` is never called when a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slim_monads::option::{Fallback, Maybe};
    ///
    /// assert_eq!(Maybe::none().or_value_with(|| 7), 7);
    /// ```
    #[inline]
    fn or_value_with<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.match_with(|value| value, factory)
    }

    /// Returns `Maybe::Some(payload)`, or `alternative` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slim_monads::option::{Fallback, Maybe};
    ///
    /// assert_eq!(Maybe::some(5).or_option(Maybe::some(9)), Maybe::some(5));
    /// assert_eq!(Maybe::none().or_option(Maybe::some(9)), Maybe::some(9));
    /// ```
    #[inline]
    fn or_option(self, alternative: Maybe<T>) -> Maybe<T> {
        self.match_with(Maybe::Some, || alternative)
    }

    /// Returns `Maybe::Some(payload)`, or the result of `factory` if absent.
    ///
    /// `factory` is never called when a value is present.
    #[inline]
    fn or_option_with<F>(self, factory: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        self.match_with(Maybe::Some, factory)
    }

    /// Returns `Ok(payload)`, or the result of the fallible `factory` if absent.
    ///
    /// An error from `factory` is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `factory`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slim_monads::option::{Fallback, Maybe};
    ///
    /// let lookup = || "42".parse::<i32>();
    /// assert_eq!(Maybe::none().try_or_value_with(lookup), Ok(42));
    ///
    /// let broken = || "forty-two".parse::<i32>();
    /// assert!(Maybe::none().try_or_value_with(broken).is_err());
    /// assert_eq!(Maybe::some(1).try_or_value_with(broken), Ok(1));
    /// ```
    #[inline]
    fn try_or_value_with<E, F>(self, factory: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.match_with(Ok, factory)
    }

    /// Returns `Ok(Maybe::Some(payload))`, or the result of the fallible
    /// `factory` if absent.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `factory`.
    #[inline]
    fn try_or_option_with<E, F>(self, factory: F) -> Result<Maybe<T>, E>
    where
        F: FnOnce() -> Result<Maybe<T>, E>,
    {
        self.match_with(|value| Ok(Maybe::Some(value)), factory)
    }
}

impl<T, O: OptionLike<T>> Fallback<T> for O {}

// =============================================================================
// NullToNone
// =============================================================================

/// Converts a native `Option` into a [`Maybe`], mapping `None` to `Maybe::None`.
///
/// This is the boundary where native optionality enters `Maybe`-based code.
/// Unlike [`Maybe::some`], which wraps anything it is given, this inspects
/// the value first.
///
/// # Examples
///
/// ```rust
/// use slim_monads::option::{Maybe, null_to_none};
///
/// assert_eq!(null_to_none(Some(3)), Maybe::some(3));
/// assert_eq!(null_to_none(None::<i32>), Maybe::none());
/// ```
#[inline]
pub fn null_to_none<T>(value: Option<T>) -> Maybe<T> {
    value.map_or_else(Maybe::none, Maybe::Some)
}

/// Method form of [`null_to_none`].
///
/// # Examples
///
/// ```rust
/// use slim_monads::option::{Maybe, NullToNone};
///
/// let scores = [10, 20, 30];
/// assert_eq!(scores.first().null_to_none(), Maybe::some(&10));
/// assert_eq!(scores.get(7).null_to_none(), Maybe::none());
/// ```
pub trait NullToNone<T> {
    /// Converts `self` into a [`Maybe`], mapping absence to `Maybe::None`.
    fn null_to_none(self) -> Maybe<T>;
}

impl<T> NullToNone<T> for Option<T> {
    #[inline]
    fn null_to_none(self) -> Maybe<T> {
        null_to_none(self)
    }
}
