//! Optional values with explicit two-branch elimination.
//!
//! This module provides the `Maybe<T>` type, which is either `Some(T)` or
//! `None`, together with the [`OptionLike`] capability that the fallback
//! combinators are written against.
//!
//! - [`Maybe`]: The optional-value container
//! - [`OptionLike`]: Anything that can eliminate itself with `match_with`
//! - [`Fallback`]: The `or_*` family, available on every `OptionLike` type
//! - [`null_to_none`] / [`NullToNone`]: Entry point from `std::option::Option`
//! - [`MissingValueError`]: Error for leaving `Maybe` code through `?`
//!
//! # Elimination
//!
//! The payload of a `Maybe` is read through [`OptionLike::match_with`], which
//! takes one branch for the present case and one for the absent case and runs
//! exactly one of them. Both branches must return the same type.
//!
//! ```rust
//! use slim_monads::option::{Maybe, OptionLike};
//!
//! let greeting = Maybe::some("world").match_with(
//!     |name| format!("Hello, {name}!"),
//!     || "Hello, nobody!".to_string(),
//! );
//! assert_eq!(greeting, "Hello, world!");
//! ```
//!
//! # Native optionality
//!
//! `Maybe::some` wraps whatever it is given, so `Maybe::some(None::<i32>)` is a
//! *present* value holding `None`. Values coming from `std::option::Option`
//! should enter through [`null_to_none`], which maps `None` to `Maybe::None`.
//!
//! ```rust
//! use slim_monads::option::{Maybe, null_to_none};
//!
//! assert!(Maybe::some(None::<i32>).is_some());
//! assert!(null_to_none(None::<i32>).is_none());
//! ```

mod error;
mod fallback;

pub use error::MissingValueError;
pub use fallback::{Fallback, NullToNone, null_to_none};

use std::fmt;

use static_assertions::assert_impl_all;

// =============================================================================
// OptionLike Capability
// =============================================================================

/// A type that can be eliminated into a single result by two branches.
///
/// This is the capability required by the [`Fallback`] combinators. Any type
/// that implements `match_with` gets the whole `or_*` family for free.
///
/// # Laws
///
/// - For a present value `v`, `match_with(f, g) == f(v)` and `g` is not called.
/// - For an absent value, `match_with(f, g) == g()` and `f` is not called.
///
/// # Examples
///
/// ```rust
/// use slim_monads::option::{Fallback, Maybe, OptionLike};
///
/// struct Flag(bool);
///
/// impl OptionLike<()> for Flag {
///     fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
///     where
///         S: FnOnce(()) -> R,
///         N: FnOnce() -> R,
///     {
///         if self.0 { on_some(()) } else { on_none() }
///     }
/// }
///
/// assert_eq!(Flag(false).or_option(Maybe::some(())), Maybe::some(()));
/// ```
pub trait OptionLike<T>: Sized {
    /// Runs `on_some` with the payload if present, otherwise runs `on_none`.
    fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R;
}

// =============================================================================
// Maybe Definition
// =============================================================================

/// An optional value: either `Some(T)` or `None`.
///
/// `Maybe<T>` is an immutable value type. Its variants share their names with
/// the prelude's `Option` variants, so they are written qualified
/// (`Maybe::Some`, `Maybe::None`).
///
/// # Examples
///
/// ```rust
/// use slim_monads::option::{Fallback, Maybe};
///
/// let present = Maybe::some(5);
/// let absent: Maybe<i32> = Maybe::none();
///
/// assert_eq!(present.or_value(0), 5);
/// assert_eq!(absent.or_value(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// A value is present.
    Some(T),
    /// No value is present.
    None,
}

assert_impl_all!(Maybe<i32>: Send, Sync, Copy, Default);
assert_impl_all!(Maybe<String>: Send, Sync, Clone, std::hash::Hash);

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps `value` in a present `Maybe`.
    ///
    /// No check is performed on the value: wrapping a `None` of some inner
    /// `Option` still produces a present `Maybe`. Use [`null_to_none`] to map
    /// native absence to `Maybe::None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slim_monads::option::Maybe;
    ///
    /// assert!(Maybe::some(42).is_some());
    /// assert!(Maybe::some(None::<i32>).is_some());
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an absent `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slim_monads::option::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::none();
    /// assert!(absent.is_none());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Converts a raw value into a present `Maybe`.
    ///
    /// Equivalent to [`Maybe::some`] and to `Maybe::from(value)`.
    #[inline]
    #[must_use]
    pub const fn from_value(value: T) -> Self {
        Self::some(value)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the payload, producing a `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slim_monads::option::{Maybe, OptionLike};
    ///
    /// let name = Maybe::some(String::from("ferris"));
    /// let length = name.as_ref().match_with(|name| name.len(), || 0);
    /// assert_eq!(length, 6);
    /// assert!(name.is_some());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies `function` to the payload if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slim_monads::option::Maybe;
    ///
    /// assert_eq!(Maybe::some(21).map(|x| x * 2), Maybe::some(42));
    /// assert_eq!(Maybe::<i32>::none().map(|x| x * 2), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.match_with(|value| Maybe::Some(function(value)), Maybe::none)
    }

    /// Applies a `Maybe`-returning `function` to the payload if present and
    /// flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slim_monads::option::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::some(8).flat_map(half), Maybe::some(4));
    /// assert_eq!(Maybe::some(7).flat_map(half), Maybe::none());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.match_with(function, Maybe::none)
    }

    /// Keeps the payload only if it satisfies `predicate`.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.match_with(
            |value| {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            },
            Self::none,
        )
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.match_with(Option::Some, || Option::None)
    }

    /// Returns the payload, or a [`MissingValueError`] naming `T` if absent.
    ///
    /// # Errors
    ///
    /// Returns `MissingValueError` when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slim_monads::option::{Maybe, MissingValueError};
    ///
    /// fn double(input: Maybe<i32>) -> Result<i32, MissingValueError> {
    ///     Ok(input.ok_or_missing()? * 2)
    /// }
    ///
    /// assert_eq!(double(Maybe::some(4)), Ok(8));
    /// assert!(double(Maybe::none()).is_err());
    /// ```
    #[inline]
    pub fn ok_or_missing(self) -> Result<T, MissingValueError> {
        self.match_with(Ok, || {
            Err(MissingValueError::new(std::any::type_name::<T>()))
        })
    }
}

impl<T> OptionLike<T> for Maybe<T> {
    #[inline]
    fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }
}

impl<T> OptionLike<T> for Option<T> {
    #[inline]
    fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        self.map_or_else(on_none, on_some)
    }
}

// =============================================================================
// Default / Debug / Display
// =============================================================================

impl<T> Default for Maybe<T> {
    /// Returns `Maybe::None`.
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<T> for Maybe<T> {
    /// Wraps a raw value, equivalent to [`Maybe::some`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slim_monads::option::Maybe;
    ///
    /// let wrapped: Maybe<&str> = "hello".into();
    /// assert_eq!(wrapped, Maybe::some("hello"));
    /// ```
    #[inline]
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` into the standard library's `Option`.
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}
