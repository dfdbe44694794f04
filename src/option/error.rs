//! Error type for leaving `Maybe` code through `Result`.

/// Represents an attempt to read the payload of an absent [`Maybe`](super::Maybe).
///
/// Returned by [`Maybe::ok_or_missing`](super::Maybe::ok_or_missing) so that
/// `Maybe` values can be unpacked with `?` in functions returning `Result`.
///
/// # Examples
///
/// ```rust
/// use slim_monads::option::{Maybe, MissingValueError};
///
/// let error = Maybe::<i32>::none().ok_or_missing().unwrap_err();
/// assert_eq!(error, MissingValueError::new("i32"));
/// assert_eq!(format!("{error}"), "expected Some(i32) but found None");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingValueError {
    /// The name of the payload type that was expected.
    pub type_name: &'static str,
}

impl MissingValueError {
    /// Creates an error for a missing payload of the named type.
    #[inline]
    #[must_use]
    pub const fn new(type_name: &'static str) -> Self {
        Self { type_name }
    }
}

impl std::fmt::Display for MissingValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "expected Some({}) but found None", self.type_name)
    }
}

impl std::error::Error for MissingValueError {}
