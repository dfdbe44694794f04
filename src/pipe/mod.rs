//! Pipe helpers: thread a value through a transformation.
//!
//! This module provides:
//!
//! - [`pipe`]: Apply a single transformation to a value
//! - [`Pipe`]: Method form, `value.pipe(transform)`, for any sized value
//! - [`pipe!`](crate::pipe!): Apply several transformations from left to right
//!
//! With the `async` feature:
//!
//! - [`pipe_async`]: Apply an asynchronous transformation to a value
//! - [`pipe_async_from`] / [`PipeAsyncExt::pipe_async`]: Await an upstream
//!   future, then apply an asynchronous transformation to its output
//! - [`try_pipe_async_from`] / [`PipeAsyncExt::try_pipe_async`]: The same for
//!   `Result`-producing futures, stopping at the first `Err`
//!
//! # Examples
//!
//! ```
//! use slim_monads::pipe::{Pipe, pipe};
//!
//! assert_eq!(pipe(3, |x| x * 2), 6);
//! assert_eq!("ferris".pipe(str::len), 6);
//! ```

#[cfg(feature = "async")]
mod async_pipe;

#[cfg(feature = "async")]
pub use async_pipe::{
    PipeAsync, PipeAsyncExt, TryPipeAsync, pipe_async, pipe_async_from, try_pipe_async_from,
};

/// Applies `transform` to `value` and returns the result.
///
/// Failures raised by `transform` (panics) propagate unchanged.
///
/// # Examples
///
/// ```
/// use slim_monads::pipe::pipe;
///
/// assert_eq!(pipe(12345, |x: i32| x.to_string().len()), 5);
/// ```
#[inline]
pub fn pipe<A, B, F>(value: A, transform: F) -> B
where
    F: FnOnce(A) -> B,
{
    transform(value)
}

/// Method form of [`pipe`], available on every sized value.
///
/// # Examples
///
/// ```
/// use slim_monads::pipe::Pipe;
///
/// let shout = String::from("hello")
///     .pipe(|text| text.to_uppercase())
///     .pipe(|text| format!("{text}!"));
/// assert_eq!(shout, "HELLO!");
/// ```
pub trait Pipe: Sized {
    /// Applies `transform` to `self` and returns the result.
    #[inline]
    fn pipe<B, F>(self, transform: F) -> B
    where
        F: FnOnce(Self) -> B,
    {
        transform(self)
    }
}

impl<A> Pipe for A {}

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`, the same as [`pipe`](crate::pipe::pipe)
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// Each function only needs to implement [`FnOnce`], since each function
/// is called exactly once.
///
/// # Examples
///
/// ```
/// use slim_monads::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // 3 -> square(3)=9 -> double(9)=18 -> add_one(18)=19
/// let result = pipe!(3, square, double, add_one);
/// assert_eq!(result, 19);
/// ```
#[cfg_attr(
    feature = "option",
    doc = r#"
## Through `Maybe`

```
use slim_monads::pipe;
use slim_monads::option::{Fallback, Maybe, NullToNone};

let parse = |text: &str| text.parse::<i32>().ok().null_to_none();
let double = |maybe: Maybe<i32>| maybe.map(|x| x * 2);
let or_zero = |maybe: Maybe<i32>| maybe.or_value(0);

assert_eq!(pipe!("21", parse, double, or_zero), 42);
assert_eq!(pipe!("n/a", parse, double, or_zero), 0);
```
"#
)]
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $crate::pipe::pipe($value, $function)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($crate::pipe::pipe($value, $function), $($remaining_functions),+)
    };
}
