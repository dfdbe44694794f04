//! # slim-monads
//!
//! A slim functional programming layer for Rust: an optional-value type with
//! fallback combinators, and pipe helpers for threading a value through
//! synchronous and asynchronous transformations.
//!
//! ## Overview
//!
//! - **Optional values**: [`Maybe`](option::Maybe) with `Some`/`None`
//!   construction and two-branch elimination through the
//!   [`OptionLike`](option::OptionLike) capability
//! - **Fallbacks**: the `or_*` family on every `OptionLike` type, eager and lazy,
//!   plus [`null_to_none`](option::null_to_none) at the boundary with
//!   `std::option::Option`
//! - **Pipes**: [`pipe`](pipe::pipe), the [`pipe!`] macro, and asynchronous
//!   pipelines that chain without intermediate `.await`s
//!
//! ## Feature Flags
//!
//! - `option`: `Maybe`, `OptionLike` and the fallback combinators
//! - `pipe`: synchronous pipe helpers
//! - `async`: asynchronous pipe helpers (implies `pipe`)
//! - `full`: Enable all features
#![cfg_attr(
    all(feature = "option", feature = "pipe"),
    doc = r#"
## Example

```rust
use slim_monads::prelude::*;

let port = null_to_none(std::env::var("NO_SUCH_PORT_VARIABLE").ok())
    .flat_map(|text| text.parse::<u16>().ok().null_to_none())
    .or_value(8080);
assert_eq!(port, 8080);

assert_eq!(3_i32.pipe(|x| x * 2), 6);
```
"#
)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use slim_monads::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "option")]
    pub use crate::option::*;

    #[cfg(feature = "pipe")]
    pub use crate::pipe::*;
}

#[cfg(feature = "option")]
pub mod option;

#[cfg(feature = "pipe")]
pub mod pipe;
