//! Asynchronous pipes.
//!
//! [`pipe_async`] feeds a plain value into an asynchronous transformation.
//! [`pipe_async_from`] and [`PipeAsyncExt::pipe_async`] feed the output of an
//! upstream future into one, which lets stages chain without intermediate
//! `.await`s:
//!
//! ```rust
//! use futures::executor::block_on;
//! use futures::future::ready;
//! use slim_monads::pipe::PipeAsyncExt;
//!
//! let length = ready("ferris")
//!     .pipe_async(|name| async move { name.to_uppercase() })
//!     .pipe_async(|name| async move { name.len() });
//! assert_eq!(block_on(length), 6);
//! ```
//!
//! # Ordering
//!
//! The upstream future is driven to completion before the transformation is
//! called, and the two futures are never polled concurrently. All futures
//! here are lazy: nothing runs until they are polled, no task is spawned, and
//! dropping a future cancels the whole pipeline.
//!
//! # Failures
//!
//! Panics propagate unchanged. For `Result`-producing futures,
//! [`try_pipe_async_from`] and [`PipeAsyncExt::try_pipe_async`] stop at an
//! upstream `Err`, returning it as-is without calling the transformation.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures::TryFuture;
use futures::future::FusedFuture;
use pin_project_lite::pin_project;

// =============================================================================
// Free Functions
// =============================================================================

/// Applies the asynchronous `transform` to `value` and awaits its result.
///
/// # Examples
///
/// ```rust
/// use futures::executor::block_on;
/// use slim_monads::pipe::pipe_async;
///
/// let doubled = pipe_async(3, |x| async move { x * 2 });
/// assert_eq!(block_on(doubled), 6);
/// ```
pub async fn pipe_async<A, B, F, Fut>(value: A, transform: F) -> B
where
    F: FnOnce(A) -> Fut,
    Fut: Future<Output = B>,
{
    transform(value).await
}

/// Awaits `upstream`, then applies the asynchronous `transform` to its output.
///
/// `transform` is called only after `upstream` has completed.
///
/// # Examples
///
/// ```rust
/// use futures::executor::block_on;
/// use futures::future::ready;
/// use slim_monads::pipe::pipe_async_from;
///
/// let doubled = pipe_async_from(ready(3), |x| async move { x * 2 });
/// assert_eq!(block_on(doubled), 6);
/// ```
pub const fn pipe_async_from<Up, F, Fut>(upstream: Up, transform: F) -> PipeAsync<Up, F, Fut>
where
    Up: Future,
    F: FnOnce(Up::Output) -> Fut,
    Fut: Future,
{
    PipeAsync {
        state: PipeState::Upstream {
            upstream,
            transform: Some(transform),
        },
    }
}

/// Awaits the fallible `upstream`, then applies the fallible asynchronous
/// `transform` to its `Ok` value.
///
/// If `upstream` resolves to `Err`, that error is returned unchanged and
/// `transform` is never called.
///
/// # Examples
///
/// ```rust
/// use futures::executor::block_on;
/// use futures::future::ready;
/// use slim_monads::pipe::try_pipe_async_from;
/// use std::num::ParseIntError;
///
/// let parsed = try_pipe_async_from(ready("21".parse::<i32>()), |x| async move {
///     Ok::<_, ParseIntError>(x * 2)
/// });
/// assert_eq!(block_on(parsed), Ok(42));
///
/// let failed = try_pipe_async_from(ready("n/a".parse::<i32>()), |x| async move {
///     Ok::<_, ParseIntError>(x * 2)
/// });
/// assert!(block_on(failed).is_err());
/// ```
pub const fn try_pipe_async_from<Up, F, Fut>(
    upstream: Up,
    transform: F,
) -> TryPipeAsync<Up, F, Fut>
where
    Up: TryFuture,
    F: FnOnce(Up::Ok) -> Fut,
    Fut: TryFuture<Error = Up::Error>,
{
    TryPipeAsync {
        state: PipeState::Upstream {
            upstream,
            transform: Some(transform),
        },
    }
}

// =============================================================================
// Extension Trait
// =============================================================================

/// Method forms of [`pipe_async_from`] and [`try_pipe_async_from`] for every
/// future.
pub trait PipeAsyncExt: Future + Sized {
    /// Awaits `self`, then applies the asynchronous `transform` to its output.
    fn pipe_async<F, Fut>(self, transform: F) -> PipeAsync<Self, F, Fut>
    where
        F: FnOnce(Self::Output) -> Fut,
        Fut: Future,
    {
        pipe_async_from(self, transform)
    }

    /// Awaits `self`, then applies the fallible asynchronous `transform` to
    /// its `Ok` value, passing an upstream `Err` through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::executor::block_on;
    /// use futures::future::ready;
    /// use slim_monads::pipe::PipeAsyncExt;
    ///
    /// let total = ready(Ok::<i32, String>(1))
    ///     .try_pipe_async(|x| async move { Ok::<i32, String>(x + 1) })
    ///     .try_pipe_async(|x| async move { Ok::<i32, String>(x * 10) });
    /// assert_eq!(block_on(total), Ok(20));
    /// ```
    fn try_pipe_async<F, Fut>(self, transform: F) -> TryPipeAsync<Self, F, Fut>
    where
        Self: TryFuture,
        F: FnOnce(Self::Ok) -> Fut,
        Fut: TryFuture<Error = Self::Error>,
    {
        try_pipe_async_from(self, transform)
    }
}

impl<Up: Future> PipeAsyncExt for Up {}

// =============================================================================
// Futures
// =============================================================================

pin_project! {
    /// Future returned by [`pipe_async_from`] and [`PipeAsyncExt::pipe_async`].
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct PipeAsync<Up, F, Fut> {
        #[pin]
        state: PipeState<Up, F, Fut>,
    }
}

pin_project! {
    /// Future returned by [`try_pipe_async_from`] and
    /// [`PipeAsyncExt::try_pipe_async`].
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct TryPipeAsync<Up, F, Fut> {
        #[pin]
        state: PipeState<Up, F, Fut>,
    }
}

pin_project! {
    /// Shared state machine of the two pipe futures.
    ///
    /// `Upstream` -> `Transform` -> `Complete`, or `Upstream` -> `Complete`
    /// when a fallible upstream fails.
    #[project = PipeStateProj]
    enum PipeState<Up, F, Fut> {
        /// Waiting for the upstream future; the transform has not run yet.
        Upstream {
            #[pin]
            upstream: Up,
            transform: Option<F>,
        },
        /// Waiting for the future produced by the transform.
        Transform {
            #[pin]
            future: Fut,
        },
        Complete,
    }
}

impl<Up, F, Fut> Future for PipeAsync<Up, F, Fut>
where
    Up: Future,
    F: FnOnce(Up::Output) -> Fut,
    Fut: Future,
{
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            match this.state.as_mut().project() {
                PipeStateProj::Upstream {
                    upstream,
                    transform,
                } => {
                    let value = ready!(upstream.poll(context));
                    // INVARIANT: the transform is taken exactly once, on leaving Upstream
                    let transform = transform
                        .take()
                        .expect("PipeAsync internal error: transform was already consumed");
                    this.state.set(PipeState::Transform {
                        future: transform(value),
                    });
                }
                PipeStateProj::Transform { future } => {
                    let output = ready!(future.poll(context));
                    this.state.set(PipeState::Complete);
                    return Poll::Ready(output);
                }
                PipeStateProj::Complete => panic!("`PipeAsync` polled after completion"),
            }
        }
    }
}

impl<Up, F, Fut> FusedFuture for PipeAsync<Up, F, Fut>
where
    Up: Future,
    F: FnOnce(Up::Output) -> Fut,
    Fut: Future,
{
    fn is_terminated(&self) -> bool {
        matches!(self.state, PipeState::Complete)
    }
}

impl<Up, F, Fut> Future for TryPipeAsync<Up, F, Fut>
where
    Up: TryFuture,
    F: FnOnce(Up::Ok) -> Fut,
    Fut: TryFuture<Error = Up::Error>,
{
    type Output = Result<Fut::Ok, Fut::Error>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            match this.state.as_mut().project() {
                PipeStateProj::Upstream {
                    upstream,
                    transform,
                } => match ready!(upstream.try_poll(context)) {
                    Ok(value) => {
                        let transform = transform
                            .take()
                            .expect("TryPipeAsync internal error: transform was already consumed");
                        this.state.set(PipeState::Transform {
                            future: transform(value),
                        });
                    }
                    Err(error) => {
                        this.state.set(PipeState::Complete);
                        return Poll::Ready(Err(error));
                    }
                },
                PipeStateProj::Transform { future } => {
                    let output = ready!(future.try_poll(context));
                    this.state.set(PipeState::Complete);
                    return Poll::Ready(output);
                }
                PipeStateProj::Complete => panic!("`TryPipeAsync` polled after completion"),
            }
        }
    }
}

impl<Up, F, Fut> FusedFuture for TryPipeAsync<Up, F, Fut>
where
    Up: TryFuture,
    F: FnOnce(Up::Ok) -> Fut,
    Fut: TryFuture<Error = Up::Error>,
{
    fn is_terminated(&self) -> bool {
        matches!(self.state, PipeState::Complete)
    }
}
