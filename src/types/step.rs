//! The common pipeline type every fallible shape is lifted into.
//!
//! A [`Step`] is an asynchronous computation that yields either a final value
//! or a [`Failure`]. Synchronous shapes are lifted into already-resolved
//! steps ([`core::future::Ready`]); asynchronous shapes are lifted through
//! the wrappers in [`crate::async_ext`]. Either way, the rest of a pipeline
//! only ever sees `Result<T, Failure>`.

use core::future::{ready, Future, Ready};
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::traits::FormBinding;
use crate::types::alloc_type::String;
use crate::types::failure::Failure;
use crate::types::ErrorVec;
use crate::validation::Validation;

/// Outcome of a resolved [`Step`].
pub type StepResult<T> = Result<T, Failure>;

pin_project! {
    /// An asynchronous computation yielding a value or a [`Failure`].
    ///
    /// A step is a one-shot handle: it is produced exactly once by an
    /// adapter and consumed exactly once, either awaited to completion or
    /// sequenced into a longer chain with [`and_then`](Step::and_then).
    /// It owns no executor and spawns nothing — it resolves when polled.
    ///
    /// # Examples
    ///
    /// ```
    /// use step_rail::{Failure, Step};
    ///
    /// async fn double(input: Option<i32>) -> Result<i32, Failure> {
    ///     Step::from_option(input, || Failure::new("no input"))
    ///         .map(|n| n * 2)
    ///         .run()
    ///         .await
    /// }
    /// ```
    #[must_use = "steps do nothing unless polled"]
    pub struct Step<Fut> {
        #[pin]
        future: Fut,
    }
}

impl<Fut> Step<Fut> {
    /// Wraps a future that already produces a [`StepResult`].
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future }
    }

    /// Consumes the step and returns the inner future.
    #[inline]
    pub fn into_inner(self) -> Fut {
        self.future
    }
}

impl<T> Step<Ready<StepResult<T>>> {
    /// Creates an already-resolved successful step.
    #[inline]
    pub fn pure(value: T) -> Self {
        Self::new(ready(Ok(value)))
    }

    /// Creates an already-resolved failed step.
    #[inline]
    pub fn fail(failure: Failure) -> Self {
        Self::new(ready(Err(failure)))
    }

    /// Lifts an optional value; `fail_with` is called when it is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use step_rail::{Failure, Step};
    ///
    /// let step = Step::from_option(Some(1), || Failure::new("missing"));
    /// ```
    #[inline]
    pub fn from_option<P>(option: Option<T>, fail_with: P) -> Self
    where
        P: FnOnce() -> Failure,
    {
        match option {
            Some(value) => Self::pure(value),
            None => Self::fail(fail_with()),
        }
    }

    /// Lifts a two-branch result; `fail_with` receives the error payload.
    ///
    /// `Result` is also Rust's disjoint union, so this entry point covers
    /// both the error/value and left/right shapes.
    #[inline]
    pub fn from_result<E, P>(result: Result<T, E>, fail_with: P) -> Self
    where
        P: FnOnce(E) -> Failure,
    {
        match result {
            Ok(value) => Self::pure(value),
            Err(error) => Self::fail(fail_with(error)),
        }
    }

    /// Evaluates a fallible computation eagerly and lifts its outcome.
    ///
    /// `fail_with` receives the raised error. Panics are not caught; they
    /// propagate to the caller unchanged.
    #[inline]
    pub fn attempt<E, F, P>(f: F, fail_with: P) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        P: FnOnce(E) -> Failure,
    {
        Self::from_result(f(), fail_with)
    }

    /// Lifts a validated-document result; `fail_with` receives the
    /// structured validation-error list.
    #[inline]
    pub fn from_validation<E, P>(validation: Validation<E, T>, fail_with: P) -> Self
    where
        P: FnOnce(ErrorVec<E>) -> Failure,
    {
        match validation {
            Validation::Valid(value) => Self::pure(value),
            Validation::Invalid(errors) => Self::fail(fail_with(errors)),
        }
    }

    /// Lifts a bound-or-errored form; `fail_with` receives the form
    /// carrying its errors.
    #[inline]
    pub fn from_form<F, P>(form: F, fail_with: P) -> Self
    where
        F: FormBinding<Value = T>,
        P: FnOnce(F) -> Failure,
    {
        match form.into_bound() {
            Ok(value) => Self::pure(value),
            Err(form) => Self::fail(fail_with(form)),
        }
    }
}

impl Step<Ready<StepResult<()>>> {
    /// Lifts a boolean guard: `true` succeeds with unit, `false` fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use step_rail::{Failure, Step};
    ///
    /// let step = Step::from_bool(2 + 2 == 4, || Failure::new("arithmetic broke"));
    /// ```
    #[inline]
    pub fn from_bool<P>(condition: bool, fail_with: P) -> Self
    where
        P: FnOnce() -> Failure,
    {
        if condition {
            Self::pure(())
        } else {
            Self::fail(fail_with())
        }
    }
}

impl<Fut, T> Step<Fut>
where
    Fut: Future<Output = StepResult<T>>,
{
    /// Sequences another step after this one (bind).
    ///
    /// If this step resolves to a value, `f` produces the next step; if it
    /// resolves to a [`Failure`], that failure is threaded through and `f`
    /// never runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use step_rail::{Failure, Step};
    ///
    /// async fn chain() -> Result<i32, Failure> {
    ///     Step::pure(2)
    ///         .and_then(|n| Step::from_option(Some(n + 1), || Failure::new("gone")))
    ///         .run()
    ///         .await
    /// }
    /// ```
    pub fn and_then<U, F, Fut2>(self, f: F) -> Step<impl Future<Output = StepResult<U>>>
    where
        F: FnOnce(T) -> Step<Fut2>,
        Fut2: Future<Output = StepResult<U>>,
    {
        Step::new(async move {
            match self.future.await {
                Ok(value) => f(value).future.await,
                Err(failure) => Err(failure),
            }
        })
    }

    /// Transforms the success value, leaving failures untouched.
    pub fn map<U, F>(self, f: F) -> Step<impl Future<Output = StepResult<U>>>
    where
        F: FnOnce(T) -> U,
    {
        Step::new(async move { self.future.await.map(f) })
    }

    /// Transforms the failure, leaving success values untouched.
    pub fn map_failure<F>(self, f: F) -> Step<impl Future<Output = StepResult<T>>>
    where
        F: FnOnce(Failure) -> Failure,
    {
        Step::new(async move { self.future.await.map_err(f) })
    }

    /// Annotates any failure with an extra message, wrapping it as parent.
    ///
    /// Sugar for `map_failure(|failure| failure.annotate(message))`.
    pub fn context(self, message: impl Into<String>) -> Step<impl Future<Output = StepResult<T>>> {
        let message = message.into();
        self.map_failure(move |failure| failure.annotate(message))
    }

    /// Resolves the step into its two-branch outcome.
    #[inline]
    pub async fn run(self) -> StepResult<T> {
        self.future.await
    }

    /// Resolves the step and merges both branches into one value.
    ///
    /// # Examples
    ///
    /// ```
    /// use step_rail::{Failure, Step};
    ///
    /// async fn status() -> u16 {
    ///     Step::fail(Failure::new("nope")).fold(|_: ()| 200, |_| 400).await
    /// }
    /// ```
    pub async fn fold<R, V, G>(self, on_value: V, on_failure: G) -> R
    where
        V: FnOnce(T) -> R,
        G: FnOnce(Failure) -> R,
    {
        match self.future.await {
            Ok(value) => on_value(value),
            Err(failure) => on_failure(failure),
        }
    }

    /// Resolves the step into a disjoint union: invalid carries the
    /// [`Failure`], valid carries the success value.
    pub async fn into_validation(self) -> Validation<Failure, T> {
        match self.future.await {
            Ok(value) => Validation::Valid(value),
            Err(failure) => Validation::invalid(failure),
        }
    }
}

impl<Fut, T> Future for Step<Fut>
where
    Fut: Future<Output = StepResult<T>>,
{
    type Output = StepResult<T>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(cx)
    }
}

impl<Fut, T> FusedFuture for Step<Fut>
where
    Fut: FusedFuture<Output = StepResult<T>>,
{
    fn is_terminated(&self) -> bool {
        self.future.is_terminated()
    }
}
