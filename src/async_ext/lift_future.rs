//! Future wrappers that convert async outcomes at the lifting boundary.
//!
//! The failure producer is held in an `Option` and taken on the failing
//! branch, so the success path never evaluates it.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::{Failure, Step, StepResult};

pin_project! {
    /// Lifts a `Future<Output = Option<T>>` into a step outcome.
    #[must_use = "futures do nothing unless polled"]
    pub struct OptionLift<Fut, P> {
        #[pin]
        future: Fut,
        fail_with: Option<P>,
    }
}

impl<Fut, P> OptionLift<Fut, P> {
    #[inline]
    pub(crate) fn new(future: Fut, fail_with: P) -> Self {
        Self { future, fail_with: Some(fail_with) }
    }
}

impl<Fut, P, T> Future for OptionLift<Fut, P>
where
    Fut: Future<Output = Option<T>>,
    P: FnOnce() -> Failure,
{
    type Output = StepResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|output| match output {
            Some(value) => Ok(value),
            None => {
                let fail_with = this
                    .fail_with
                    .take()
                    .expect("OptionLift polled after completion; this is a bug");
                Err(fail_with())
            }
        })
    }
}

impl<Fut, P, T> FusedFuture for OptionLift<Fut, P>
where
    Fut: FusedFuture<Output = Option<T>>,
    P: FnOnce() -> Failure,
{
    fn is_terminated(&self) -> bool {
        self.fail_with.is_none() || self.future.is_terminated()
    }
}

pin_project! {
    /// Lifts a `Future<Output = Result<T, E>>` into a step outcome.
    #[must_use = "futures do nothing unless polled"]
    pub struct ResultLift<Fut, P> {
        #[pin]
        future: Fut,
        fail_with: Option<P>,
    }
}

impl<Fut, P> ResultLift<Fut, P> {
    #[inline]
    pub(crate) fn new(future: Fut, fail_with: P) -> Self {
        Self { future, fail_with: Some(fail_with) }
    }
}

impl<Fut, P, T, E> Future for ResultLift<Fut, P>
where
    Fut: Future<Output = Result<T, E>>,
    P: FnOnce(E) -> Failure,
{
    type Output = StepResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|output| match output {
            Ok(value) => Ok(value),
            Err(error) => {
                let fail_with = this
                    .fail_with
                    .take()
                    .expect("ResultLift polled after completion; this is a bug");
                Err(fail_with(error))
            }
        })
    }
}

impl<Fut, P, T, E> FusedFuture for ResultLift<Fut, P>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    P: FnOnce(E) -> Failure,
{
    fn is_terminated(&self) -> bool {
        self.fail_with.is_none() || self.future.is_terminated()
    }
}

impl<Fut, P, T> Step<OptionLift<Fut, P>>
where
    Fut: Future<Output = Option<T>>,
    P: FnOnce() -> Failure,
{
    /// Lifts an asynchronous optional value; `fail_with` is called when it
    /// resolves absent.
    #[inline]
    pub fn from_future_option(future: Fut, fail_with: P) -> Self {
        Step::new(OptionLift::new(future, fail_with))
    }
}

impl<Fut, P, T, E> Step<ResultLift<Fut, P>>
where
    Fut: Future<Output = Result<T, E>>,
    P: FnOnce(E) -> Failure,
{
    /// Lifts an asynchronous two-branch result; `fail_with` receives the
    /// error payload.
    ///
    /// Covers the async disjoint-union and async may-fail shapes as well,
    /// since `Result` subsumes both in Rust.
    #[inline]
    pub fn from_future_result(future: Fut, fail_with: P) -> Self {
        Step::new(ResultLift::new(future, fail_with))
    }
}
