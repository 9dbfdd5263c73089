//! Fluent "or fail" lifts for futures, mirroring the sync extension traits.

use core::error::Error;
use core::fmt;
use core::future::Future;

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

use crate::types::alloc_type::String;
use crate::types::{Failure, Step};

use super::lift_future::{OptionLift, ResultLift};

/// Fluent lift from a `Future<Output = Result<T, E>>` into a [`Step`].
///
/// The failure producer only runs when the future resolves to an error, so
/// the success path stays allocation-free.
///
/// # Examples
///
/// ```
/// use step_rail::prelude::*;
///
/// async fn fetch(id: u64) -> Result<&'static str, &'static str> {
///     if id == 0 { Err("no such row") } else { Ok("row") }
/// }
///
/// async fn handler(id: u64) -> Result<&'static str, Failure> {
///     fetch(id).or_fail("fetching row").run().await
/// }
/// ```
pub trait FutureResultStepExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Lifts the future, passing the error payload to `fail_with`.
    fn or_fail_with<P>(self, fail_with: P) -> Step<ResultLift<Self, P>>
    where
        P: FnOnce(E) -> Failure;

    /// Lifts the future, describing the payload by its `Display` output:
    /// `Failure::new(payload_display).annotate(message)`.
    fn or_fail(
        self,
        message: impl Into<String>,
    ) -> Step<ResultLift<Self, impl FnOnce(E) -> Failure>>
    where
        E: fmt::Display,
    {
        let message = message.into();
        self.or_fail_with(move |error| Failure::new(error.to_string()).annotate(message))
    }

    /// Lifts the future, attaching the error as terminal root cause:
    /// `Failure::new(message).with_root(error)`.
    fn or_fail_root(
        self,
        message: impl Into<String>,
    ) -> Step<ResultLift<Self, impl FnOnce(E) -> Failure>>
    where
        E: Error + Send + Sync + 'static,
    {
        let message = message.into();
        self.or_fail_with(move |error| Failure::new(message).with_root(error))
    }
}

impl<Fut, T, E> FutureResultStepExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    fn or_fail_with<P>(self, fail_with: P) -> Step<ResultLift<Self, P>>
    where
        P: FnOnce(E) -> Failure,
    {
        Step::from_future_result(self, fail_with)
    }
}

/// Fluent lift from a `Future<Output = Option<T>>` into a [`Step`].
///
/// # Examples
///
/// ```
/// use step_rail::prelude::*;
///
/// async fn lookup(id: u64) -> Option<&'static str> {
///     if id == 7 { Some("ada") } else { None }
/// }
///
/// async fn handler(id: u64) -> Result<&'static str, Failure> {
///     lookup(id).or_fail("unknown user").run().await
/// }
/// ```
pub trait FutureOptionStepExt<T>: Future<Output = Option<T>> + Sized {
    /// Lifts the future, calling `fail_with` when it resolves absent.
    fn or_fail_with<P>(self, fail_with: P) -> Step<OptionLift<Self, P>>
    where
        P: FnOnce() -> Failure;

    /// Lifts the future with a plain message for the absent case.
    fn or_fail(
        self,
        message: impl Into<String>,
    ) -> Step<OptionLift<Self, impl FnOnce() -> Failure>> {
        let message = message.into();
        self.or_fail_with(move || Failure::new(message))
    }
}

impl<Fut, T> FutureOptionStepExt<T> for Fut
where
    Fut: Future<Output = Option<T>>,
{
    #[inline]
    fn or_fail_with<P>(self, fail_with: P) -> Step<OptionLift<Self, P>>
    where
        P: FnOnce() -> Failure,
    {
        Step::from_future_option(self, fail_with)
    }
}
