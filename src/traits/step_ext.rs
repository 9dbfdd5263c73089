//! Fluent "or fail" lifts for `Option`, `Result`, `bool`, and `Validation`.
//!
//! Each trait offers `or_fail_with`, taking a failure producer called with
//! the shape's trigger payload, plus message sugar:
//!
//! - unit-trigger shapes (`Option`, `bool`) build `Failure::new(message)`;
//! - payload-trigger shapes (`Result`, `Validation`) build
//!   `Failure::new(payload_display).annotate(message)`;
//! - `Result` with an error-typed payload additionally offers
//!   [`or_fail_root`](ResultStepExt::or_fail_root), which attaches the error
//!   as terminal root cause.
//!
//! # Examples
//!
//! ```
//! use step_rail::prelude::*;
//!
//! async fn first_word(line: Option<&str>) -> Result<&str, Failure> {
//!     let line = line.or_fail("empty input").run().await?;
//!     line.split_whitespace()
//!         .next()
//!         .or_fail("blank line")
//!         .run()
//!         .await
//! }
//! ```

use core::error::Error;
use core::fmt;
use core::future::Ready;

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

use crate::types::alloc_type::{String, Vec};
use crate::types::{ErrorVec, Failure, Step, StepResult};
use crate::validation::Validation;

/// Lifts an `Option<T>` into a [`Step`]; the producer takes no payload.
pub trait OptionStepExt<T>: Sized {
    /// Lifts the option, calling `fail_with` when the value is absent.
    fn or_fail_with<P>(self, fail_with: P) -> Step<Ready<StepResult<T>>>
    where
        P: FnOnce() -> Failure;

    /// Lifts the option with a plain message for the absent case.
    #[inline]
    fn or_fail(self, message: impl Into<String>) -> Step<Ready<StepResult<T>>> {
        let message = message.into();
        self.or_fail_with(move || Failure::new(message))
    }
}

impl<T> OptionStepExt<T> for Option<T> {
    #[inline]
    fn or_fail_with<P>(self, fail_with: P) -> Step<Ready<StepResult<T>>>
    where
        P: FnOnce() -> Failure,
    {
        Step::from_option(self, fail_with)
    }
}

/// Lifts a `Result<T, E>` into a [`Step`]; the producer receives the error
/// payload.
pub trait ResultStepExt<T, E>: Sized {
    /// Lifts the result, passing the error payload to `fail_with`.
    fn or_fail_with<P>(self, fail_with: P) -> Step<Ready<StepResult<T>>>
    where
        P: FnOnce(E) -> Failure;

    /// Lifts the result, describing the payload by its `Display` output:
    /// `Failure::new(payload_display).annotate(message)`.
    #[inline]
    fn or_fail(self, message: impl Into<String>) -> Step<Ready<StepResult<T>>>
    where
        E: fmt::Display,
    {
        let message = message.into();
        self.or_fail_with(move |error| Failure::new(error.to_string()).annotate(message))
    }

    /// Lifts the result, attaching the error as terminal root cause:
    /// `Failure::new(message).with_root(error)`.
    #[inline]
    fn or_fail_root(self, message: impl Into<String>) -> Step<Ready<StepResult<T>>>
    where
        E: Error + Send + Sync + 'static,
    {
        let message = message.into();
        self.or_fail_with(move |error| Failure::new(message).with_root(error))
    }
}

impl<T, E> ResultStepExt<T, E> for Result<T, E> {
    #[inline]
    fn or_fail_with<P>(self, fail_with: P) -> Step<Ready<StepResult<T>>>
    where
        P: FnOnce(E) -> Failure,
    {
        Step::from_result(self, fail_with)
    }
}

/// Lifts a boolean guard into a [`Step`] of unit.
pub trait BoolStepExt: Sized {
    /// Lifts the guard, calling `fail_with` when it is `false`.
    fn or_fail_with<P>(self, fail_with: P) -> Step<Ready<StepResult<()>>>
    where
        P: FnOnce() -> Failure;

    /// Lifts the guard with a plain message for the `false` case.
    #[inline]
    fn or_fail(self, message: impl Into<String>) -> Step<Ready<StepResult<()>>> {
        let message = message.into();
        self.or_fail_with(move || Failure::new(message))
    }
}

impl BoolStepExt for bool {
    #[inline]
    fn or_fail_with<P>(self, fail_with: P) -> Step<Ready<StepResult<()>>>
    where
        P: FnOnce() -> Failure,
    {
        Step::from_bool(self, fail_with)
    }
}

/// Lifts a validated-document [`Validation`] into a [`Step`]; the producer
/// receives the structured error list.
pub trait ValidationStepExt<E, T>: Sized {
    /// Lifts the validation, passing the error list to `fail_with`.
    fn or_fail_with<P>(self, fail_with: P) -> Step<Ready<StepResult<T>>>
    where
        P: FnOnce(ErrorVec<E>) -> Failure;

    /// Lifts the validation, joining the errors' `Display` output with
    /// `", "` and annotating with `message`.
    #[inline]
    fn or_fail(self, message: impl Into<String>) -> Step<Ready<StepResult<T>>>
    where
        E: fmt::Display,
    {
        let message = message.into();
        self.or_fail_with(move |errors| {
            let summary = errors
                .iter()
                .map(|error| error.to_string())
                .collect::<Vec<String>>()
                .join(", ");
            Failure::new(summary).annotate(message)
        })
    }
}

impl<E, T> ValidationStepExt<E, T> for Validation<E, T> {
    #[inline]
    fn or_fail_with<P>(self, fail_with: P) -> Step<Ready<StepResult<T>>>
    where
        P: FnOnce(ErrorVec<E>) -> Failure,
    {
        Step::from_validation(self, fail_with)
    }
}
