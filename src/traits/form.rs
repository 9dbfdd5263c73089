//! Interface to external bound-or-errored form types.
//!
//! Forms come from whatever web/form library the caller uses; the core only
//! needs the shape, so it is expressed as a trait.

use core::future::Ready;

use crate::types::alloc_type::String;
use crate::types::{Failure, Step, StepResult};

/// A form that either bound a value or carries binding errors.
///
/// Implemented by calling code for its concrete form type. The errored form
/// is handed back whole to the failure producer so field-level detail is not
/// lost at the lifting boundary.
pub trait FormBinding: Sized {
    /// The value a successfully bound form yields.
    type Value;

    /// Splits the form into its bound value, or returns itself when it
    /// carries errors.
    fn into_bound(self) -> Result<Self::Value, Self>;

    /// Human-readable summary of the binding errors.
    ///
    /// Used by [`FormStepExt::or_fail`] as the innermost failure message.
    fn error_summary(&self) -> String;
}

/// Fluent lift from any [`FormBinding`] into a [`Step`].
pub trait FormStepExt: FormBinding {
    /// Lifts the form; `fail_with` receives the errored form.
    #[inline]
    fn or_fail_with<P>(self, fail_with: P) -> Step<Ready<StepResult<Self::Value>>>
    where
        P: FnOnce(Self) -> Failure,
    {
        Step::from_form(self, fail_with)
    }

    /// Lifts the form, describing errors as
    /// `Failure::new(error_summary).annotate(message)`.
    #[inline]
    fn or_fail(self, message: impl Into<String>) -> Step<Ready<StepResult<Self::Value>>> {
        let message = message.into();
        self.or_fail_with(move |form| Failure::new(form.error_summary()).annotate(message))
    }
}

impl<F: FormBinding> FormStepExt for F {}
