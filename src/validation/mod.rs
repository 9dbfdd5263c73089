//! Two-branch validated-document result with a structured error list.

use crate::types::alloc_type::Vec;
use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// A validated document: either a parsed value or one or more errors.
///
/// Unlike `Result`, the invalid branch carries a list, so a document
/// validator can report every problem at once. Lift a `Validation` into a
/// pipeline with [`Step::from_validation`](crate::Step::from_validation) or
/// [`ValidationStepExt::or_fail`](crate::ValidationStepExt::or_fail); the
/// failure producer receives the whole error list.
///
/// # Examples
///
/// ```
/// use step_rail::Validation;
///
/// let parsed = Validation::<&str, i32>::valid(42);
/// assert!(parsed.is_valid());
///
/// let rejected = Validation::<&str, i32>::invalid_many(["missing name", "bad age"]);
/// assert_eq!(rejected.into_errors().map(|errors| errors.len()), Some(2));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Validation<E, A> {
    /// A successfully parsed value.
    Valid(A),
    /// One or more validation errors.
    Invalid(ErrorVec<E>),
}

impl<E, A> Validation<E, A> {
    /// Creates a valid value.
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value from a single error.
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(smallvec![error])
    }

    /// Creates an invalid value from an iterator of errors.
    #[inline]
    pub fn invalid_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::Invalid(errors.into_iter().collect())
    }

    /// Returns `true` if the validation holds a value.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if the validation holds errors.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Consumes the validation, returning the value if valid.
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Consumes the validation, returning the error list if invalid.
    #[inline]
    pub fn into_errors(self) -> Option<ErrorVec<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Maps the valid value, leaving errors untouched.
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }
}

/// Collects many validations, accumulating every error across them.
///
/// The result is valid only when every input was valid.
///
/// # Examples
///
/// ```
/// use step_rail::Validation;
///
/// let fields = vec![
///     Validation::<&str, i32>::valid(1),
///     Validation::invalid("bad"),
///     Validation::invalid("worse"),
/// ];
/// let combined: Validation<&str, Vec<i32>> = fields.into_iter().collect();
/// assert_eq!(combined.into_errors().map(|errors| errors.len()), Some(2));
/// ```
impl<E, A> FromIterator<Validation<E, A>> for Validation<E, Vec<A>> {
    fn from_iter<I: IntoIterator<Item = Validation<E, A>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut errors: ErrorVec<E> = ErrorVec::new();
        for item in iter {
            match item {
                Validation::Valid(value) => {
                    if errors.is_empty() {
                        values.push(value);
                    }
                }
                Validation::Invalid(errs) => errors.extend(errs),
            }
        }
        if errors.is_empty() {
            Validation::Valid(values)
        } else {
            Validation::Invalid(errors)
        }
    }
}
