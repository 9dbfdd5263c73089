//! Core types: the chainable [`Failure`] value and the [`Step`] pipeline.
//!
//! # Examples
//!
//! ```
//! use step_rail::{Failure, Step};
//!
//! async fn lookup(id: u32) -> Result<&'static str, Failure> {
//!     Step::from_option(
//!         if id == 7 { Some("ada") } else { None },
//!         || Failure::new("unknown user"),
//!     )
//!     .run()
//!     .await
//! }
//! ```
use smallvec::SmallVec;

/// Platform-neutral aliases for `alloc`/`std` container types.
pub mod alloc_type;
pub mod failure;
pub mod step;

pub use failure::{Cause, Failure, RootError};
pub use step::{Step, StepResult};

/// SmallVec-backed collection used for validation error lists.
///
/// Uses inline storage for one element so the common single-error case
/// avoids a heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
