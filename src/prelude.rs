//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use step_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Failure`], [`Step`], [`Validation`], the [`StepResult`]
//!   alias
//! - **Sync lifts**: [`OptionStepExt`], [`ResultStepExt`], [`BoolStepExt`],
//!   [`ValidationStepExt`], [`FormBinding`]/[`FormStepExt`]
//! - **Async lifts**: [`FutureOptionStepExt`], [`FutureResultStepExt`]
//! - **Macros**: [`fail!`](crate::fail)
//!
//! # Examples
//!
//! ```
//! use step_rail::prelude::*;
//!
//! async fn parse_port(raw: &str) -> Result<u16, Failure> {
//!     raw.parse::<u16>().or_fail("invalid port").run().await
//! }
//! ```

// Macros
pub use crate::fail;

// Core types
pub use crate::types::{Failure, Step, StepResult};
pub use crate::validation::Validation;

// Sync lifts
pub use crate::traits::{
    BoolStepExt, FormBinding, FormStepExt, OptionStepExt, ResultStepExt, ValidationStepExt,
};

// Async lifts
pub use crate::async_ext::{FutureOptionStepExt, FutureResultStepExt};
