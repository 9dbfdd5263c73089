//! Extension traits that lift synchronous fallible shapes into [`Step`]s.
//!
//! Dispatch is resolved statically by the receiver type: each shape has
//! exactly one trait, so there is no overlap or ambiguity between lifts.
//!
//! [`Step`]: crate::Step

mod form;
mod step_ext;

pub use form::{FormBinding, FormStepExt};
pub use step_ext::{BoolStepExt, OptionStepExt, ResultStepExt, ValidationStepExt};
