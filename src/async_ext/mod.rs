//! Lifts for asynchronous shapes: futures of options and results.
//!
//! Every lift here is a suspension point — the wrapped future resolves on
//! whatever executor polls the resulting [`Step`](crate::Step). Only
//! recoverable error values are converted into failures; panics unwind
//! through `poll` unchanged.
//!
//! # Examples
//!
//! ```
//! use step_rail::prelude::*;
//!
//! async fn load(id: u64) -> Result<&'static str, std::io::Error> {
//!     let _ = id;
//!     Ok("payload")
//! }
//!
//! async fn handler(id: u64) -> Result<&'static str, Failure> {
//!     load(id).or_fail_root("loading payload").run().await
//! }
//! ```

mod future_ext;
mod lift_future;

pub use future_ext::{FutureOptionStepExt, FutureResultStepExt};
pub use lift_future::{OptionLift, ResultLift};
