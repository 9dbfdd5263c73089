//! One pipeline type for every fallible shape.
//!
//! Asynchronous code meets "might not have succeeded" values in many shapes:
//! an `Option`, a `Result`, a boolean guard, a validated document, a bound
//! form, a future that resolves to any of these. `step-rail` lifts each shape
//! into a single chainable [`Step`] whose failure branch is always a
//! [`Failure`] — a structured description that chains underlying causes so a
//! deep pipeline failure keeps its full explanatory trail.
//!
//! # Examples
//!
//! ## Lifting heterogeneous shapes into one chain
//!
//! ```
//! use step_rail::prelude::*;
//!
//! struct Account {
//!     balance: i64,
//! }
//!
//! async fn find_account(_id: u64) -> Option<Account> {
//!     Some(Account { balance: 120 })
//! }
//!
//! async fn withdraw(id: u64, amount: i64) -> Result<i64, Failure> {
//!     let account = find_account(id).or_fail("unknown account").run().await?;
//!     (account.balance >= amount)
//!         .or_fail_with(|| fail!("insufficient funds in account {}", id))
//!         .run()
//!         .await?;
//!     Ok(account.balance - amount)
//! }
//! ```
//!
//! ## Failure chains keep provenance
//!
//! ```
//! use step_rail::Failure;
//!
//! let failure = Failure::new("parse failed").annotate("request rejected");
//! assert_eq!(failure.user_message(), "request rejected <- request rejected <- parse failed");
//! ```
//!
//! ## Sequencing with short-circuit
//!
//! ```
//! use step_rail::prelude::*;
//!
//! async fn pipeline() -> Result<i32, Failure> {
//!     Step::pure(20)
//!         .and_then(|n| Step::from_bool(n > 10, || Failure::new("too small")).map(move |()| n))
//!         .map(|n| n * 2)
//!         .run()
//!         .await
//! }
//! ```
//!
//! A `Step` is inert: it schedules nothing itself and runs on whatever
//! executor polls it. Panics are never caught — only recoverable error
//! values are converted into [`Failure`]s at the lifting boundary.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Lifting extensions for asynchronous shapes (futures of options/results)
pub mod async_ext;
/// Failure-construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Lifting extensions for synchronous shapes
pub mod traits;
/// Failure and Step, the two core types
pub mod types;
/// Validation type for validated-document results
pub mod validation;

pub use traits::*;
pub use types::{Cause, ErrorVec, Failure, RootError, Step, StepResult};
pub use validation::Validation;

#[doc(hidden)]
pub mod __private {
    #[cfg(not(feature = "std"))]
    pub use alloc::format;
    #[cfg(feature = "std")]
    pub use std::format;
}
