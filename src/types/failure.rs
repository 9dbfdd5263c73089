//! Chainable failure value with root-cause provenance.
//!
//! [`Failure`] is the single error currency of every pipeline: adapters
//! convert shape-specific triggers into `Failure`s at the lifting boundary,
//! and sequencing only ever threads `Failure`s from there on.

use core::error::Error;
use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

use crate::types::alloc_type::{Box, String, Vec};

/// Terminal low-level error at the end of a failure chain.
pub type RootError = Box<dyn Error + Send + Sync + 'static>;

/// The cause slot of a [`Failure`].
///
/// A failure carries at most one cause: either a terminal root error or a
/// parent `Failure`, never both. The single-variant-slot layout enforces
/// that exclusivity by construction.
#[derive(Debug)]
pub enum Cause {
    /// Terminal low-level error; the chain ends here.
    Root(RootError),
    /// Parent failure produced by an earlier lifting or annotation.
    Parent(Box<Failure>),
}

/// One step's explanation of why a pipeline stopped.
///
/// A `Failure` is an immutable value: [`annotate`](Failure::annotate) and
/// [`with_root`](Failure::with_root) return new failures rather than mutating
/// the receiver. The cause chain is finite and acyclic; its length equals the
/// number of wrapping operations applied.
///
/// There is deliberately no operation that merges two failures — each
/// pipeline is a single causal thread, and the first failure wins.
///
/// # Examples
///
/// ```
/// use step_rail::Failure;
///
/// let failure = Failure::new("parse failed").annotate("request rejected");
///
/// assert_eq!(
///     failure.messages(),
///     vec!["request rejected", "request rejected", "parse failed"],
/// );
/// assert_eq!(
///     failure.user_message(),
///     "request rejected <- request rejected <- parse failed",
/// );
/// ```
#[must_use]
#[derive(Debug)]
pub struct Failure {
    message: String,
    cause: Option<Cause>,
}

impl Failure {
    /// Creates a root failure with no cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use step_rail::Failure;
    ///
    /// let failure = Failure::new("missing id");
    /// assert_eq!(failure.messages(), vec!["missing id"]);
    /// ```
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), cause: None }
    }

    /// Wraps this failure in a new one carrying `message`.
    ///
    /// The receiver becomes the parent cause of the returned failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use step_rail::Failure;
    ///
    /// let failure = Failure::new("timeout").annotate("fetching profile");
    /// assert_eq!(failure.message(), "fetching profile");
    /// ```
    #[inline]
    pub fn annotate(self, message: impl Into<String>) -> Self {
        Self { message: message.into(), cause: Some(Cause::Parent(Box::new(self))) }
    }

    /// Returns a failure with the same message whose cause is the given
    /// terminal root error, replacing any existing cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use step_rail::Failure;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    /// let failure = Failure::new("loading config").with_root(io);
    /// assert!(failure.root_cause().is_some());
    /// ```
    #[inline]
    pub fn with_root(self, error: impl Into<RootError>) -> Self {
        Self { message: self.message, cause: Some(Cause::Root(error.into())) }
    }

    /// Returns this failure's own message, without walking the chain.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the cause slot, if any.
    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Returns every message in the chain, outermost first.
    ///
    /// Each chain hop repeats the current message once before descending:
    /// a failure with a parent contributes `[message, message]` followed by
    /// the parent's messages, and a failure with a root error contributes
    /// `[message, message, root.to_string()]`. A failure without a cause
    /// contributes just `[message]`.
    pub fn messages(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut current = self;
        loop {
            match current.cause.as_ref() {
                None => {
                    out.push(current.message.clone());
                    return out;
                }
                Some(Cause::Root(root)) => {
                    out.push(current.message.clone());
                    out.push(current.message.clone());
                    out.push(root.to_string());
                    return out;
                }
                Some(Cause::Parent(parent)) => {
                    out.push(current.message.clone());
                    out.push(current.message.clone());
                    current = parent;
                }
            }
        }
    }

    /// Returns the whole chain flattened into one display string.
    ///
    /// Messages are joined with `" <- "`, outermost first.
    #[inline]
    pub fn user_message(&self) -> String {
        self.messages().join(" <- ")
    }

    /// Walks the chain and returns the terminal root error, if one exists.
    pub fn root_cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        let mut current = self;
        loop {
            match current.cause.as_ref()? {
                Cause::Root(root) => return Some(root.as_ref()),
                Cause::Parent(parent) => current = parent,
            }
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message())
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self.cause.as_ref() {
            Some(Cause::Root(root)) => Some(root.as_ref() as &(dyn Error + 'static)),
            Some(Cause::Parent(parent)) => Some(parent.as_ref()),
            None => None,
        }
    }
}
