//! Retry wrapper for Conteur provider calls.
//!
//! Every generation call made by the story pipeline goes through [`with_retry`],
//! which repeats transient failures on a linear backoff schedule and surfaces
//! the last error once the attempt budget is spent.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod policy;
mod retry;

pub use policy::RetryPolicy;
pub use retry::with_retry;
