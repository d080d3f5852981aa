//! Relift Job Status Poller
//!
//! Drives a poll-and-report loop against a remote transformation job.
//!
//! Architecture:
//! - Configuration: poll interval and overall deadline, from code or environment
//! - Cancellation: a shared flag the hosting UI sets from another task
//! - Poller: the query/report/terminate loop with single-shot credential recovery
//!
//! The poller reports each status change to a caller-supplied callback,
//! recovers once per poll from authorization failures by refreshing the
//! credential, and stops on the first status found in the caller's success
//! or failure sets.

pub mod cancel;
pub mod config;
pub mod poller;

pub use cancel::CancellationFlag;
pub use config::PollConfig;
pub use poller::{PollError, PollOutcome, StatusPoller, StopReason};
