//! Core domain types
//!
//! This module contains the core domain structures used across the Relift
//! crates. These types mirror what the remote modernization service reports
//! and are shared between the poller and the hosting front end.

pub mod job;
pub mod plan;
pub mod progress;
