//! Relift Core
//!
//! Core types and abstractions for the Relift code-modernization tooling.
//!
//! This crate contains:
//! - Domain types: Core business entities (TransformationJob, ProgressUpdate, etc.)
//! - Billing: cost-estimate rendering for the hosting front end

pub mod billing;
pub mod domain;
