//! Transformation job domain types

use serde::{Deserialize, Serialize};

/// Identifier of a remote transformation job
///
/// Issued by the modernization service at submission time and treated as an
/// opaque token everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Creates a job identifier from the token returned at submission
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transformation job record
///
/// Snapshot of a remote job as returned by each status query. The service
/// attaches per-step progress updates once the job starts producing them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformationJob {
    pub id: JobId,
    pub status: TransformationStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    pub ended_at: Option<chrono::DateTime<chrono::Utc>>,
    pub progress_updates: Option<Vec<crate::domain::progress::ProgressUpdate>>,
}

/// Transformation job status
///
/// The full lifecycle the service reports. Which states count as success or
/// failure is decided by the caller, per operation, through status sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransformationStatus {
    Created,
    Accepted,
    Started,
    Preparing,
    Prepared,
    Planning,
    Planned,
    Transforming,
    Transformed,
    Completed,
    PartiallyCompleted,
    Stopping,
    Stopped,
    Failed,
    Rejected,
}
