//! Relift Service Client
//!
//! Capability traits for communicating with the remote modernization service.
//!
//! This crate defines the seam between the Relift core and whatever transport
//! the hosting extension wires in. The concrete HTTP/RPC client, the real
//! credential refresh flow, and job submission all live on the other side of
//! these traits; the poller only depends on the capabilities declared here.

pub mod error;

// Re-export commonly used types
pub use error::{ClientError, Result};

use async_trait::async_trait;
use relift_core::domain::job::{JobId, TransformationJob, TransformationStatus};
use relift_core::domain::plan::TransformationPlan;

/// Client capability for querying a remote transformation job
#[async_trait]
pub trait TransformationClient: Send + Sync {
    /// Fetches the current status of a job together with its full record
    ///
    /// The record carries any progress updates the service has attached to
    /// this point of the job's lifecycle.
    ///
    /// # Arguments
    /// * `job_id` - The job to query
    async fn get_transformation(
        &self,
        job_id: &JobId,
    ) -> Result<(TransformationStatus, TransformationJob)>;

    /// Fetches the transformation plan for a job
    ///
    /// Only meaningful once the job has progressed far enough for the service
    /// to have produced one; the payload is opaque to this crate.
    ///
    /// # Arguments
    /// * `job_id` - The job whose plan to fetch
    async fn get_transformation_plan(&self, job_id: &JobId) -> Result<TransformationPlan>;
}

/// Capability for refreshing the credentials behind the client
///
/// Invoked by the poller when a status query fails with a recoverable
/// authorization error. Implementations are expected to renew whatever
/// session or token the transport uses and leave the client usable again.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    /// Refreshes the credential backing the client connection
    async fn refresh_token(&self) -> Result<()>;
}
