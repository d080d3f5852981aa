//! Job status poller
//!
//! Polls the modernization service for a job's status until the status lands
//! in the caller's success or failure set, reporting each status change to a
//! caller-supplied callback along the way. An authorization failure during a
//! status query is recovered once per poll by refreshing the credential and
//! retrying the query.

use std::collections::HashSet;
use std::sync::Arc;

use relift_client::{ClientError, TokenRefresher, TransformationClient};
use relift_core::domain::job::{JobId, TransformationJob, TransformationStatus};
use relift_core::domain::plan::TransformationPlan;
use relift_core::domain::progress::ProgressUpdate;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::cancel::CancellationFlag;
use crate::config::PollConfig;

/// Why the poll loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A status in the success or failure set was observed
    TerminalStatus,
    /// The cancellation flag was set
    Cancelled,
    /// The wall-clock deadline elapsed
    TimedOut,
}

/// Result of a completed poll loop
///
/// Cancellation and timeout are expected operational exits, not faults, so
/// they surface here with `succeeded = false` rather than as errors.
#[derive(Debug, Clone)]
pub struct PollOutcome {
    /// True iff the final status is in the success set
    pub succeeded: bool,
    /// Last status observed before the loop stopped, if any was observed
    pub final_status: Option<TransformationStatus>,
    /// Why the loop stopped
    pub stop_reason: StopReason,
    /// Plan fetched once success was confirmed; never set on other exits
    pub plan: Option<TransformationPlan>,
}

/// Errors that abort the poll loop
#[derive(Debug, Error)]
pub enum PollError {
    /// The client failed in a way the single credential refresh did not recover
    #[error("client error while polling transformation job: {0}")]
    Client(#[from] ClientError),
}

/// Job status poller
///
/// Holds the injected client and credential-refresh capabilities together
/// with the loop timing configuration. One `poll` call drives one job to a
/// terminal state.
pub struct StatusPoller<C, R> {
    client: Arc<C>,
    refresher: Arc<R>,
    config: PollConfig,
}

impl<C, R> StatusPoller<C, R>
where
    C: TransformationClient,
    R: TokenRefresher,
{
    /// Creates a new poller over the given capabilities
    pub fn new(client: Arc<C>, refresher: Arc<R>, config: PollConfig) -> Self {
        Self {
            client,
            refresher,
            config,
        }
    }

    /// Polls a job until its status reaches the success or failure set
    ///
    /// Each status *change* is reported to `on_update` with the job record
    /// and any attached progress updates; repeated identical statuses across
    /// successive polls are reported once. On the first status in
    /// `success_statuses` the plan is fetched exactly once and the loop stops
    /// with success; on the first status in `failure_statuses` the loop stops
    /// immediately without fetching the plan. The client is never queried
    /// again after a terminal status.
    ///
    /// # Arguments
    /// * `job_id` - The job to watch
    /// * `success_statuses` - Statuses that end the loop as a success
    /// * `failure_statuses` - Statuses that end the loop as a failure
    /// * `cancel` - Cooperative cancellation flag, checked once per iteration
    /// * `on_update` - Callback invoked once per observed status transition
    pub async fn poll<F>(
        &self,
        job_id: &JobId,
        success_statuses: &HashSet<TransformationStatus>,
        failure_statuses: &HashSet<TransformationStatus>,
        cancel: &CancellationFlag,
        mut on_update: F,
    ) -> Result<PollOutcome, PollError>
    where
        F: FnMut(&TransformationJob, TransformationStatus, &[ProgressUpdate]),
    {
        info!(
            "Polling transformation job {} (interval: {:?})",
            job_id, self.config.poll_interval
        );

        let started = Instant::now();

        // Last status handed to the callback, threaded through iterations
        let mut last_reported: Option<TransformationStatus> = None;
        let mut final_status: Option<TransformationStatus> = None;

        loop {
            // Cancellation wins over the deadline when both apply
            if cancel.is_cancelled() {
                info!("Polling of job {} cancelled", job_id);
                return Ok(PollOutcome {
                    succeeded: false,
                    final_status,
                    stop_reason: StopReason::Cancelled,
                    plan: None,
                });
            }

            if !self.config.timeout.is_zero() && started.elapsed() >= self.config.timeout {
                warn!(
                    "Polling of job {} timed out after {:?}",
                    job_id, self.config.timeout
                );
                return Ok(PollOutcome {
                    succeeded: false,
                    final_status,
                    stop_reason: StopReason::TimedOut,
                    plan: None,
                });
            }

            debug!("Querying status of job {}", job_id);
            let (status, job) = self.query_with_refresh(job_id).await?;
            final_status = Some(status);

            if last_reported != Some(status) {
                let updates = job.progress_updates.as_deref().unwrap_or(&[]);
                on_update(&job, status, updates);
                last_reported = Some(status);
            }

            if success_statuses.contains(&status) {
                info!(
                    "Job {} reached success status {:?}, fetching plan",
                    job_id, status
                );
                let plan = self.client.get_transformation_plan(job_id).await?;

                return Ok(PollOutcome {
                    succeeded: true,
                    final_status,
                    stop_reason: StopReason::TerminalStatus,
                    plan: Some(plan),
                });
            }

            if failure_statuses.contains(&status) {
                info!("Job {} reached failure status {:?}", job_id, status);
                return Ok(PollOutcome {
                    succeeded: false,
                    final_status,
                    stop_reason: StopReason::TerminalStatus,
                    plan: None,
                });
            }

            self.idle_wait().await;
        }
    }

    /// Queries the job status, recovering once from a recoverable
    /// authorization failure by refreshing the credential
    ///
    /// At most one retry per poll: if the retried query fails again,
    /// whatever it fails with surfaces to the caller.
    async fn query_with_refresh(
        &self,
        job_id: &JobId,
    ) -> Result<(TransformationStatus, TransformationJob), PollError> {
        match self.client.get_transformation(job_id).await {
            Ok(result) => Ok(result),
            Err(e) if e.is_recoverable_auth() => {
                warn!(
                    "Authorization failure while polling job {}: {}; refreshing credential",
                    job_id, e
                );
                self.refresher.refresh_token().await?;
                Ok(self.client.get_transformation(job_id).await?)
            }
            Err(e) => Err(PollError::Client(e)),
        }
    }

    /// Waits out the poll interval, or yields when the interval is zero
    async fn idle_wait(&self) {
        if self.config.poll_interval.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }
}
