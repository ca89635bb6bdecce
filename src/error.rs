use thiserror::Error;
use tokio::task::JoinError;

use crate::client::ClientError;

/// The error type for a benchmark run.
#[derive(Debug, Error)]
pub enum ThorError {
    /// Target URL is missing a scheme or host and cannot be requested.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// HTTP client could not be constructed.
    #[error("Cannot create HTTP client")]
    CannotCreateClient(#[source] ClientError),
    /// A single GET did not complete at the transport level.
    #[error("Worker #{worker_id}, request {request} failed: {source}")]
    RequestFailed {
        worker_id: u32,
        request: u32,
        #[source]
        source: ClientError,
    },
    /// A worker task panicked or was aborted before finishing.
    #[error("Worker task failed")]
    WorkerTaskFailed(#[from] JoinError),
    /// Aggregation was asked to average zero samples.
    #[error("Nothing to aggregate, worker and request counts must be at least 1")]
    NothingToAggregate,
}
