use crate::args::RunConfig;
use crate::client::GetClient;
use crate::error::ThorError;
use crate::report::{self, Reporter};
use crate::stats::WorkerResult;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::info;

/// One concurrent unit of work: a fixed number of strictly sequential GET
/// requests against the shared target URL, each timed individually.
pub struct Worker {
    worker_id: u32,
    client: Box<dyn GetClient>,
    config: Arc<RunConfig>,
    reporter: Arc<dyn Reporter>,
}

impl Worker {
    pub fn new(
        worker_id: u32,
        client: Box<dyn GetClient>,
        config: Arc<RunConfig>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            worker_id,
            client,
            config,
            reporter,
        }
    }

    pub async fn run(&self) -> Result<WorkerResult, ThorError> {
        info!(
            "Worker #{} → issuing {} request(s) to {}...",
            self.worker_id, self.config.requests_per_worker, self.config.url
        );

        let mut elapsed_times = Vec::with_capacity(self.config.requests_per_worker as usize);
        for request in 0..self.config.requests_per_worker {
            let start = Instant::now();
            let body = self
                .client
                .get(&self.config.url)
                .await
                .map_err(|source| ThorError::RequestFailed {
                    worker_id: self.worker_id,
                    request,
                    source,
                })?;
            // The timed window covers the send and the full body read.
            let elapsed = start.elapsed();

            if self.config.verbose {
                self.reporter.report(&body);
            }
            self.reporter.report(&report::request_line(
                self.worker_id,
                request,
                elapsed.as_secs_f64(),
            ));
            elapsed_times.push(elapsed);
        }

        let result = WorkerResult::from_elapsed(self.worker_id, elapsed_times)
            .ok_or(ThorError::NothingToAggregate)?;
        self.reporter.report(&report::average_line(
            self.worker_id,
            result.average_elapsed.as_secs_f64(),
        ));

        Ok(result)
    }
}
