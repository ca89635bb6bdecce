use crate::args::RunConfig;
use crate::client::ClientFactory;
use crate::error::ThorError;
use crate::report::{self, Reporter};
use crate::stats::{BenchmarkSummary, WorkerResult};
use crate::worker::Worker;
use futures::future::select_all;
use std::sync::Arc;
use tokio::task;
use tracing::{error, info};

/// Spawns one task per worker, waits for all of them and aggregates their
/// averages into the grand average, which is always reported last.
///
/// Fail-fast: the first worker failure aborts the remaining workers and
/// surfaces as the run's error, no grand average is reported.
pub async fn run(
    config: Arc<RunConfig>,
    client_factory: Arc<dyn ClientFactory>,
    reporter: Arc<dyn Reporter>,
) -> Result<BenchmarkSummary, ThorError> {
    info!(
        "Spawning {} worker(s) with {} request(s) each, target: {}",
        config.workers, config.requests_per_worker, config.url
    );

    let mut join_handles = Vec::with_capacity(config.workers as usize);
    for worker_id in 0..config.workers {
        let client = client_factory
            .create_client()
            .map_err(ThorError::CannotCreateClient)?;
        let worker = Worker::new(worker_id, client, config.clone(), reporter.clone());
        join_handles.push(task::spawn(async move { worker.run().await }));
    }

    let mut results: Vec<WorkerResult> = Vec::with_capacity(config.workers as usize);
    while !join_handles.is_empty() {
        let (result, _index, remaining) = select_all(join_handles).await;
        join_handles = remaining;

        let worker_result = match result {
            Ok(Ok(worker_result)) => worker_result,
            Ok(Err(e)) => {
                error!("Worker failed: {e}");
                abort_remaining(join_handles);
                return Err(e);
            }
            Err(e) => {
                abort_remaining(join_handles);
                return Err(e.into());
            }
        };
        results.push(worker_result);
    }

    info!("All workers finished");

    let summary =
        BenchmarkSummary::from_worker_results(&results).ok_or(ThorError::NothingToAggregate)?;
    reporter.report(&report::total_line(summary.grand_average.as_secs_f64()));
    Ok(summary)
}

fn abort_remaining(join_handles: Vec<task::JoinHandle<Result<WorkerResult, ThorError>>>) {
    for handle in join_handles {
        handle.abort();
    }
}
