use std::time::Duration;

/// The outcome of one worker's full batch of sequential requests.
///
/// `per_request_elapsed` always has exactly one entry per issued request and
/// keeps full precision, rounding happens only when lines are displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerResult {
    pub worker_id: u32,
    pub per_request_elapsed: Vec<Duration>,
    pub average_elapsed: Duration,
}

impl WorkerResult {
    pub fn from_elapsed(worker_id: u32, per_request_elapsed: Vec<Duration>) -> Option<Self> {
        if per_request_elapsed.is_empty() {
            return None;
        }

        let total: Duration = per_request_elapsed.iter().sum();
        let average_elapsed = total / per_request_elapsed.len() as u32;
        Some(Self {
            worker_id,
            per_request_elapsed,
            average_elapsed,
        })
    }
}

/// Aggregate over all workers, the grand average is the mean of the
/// per-worker averages.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkSummary {
    pub total_requests: u64,
    pub grand_average: Duration,
}

impl BenchmarkSummary {
    pub fn from_worker_results(results: &[WorkerResult]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }

        let total_requests = results
            .iter()
            .map(|r| r.per_request_elapsed.len() as u64)
            .sum();
        let total: Duration = results.iter().map(|r| r.average_elapsed).sum();
        let grand_average = total / results.len() as u32;
        Some(Self {
            total_requests,
            grand_average,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_compute_average_as_arithmetic_mean_of_elapsed_times() {
        let elapsed = vec![
            Duration::from_millis(100),
            Duration::from_millis(200),
            Duration::from_millis(300),
        ];
        let result = WorkerResult::from_elapsed(0, elapsed.clone()).unwrap();
        assert_eq!(result.worker_id, 0);
        assert_eq!(result.per_request_elapsed, elapsed);
        let expected = 0.2;
        assert!((result.average_elapsed.as_secs_f64() - expected).abs() < 1e-9);
    }

    #[test]
    fn should_keep_one_elapsed_entry_per_request() {
        let elapsed = vec![Duration::from_millis(10); 7];
        let result = WorkerResult::from_elapsed(3, elapsed).unwrap();
        assert_eq!(result.per_request_elapsed.len(), 7);
    }

    #[test]
    fn should_not_build_result_from_empty_batch() {
        assert!(WorkerResult::from_elapsed(0, Vec::new()).is_none());
    }

    #[test]
    fn should_compute_grand_average_as_mean_of_worker_averages() {
        let results = vec![
            WorkerResult::from_elapsed(0, vec![Duration::from_millis(100)]).unwrap(),
            WorkerResult::from_elapsed(1, vec![Duration::from_millis(300)]).unwrap(),
        ];
        let summary = BenchmarkSummary::from_worker_results(&results).unwrap();
        assert_eq!(summary.total_requests, 2);
        assert!((summary.grand_average.as_secs_f64() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn should_not_aggregate_empty_results() {
        assert!(BenchmarkSummary::from_worker_results(&[]).is_none());
    }

    #[test]
    fn should_count_requests_across_all_workers() {
        let results = vec![
            WorkerResult::from_elapsed(0, vec![Duration::from_millis(1); 3]).unwrap(),
            WorkerResult::from_elapsed(1, vec![Duration::from_millis(1); 3]).unwrap(),
        ];
        let summary = BenchmarkSummary::from_worker_results(&results).unwrap();
        assert_eq!(summary.total_requests, 6);
    }
}
