use crate::error::ThorError;
use clap::Parser;
use reqwest::Url;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Hammer a URL with concurrent HTTP GET requests and measure latency", long_about = None)]
pub struct Args {
    /// Number of concurrent workers to utilize
    #[arg(short = 'p', long = "processes", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub processes: u32,

    /// Number of requests per worker
    #[arg(short = 'r', long = "requests", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub requests: u32,

    /// Per-request timeout in seconds, the HTTP client default when not set
    #[arg(short = 't', long = "timeout")]
    pub timeout: Option<u64>,

    /// Print the full response body of every request
    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    pub verbose: bool,

    /// Target URL
    pub url: String,
}

/// Immutable configuration for one run, shared read-only with every worker.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub url: String,
    pub workers: u32,
    pub requests_per_worker: u32,
    pub verbose: bool,
    pub timeout: Option<Duration>,
}

impl Args {
    pub fn into_config(self) -> Result<RunConfig, ThorError> {
        if Url::parse(&self.url).is_err() {
            return Err(ThorError::InvalidUrl(self.url));
        }

        Ok(RunConfig {
            url: self.url,
            workers: self.processes,
            requests_per_worker: self.requests,
            verbose: self.verbose,
            timeout: self.timeout.map(Duration::from_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_single_worker_and_single_request_by_default() {
        let args = Args::try_parse_from(["thor", "http://localhost:8080"]).unwrap();
        assert_eq!(args.processes, 1);
        assert_eq!(args.requests, 1);
        assert!(!args.verbose);
        assert!(args.timeout.is_none());

        let config = args.into_config().unwrap();
        assert_eq!(config.workers, 1);
        assert_eq!(config.requests_per_worker, 1);
        assert_eq!(config.url, "http://localhost:8080");
    }

    #[test]
    fn should_parse_worker_and_request_counts() {
        let args =
            Args::try_parse_from(["thor", "-p", "4", "-r", "16", "-v", "http://localhost:8080"])
                .unwrap();
        assert_eq!(args.processes, 4);
        assert_eq!(args.requests, 16);
        assert!(args.verbose);
    }

    #[test]
    fn should_reject_missing_url() {
        let result = Args::try_parse_from(["thor", "-p", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_non_integer_worker_count() {
        let result = Args::try_parse_from(["thor", "-p", "abc", "http://localhost:8080"]);
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_zero_workers_and_zero_requests() {
        assert!(Args::try_parse_from(["thor", "-p", "0", "http://localhost:8080"]).is_err());
        assert!(Args::try_parse_from(["thor", "-r", "0", "http://localhost:8080"]).is_err());
    }

    #[test]
    fn should_reject_unknown_flag() {
        let result = Args::try_parse_from(["thor", "-x", "http://localhost:8080"]);
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_relative_url() {
        let args = Args::try_parse_from(["thor", "localhost/path"]).unwrap();
        let result = args.into_config();
        assert!(matches!(result, Err(ThorError::InvalidUrl(_))));
    }

    #[test]
    fn should_map_timeout_to_duration() {
        let args = Args::try_parse_from(["thor", "-t", "5", "http://localhost:8080"]).unwrap();
        let config = args.into_config().unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
