mod args;
mod client;
mod error;
mod report;
mod runner;
mod stats;
mod worker;

use crate::args::Args;
use crate::client::HttpClientFactory;
use crate::report::StdoutReporter;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Report lines own stdout, diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // clap exits with status 2 on usage errors, the CLI contract is 1.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            let mut cmd = Args::command();
            let _ = cmd.error(ErrorKind::ValueValidation, e.to_string()).print();
            return ExitCode::from(1);
        }
    };

    let timeout = config.timeout;
    let config = Arc::new(config);
    let client_factory = Arc::new(HttpClientFactory::new(timeout));
    let reporter = Arc::new(StdoutReporter);

    info!("Starting the benchmark...");
    match runner::run(config, client_factory, reporter).await {
        Ok(_) => {
            info!("Finished the benchmark.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Benchmark failed: {e}");
            ExitCode::FAILURE
        }
    }
}
