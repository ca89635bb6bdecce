/// Sink for the benchmark report. Workers report as they go, so lines from
/// different workers may interleave, but each worker emits its own lines in
/// request order.
pub trait Reporter: Send + Sync {
    fn report(&self, line: &str);
}

/// Production reporter. Report lines own stdout, diagnostics go to stderr.
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&self, line: &str) {
        println!("{line}");
    }
}

// Elapsed times are rounded to 2 decimals for display only, the recorded
// values keep full precision.

pub fn request_line(worker_id: u32, request: u32, elapsed_secs: f64) -> String {
    format!("Process: {worker_id}, Request: {request}, Elapsed Time: {elapsed_secs:.2}")
}

pub fn average_line(worker_id: u32, average_secs: f64) -> String {
    format!("Process: {worker_id}, AVERAGE:  , Elapsed Time: {average_secs:.2}")
}

pub fn total_line(grand_average_secs: f64) -> String {
    format!("TOTAL AVERAGE ELAPSED TIME: {grand_average_secs:.2}")
}
