//! Harness configuration.

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_ITERATIONS: u32 = 10;
pub const DEFAULT_BULK_PAYLOAD_SIZES: &[usize] = &[1, 5, 10, 20];

/// Configuration for a benchmark run.
///
/// Passed explicitly into [`PerfHarness`](crate::harness::PerfHarness); there
/// are no process-wide defaults beyond [`BenchConfig::default`].
#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// Base URL of the target API, without a trailing slash.
    pub base_url: String,
    /// Iterations per read scenario.
    pub iterations: u32,
    /// Payload sizes exercised by the bulk-update sweep.
    pub bulk_payload_sizes: Vec<usize>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            iterations: DEFAULT_ITERATIONS,
            bulk_payload_sizes: DEFAULT_BULK_PAYLOAD_SIZES.to_vec(),
        }
    }
}

impl BenchConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

/// Larger bulk payloads get fewer iterations to keep run time bounded.
pub fn bulk_iterations(size: usize) -> u32 {
    if size <= 10 {
        5
    } else {
        3
    }
}
