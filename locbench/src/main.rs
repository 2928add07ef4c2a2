use clap::Parser;
use locbench::config::{DEFAULT_BASE_URL, DEFAULT_ITERATIONS};
use locbench::report::print_summary;
use locbench::{BenchConfig, PerfHarness};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Latency benchmarks for the localization management API.
#[derive(Parser, Debug)]
#[command(name = "locbench", version, about)]
struct Args {
    /// Base URL of the target API.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Iterations per read scenario.
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Comma-separated payload sizes for the bulk-update sweep.
    #[arg(long, value_delimiter = ',', default_values_t = [1usize, 5, 10, 20])]
    payload_sizes: Vec<usize>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("locbench=info")),
        )
        .init();

    let args = Args::parse();
    let mut config = BenchConfig::new(&args.base_url);
    config.iterations = args.iterations;
    config.bulk_payload_sizes = args.payload_sizes;

    let mut harness = PerfHarness::new(config);
    harness.run_all().await;
    harness.check_bulk_update_contract().await;

    if let Err(err) = print_summary(harness.results()) {
        warn!("failed to write summary: {err}");
    }

    // Partial failures show up in the summary, never in the exit code.
}
