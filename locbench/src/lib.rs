#![doc = include_str!("../README.md")]

pub mod client;
pub mod config;
pub mod harness;
pub mod payload;
pub mod report;
pub mod results;
pub mod scenario;
pub mod stats;
pub mod timer;

pub use client::{CallResponse, ClientError, LocalizationClient};
pub use config::BenchConfig;
pub use harness::PerfHarness;
pub use scenario::{Policy, Scenario, ScenarioResult, TimingSample};
pub use stats::Statistics;

pub mod prelude {
    pub use crate::client::LocalizationClient;
    pub use crate::config::BenchConfig;
    pub use crate::harness::PerfHarness;
    pub use crate::report::print_summary;
    pub use crate::scenario::{Policy, Scenario};
}
