//! Scenario definition and the iteration loop.

use crate::client::CallResponse;
use crate::config::DEFAULT_ITERATIONS;
use crate::stats::Statistics;
use crate::timer;
use std::fmt::Display;
use std::future::Future;
#[allow(unused_imports)]
use tracing::{debug, info, warn};

/// Rule deciding whether a completed call counts toward statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Only responses with exactly the expected status are recorded.
    Strict { expect: u16 },
    /// Every completed call is recorded, whatever the status. Used where a
    /// non-2xx answer (e.g. a legitimate 404 on a lookup) is still a latency
    /// worth measuring.
    Lenient,
}

/// How one recorded sample classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleOutcome {
    Success,
    Failure,
}

/// One measured duration with its classification.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingSample {
    pub duration_ms: f64,
    pub outcome: SampleOutcome,
    pub status_code: Option<u16>,
}

/// What a single iteration produced, after classification. Expected failure
/// modes are values here, not control flow.
#[derive(Clone, Debug)]
pub enum IterationOutcome {
    /// The call counts toward statistics.
    Recorded(TimingSample),
    /// The call completed with a status the policy rejects.
    ProtocolError { status: u16, body: String },
    /// The call never completed; no timing exists for it.
    TransportError { description: String },
}

impl Policy {
    /// Strict policy expecting a plain 200.
    pub fn strict() -> Self {
        Self::Strict { expect: 200 }
    }

    /// Classifies one completed call. `Recorded` carries the sample to keep;
    /// `ProtocolError` drops the timing entirely.
    fn classify(&self, resp: &CallResponse, duration_ms: f64) -> IterationOutcome {
        match self {
            Policy::Strict { expect } => {
                if resp.status == *expect {
                    IterationOutcome::Recorded(TimingSample {
                        duration_ms,
                        outcome: SampleOutcome::Success,
                        status_code: Some(resp.status),
                    })
                } else {
                    IterationOutcome::ProtocolError {
                        status: resp.status,
                        body: resp.body.clone(),
                    }
                }
            }
            Policy::Lenient => {
                let outcome = if (200..300).contains(&resp.status) {
                    SampleOutcome::Success
                } else {
                    SampleOutcome::Failure
                };
                IterationOutcome::Recorded(TimingSample {
                    duration_ms,
                    outcome,
                    status_code: Some(resp.status),
                })
            }
        }
    }
}

/// Samples recorded by one scenario run, in iteration order.
#[derive(Clone, Debug)]
pub struct ScenarioResult {
    pub name: String,
    pub samples: Vec<TimingSample>,
}

impl ScenarioResult {
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Recorded durations in iteration order.
    pub fn durations(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.duration_ms).collect()
    }

    /// `None` when the run recorded no samples; such scenarios are omitted
    /// from the summary.
    pub fn statistics(&self) -> Option<Statistics> {
        Statistics::from_durations(&self.durations())
    }
}

/// A named benchmark target: an operation, an iteration count, and a
/// classification policy.
///
/// ```no_run
/// use locbench::{LocalizationClient, Policy, Scenario};
///
/// # async fn demo() {
/// let client = LocalizationClient::new("http://localhost:8000");
/// let result = Scenario::new("get_all_localizations", move || {
///     let client = client.clone();
///     async move { client.get_all_localizations().await }
/// })
/// .iterations(5)
/// .policy(Policy::strict())
/// .run()
/// .await;
/// # }
/// ```
pub struct Scenario<T> {
    name: String,
    func: T,
    iterations: u32,
    policy: Policy,
}

impl<T, F, E> Scenario<T>
where
    T: Fn() -> F,
    F: Future<Output = Result<CallResponse, E>>,
    E: Display,
{
    pub fn new(name: &str, func: T) -> Self {
        Self {
            name: name.to_string(),
            func,
            iterations: DEFAULT_ITERATIONS,
            policy: Policy::strict(),
        }
    }

    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs the scenario to completion, one iteration at a time.
    ///
    /// Each timer window opens only after the previous call has fully
    /// resolved. Transport and protocol failures are logged per iteration
    /// and never abort the loop; `run` itself cannot fail.
    pub async fn run(self) -> ScenarioResult {
        info!(
            "Benchmarking {} ({} iterations)",
            self.name, self.iterations
        );

        let mut samples = Vec::new();
        for i in 1..=self.iterations {
            match self.iteration().await {
                IterationOutcome::Recorded(sample) => {
                    info!(
                        "  iteration {i}: {:.2}ms (status {})",
                        sample.duration_ms,
                        sample.status_code.unwrap_or_default()
                    );
                    samples.push(sample);
                }
                IterationOutcome::ProtocolError { status, body } => {
                    warn!("  iteration {i}: HTTP {status} excluded: {body}");
                }
                IterationOutcome::TransportError { description } => {
                    warn!("  iteration {i}: transport error: {description}");
                }
            }
        }

        ScenarioResult {
            name: self.name,
            samples,
        }
    }

    async fn iteration(&self) -> IterationOutcome {
        match timer::measure((self.func)()).await {
            Ok((resp, duration_ms)) => self.policy.classify(&resp, duration_ms),
            Err(err) => IterationOutcome::TransportError {
                description: err.to_string(),
            },
        }
    }
}
