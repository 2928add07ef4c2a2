//! Benchmark suite driver: one method per target endpoint.

use crate::client::LocalizationClient;
use crate::config::{bulk_iterations, BenchConfig};
use crate::payload::{bulk_update_payload, BulkUpdateResponse};
use crate::results::ResultStore;
use crate::scenario::{Policy, Scenario, ScenarioResult};
use serde_json::json;
#[allow(unused_imports)]
use tracing::{info, warn};

/// Runs the benchmark scenarios against one target and accumulates their
/// statistics.
///
/// Individual request failures are logged and reflected in the collected
/// samples; nothing here returns an error.
pub struct PerfHarness {
    client: LocalizationClient,
    config: BenchConfig,
    store: ResultStore,
}

impl PerfHarness {
    pub fn new(config: BenchConfig) -> Self {
        Self {
            client: LocalizationClient::new(&config.base_url),
            config,
            store: ResultStore::new(),
        }
    }

    /// Runs every benchmark scenario with the configured iteration counts.
    pub async fn run_all(&mut self) {
        info!(
            "Starting localization management API benchmarks against {}",
            self.config.base_url
        );

        let iterations = self.config.iterations;
        self.bench_get_all_localizations(iterations).await;
        self.bench_get_specific_localization(iterations).await;
        self.bench_get_by_project_id(iterations).await;
        self.bench_get_by_project_ids(iterations).await;

        let sizes = self.config.bulk_payload_sizes.clone();
        self.bench_bulk_update(&sizes).await;
    }

    /// GET `/localizations/`, strict 200.
    pub async fn bench_get_all_localizations(&mut self, iterations: u32) {
        let client = self.client.clone();
        let result = Scenario::new("get_all_localizations", move || {
            let client = client.clone();
            async move { client.get_all_localizations().await }
        })
        .iterations(iterations)
        .run()
        .await;
        self.record(result);
    }

    /// GET `/localizations/{project_id}/{locale}`, strict 200.
    pub async fn bench_get_specific_localization(&mut self, iterations: u32) {
        let client = self.client.clone();
        let result = Scenario::new("get_specific_localization", move || {
            let client = client.clone();
            async move { client.get_localization("test-project", "en").await }
        })
        .iterations(iterations)
        .run()
        .await;
        self.record(result);
    }

    /// GET `/localizations-by-project-id/{project_id}`, lenient.
    ///
    /// A 404 for an unknown project is a legitimate answer whose latency we
    /// still want, so every completed call is recorded. This leniency is
    /// specific to this lookup; the other scenarios stay strict.
    pub async fn bench_get_by_project_id(&mut self, iterations: u32) {
        let client = self.client.clone();
        let result = Scenario::new("get_localization_by_project_id", move || {
            let client = client.clone();
            async move { client.get_by_project_id("test-project").await }
        })
        .iterations(iterations)
        .policy(Policy::Lenient)
        .run()
        .await;
        self.record(result);
    }

    /// GET `/localizations-by-project-ids`, strict 200.
    pub async fn bench_get_by_project_ids(&mut self, iterations: u32) {
        let client = self.client.clone();
        let result = Scenario::new("get_localizations_by_project_ids", move || {
            let client = client.clone();
            async move {
                client
                    .get_by_project_ids(&["test-project", "another-project", "third-project"])
                    .await
            }
        })
        .iterations(iterations)
        .run()
        .await;
        self.record(result);
    }

    /// PUT `/localizations/bulk-update` across the configured payload sizes,
    /// strict 200. Larger payloads run fewer iterations.
    pub async fn bench_bulk_update(&mut self, sizes: &[usize]) {
        for &size in sizes {
            let payload = bulk_update_payload(size);
            let client = self.client.clone();
            let result = Scenario::new(&format!("bulk_update_{size}_items"), move || {
                let client = client.clone();
                let payload = payload.clone();
                async move { client.bulk_update(&payload).await }
            })
            .iterations(bulk_iterations(size))
            .run()
            .await;
            self.record(result);
        }
    }

    /// Probes the bulk-update endpoint's contract without recording
    /// statistics: a well-formed payload, a structurally invalid one, and an
    /// empty update list.
    pub async fn check_bulk_update_contract(&self) {
        info!("Checking bulk-update contract");

        let valid = json!({
            "updates": [
                {
                    "project_id": "test-project",
                    "locale": "en",
                    "localizations": {
                        "welcome_message": "Welcome to our app!",
                        "goodbye_message": "Thanks for using our app!"
                    }
                },
                {
                    "project_id": "test-project",
                    "locale": "es",
                    "localizations": {
                        "welcome_message": "¡Bienvenido a nuestra aplicación!",
                        "goodbye_message": "¡Gracias por usar nuestra aplicación!"
                    }
                }
            ]
        });
        match self.client.bulk_update_raw(&valid).await {
            Ok(resp) if resp.status == 200 => {
                match serde_json::from_str::<BulkUpdateResponse>(&resp.body) {
                    Ok(body) => info!(
                        "  valid payload: success={} updated_count={} errors={}",
                        body.success,
                        body.updated_count,
                        body.errors.len()
                    ),
                    Err(err) => warn!("  valid payload: unparseable body: {err}"),
                }
            }
            Ok(resp) => warn!("  valid payload rejected: HTTP {} {}", resp.status, resp.body),
            Err(err) => warn!("  valid payload: transport error: {err}"),
        }

        // Missing `locale` and `localizations` must fail validation.
        let invalid = json!({ "updates": [ { "project_id": "test-project" } ] });
        match self.client.bulk_update_raw(&invalid).await {
            Ok(resp) if resp.status == 422 => info!("  invalid payload correctly rejected"),
            Ok(resp) => warn!("  invalid payload: unexpected HTTP {}", resp.status),
            Err(err) => warn!("  invalid payload: transport error: {err}"),
        }

        let empty = json!({ "updates": [] });
        match self.client.bulk_update_raw(&empty).await {
            Ok(resp) if resp.status == 200 => info!("  empty update list accepted"),
            Ok(resp) => warn!("  empty update list: unexpected HTTP {}", resp.status),
            Err(err) => warn!("  empty update list: transport error: {err}"),
        }
    }

    /// Statistics collected so far, in run order.
    pub fn results(&self) -> &ResultStore {
        &self.store
    }

    fn record(&mut self, result: ScenarioResult) {
        match result.statistics() {
            Some(stats) => {
                info!("{}: {stats}", result.name);
                self.store.put(&result.name, stats);
            }
            // Omitted from the summary rather than treated as an error.
            None => warn!("{}: no samples recorded; omitting from summary", result.name),
        }
    }
}
