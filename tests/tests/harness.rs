mod utils;
#[allow(unused)]
use utils::*;

use locbench::payload::{bulk_update_payload, BulkUpdateResponse};
use locbench::report::write_summary;
use locbench::scenario::SampleOutcome;
use locbench::{BenchConfig, LocalizationClient, PerfHarness, Policy, Scenario};
use serde_json::json;

fn config() -> BenchConfig {
    let mut config = BenchConfig::new(BASE_URL);
    config.iterations = 3;
    config.bulk_payload_sizes = vec![1, 5];
    config
}

#[tokio::test]
async fn full_suite_records_every_scenario() {
    init().await;

    let mut harness = PerfHarness::new(config());
    harness.run_all().await;
    let results = harness.results();

    let names: Vec<_> = results.all().map(|(name, _)| name.to_string()).collect();
    assert_eq!(
        names,
        vec![
            "get_all_localizations",
            "get_specific_localization",
            "get_localization_by_project_id",
            "get_localizations_by_project_ids",
            "bulk_update_1_items",
            "bulk_update_5_items",
        ]
    );

    for (name, stats) in results.all() {
        assert!(stats.count >= 1, "{name} recorded no samples");
        assert!(stats.min >= 0.0);
        assert!(stats.min <= stats.median && stats.median <= stats.max);
    }

    // Read scenarios use the configured iteration count; bulk sizes <= 10
    // run 5 iterations each.
    assert_eq!(results.get("get_all_localizations").unwrap().count, 3);
    assert_eq!(results.get("bulk_update_5_items").unwrap().count, 5);

    let mut out = Vec::new();
    write_summary(&mut out, results).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Get Localization By Project Id:"));
    assert!(text.contains("Performance: "));
}

#[tokio::test]
async fn lenient_lookup_times_404s() {
    init().await;

    let client = LocalizationClient::new(BASE_URL);
    let result = Scenario::new("lookup_unknown_project", move || {
        let client = client.clone();
        async move { client.get_by_project_id("no-such-project").await }
    })
    .iterations(4)
    .policy(Policy::Lenient)
    .run()
    .await;

    assert_eq!(result.samples.len(), 4);
    for sample in &result.samples {
        assert_eq!(sample.status_code, Some(404));
        assert_eq!(sample.outcome, SampleOutcome::Failure);
        assert!(sample.duration_ms >= 0.0);
    }
    assert_eq!(result.statistics().unwrap().count, 4);
}

#[tokio::test]
async fn strict_lookup_on_unknown_project_is_omitted() {
    init().await;

    let client = LocalizationClient::new(BASE_URL);
    let result = Scenario::new("lookup_unknown_project_strict", move || {
        let client = client.clone();
        async move { client.get_by_project_id("no-such-project").await }
    })
    .iterations(4)
    .run()
    .await;

    assert!(result.is_empty());
    assert_eq!(result.statistics(), None);
}

#[tokio::test]
async fn bulk_update_contract() -> anyhow::Result<()> {
    init().await;

    let client = LocalizationClient::new(BASE_URL);

    let resp = client.bulk_update(&bulk_update_payload(3)).await?;
    assert_eq!(resp.status, 200);
    let body: BulkUpdateResponse = serde_json::from_str(&resp.body)?;
    assert!(body.success);
    assert_eq!(body.updated_count, 3);
    assert!(body.errors.is_empty());

    // Structurally invalid update entries fail validation.
    let resp = client
        .bulk_update_raw(&json!({ "updates": [ { "project_id": "test-project" } ] }))
        .await?;
    assert_eq!(resp.status, 422);

    let resp = client.bulk_update_raw(&json!({ "updates": [] })).await?;
    assert_eq!(resp.status, 200);
    let body: BulkUpdateResponse = serde_json::from_str(&resp.body)?;
    assert_eq!(body.updated_count, 0);

    Ok(())
}

#[tokio::test]
async fn rerun_overwrites_previous_statistics() {
    init().await;

    let mut harness = PerfHarness::new(config());
    harness.bench_get_all_localizations(2).await;
    harness.bench_get_all_localizations(5).await;

    let results = harness.results();
    assert_eq!(results.len(), 1);
    // Only the second run's samples remain.
    assert_eq!(results.get("get_all_localizations").unwrap().count, 5);
}

#[tokio::test]
async fn unreachable_target_yields_empty_summary() {
    init().await;

    // Nothing listens on this port; every iteration is a transport error.
    let mut config = BenchConfig::new("http://127.0.0.1:3019");
    config.iterations = 2;
    config.bulk_payload_sizes = vec![1];

    let mut harness = PerfHarness::new(config);
    harness.run_all().await;

    assert!(harness.results().is_empty());

    let mut out = Vec::new();
    write_summary(&mut out, harness.results()).unwrap();
    assert!(String::from_utf8(out)
        .unwrap()
        .contains("No test results available"));
}
