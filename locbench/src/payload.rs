//! Deterministic bulk-update payload generation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Body of `PUT /localizations/bulk-update`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkUpdatePayload {
    pub updates: Vec<ProjectLocaleUpdate>,
}

/// One project/locale entry within a bulk update. Localization keys are
/// unique and kept in insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLocaleUpdate {
    pub project_id: String,
    pub locale: String,
    pub localizations: IndexMap<String, String>,
}

/// Response body of a successful bulk update.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BulkUpdateResponse {
    pub success: bool,
    pub updated_count: usize,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Builds a synthetic payload with exactly `size` updates.
///
/// Entry `i` (1-indexed) targets `perf-test-project-{i}` in locale `en` and
/// carries three keys `perf_test_key_{i}_1..3`. The output depends only on
/// `size`, so identical calls produce identical payloads and fixtures stay
/// reproducible.
pub fn bulk_update_payload(size: usize) -> BulkUpdatePayload {
    let updates = (1..=size)
        .map(|i| {
            let mut localizations = IndexMap::with_capacity(3);
            for k in 1..=3 {
                localizations.insert(
                    format!("perf_test_key_{i}_{k}"),
                    format!("Performance test value {i}-{k}"),
                );
            }
            ProjectLocaleUpdate {
                project_id: format!("perf-test-project-{i}"),
                locale: "en".to_string(),
                localizations,
            }
        })
        .collect();

    BulkUpdatePayload { updates }
}
