//! In-memory stand-in for the localization management API.
//!
//! Serves the five endpoints the harness benchmarks, backed by a seeded
//! in-process store. An optional fixed per-request delay makes latencies
//! predictable when shaping test runs.

use axum::{
    debug_handler,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::Duration;
use tracing::debug;

type LocaleMap = HashMap<String, String>;

lazy_static! {
    // project_id -> locale -> key -> value
    static ref STORE: RwLock<HashMap<String, HashMap<String, LocaleMap>>> = RwLock::new(seed());
}

static DELAY_MS: AtomicU64 = AtomicU64::new(0);

/// Fixed artificial delay applied to every request.
pub fn set_delay_ms(ms: u64) {
    DELAY_MS.store(ms, Ordering::Relaxed);
}

fn seed() -> HashMap<String, HashMap<String, LocaleMap>> {
    let mut en = LocaleMap::new();
    en.insert("welcome_message".to_string(), "Welcome!".to_string());
    en.insert("goodbye_message".to_string(), "Goodbye!".to_string());

    let mut locales = HashMap::new();
    locales.insert("en".to_string(), en);

    let mut store = HashMap::new();
    store.insert("test-project".to_string(), locales);
    store
}

pub async fn run(addr: SocketAddr) {
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, router()).await.unwrap();
}

pub fn router() -> Router {
    Router::new()
        .route("/localizations/", get(get_all))
        .route("/localizations/:project_id/:locale", get(get_one))
        .route(
            "/localizations-by-project-id/:project_id",
            get(by_project_id),
        )
        .route("/localizations-by-project-ids", get(by_project_ids))
        .route("/localizations/bulk-update", put(bulk_update))
}

async fn delay() {
    let ms = DELAY_MS.load(Ordering::Relaxed);
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

#[derive(Clone, Debug, Serialize)]
struct LocalizationEntry {
    project_id: String,
    locale: String,
    localizations: LocaleMap,
}

#[debug_handler]
async fn get_all() -> Json<Vec<LocalizationEntry>> {
    delay().await;
    let store = STORE.read().unwrap();
    let mut entries: Vec<_> = store
        .iter()
        .flat_map(|(project_id, locales)| {
            locales
                .iter()
                .map(move |(locale, localizations)| LocalizationEntry {
                    project_id: project_id.clone(),
                    locale: locale.clone(),
                    localizations: localizations.clone(),
                })
        })
        .collect();
    entries.sort_by(|a, b| (&a.project_id, &a.locale).cmp(&(&b.project_id, &b.locale)));
    Json(entries)
}

#[debug_handler]
async fn get_one(Path((project_id, locale)): Path<(String, String)>) -> Json<LocaleMap> {
    delay().await;
    let store = STORE.read().unwrap();
    let localizations = store
        .get(&project_id)
        .and_then(|locales| locales.get(&locale))
        .cloned()
        .unwrap_or_default();
    Json(localizations)
}

#[debug_handler]
async fn by_project_id(
    Path(project_id): Path<String>,
) -> Result<Json<HashMap<String, LocaleMap>>, StatusCode> {
    delay().await;
    let store = STORE.read().unwrap();
    match store.get(&project_id) {
        Some(locales) => Ok(Json(locales.clone())),
        None => Err(StatusCode::NOT_FOUND),
    }
}

#[derive(Debug, Deserialize)]
struct ProjectIdsParams {
    project_ids: String,
}

#[debug_handler]
async fn by_project_ids(Query(params): Query<ProjectIdsParams>) -> Json<Vec<LocalizationEntry>> {
    delay().await;
    let store = STORE.read().unwrap();
    let mut entries = Vec::new();
    for project_id in params.project_ids.split(',') {
        if let Some(locales) = store.get(project_id) {
            for (locale, localizations) in locales {
                entries.push(LocalizationEntry {
                    project_id: project_id.to_string(),
                    locale: locale.clone(),
                    localizations: localizations.clone(),
                });
            }
        }
    }
    Json(entries)
}

#[derive(Debug, Deserialize)]
struct BulkUpdateRequest {
    updates: Vec<UpdateEntry>,
}

#[derive(Debug, Deserialize)]
struct UpdateEntry {
    project_id: String,
    locale: String,
    localizations: LocaleMap,
}

#[derive(Debug, Serialize)]
struct BulkUpdateResponse {
    success: bool,
    updated_count: usize,
    errors: Vec<String>,
}

// A body that fails to deserialize is rejected by the Json extractor with a
// 422 before this handler runs.
#[debug_handler]
async fn bulk_update(Json(req): Json<BulkUpdateRequest>) -> Json<BulkUpdateResponse> {
    delay().await;
    let updated_count = req.updates.len();
    debug!("bulk update of {updated_count} entries");

    let mut store = STORE.write().unwrap();
    for update in req.updates {
        let locales = store.entry(update.project_id).or_default();
        let localizations = locales.entry(update.locale).or_default();
        localizations.extend(update.localizations);
    }

    Json(BulkUpdateResponse {
        success: true,
        updated_count,
        errors: vec![],
    })
}
