//! Thin reqwest wrapper over the localization management API.

use crate::payload::BulkUpdatePayload;
use thiserror::Error;

/// Transport-level failure while talking to the target API.
///
/// These never abort a benchmark run; the scenario runner logs them and moves
/// on to the next iteration.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A completed HTTP exchange, reduced to what classification needs.
#[derive(Clone, Debug)]
pub struct CallResponse {
    pub status: u16,
    pub body: String,
}

/// Client for the five benchmarked endpoints.
///
/// Connection pooling, TLS, and timeouts stay with reqwest; this type only
/// knows the paths.
#[derive(Clone, Debug)]
pub struct LocalizationClient {
    http: reqwest::Client,
    base_url: String,
}

impl LocalizationClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `/localizations/`
    pub async fn get_all_localizations(&self) -> Result<CallResponse, ClientError> {
        let resp = self
            .http
            .get(format!("{}/localizations/", self.base_url))
            .send()
            .await?;
        read(resp).await
    }

    /// GET `/localizations/{project_id}/{locale}`
    pub async fn get_localization(
        &self,
        project_id: &str,
        locale: &str,
    ) -> Result<CallResponse, ClientError> {
        let resp = self
            .http
            .get(format!(
                "{}/localizations/{project_id}/{locale}",
                self.base_url
            ))
            .send()
            .await?;
        read(resp).await
    }

    /// GET `/localizations-by-project-id/{project_id}`
    pub async fn get_by_project_id(&self, project_id: &str) -> Result<CallResponse, ClientError> {
        let resp = self
            .http
            .get(format!(
                "{}/localizations-by-project-id/{project_id}",
                self.base_url
            ))
            .send()
            .await?;
        read(resp).await
    }

    /// GET `/localizations-by-project-ids?project_ids=a,b,c`
    ///
    /// The API takes the IDs comma-separated in a single query parameter.
    pub async fn get_by_project_ids(
        &self,
        project_ids: &[&str],
    ) -> Result<CallResponse, ClientError> {
        let resp = self
            .http
            .get(format!("{}/localizations-by-project-ids", self.base_url))
            .query(&[("project_ids", project_ids.join(","))])
            .send()
            .await?;
        read(resp).await
    }

    /// PUT `/localizations/bulk-update`
    pub async fn bulk_update(&self, payload: &BulkUpdatePayload) -> Result<CallResponse, ClientError> {
        let resp = self
            .http
            .put(format!("{}/localizations/bulk-update", self.base_url))
            .json(payload)
            .send()
            .await?;
        read(resp).await
    }

    /// PUT `/localizations/bulk-update` with an arbitrary JSON body, for
    /// probing the endpoint's validation behavior.
    pub async fn bulk_update_raw(
        &self,
        body: &serde_json::Value,
    ) -> Result<CallResponse, ClientError> {
        let resp = self
            .http
            .put(format!("{}/localizations/bulk-update", self.base_url))
            .json(body)
            .send()
            .await?;
        read(resp).await
    }
}

async fn read(resp: reqwest::Response) -> Result<CallResponse, ClientError> {
    let status = resp.status().as_u16();
    let body = resp.text().await?;
    Ok(CallResponse { status, body })
}
