//! HTTP client for the hosted document service.
//!
//! The service exposes one route family per collection:
//!
//! - `GET /v1/{collection}` lists documents as `{"documents": [{key, fields}, ..]}`
//! - `GET /v1/{collection}/{key}` returns one `{key, fields}` document or 404
//! - `PUT /v1/{collection}/{key}?merge=<bool>` writes the `{"fields": ..}` body
//! - `DELETE /v1/{collection}/{key}` removes the document

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;

use super::r#trait::{DocumentStore, Fields, StoreError};

#[derive(Debug, Deserialize)]
struct ListResponse {
    documents: Vec<DocumentEntry>,
}

#[derive(Debug, Deserialize)]
struct DocumentEntry {
    key: String,
    fields: Fields,
}

#[derive(Debug, Serialize)]
struct WriteRequest {
    fields: Fields,
}

/// Client for the hosted document service.
pub struct RestDocumentStore {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl RestDocumentStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: Some(token.into()),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        match &config.token {
            Some(token) => Self::with_token(config.base_url.clone(), token.clone()),
            None => Self::new(config.base_url.clone()),
        }
    }

    /// Build a service URL from path segments, percent-encoding each one.
    /// Document keys are user-typed names and may contain spaces or slashes.
    fn url_for(&self, segments: &[&str]) -> Result<reqwest::Url, StoreError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| StoreError::Network(format!("invalid store url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::Network("store url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        return Err(StoreError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}

#[async_trait]
impl DocumentStore for RestDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<(String, Fields)>, StoreError> {
        let url = self.url_for(&["v1", collection])?;
        let resp = self
            .authorized(self.http.get(url))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let resp = check_status(resp).await?;

        let body: ListResponse = resp
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(body
            .documents
            .into_iter()
            .map(|entry| (entry.key, entry.fields))
            .collect())
    }

    async fn get(&self, collection: &str, key: &str) -> Result<Option<Fields>, StoreError> {
        let url = self.url_for(&["v1", collection, key])?;
        let resp = self
            .authorized(self.http.get(url))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = check_status(resp).await?;

        let body: DocumentEntry = resp
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(Some(body.fields))
    }

    async fn set(
        &self,
        collection: &str,
        key: &str,
        fields: Fields,
        merge: bool,
    ) -> Result<(), StoreError> {
        let url = self.url_for(&["v1", collection, key])?;
        let resp = self
            .authorized(
                self.http
                    .put(url)
                    .query(&[("merge", merge)])
                    .json(&WriteRequest { fields }),
            )
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        check_status(resp).await?;
        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<(), StoreError> {
        let url = self.url_for(&["v1", collection, key])?;
        let resp = self
            .authorized(self.http.delete(url))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        // Deleting an absent document is a success per the store contract.
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        check_status(resp).await?;
        Ok(())
    }
}
