use crate::error::Result as StoreResult;
use crate::{ListStore, StoreError};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use reqwest::Client as ReqwestClient;
use serde_json::{Value, json};

/// Client for a managed Redis-compatible REST endpoint.
///
/// Speaks the single-command protocol: each command is POSTed to the base
/// URL as a JSON array (`["LRANGE", key, "0", "-1"]`) with a bearer token,
/// and the reply envelope is `{"result": ...}` on success or
/// `{"error": "..."}` on failure. Each command is atomic on the store side.
pub struct RestListStore {
    base_url: String,
    token: String,
    client: ReqwestClient,
}

impl RestListStore {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Store endpoint (e.g., "https://your-kv.upstash.io")
    /// * `token` - Bearer token for the endpoint
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Execute one command and unwrap the result envelope
    async fn command(&self, cmd: Value) -> StoreResult<Value> {
        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.token)
            .json(&cmd)
            .send()
            .await?;

        let body: Value = response.json().await?;

        if let Some(error) = body.get("error").and_then(|e| e.as_str()) {
            return Err(StoreError::Api {
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(body.get("result").cloned().unwrap_or(Value::Null))
    }
}

#[async_trait]
impl ListStore for RestListStore {
    async fn range(&self, key: &str, start: i64, stop: i64) -> StoreResult<Vec<Value>> {
        let result = self
            .command(json!(["LRANGE", key, start.to_string(), stop.to_string()]))
            .await?;

        match result {
            Value::Array(items) => Ok(items),
            other => Err(StoreError::api(format!(
                "LRANGE returned a non-array result: {other}"
            ))),
        }
    }

    async fn push_head(&self, key: &str, value: &str) -> StoreResult<()> {
        self.command(json!(["LPUSH", key, value])).await?;
        Ok(())
    }

    async fn set_at(&self, key: &str, index: i64, value: &str) -> StoreResult<()> {
        self.command(json!(["LSET", key, index.to_string(), value]))
            .await?;
        Ok(())
    }

    async fn remove_value(&self, key: &str, count: i64, value: &str) -> StoreResult<u64> {
        let result = self
            .command(json!(["LREM", key, count.to_string(), value]))
            .await?;
        Ok(result.as_u64().unwrap_or(0))
    }
}
