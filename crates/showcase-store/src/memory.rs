use crate::error::Result as StoreResult;
use crate::{ListStore, StoreError};

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

/// In-process ListStore with the observable semantics of the real store:
/// LRANGE negative indices, LSET out-of-range errors, LREM first-match
/// removal. Backs the server integration tests and credential-less local
/// runs.
#[derive(Default)]
pub struct MemoryListStore {
    lists: Mutex<HashMap<String, Vec<Value>>>,
}

impl MemoryListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a list wholesale. Lets tests seed elements that are already
    /// structured objects rather than serialized strings.
    pub async fn seed(&self, key: &str, values: Vec<Value>) {
        self.lists.lock().await.insert(key.to_string(), values);
    }
}

/// Redis index normalization: negative indices count from the tail
fn normalize(index: i64, len: i64) -> i64 {
    if index < 0 { index + len } else { index }
}

#[async_trait]
impl ListStore for MemoryListStore {
    async fn range(&self, key: &str, start: i64, stop: i64) -> StoreResult<Vec<Value>> {
        let lists = self.lists.lock().await;
        let Some(list) = lists.get(key) else {
            return Ok(Vec::new());
        };

        let len = list.len() as i64;
        let start = normalize(start, len).max(0);
        let stop = normalize(stop, len).min(len - 1);

        if start > stop || start >= len {
            return Ok(Vec::new());
        }

        Ok(list[start as usize..=stop as usize].to_vec())
    }

    async fn push_head(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut lists = self.lists.lock().await;
        lists
            .entry(key.to_string())
            .or_default()
            .insert(0, Value::String(value.to_string()));
        Ok(())
    }

    async fn set_at(&self, key: &str, index: i64, value: &str) -> StoreResult<()> {
        let mut lists = self.lists.lock().await;
        let list = lists
            .get_mut(key)
            .ok_or_else(|| StoreError::api("ERR no such key"))?;

        let len = list.len() as i64;
        let index = normalize(index, len);
        if index < 0 || index >= len {
            return Err(StoreError::api("ERR index out of range"));
        }

        list[index as usize] = Value::String(value.to_string());
        Ok(())
    }

    async fn remove_value(&self, key: &str, count: i64, value: &str) -> StoreResult<u64> {
        let mut lists = self.lists.lock().await;
        let Some(list) = lists.get_mut(key) else {
            return Ok(0);
        };

        // Head-to-tail removal only; the handler never asks for tail-first
        // (count < 0) and 0 means "all occurrences".
        let target = Value::String(value.to_string());
        let limit = if count == 0 {
            u64::MAX
        } else {
            count.unsigned_abs()
        };

        let mut removed = 0u64;
        list.retain(|v| {
            if removed < limit && *v == target {
                removed += 1;
                false
            } else {
                true
            }
        });

        Ok(removed)
    }
}
