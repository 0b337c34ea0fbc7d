use crate::error::Result as StoreResult;

use async_trait::async_trait;
use serde_json::Value;

/// The four list operations the submission handler consumes.
///
/// This matches the primitive set of a Redis-style list: there is no
/// positional removal, which is why delete-by-index is a set_at +
/// remove_value sequence at the caller.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Ordered read, inclusive on both ends, with Redis LRANGE index
    /// semantics (negative indices count from the tail).
    async fn range(&self, key: &str, start: i64, stop: i64) -> StoreResult<Vec<Value>>;

    /// Atomic push to the head of the list.
    async fn push_head(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Overwrite the element at `index`. Out of range is an error.
    async fn set_at(&self, key: &str, index: i64, value: &str) -> StoreResult<()>;

    /// Remove the first `count` elements equal to `value`, head to tail.
    /// Returns the number actually removed.
    async fn remove_value(&self, key: &str, count: i64, value: &str) -> StoreResult<u64>;
}
