#![allow(dead_code)]

//! Test infrastructure for showcase-server API tests

use showcase_core::Tag;
use showcase_server::AppState;
use showcase_store::MemoryListStore;

use std::sync::Arc;

pub const TEST_KEY: &str = "showcase:projects";

/// Create AppState backed by an in-memory store, full vocabulary,
/// deletion enabled. Returns the store too so tests can seed it.
pub fn create_test_app_state() -> (AppState, Arc<MemoryListStore>) {
    create_test_app_state_with(Tag::ALL.to_vec(), true)
}

/// Create AppState for a specific deployment variant
pub fn create_test_app_state_with(
    vocabulary: Vec<Tag>,
    allow_delete: bool,
) -> (AppState, Arc<MemoryListStore>) {
    let store = Arc::new(MemoryListStore::new());

    let state = AppState {
        store: store.clone(),
        list_key: TEST_KEY.to_string(),
        vocabulary,
        allow_delete,
    };

    (state, store)
}
