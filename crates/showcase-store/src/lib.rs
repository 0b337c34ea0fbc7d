mod error;
mod list_store;
mod memory;
mod rest;

pub use error::{Result as StoreResult, StoreError};
pub use list_store::ListStore;
pub use memory::MemoryListStore;
pub use rest::RestListStore;
