use showcase_core::Tag;
use showcase_store::ListStore;

use std::sync::Arc;

/// Shared state handed to every request handler.
///
/// The handler is stateless between requests; everything here is
/// configuration plus the store client.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ListStore>,
    /// Key of the list holding the submissions
    pub list_key: String,
    /// Tag vocabulary accepted by this deployment
    pub vocabulary: Vec<Tag>,
    /// Whether the DELETE verb is routed
    pub allow_delete: bool,
}
