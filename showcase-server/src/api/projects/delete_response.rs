use serde::Serialize;

/// Deletion acknowledged
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}
