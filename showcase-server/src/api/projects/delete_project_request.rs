use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DeleteProjectRequest {
    /// Zero-based position in the current list
    #[serde(default)]
    pub index: Option<i64>,
}
