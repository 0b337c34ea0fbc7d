use showcase_core::Project;

use serde::Serialize;

/// Accepted submission response
#[derive(Debug, Serialize)]
pub struct SubmitProjectResponse {
    pub success: bool,
    pub project: Project,
}
