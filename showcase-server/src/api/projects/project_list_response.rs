use showcase_core::Project;

use serde::Serialize;

/// List of projects response, newest first
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}
