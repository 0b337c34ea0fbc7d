pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    projects::{
        delete_project_request::DeleteProjectRequest,
        delete_response::DeleteResponse,
        project_list_response::ProjectListResponse,
        projects::{delete_project, list_projects, preflight, submit_project},
        submit_project_request::SubmitProjectRequest,
        submit_project_response::SubmitProjectResponse,
    },
};

pub use crate::app_state::AppState;
pub use crate::error::ServerError;
pub use crate::routes::build_router;
