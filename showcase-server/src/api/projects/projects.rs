//! Project submission API handlers
//!
//! One logical route dispatched by method: list (GET), submit (POST),
//! remove-by-index (DELETE, when enabled). All state lives in the external
//! list store; each handler is one validation pass plus one store operation.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::projects::delete_project_request::DeleteProjectRequest;
use crate::api::projects::delete_response::DeleteResponse;
use crate::api::projects::project_list_response::ProjectListResponse;
use crate::api::projects::submit_project_request::SubmitProjectRequest;
use crate::api::projects::submit_project_response::SubmitProjectResponse;
use crate::app_state::AppState;

use showcase_core::Project;

use std::panic::Location;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use error_location::ErrorLocation;
use serde_json::Value;
use uuid::Uuid;

const TOMBSTONE_PREFIX: &str = "__DELETED__";

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/projects
///
/// List every stored project, newest first.
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<ProjectListResponse>> {
    let entries = state.store.range(&state.list_key, 0, -1).await?;

    let projects = entries
        .iter()
        .map(parse_entry)
        .collect::<ApiResult<Vec<Project>>>()?;

    Ok(Json(ProjectListResponse { projects }))
}

/// POST /api/v1/projects
///
/// Validate a submission and push it to the head of the list.
pub async fn submit_project(
    State(state): State<AppState>,
    payload: Result<Json<SubmitProjectRequest>, JsonRejection>,
) -> ApiResult<Json<SubmitProjectResponse>> {
    // An unparseable body carries no usable fields; same client answer
    let Ok(Json(request)) = payload else {
        return Err(ApiError::Validation {
            message: String::from("Missing required fields"),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let name = request.name.unwrap_or_default();
    let url = request.url.unwrap_or_default();
    let submitted_by = request.submitted_by.unwrap_or_default();
    let tags = request.tags.unwrap_or_default();

    let project =
        Project::from_submission(&name, &url, &submitted_by, &tags, &state.vocabulary)?;

    let serialized = serde_json::to_string(&project).map_err(|e| ApiError::Internal {
        message: format!("Failed to encode project: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    state.store.push_head(&state.list_key, &serialized).await?;

    Ok(Json(SubmitProjectResponse {
        success: true,
        project,
    }))
}

/// DELETE /api/v1/projects
///
/// Positional delete via tombstone: overwrite the element at `index` with a
/// per-request unique marker, then remove that marker by value. The store
/// has no remove-by-position primitive, and the two calls are not jointly
/// atomic - a concurrent push can shift which element `index` names between
/// them. Accepted for this workload.
pub async fn delete_project(
    State(state): State<AppState>,
    payload: Result<Json<DeleteProjectRequest>, JsonRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let index = match payload {
        Ok(Json(DeleteProjectRequest { index: Some(index) })) => index,
        _ => {
            return Err(ApiError::Validation {
                message: String::from("Missing index"),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    let tombstone = format!("{}:{}", TOMBSTONE_PREFIX, Uuid::new_v4());
    state.store.set_at(&state.list_key, index, &tombstone).await?;
    state
        .store
        .remove_value(&state.list_key, 1, &tombstone)
        .await?;

    Ok(Json(DeleteResponse { success: true }))
}

/// OPTIONS probe
///
/// 200 with an empty body; the cross-origin headers come from the CORS layer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Fallback for verbs without a handler on the projects route
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed {
        location: ErrorLocation::from(Location::caller()),
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Decode one stored list element.
///
/// Entries are written as JSON strings, but the store is allowed to hand
/// back elements that are already structured objects; both decode to a
/// Project.
fn parse_entry(entry: &Value) -> ApiResult<Project> {
    let parsed = match entry {
        Value::String(s) => serde_json::from_str(s),
        other => serde_json::from_value(other.clone()),
    };

    parsed.map_err(|e| ApiError::Internal {
        message: format!("Undecodable stored entry: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
