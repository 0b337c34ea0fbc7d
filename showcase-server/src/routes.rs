use crate::api::error::ApiError;
use crate::api::projects::projects::{
    delete_project, list_projects, method_not_allowed, preflight, submit_project,
};
use crate::app_state::AppState;
use crate::health;

use std::panic::Location;

use axum::http::{Method, header};
use axum::{Router, routing::get};
use error_location::ErrorLocation;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // One logical route, dispatched by method. DELETE is only routed (and
    // only advertised in CORS) for deployments that enable it; elsewhere it
    // falls through to the 405 handler like any other verb.
    let mut projects = get(list_projects)
        .post(submit_project)
        .options(preflight)
        .fallback(method_not_allowed);

    let mut cors_methods = vec![Method::GET, Method::POST, Method::OPTIONS];

    if state.allow_delete {
        projects = projects.delete(delete_project);
        cors_methods.push(Method::DELETE);
    }

    Router::new()
        .route("/api/v1/projects", projects)
        // Health check endpoint
        .route("/health", get(health::health_check))
        // Unknown paths still answer with JSON
        .fallback(not_found)
        // Add shared state
        .with_state(state)
        // CORS middleware (public submission form, any origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(cors_methods)
                .allow_headers([header::CONTENT_TYPE]),
        )
}

async fn not_found() -> ApiError {
    ApiError::NotFound {
        location: ErrorLocation::from(Location::caller()),
    }
}
