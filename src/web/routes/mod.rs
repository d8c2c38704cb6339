//! Contains all the routes that this application can handle.

mod activities;
mod home;

use crate::AppState;
use home::home;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use super::STATIC_PATH;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All the routes of the server
pub fn routes(app_state: AppState) -> Router {
    let static_files = ServeDir::new(&app_state.static_config.dir);

    Router::new()
        .route("/", get(home))
        .with_state(app_state.clone())
        .merge(activity_routes(app_state))
        .nest_service(STATIC_PATH, static_files)
        .route("/health-check", get(health_check))
}

/// ACTIVITIES - Listing and roster management
fn activity_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/activities", get(activities::list))
        .route("/activities/{name}", get(activities::get_one))
        .route(
            "/activities/{name}/signup",
            post(activities::signup).delete(activities::unregister),
        )
        .with_state(app_state)
}
