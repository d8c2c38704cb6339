use axum::{extract::State, response::Redirect};

use crate::AppState;

/// Sends browsers to the front-end entry document.
pub async fn home(State(app_state): State<AppState>) -> Redirect {
    Redirect::to(&app_state.static_config.entry_url())
}
