use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use tracing::info;

use crate::{
    model::{Activities, Activity},
    web::{
        types::{EmailQuery, MessageResponse},
        WebResult,
    },
    AppState,
};

#[tracing::instrument(name = "Listing activities", skip_all)]
pub async fn list(State(app_state): State<AppState>) -> Json<Activities> {
    Json(app_state.store.list().await)
}

#[tracing::instrument(name = "Fetching an activity", skip(app_state))]
pub async fn get_one(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
) -> WebResult<Json<Activity>> {
    let activity = app_state.store.get(&name).await?;

    Ok(Json(activity))
}

#[tracing::instrument(name = "Signing up for an activity", skip(app_state, query))]
pub async fn signup(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> WebResult<Json<MessageResponse>> {
    let Query(EmailQuery { email }) = query?;

    app_state.store.signup(&name, &email).await?;
    info!(%email, "SUCCESS");

    Ok(Json(MessageResponse::signed_up(&email, &name)))
}

#[tracing::instrument(name = "Unregistering from an activity", skip(app_state, query))]
pub async fn unregister(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> WebResult<Json<MessageResponse>> {
    let Query(EmailQuery { email }) = query?;

    app_state.store.unregister(&name, &email).await?;
    info!(%email, "SUCCESS");

    Ok(Json(MessageResponse::unregistered(&email, &name)))
}
