use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use strum_macros::AsRefStr;

use crate::model::StoreError;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("activity store error: {0}")]
    Store(#[from] StoreError),

    #[error("query rejected: {0}")]
    Query(#[from] QueryRejection),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::Store(store_er) => match store_er {
                StoreError::ActivityNotFound(_) => (StatusCode::NOT_FOUND, ActivityNotFound),
                StoreError::AlreadySignedUp { .. } => (StatusCode::BAD_REQUEST, AlreadySignedUp),
                StoreError::NotSignedUp { .. } => (StatusCode::BAD_REQUEST, NotSignedUp),
                StoreError::ActivityFull { .. } => (StatusCode::BAD_REQUEST, ActivityFull),
            },
            Error::Query(rejection) => (StatusCode::BAD_REQUEST, InvalidQuery(rejection.body_text())),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a placeholder response, the response mapper replaces it.
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// The errors a client gets to see, rendered into the `detail` field of the response body.
#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Activity not found")]
    ActivityNotFound,
    #[display("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[display("Student is not signed up for this activity")]
    NotSignedUp,
    #[display("Activity is full")]
    ActivityFull,
    #[display("Invalid query: {_0}")]
    InvalidQuery(String),
}
