use api::auth::AuthError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("No authenticated user in session")]
    NotAuthenticated,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);

        let status = match self {
            AppError::Store { .. }
            | AppError::Session { .. }
            | AppError::Auth { .. }
            | AppError::NotAuthenticated => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, "Internal Server Error").into_response()
    }
}
