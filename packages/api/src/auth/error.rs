use thiserror::Error;

/// Failures of the authorization flow and of authorized provider calls.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid OAuth endpoint: {0}")]
    InvalidUrl(#[from] oauth2::url::ParseError),

    #[error("no authorization in progress for this session")]
    MissingPendingState,

    #[error("OAuth state does not match the pending authorization")]
    StateMismatch,

    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    #[error("identity provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}
