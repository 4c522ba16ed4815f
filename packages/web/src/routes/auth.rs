use std::collections::BTreeMap;

use api::auth::{
    begin_authorization, finish_authorization, AuthContext, AuthError, Identity,
};
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
};
use tower_sessions::Session;

use crate::error::AppError;
use crate::state::AppState;
use crate::views;

const LOGIN_FAILED: &str = "Unable to login, please try again.";

/// Start the authorization code flow.
pub async fn login(State(state): State<AppState>, session: Session) -> Result<Redirect, AppError> {
    let request = state.identity.authorize();
    begin_authorization(&session, &request.pending).await?;
    Ok(Redirect::to(&request.url))
}

pub async fn logout(session: Session) -> Result<Html<String>, AppError> {
    session.flush().await?;
    Ok(Html(views::message::render(false, "You were logged out", false)))
}

/// Provider callback. A response without `code` is a denial.
pub async fn authorized(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<BTreeMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let Some(code) = params.get("code") else {
        session.clear().await;
        let param = |key: &str| params.get(key).map(String::as_str).unwrap_or_default();
        let message = format!(
            "Access denied: reason={} error={} full={:?}",
            param("error"),
            param("error_description"),
            params
        );
        tracing::warn!("{}", message);
        return Ok(Html(views::message::render(false, &message, false)));
    };

    match complete_login(&state, &session, code, params.get("state")).await {
        Ok(identity) => {
            tracing::info!(login = %identity.login(), "User logged in");
            let message = format!("You were successfully logged in as {}.", identity.login());
            Ok(Html(views::message::render(true, &message, true)))
        }
        Err(e) => {
            tracing::error!("Login failed: {}", e);
            session.clear().await;
            Ok(Html(views::message::render(false, LOGIN_FAILED, false)))
        }
    }
}

async fn complete_login(
    state: &AppState,
    session: &Session,
    code: &str,
    csrf_state: Option<&String>,
) -> Result<Identity, AuthError> {
    let pending = finish_authorization(session, csrf_state.map(String::as_str)).await?;
    let token = state
        .identity
        .exchange_code(code, &pending.pkce_verifier)
        .await?;
    let profile = state.identity.fetch_profile(&token).await?;

    session.cycle_id().await?;
    let identity = Identity { token, profile };
    AuthContext::store(session, &identity).await?;
    Ok(identity)
}
