//! # Session state: who is logged in
//!
//! The browser session holds three keys:
//!
//! | Key | Value | Lifetime |
//! |-----|-------|----------|
//! | [`SESSION_TOKEN_KEY`] | [`AccessToken`] | login → logout or failed login |
//! | [`SESSION_PROFILE_KEY`] | [`Profile`] snapshot | same as the token |
//! | [`SESSION_PENDING_KEY`] | [`PendingAuthorization`] | `/login` → callback |
//!
//! Handlers never read these keys directly. They call [`AuthContext::load`] on the
//! request's session and match on `Anonymous` / `Authenticated`. Being logged in
//! means holding both a token and a profile; the token is never validated against
//! the provider.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use super::AuthError;
use crate::models::{AccessToken, Profile};

/// Key for storing the access token in session.
pub const SESSION_TOKEN_KEY: &str = "github_token";

/// Key for storing the profile snapshot in session.
pub const SESSION_PROFILE_KEY: &str = "user_data";

/// Key for the authorization in flight between `/login` and the callback.
pub const SESSION_PENDING_KEY: &str = "oauth_pending";

/// CSRF state and PKCE verifier of an authorization in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAuthorization {
    pub csrf_state: String,
    pub pkce_verifier: String,
}

/// The authenticated user: their token and cached profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub token: AccessToken,
    pub profile: Profile,
}

impl Identity {
    pub fn login(&self) -> &str {
        &self.profile.login
    }
}

/// Authentication state of the current request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthContext {
    #[default]
    Anonymous,
    Authenticated(Identity),
}

impl AuthContext {
    /// Read the authentication state from the session.
    pub async fn load(session: &Session) -> Result<Self, AuthError> {
        let token: Option<AccessToken> = session.get(SESSION_TOKEN_KEY).await?;
        let profile: Option<Profile> = session.get(SESSION_PROFILE_KEY).await?;

        Ok(match (token, profile) {
            (Some(token), Some(profile)) => Self::Authenticated(Identity { token, profile }),
            _ => Self::Anonymous,
        })
    }

    /// Persist a freshly authenticated identity.
    pub async fn store(session: &Session, identity: &Identity) -> Result<(), AuthError> {
        session.insert(SESSION_TOKEN_KEY, &identity.token).await?;
        session.insert(SESSION_PROFILE_KEY, &identity.profile).await?;
        Ok(())
    }

    pub fn logged_in(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Anonymous => None,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.identity().map(|identity| &identity.profile)
    }

    /// Stored token, for provider calls made after login on behalf of this session.
    pub fn token(&self) -> Option<&AccessToken> {
        self.identity().map(|identity| &identity.token)
    }
}

/// Remember an authorization in progress.
pub async fn begin_authorization(
    session: &Session,
    pending: &PendingAuthorization,
) -> Result<(), AuthError> {
    session.insert(SESSION_PENDING_KEY, pending).await?;
    Ok(())
}

/// Take the authorization in progress, checking the callback's CSRF state against it.
///
/// The pending entry is removed whether or not the state matches.
pub async fn finish_authorization(
    session: &Session,
    state: Option<&str>,
) -> Result<PendingAuthorization, AuthError> {
    let pending: PendingAuthorization = session
        .remove(SESSION_PENDING_KEY)
        .await?
        .ok_or(AuthError::MissingPendingState)?;

    if state != Some(pending.csrf_state.as_str()) {
        return Err(AuthError::StateMismatch);
    }

    Ok(pending)
}
