//! The [`IdentityProvider`] seam between route handlers and the OAuth provider.

use async_trait::async_trait;

use super::session::PendingAuthorization;
use super::AuthError;
use crate::models::{AccessToken, Profile};

/// Where to send the browser, and what to remember until it comes back.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    pub url: String,
    pub pending: PendingAuthorization,
}

/// Delegated-authorization client for a remote identity service.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Build the authorization redirect with a fresh CSRF state and PKCE verifier.
    fn authorize(&self) -> AuthorizationRequest;

    /// Exchange the callback's authorization code for an access token.
    async fn exchange_code(
        &self,
        code: &str,
        pkce_verifier: &str,
    ) -> Result<AccessToken, AuthError>;

    /// Fetch the authenticated user's profile.
    async fn fetch_profile(&self, token: &AccessToken) -> Result<Profile, AuthError>;
}
