//! # GitHub OAuth 2.0 implementation
//!
//! Implements the GitHub Authorization Code flow with PKCE.
//!
//! ## Types
//!
//! - [`ConfiguredClient`]: a fully-typed `oauth2::Client` alias with auth and token
//!   endpoints set.
//! - [`GitHubOAuth`]: the [`IdentityProvider`] used in production. It wraps an
//!   [`OAuthConfig`] and one shared `reqwest` client.
//!
//! ## Flow
//!
//! 1. **[`authorize`](GitHubOAuth::authorize)**: builds an authorization URL requesting
//!    the read-only `user:email` scope, with a random CSRF state and PKCE challenge. The
//!    `/login` route keeps the state and verifier in the session.
//!
//! 2. **[`exchange_code`](GitHubOAuth::exchange_code)**: called by the
//!    `/login/authorized` route once the state has been checked. Exchanges the code and
//!    PKCE verifier for an access token.
//!
//! 3. **[`fetch_profile`](GitHubOAuth::fetch_profile)**: `GET /user` through
//!    [`get_json`](GitHubOAuth::get_json) with the token just exchanged. Later calls
//!    take the token from the session through `AuthContext::token`.

use async_trait::async_trait;
use oauth2::basic::BasicClient;
use oauth2::{
    AuthorizationCode, CsrfToken, EndpointNotSet, EndpointSet, PkceCodeChallenge,
    PkceCodeVerifier, Scope, TokenResponse,
};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use super::config::OAuthConfig;
use super::provider::{AuthorizationRequest, IdentityProvider};
use super::session::PendingAuthorization;
use super::AuthError;
use crate::models::{AccessToken, Profile};

/// Read-only access to the user's email addresses.
const SCOPE: &str = "user:email";

const USER_AGENT: &str = concat!("forum/", env!("CARGO_PKG_VERSION"));

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// GitHub OAuth handler.
pub struct GitHubOAuth {
    config: OAuthConfig,
    http: reqwest::Client,
}

impl GitHubOAuth {
    /// Create a new GitHub OAuth handler.
    pub fn new(config: OAuthConfig) -> Result<Self, AuthError> {
        // The token endpoint must not redirect.
        let http = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { config, http })
    }

    fn create_client(&self) -> ConfiguredClient {
        BasicClient::new(self.config.client_id.clone())
            .set_client_secret(self.config.client_secret.clone())
            .set_auth_uri(self.config.auth_url.clone())
            .set_token_uri(self.config.token_url.clone())
            .set_redirect_uri(self.config.redirect_url.clone())
    }

    /// Authorized `GET` against the provider's REST API.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        path: &str,
    ) -> Result<T, AuthError> {
        let url = format!(
            "{}/{}",
            self.config.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        tracing::debug!(%url, "GitHub API request");

        let value = self
            .http
            .get(url)
            .bearer_auth(token.secret())
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(value)
    }
}

#[async_trait]
impl IdentityProvider for GitHubOAuth {
    fn authorize(&self) -> AuthorizationRequest {
        let client = self.create_client();
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let (auth_url, csrf_state) = client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new(SCOPE.to_string()))
            .set_pkce_challenge(pkce_challenge)
            .url();

        AuthorizationRequest {
            url: auth_url.to_string(),
            pending: PendingAuthorization {
                csrf_state: csrf_state.secret().clone(),
                pkce_verifier: pkce_verifier.secret().clone(),
            },
        }
    }

    async fn exchange_code(
        &self,
        code: &str,
        pkce_verifier: &str,
    ) -> Result<AccessToken, AuthError> {
        let client = self.create_client();

        let token_result = client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier.to_string()))
            .request_async(&self.http)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        Ok(AccessToken::new(token_result.access_token().secret().clone()))
    }

    async fn fetch_profile(&self, token: &AccessToken) -> Result<Profile, AuthError> {
        self.get_json(token, "user").await
    }
}
