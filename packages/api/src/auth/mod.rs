//! Authentication against the OAuth identity provider.

mod config;
mod error;
mod github;
mod provider;
mod session;

pub use config::{OAuthConfig, GITHUB_API_URL};
pub use error::AuthError;
pub use github::GitHubOAuth;
pub use provider::{AuthorizationRequest, IdentityProvider};
pub use session::{
    begin_authorization, finish_authorization, AuthContext, Identity, PendingAuthorization,
    SESSION_PENDING_KEY, SESSION_PROFILE_KEY, SESSION_TOKEN_KEY,
};
