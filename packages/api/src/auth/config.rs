//! OAuth configuration built from [`Settings`].

use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use super::AuthError;
use crate::settings::Settings;

/// Base URL of the GitHub REST API.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// OAuth provider configuration.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub auth_url: AuthUrl,
    pub token_url: TokenUrl,
    pub redirect_url: RedirectUrl,
    pub api_url: String,
}

impl OAuthConfig {
    /// Create GitHub OAuth config from settings.
    pub fn github(settings: &Settings) -> Result<Self, AuthError> {
        Ok(Self {
            client_id: ClientId::new(settings.github_client_id.clone()),
            client_secret: ClientSecret::new(settings.github_client_secret.clone()),
            auth_url: AuthUrl::new("https://github.com/login/oauth/authorize".to_string())?,
            token_url: TokenUrl::new("https://github.com/login/oauth/access_token".to_string())?,
            redirect_url: RedirectUrl::new(settings.callback_url())?,
            api_url: GITHUB_API_URL.to_string(),
        })
    }
}
