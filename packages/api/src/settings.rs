//! # Process settings from environment variables
//!
//! [`Settings::new`] loads a `.env` file when present (via `dotenvy`), then reads the
//! process environment through the `config` crate. Environment keys are matched
//! case-insensitively against the field names, so `MONGO_DBNAME` fills
//! `mongo_dbname`.
//!
//! Required: `SECRET_KEY`, `MONGO_CONNECTION_STRING`, `MONGO_DBNAME`,
//! `GITHUB_CLIENT_ID`, `GITHUB_CLIENT_SECRET`. Everything else has a default.
//!
//! Sessions are kept in the SQLite database at `SESSION_DATABASE_URL`
//! (default `sqlite://sessions.db`, created on first start).
//!
//! `NEW_POST_REQUIRES_LOGIN` and `REDIRECT_AFTER_POST` both default to `false`,
//! which keeps the new-post form open to anonymous visitors and re-renders the form
//! after a submission. Flip them once the intended behaviour is settled.

use std::fmt;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Shortest accepted `SECRET_KEY`; the cookie signing key is derived from it.
pub const MIN_SECRET_KEY_LEN: usize = 32;

/// Post store backend the server should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Mongo,
    Memory,
}

#[derive(Clone, Deserialize)]
pub struct Settings {
    pub secret_key: String,
    pub mongo_connection_string: String,
    pub mongo_dbname: String,
    pub mongo_collection: String,
    pub github_client_id: String,
    pub github_client_secret: String,
    /// External base URL, used to build the OAuth callback.
    pub public_url: String,
    pub bind_address: String,
    pub secure_cookies: bool,
    pub new_post_requires_login: bool,
    pub redirect_after_post: bool,
    pub store_backend: StoreBackend,
    /// SQLite database holding session records.
    pub session_database_url: String,
}

impl Settings {
    /// Load settings from `.env` and the process environment.
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_environment(Environment::default())
    }

    /// Load settings from the given environment source.
    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .set_default("mongo_collection", "ForumPro")?
            .set_default("public_url", "http://localhost:5000")?
            .set_default("bind_address", "127.0.0.1:5000")?
            .set_default("secure_cookies", false)?
            .set_default("new_post_requires_login", false)?
            .set_default("redirect_after_post", false)?
            .set_default("store_backend", "mongo")?
            .set_default("session_database_url", "sqlite://sessions.db")?
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        if settings.secret_key.len() < MIN_SECRET_KEY_LEN {
            return Err(ConfigError::Message(format!(
                "SECRET_KEY must be at least {MIN_SECRET_KEY_LEN} bytes"
            )));
        }

        Ok(settings)
    }

    /// Absolute URL the identity provider redirects back to.
    pub fn callback_url(&self) -> String {
        format!("{}/login/authorized", self.public_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("secret_key", &"[redacted]")
            .field("mongo_connection_string", &"[redacted]")
            .field("mongo_dbname", &self.mongo_dbname)
            .field("mongo_collection", &self.mongo_collection)
            .field("github_client_id", &self.github_client_id)
            .field("github_client_secret", &"[redacted]")
            .field("public_url", &self.public_url)
            .field("bind_address", &self.bind_address)
            .field("secure_cookies", &self.secure_cookies)
            .field("new_post_requires_login", &self.new_post_requires_login)
            .field("redirect_after_post", &self.redirect_after_post)
            .field("store_backend", &self.store_backend)
            .field("session_database_url", &self.session_database_url)
            .finish()
    }
}
