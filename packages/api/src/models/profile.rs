//! # Identity provider profile and access token
//!
//! ## [`Profile`]
//!
//! The authenticated user's profile as returned by `GET /user`. Only `login` is
//! required; `bio`, `blog` and `company` are surfaced on the profile page. Every
//! other key the provider sends is kept in `extra`, so the session snapshot holds
//! the full response and [`Profile::pretty`] prints all of it.
//!
//! ## [`AccessToken`]
//!
//! An opaque `(token, secret)` pair. OAuth 2 tokens have no secret half, so the
//! second element is always empty; the pair shape is what gets written to the
//! session. `Debug` never prints the token.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile snapshot cached in the session after login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    /// Profile with only a login handle.
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            bio: None,
            blog: None,
            company: None,
            extra: Map::new(),
        }
    }

    /// Indented JSON rendering of the whole profile.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.login.clone())
    }
}

/// Bearer token issued by the identity provider.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken(String, String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into(), String::new())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([redacted])")
    }
}
