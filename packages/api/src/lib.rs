//! # API crate: identity, sessions and settings for the forum
//!
//! Everything the route handlers in the `web` crate need besides post storage.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | GitHub OAuth (Authorization Code + PKCE) behind the [`auth::IdentityProvider`] trait, and the session-backed [`auth::AuthContext`] |
//! | [`models`] | The provider's [`Profile`] and the [`AccessToken`] kept in the session |
//! | [`settings`] | [`Settings`] loaded from the environment |

pub mod auth;
pub mod models;
pub mod settings;

pub use models::{AccessToken, Profile};
pub use settings::{Settings, StoreBackend};
