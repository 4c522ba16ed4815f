//! Forum web server: axum routes, server-rendered pages and the session layer.

pub mod error;
pub mod routes;
pub mod sessions;
pub mod state;
pub mod views;

use axum::Router;
use store::PostStore;
use tower_sessions::cookie::{Key, SameSite};
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};
use tracing::{info, warn};

use state::AppState;

/// The complete application: every route behind a signed-cookie session layer.
pub fn app<S>(state: AppState, sessions: S, key: Key, secure_cookies: bool) -> Router
where
    S: SessionStore + Clone,
{
    let session_layer = SessionManagerLayer::new(sessions)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnSessionEnd)
        .with_signed(key);

    routes::router(state).layer(session_layer)
}

/// Ping the post store and log the outcome. Returns whether the ping succeeded;
/// a failure never stops startup.
pub async fn check_store(posts: &dyn PostStore) -> bool {
    match posts.ping().await {
        Ok(()) => {
            info!("Pinged your deployment. You successfully connected to the store!");
            true
        }
        Err(e) => {
            warn!("Store ping failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::TestApp;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_check_store_reachable() {
        let app = TestApp::new();
        assert!(check_store(app.store.as_ref()).await);
    }

    #[tokio::test]
    async fn test_check_store_failure_does_not_stop_serving() {
        let mut app = TestApp::new();
        app.store.fail_ping();

        assert!(!check_store(app.store.as_ref()).await);

        let response = app.get("/").await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("No posts yet."));
    }
}
