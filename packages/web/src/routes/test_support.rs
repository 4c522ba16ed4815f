//! In-process harness for route tests: a fake identity provider, a store that counts
//! searches, and a client that carries the session cookie between requests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use api::auth::{AuthError, AuthorizationRequest, IdentityProvider, PendingAuthorization};
use api::{AccessToken, Profile};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use store::{MemoryStore, Post, PostStore, StoreError};
use tower::ServiceExt;
use tower_sessions::cookie::Key;
use tower_sessions::{MemoryStore as MemorySessions, SessionStore};

use crate::state::{AppState, RouteOptions};

const TEST_SECRET: &[u8] = b"route-tests-secret-key-0123456789abcdef";

pub struct FakeProvider;

#[async_trait]
impl IdentityProvider for FakeProvider {
    fn authorize(&self) -> AuthorizationRequest {
        AuthorizationRequest {
            url: "https://github.example/authorize?state=state-123".to_string(),
            pending: PendingAuthorization {
                csrf_state: "state-123".to_string(),
                pkce_verifier: "verifier".to_string(),
            },
        }
    }

    async fn exchange_code(
        &self,
        code: &str,
        pkce_verifier: &str,
    ) -> Result<AccessToken, AuthError> {
        if code == "bad" || pkce_verifier != "verifier" {
            return Err(AuthError::TokenExchange("bad_verification_code".to_string()));
        }
        Ok(AccessToken::new(format!("gho_{code}")))
    }

    async fn fetch_profile(&self, _token: &AccessToken) -> Result<Profile, AuthError> {
        let mut profile = Profile::new("alice");
        profile.bio = Some("Rustacean".to_string());
        profile.blog = Some("alice.dev".to_string());
        Ok(profile)
    }
}

/// MemoryStore that records how often it was searched, and whose ping can be made
/// to fail.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    searches: AtomicUsize,
    ping_fails: AtomicBool,
}

impl CountingStore {
    pub fn fail_ping(&self) {
        self.ping_fails.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl PostStore for CountingStore {
    async fn ping(&self) -> Result<(), StoreError> {
        if self.ping_fails.load(Ordering::SeqCst) {
            let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "no server");
            return Err(StoreError::Database(Box::new(err)));
        }
        self.inner.ping().await
    }

    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        self.inner.list_posts().await
    }

    async fn insert_post(&self, post: Post) -> Result<(), StoreError> {
        self.inner.insert_post(post).await
    }

    async fn search_posts(&self, query: &str) -> Result<Vec<Post>, StoreError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        self.inner.search_posts(query).await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

pub struct TestApp {
    router: Router,
    pub store: Arc<CountingStore>,
    cookies: HashMap<String, String>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_options(RouteOptions::default())
    }

    pub fn with_options(options: RouteOptions) -> Self {
        Self::with_sessions(options, MemorySessions::default())
    }

    pub fn with_sessions<S>(options: RouteOptions, sessions: S) -> Self
    where
        S: SessionStore + Clone,
    {
        let store = Arc::new(CountingStore::default());
        let state = AppState::new(store.clone(), Arc::new(FakeProvider), options);
        let router = crate::app(state, sessions, Key::derive_from(TEST_SECRET), false);

        Self {
            router,
            store,
            cookies: HashMap::new(),
        }
    }

    pub fn searches(&self) -> usize {
        self.store.searches.load(Ordering::SeqCst)
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = Request::get(uri);
        self.send(request.body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&mut self, uri: &str, body: &str) -> TestResponse {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Run the whole login flow against the fake provider.
    pub async fn log_in(&mut self) -> TestResponse {
        self.get("/login").await;
        let response = self
            .get("/login/authorized?code=good&state=state-123")
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response
    }

    async fn send(&mut self, mut request: Request<Body>) -> TestResponse {
        if !self.cookies.is_empty() {
            let cookie = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            request
                .headers_mut()
                .insert(header::COOKIE, cookie.parse().unwrap());
        }

        let response = self.router.clone().oneshot(request).await.unwrap();

        for set_cookie in response.headers().get_all(header::SET_COOKIE) {
            let set_cookie = set_cookie.to_str().unwrap();
            let pair = set_cookie.split(';').next().unwrap_or_default();
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            if set_cookie.contains("Max-Age=0") {
                self.cookies.remove(name);
            } else {
                self.cookies.insert(name.to_string(), value.to_string());
            }
        }

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            location,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}
