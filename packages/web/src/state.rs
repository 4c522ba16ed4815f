use std::sync::Arc;

use api::auth::IdentityProvider;
use api::Settings;
use store::PostStore;

/// Behaviour switches for the post routes.
///
/// Both default to off, matching how the forum has always behaved: anyone may open
/// the new-post form, and a submission re-renders the form instead of redirecting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteOptions {
    /// Redirect anonymous visitors of `/NewPost` to `/login`.
    pub new_post_requires_login: bool,
    /// Answer a successful post submission with a redirect to `/`.
    pub redirect_after_post: bool,
}

impl From<&Settings> for RouteOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            new_post_requires_login: settings.new_post_requires_login,
            redirect_after_post: settings.redirect_after_post,
        }
    }
}

/// Handles shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub options: RouteOptions,
}

impl AppState {
    pub fn new(
        posts: Arc<dyn PostStore>,
        identity: Arc<dyn IdentityProvider>,
        options: RouteOptions,
    ) -> Self {
        Self {
            posts,
            identity,
            options,
        }
    }
}
