//! HTTP surface of the forum.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/` | [`posts::home`] |
//! | GET, POST | `/NewPost` | [`posts::new_post_form`], [`posts::create_post`] |
//! | GET, POST | `/Search` | [`posts::search_page`], [`posts::search_submit`] |
//! | GET | `/login` | [`auth::login`] |
//! | GET | `/logout` | [`auth::logout`] |
//! | GET | `/login/authorized` | [`auth::authorized`] |
//! | GET | `/Map` | [`pages::map`] |
//! | GET | `/googleb4c3aeedcc2dd103.html` | [`pages::verification`] |

use axum::{routing::get, Router};

use crate::state::AppState;
use crate::views::VERIFICATION_PATH;

pub mod auth;
pub mod pages;
pub mod posts;

#[cfg(test)]
pub(crate) mod test_support;

/// Every route, without the session layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(posts::home))
        .route(
            "/NewPost",
            get(posts::new_post_form).post(posts::create_post),
        )
        .route(
            "/Search",
            get(posts::search_page).post(posts::search_submit),
        )
        .route("/login", get(auth::login))
        .route("/logout", get(auth::logout))
        .route("/login/authorized", get(auth::authorized))
        .route("/Map", get(pages::map))
        .route(VERIFICATION_PATH, get(pages::verification))
        .with_state(state)
}
