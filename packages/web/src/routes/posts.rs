use api::auth::AuthContext;
use api::Profile;
use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use store::PostDraft;
use tower_sessions::Session;

use crate::error::AppError;
use crate::state::AppState;
use crate::views;

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
}

pub async fn home(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let auth = AuthContext::load(&session).await?;
    let posts = state.posts.list_posts().await?;
    Ok(Html(views::home::render(auth.logged_in(), posts)))
}

pub async fn new_post_form(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    let auth = AuthContext::load(&session).await?;
    if state.options.new_post_requires_login && !auth.logged_in() {
        return Ok(Redirect::to("/login").into_response());
    }
    Ok(Html(views::new_post::render(auth.logged_in())).into_response())
}

/// Store a post by the logged-in user. Any `author` field in the form is ignored.
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    Form(draft): Form<PostDraft>,
) -> Result<Response, AppError> {
    let auth = AuthContext::load(&session).await?;
    if state.options.new_post_requires_login && !auth.logged_in() {
        return Ok(Redirect::to("/login").into_response());
    }

    let identity = auth.identity().ok_or(AppError::NotAuthenticated)?;
    let post = draft.publish(identity.login());
    tracing::info!(author = %post.author, title = %post.title, "Creating post");
    state.posts.insert_post(post).await?;

    if state.options.redirect_after_post {
        return Ok(Redirect::to("/").into_response());
    }
    Ok(Html(views::new_post::render(auth.logged_in())).into_response())
}

pub async fn search_page(
    State(state): State<AppState>,
    session: Session,
    Query(form): Query<SearchForm>,
) -> Result<Html<String>, AppError> {
    search(&state, &session, form.query).await
}

pub async fn search_submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, AppError> {
    search(&state, &session, form.query).await
}

async fn search(
    state: &AppState,
    session: &Session,
    query: String,
) -> Result<Html<String>, AppError> {
    let auth = AuthContext::load(session).await?;
    let posts = if query.is_empty() {
        Vec::new()
    } else {
        state.posts.search_posts(&query).await?
    };
    let profile = auth.profile().map(Profile::pretty);

    Ok(Html(views::search::render(
        auth.logged_in(),
        &query,
        posts,
        profile,
    )))
}
