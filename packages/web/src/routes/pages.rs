use api::auth::AuthContext;
use api::Profile;
use axum::response::Html;
use tower_sessions::Session;

use crate::error::AppError;
use crate::views;
use crate::views::map::ProfileFields;

fn fields(profile: &Profile) -> ProfileFields {
    ProfileFields {
        bio: profile.bio.clone().unwrap_or_default(),
        blog: profile.blog.clone().unwrap_or_default(),
        company: profile.company.clone().unwrap_or_default(),
    }
}

/// Bio, blog and company from the session profile, or placeholders.
pub async fn map(session: Session) -> Result<Html<String>, AppError> {
    let auth = AuthContext::load(&session).await?;
    let fields = auth
        .profile()
        .map(fields)
        .unwrap_or_else(ProfileFields::placeholder);
    Ok(Html(views::map::render(auth.logged_in(), fields)))
}

pub async fn verification() -> Html<&'static str> {
    Html(views::VERIFICATION_PAGE)
}
