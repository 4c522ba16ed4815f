//! Server-rendered pages.
//!
//! Each page module exposes a `render` function taking plain data and returning the
//! finished HTML document, so handlers never hold a dioxus `Element` across an await.

use dioxus::prelude::*;

mod layout;
pub use layout::Layout;

mod posts;
pub use posts::PostList;

pub mod home;
pub mod map;
pub mod message;
pub mod new_post;
pub mod search;

/// Path of the site-verification page.
pub const VERIFICATION_PATH: &str = "/googleb4c3aeedcc2dd103.html";

/// Body of the site-verification page.
pub const VERIFICATION_PAGE: &str = "google-site-verification: googleb4c3aeedcc2dd103.html";

/// Wrap a rendered page in the document root.
pub(crate) fn render_page(element: Element) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render_element(element)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::PostDraft;

    #[test]
    fn test_layout_login_link() {
        let html = new_post::render(false);
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("href=\"/login\""));
        assert!(!html.contains("href=\"/logout\""));

        let html = new_post::render(true);
        assert!(html.contains("href=\"/logout\""));
        assert!(!html.contains("href=\"/login\""));
    }

    #[test]
    fn test_post_text_is_escaped() {
        let post = PostDraft {
            title: "<script>alert(1)</script>".to_string(),
            content: "fish & chips".to_string(),
            ..Default::default()
        }
        .publish("alice");

        let html = home::render(false, vec![post]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("by alice on"));
    }

    #[test]
    fn test_post_coordinates_shown_when_present() {
        let post = PostDraft {
            title: "Pinned".to_string(),
            latitude: Some("34.41".to_string()),
            longitude: Some("-119.84".to_string()),
            ..Default::default()
        }
        .publish("alice");

        let html = home::render(false, vec![post]);
        assert!(html.contains("Location: 34.41, -119.84"));
    }

    #[test]
    fn test_message_home_link() {
        let html = message::render(true, "You were successfully logged in as alice.", true);
        assert!(html.contains("You were successfully logged in as alice."));
        assert!(html.contains("Click here to go to homepage!"));

        let html = message::render(false, "You were logged out", false);
        assert!(!html.contains("Click here to go to homepage!"));
    }
}
