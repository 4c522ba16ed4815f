use dioxus::prelude::*;

use super::{render_page, Layout};

/// Shown for every attribute when nobody is logged in.
pub const PLACEHOLDER: &str = "n/a";

/// The three profile attributes shown on the map page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFields {
    pub bio: String,
    pub blog: String,
    pub company: String,
}

impl ProfileFields {
    pub fn placeholder() -> Self {
        Self {
            bio: PLACEHOLDER.to_string(),
            blog: PLACEHOLDER.to_string(),
            company: PLACEHOLDER.to_string(),
        }
    }
}

#[component]
fn MapPage(logged_in: bool, fields: ProfileFields) -> Element {
    rsx! {
        Layout {
            title: "Map",
            logged_in: logged_in,
            h1 { "Profile" }
            ul {
                li { "Bio: " span { class: "bio", "{fields.bio}" } }
                li { "Blog: " span { class: "blog", "{fields.blog}" } }
                li { "Company: " span { class: "company", "{fields.company}" } }
            }
        }
    }
}

pub fn render(logged_in: bool, fields: ProfileFields) -> String {
    render_page(rsx! { MapPage { logged_in: logged_in, fields: fields } })
}
