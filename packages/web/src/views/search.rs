use dioxus::prelude::*;
use store::Post;

use super::{render_page, Layout, PostList};

#[component]
fn SearchPage(
    logged_in: bool,
    query: String,
    posts: Vec<Post>,
    profile: Option<String>,
) -> Element {
    rsx! {
        Layout {
            title: "Search",
            logged_in: logged_in,
            h1 { "Search" }
            form {
                method: "post",
                action: "/Search",
                input {
                    r#type: "text",
                    name: "query",
                    value: "{query}",
                    placeholder: "Search titles and content",
                }
                button { r#type: "submit", "Search" }
            }
            if !query.is_empty() {
                p { class: "meta", "{posts.len()} result(s) for '{query}'" }
            }
            PostList { posts: posts.clone() }
            if let Some(profile) = profile {
                h2 { "Your profile" }
                pre { "{profile}" }
            }
        }
    }
}

/// Search form, its results, and the session profile when logged in.
pub fn render(logged_in: bool, query: &str, posts: Vec<Post>, profile: Option<String>) -> String {
    render_page(rsx! {
        SearchPage {
            logged_in: logged_in,
            query: query.to_string(),
            posts: posts,
            profile: profile,
        }
    })
}
