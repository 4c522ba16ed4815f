use dioxus::prelude::*;
use store::Post;

use super::{render_page, Layout, PostList};

#[component]
fn HomePage(logged_in: bool, posts: Vec<Post>) -> Element {
    rsx! {
        Layout {
            title: "Forum",
            logged_in: logged_in,
            h1 { "Forum" }
            if posts.is_empty() {
                p { "No posts yet." }
            } else {
                PostList { posts: posts.clone() }
            }
        }
    }
}

/// Listing of every post, newest first.
pub fn render(logged_in: bool, posts: Vec<Post>) -> String {
    render_page(rsx! { HomePage { logged_in: logged_in, posts: posts } })
}
