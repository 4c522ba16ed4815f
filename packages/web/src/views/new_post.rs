use dioxus::prelude::*;

use super::{render_page, Layout};

#[component]
fn NewPostPage(logged_in: bool) -> Element {
    rsx! {
        Layout {
            title: "New Post",
            logged_in: logged_in,
            h1 { "New Post" }
            if !logged_in {
                p { class: "meta", "You need to log in before your post can be saved." }
            }
            form {
                method: "post",
                action: "/NewPost",
                label {
                    "Title"
                    input { r#type: "text", name: "title", required: true }
                }
                label {
                    "Content"
                    textarea { name: "content", rows: "6", required: true }
                }
                label {
                    "Latitude (optional)"
                    input { r#type: "text", name: "latitude" }
                }
                label {
                    "Longitude (optional)"
                    input { r#type: "text", name: "longitude" }
                }
                button { r#type: "submit", "Post" }
            }
        }
    }
}

/// Empty post creation form.
pub fn render(logged_in: bool) -> String {
    render_page(rsx! { NewPostPage { logged_in: logged_in } })
}
