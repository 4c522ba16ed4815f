use dioxus::prelude::*;
use store::Post;

fn coordinates(post: &Post) -> Option<String> {
    match (post.latitude.as_deref(), post.longitude.as_deref()) {
        (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => {
            Some(format!("{lat}, {lon}"))
        }
        _ => None,
    }
}

#[component]
pub fn PostList(posts: Vec<Post>) -> Element {
    rsx! {
        div {
            class: "posts",
            for (index, post) in posts.iter().enumerate() {
                PostCard { key: "{index}", post: post.clone() }
            }
        }
    }
}

#[component]
fn PostCard(post: Post) -> Element {
    let coords = coordinates(&post);

    rsx! {
        article {
            h2 { "{post.title}" }
            p { class: "meta", "by {post.author} on {post.date}" }
            p { "{post.content}" }
            if let Some(coords) = coords {
                p { class: "meta", "Location: {coords}" }
            }
        }
    }
}
