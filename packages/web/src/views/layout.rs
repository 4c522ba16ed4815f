use dioxus::prelude::*;

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 48rem; margin: 0 auto; padding: 0 1rem; color: #37352f; }
nav { display: flex; gap: 1rem; padding: 1rem 0; border-bottom: 1px solid #e3e2e0; }
nav .spacer { flex: 1; }
article { border-bottom: 1px solid #e3e2e0; padding: 0.75rem 0; }
.meta { color: #787774; font-size: 0.875rem; }
form { display: flex; flex-direction: column; gap: 0.5rem; }
pre { background: #f7f6f3; padding: 0.75rem; overflow-x: auto; }
"#;

/// Page shell shared by every view. `logged_in` picks the login or logout link.
#[component]
pub fn Layout(title: String, logged_in: bool, children: Element) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title}" }
            style { "{STYLE}" }
        }
        body {
            nav {
                a { href: "/", "Home" }
                a { href: "/NewPost", "New Post" }
                a { href: "/Search", "Search" }
                a { href: "/Map", "Map" }
                span { class: "spacer" }
                if logged_in {
                    a { href: "/logout", "Log out" }
                } else {
                    a { href: "/login", "Log in" }
                }
            }
            main {
                {children}
            }
        }
    }
}
