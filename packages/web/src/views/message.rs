use dioxus::prelude::*;

use super::{render_page, Layout};

#[component]
fn MessagePage(logged_in: bool, message: String, home_link: bool) -> Element {
    rsx! {
        Layout {
            title: "Forum",
            logged_in: logged_in,
            p { class: "message", "{message}" }
            if home_link {
                a { href: "/", "Click here to go to homepage!" }
            }
        }
    }
}

/// A single line of feedback, optionally followed by a link home.
pub fn render(logged_in: bool, message: &str, home_link: bool) -> String {
    render_page(rsx! {
        MessagePage {
            logged_in: logged_in,
            message: message.to_string(),
            home_link: home_link,
        }
    })
}
