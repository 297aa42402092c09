use dioxus::prelude::*;

use crate::{icons, use_auth, Icon, LogoutButton};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar of the authenticated area: brand, signed-in user, logout.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let state = auth();
    let username = state
        .user()
        .map(|user| user.username.clone())
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            div {
                class: "flex items-center gap-2",
                div {
                    class: "flex items-center justify-center w-8 h-8 bg-indigo-600 rounded-lg",
                    Icon { icon: icons::FaBoxOpen, width: 16, height: 16, fill: "white" }
                }
                span { class: "text-lg font-semibold text-gray-900", "Trove" }
            }
            div {
                class: "flex items-center gap-4",
                span { class: "text-sm text-gray-600", "Welcome, {username}" }
                LogoutButton {
                    class: "flex items-center gap-2 px-3 py-2 text-sm text-gray-600 hover:text-red-600 hover:bg-red-50 rounded-lg transition-colors cursor-pointer",
                }
            }
        }
    }
}
