//! Authenticated home: navbar over the asset grid.

use dioxus::prelude::*;
use ui::{use_auth, AssetList, Navbar};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Signed-out visitors go to login
    if !auth().loading && !auth().is_authenticated() {
        nav.replace(Route::Login {});
    }

    rsx! {
        div {
            class: "min-h-screen bg-gray-50",
            Navbar {}
            main {
                class: "max-w-7xl mx-auto px-4 py-8",
                AssetList {}
            }
        }
    }
}
