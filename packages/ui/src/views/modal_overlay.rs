use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop fixed inset-0 flex items-center justify-center p-4",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card bg-white rounded-2xl shadow-xl max-w-md w-full",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
