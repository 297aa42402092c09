//! Small form primitives shared by the views.

use dioxus::prelude::*;

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    /// Borderless icon-style button.
    Ghost,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-indigo-600 text-white hover:bg-indigo-700 px-4 py-2 rounded-lg"
            }
            ButtonVariant::Secondary => {
                "border border-gray-300 text-gray-700 hover:bg-gray-50 px-4 py-2 rounded-lg"
            }
            ButtonVariant::Ghost => "text-gray-400 p-2 rounded-lg",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "".to_string())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_classes = variant.classes();
    rsx! {
        button {
            class: "transition-colors cursor-pointer disabled:opacity-50 disabled:cursor-not-allowed {variant_classes} {class}",
            r#type,
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: Option<String>,
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default = false)] required: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id,
            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus-ring transition-colors {class}",
            r#type,
            placeholder,
            value,
            required,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(#[props(default = "".to_string())] r#for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "block text-sm font-medium text-gray-700 mb-2",
            r#for,
            {children}
        }
    }
}

/// Indeterminate spinner. Override `class` for size and color.
#[component]
pub fn Spinner(
    #[props(default = "w-8 h-8 border-4 border-indigo-600".to_string())] class: String,
) -> Element {
    rsx! {
        div { class: "animate-spin rounded-full border-t-transparent {class}" }
    }
}
