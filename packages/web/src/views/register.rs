//! Registration page. A successful registration signs the user in directly.

use api::models::RegisterRequest;
use api::ApiError;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label, Spinner};
use ui::{icons, use_auth, Icon};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, redirect to the dashboard
    if !auth().loading && auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let name = username().trim().to_string();
            let mail = email().trim().to_string();
            let pass = password();

            if name.is_empty() {
                error.set(Some("Username is required".to_string()));
                return;
            }
            if mail.is_empty() || !mail.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if pass.len() < 6 {
                error.set(Some("Password must be at least 6 characters".to_string()));
                return;
            }

            loading.set(true);
            let payload = RegisterRequest {
                username: name,
                email: mail,
                password: pass,
            };
            match ui::register(auth, &payload).await {
                Ok(()) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(register_error_message(err)));
                }
            }
        });
    };

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-50 px-4",
            div {
                class: "max-w-md w-full space-y-8",

                div {
                    class: "text-center",
                    div {
                        class: "flex items-center justify-center w-16 h-16 bg-indigo-600 rounded-xl mx-auto mb-4",
                        Icon { icon: icons::FaBoxOpen, width: 32, height: 32, fill: "white" }
                    }
                    h2 { class: "text-3xl font-bold text-gray-900", "Create your account" }
                    p { class: "mt-2 text-gray-600", "Start tracking your assets" }
                }

                form {
                    class: "mt-8 space-y-6 bg-white p-8 rounded-2xl shadow-lg",
                    onsubmit: handle_register,

                    if let Some(err) = error() {
                        div {
                            class: "bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-lg text-sm",
                            "{err}"
                        }
                    }

                    div {
                        class: "space-y-4",
                        div {
                            Label { r#for: "username", "Username" }
                            Input {
                                id: "username",
                                r#type: "text",
                                placeholder: "Choose a username",
                                required: true,
                                value: username(),
                                oninput: move |evt: FormEvent| username.set(evt.value()),
                            }
                        }
                        div {
                            Label { r#for: "email", "Email" }
                            Input {
                                id: "email",
                                r#type: "email",
                                placeholder: "you@example.com",
                                required: true,
                                value: email(),
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                        }
                        div {
                            Label { r#for: "password", "Password" }
                            Input {
                                id: "password",
                                r#type: "password",
                                placeholder: "At least 6 characters",
                                required: true,
                                value: password(),
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        class: "w-full flex items-center justify-center gap-2 py-3 font-medium",
                        disabled: loading(),
                        if loading() {
                            Spinner { class: "w-5 h-5 border-2 border-white" }
                        } else {
                            span { "Sign Up" }
                        }
                    }

                    div {
                        class: "text-center",
                        p {
                            class: "text-sm text-gray-600",
                            "Already have an account? "
                            Link {
                                class: "font-medium text-indigo-600 hover:text-indigo-500 transition-colors",
                                to: Route::Login {},
                                "Sign in"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The backend's own message when it sent one, else the page fallback.
fn register_error_message(err: ApiError) -> String {
    match err {
        ApiError::Unauthorized { message: None } => {
            "Registration failed. Please try again.".to_string()
        }
        other => other.to_string(),
    }
}
