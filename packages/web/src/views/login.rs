//! Login page with username/password form.

use api::models::LoginRequest;
use api::ApiError;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label, Spinner};
use ui::{icons, use_auth, Icon};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, redirect to the dashboard
    if !auth().loading && auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let credentials = LoginRequest {
                username: username().trim().to_string(),
                password: password(),
            };
            match ui::login(auth, &credentials).await {
                Ok(()) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(login_error_message(err)));
                }
            }
        });
    };

    let input_type = if show_password() { "text" } else { "password" };

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
                    h2 { class: "text-3xl font-bold text-gray-900", "Welcome back" }
                    p { class: "mt-2 text-gray-600", "Sign in to manage your assets" }
                }

                form {
                    class: "mt-8 space-y-6 bg-white p-8 rounded-2xl shadow-lg",
                    onsubmit: handle_login,

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
                                placeholder: "Enter your username",
                                required: true,
                                value: username(),
                                oninput: move |evt: FormEvent| username.set(evt.value()),
                            }
                        }
                        div {
                            Label { r#for: "password", "Password" }
                            div {
                                class: "relative",
                                Input {
                                    id: "password",
                                    r#type: "{input_type}",
                                    class: "pr-12",
                                    placeholder: "Enter your password",
                                    required: true,
                                    value: password(),
                                    oninput: move |evt: FormEvent| password.set(evt.value()),
                                }
                                button {
                                    r#type: "button",
                                    class: "password-toggle text-gray-400 hover:text-gray-600",
                                    onclick: move |_| show_password.toggle(),
                                    if show_password() {
                                        Icon { icon: icons::FaEyeSlash, width: 18, height: 18 }
                                    } else {
                                        Icon { icon: icons::FaEye, width: 18, height: 18 }
                                    }
                                }
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
                            Icon { icon: icons::FaRightToBracket, width: 18, height: 18 }
                            span { "Sign In" }
                        }
                    }

                    div {
                        class: "text-center",
                        p {
                            class: "text-sm text-gray-600",
                            "Don't have an account? "
                            Link {
                                class: "font-medium text-indigo-600 hover:text-indigo-500 transition-colors",
                                to: Route::Register {},
                                "Sign up"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The backend's own message when it sent one, else the page fallback.
fn login_error_message(err: ApiError) -> String {
    match err {
        ApiError::Unauthorized {
            message: Some(message),
        } => message,
        ApiError::Unauthorized { message: None } => "Login failed. Please try again.".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_prefers_backend_message() {
        let err = ApiError::Unauthorized {
            message: Some("Invalid username or password".to_string()),
        };
        assert_eq!(login_error_message(err), "Invalid username or password");
    }

    #[test]
    fn test_login_error_fallback() {
        let err = ApiError::Unauthorized { message: None };
        assert_eq!(login_error_message(err), "Login failed. Please try again.");
    }

    #[test]
    fn test_login_error_keeps_connectivity_text() {
        assert_eq!(
            login_error_message(ApiError::Unreachable),
            "Cannot connect to server. Please ensure the backend is running."
        );
    }
}
