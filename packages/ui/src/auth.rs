//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] restores the persisted session once at construction and
//! shares an [`AuthState`] signal through context. The signal is the single
//! source of truth for "is authenticated"; views read it via [`use_auth`].
//! [`login`], [`register`], and [`logout`] keep the signal and the durable
//! store in step: both change together or not at all.

use api::models::{LoginRequest, RegisterRequest};
use api::ApiError;
use dioxus::prelude::*;
use store::Session;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// False once the stored session has been inspected.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn user(&self) -> Option<&store::User> {
        self.session.as_ref().map(|session| &session.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(restore);
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Initial auth state from the persisted session. Storage reads are
/// synchronous on every platform, so there is no window where a guard could
/// see a not-yet-restored state.
fn restore() -> AuthState {
    let session = store::session_repo().load();
    match &session {
        Some(session) => {
            tracing::info!(username = %session.user.username, "restored session")
        }
        None => tracing::debug!("no stored session"),
    }
    AuthState {
        session,
        loading: false,
    }
}

/// Log in and persist the session. On failure nothing changes and the error
/// is handed back for the form to display.
pub async fn login(
    mut auth: Signal<AuthState>,
    credentials: &LoginRequest,
) -> Result<(), ApiError> {
    let resp = api::auth::login(credentials).await?;
    let session = Session {
        token: resp.token,
        user: resp.user,
    };
    store::session_repo().save(&session);
    tracing::info!(username = %session.user.username, "signed in");
    auth.set(AuthState {
        session: Some(session),
        loading: false,
    });
    Ok(())
}

/// Register a new account; the backend signs the user straight in.
pub async fn register(
    mut auth: Signal<AuthState>,
    payload: &RegisterRequest,
) -> Result<(), ApiError> {
    let resp = api::auth::register(payload).await?;
    let session = Session {
        token: resp.token,
        user: resp.user,
    };
    store::session_repo().save(&session);
    tracing::info!(username = %session.user.username, "registered and signed in");
    auth.set(AuthState {
        session: Some(session),
        loading: false,
    });
    Ok(())
}

/// Drop the session, in memory and in durable storage. Idempotent.
pub fn logout(mut auth: Signal<AuthState>) {
    if let Some(session) = &auth.peek().session {
        tracing::info!(username = %session.user.username, "signed out");
    }
    store::session_repo().clear();
    auth.set(AuthState {
        session: None,
        loading: false,
    });
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();

    let onclick = move |_| {
        logout(auth);
        // Leave the authenticated area
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
