//! # API crate — HTTP client and endpoint bindings for Trove
//!
//! Everything the views need to talk to the asset backend lives here: the
//! configured HTTP client with its auth interception, the error taxonomy,
//! the wire models, and one thin module per endpoint group.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`](ApiClient) | Request wrapper: base URL, 10s timeout, bearer injection, centralized 401 handling, request/response logging |
//! | [`error`](ApiError) | Error classification; `Display` carries the user-facing message |
//! | [`models`] | Wire types (camelCase JSON) and local payload validation |
//! | [`auth`] | `POST /auth/login`, `POST /auth/register` — the only calls that bypass bearer injection |
//! | [`assets`] | Asset CRUD: paged list, create, update, delete |
//! | [`master_data`] | Category and status lookups for the form selects |
//! | [`probe`] | Connectivity check against `GET /test` |
//!
//! Endpoint functions go through one process-wide [`ApiClient`] so the
//! interceptor rules apply uniformly; tests construct their own client
//! against local fixtures.

use once_cell::sync::Lazy;

pub mod assets;
pub mod auth;
mod client;
mod error;
pub mod master_data;
pub mod models;
pub mod probe;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::ValidationError;
pub use store::{Session, User};

/// Backend origin for all API calls.
///
/// Defaults to the local development backend; override at build time with
/// the `TROVE_API_BASE` environment variable.
pub fn base_url() -> &'static str {
    option_env!("TROVE_API_BASE").unwrap_or("http://localhost:8080/api")
}

static CLIENT: Lazy<ApiClient<store::PlatformStore>> =
    Lazy::new(|| ApiClient::new(base_url(), store::session_repo()));

/// Process-wide client used by the endpoint modules.
pub(crate) fn client() -> &'static ApiClient<store::PlatformStore> {
    &CLIENT
}
