//! Authentication endpoints.
//!
//! These are the only calls that bypass bearer injection: the client exempts
//! every `/auth/` path, so a stale stored token never leaks into a login or
//! registration request.

use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::{client, ApiError};

/// Sign in with username and password.
pub async fn login(credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
    tracing::info!(username = %credentials.username, "attempting login");
    client().post("/auth/login", credentials).await
}

/// Create an account and sign in as it.
pub async fn register(payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    tracing::info!(username = %payload.username, "attempting registration");
    client().post("/auth/register", payload).await
}
