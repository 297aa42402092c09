//! # HTTP client wrapper — one send path for every API call
//!
//! [`ApiClient`] owns the reqwest client, the base URL, and the session
//! repository, and funnels every request through one send path so the two
//! interceptor rules hold system-wide:
//!
//! - **Request phase**: read the token fresh from the session store and
//!   attach `Authorization: Bearer {token}`, unless the path is an
//!   authentication endpoint. A pure decision of (token, path), evaluated
//!   per request.
//! - **Response phase**: on 401, clear the persisted session and leave for
//!   the login page (unless already there). Exactly one place implements
//!   this; endpoint modules never check statuses themselves.
//!
//! Construction does no I/O. Every request carries a fixed 10 second
//! timeout, applied per request so it works on native and wasm reqwest
//! alike. Requests and responses are logged with method, path, and status;
//! failures are logged with the response body before being classified.

use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{SessionRepository, SessionStore};

use crate::error::ApiError;

/// Bound on every request, native and wasm alike.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configured HTTP client shared by all endpoint modules.
pub struct ApiClient<S: SessionStore> {
    http: reqwest::Client,
    base_url: String,
    session: SessionRepository<S>,
    timeout: Duration,
}

impl<S: SessionStore> ApiClient<S> {
    /// Configure a client against `base_url`. No I/O happens here.
    pub fn new(base_url: impl Into<String>, session: SessionRepository<S>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            session,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Override the per-request timeout. Tests use short ones.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::GET, path, None::<&()>).await?;
        Self::decode(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::POST, path, Some(body)).await?;
        Self::decode(response).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::PUT, path, Some(body)).await?;
        Self::decode(response).await
    }

    /// DELETE with an empty response body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    /// The single send path. Both interceptor rules live here.
    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url).timeout(self.timeout);

        let token = self.session.token();
        let bearer = bearer_for(token.as_deref(), path);
        tracing::debug!(%method, path, authorized = bearer.is_some(), "api request");
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|err| ApiError::from_transport(&err))?;
        let status = response.status();
        tracing::debug!(%status, path, "api response");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(%status, path, body, "api request failed");
        if status == StatusCode::UNAUTHORIZED {
            self.session.clear();
            redirect_to_login();
        }
        Err(ApiError::from_status(status, &body))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response.json().await.map_err(|err| {
            tracing::error!(%err, "failed to decode api response");
            ApiError::Decode
        })
    }
}

/// The bearer credential to attach for a request to `path`, if any.
/// Authentication endpoints never carry one, even when a token is stored.
fn bearer_for<'a>(token: Option<&'a str>, path: &str) -> Option<&'a str> {
    token.filter(|_| !path.contains("/auth/"))
}

/// Leave the current page for the login view after an auth failure. No-op
/// when already on the login page, and on non-web targets.
fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            let on_login = location
                .pathname()
                .map(|path| path.contains("/login"))
                .unwrap_or(false);
            if !on_login {
                let _ = location.set_href("/login");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_attached_outside_auth_paths() {
        assert_eq!(bearer_for(Some("t1"), "/assets?page=0&size=9"), Some("t1"));
        assert_eq!(bearer_for(Some("t1"), "/categories"), Some("t1"));
        assert_eq!(bearer_for(Some("t1"), "/test"), Some("t1"));
    }

    #[test]
    fn test_auth_paths_never_carry_a_token() {
        assert_eq!(bearer_for(Some("t1"), "/auth/login"), None);
        assert_eq!(bearer_for(Some("t1"), "/auth/register"), None);
    }

    #[test]
    fn test_no_token_means_no_header() {
        assert_eq!(bearer_for(None, "/assets"), None);
        assert_eq!(bearer_for(None, "/auth/login"), None);
    }
}
