//! Backend connectivity probe.

use crate::{client, ApiError};

/// Hit the backend's test endpoint, discarding whatever it returns. Lets a
/// view tell "backend unreachable" apart from "reachable but failing"
/// before it attempts real calls.
pub async fn check() -> Result<(), ApiError> {
    client().get::<serde_json::Value>("/test").await.map(|_| ())
}
