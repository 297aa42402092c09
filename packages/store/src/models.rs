//! # Session-layer domain models
//!
//! Defines the data carried by the session repository and shared with the
//! api crate. Field names mirror the backend's camelCase JSON via
//! `rename_all`, so the same [`User`] struct is both the wire shape and the
//! durable shape.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The backend's account record. The client holds a cached copy inside the session; the backend owns the lifecycle. |
//! | [`Session`] | The bearer token paired with the user it belongs to. |

use serde::{Deserialize, Serialize};

/// Account record as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Backend timestamps, kept as the ISO strings they arrive as.
    pub created_at: String,
    pub updated_at: String,
}

/// An authenticated session. Token and user always travel together: a
/// session is whole or absent, never one half without the other.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}
