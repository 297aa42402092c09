//! Lookup data for the asset form selects. Fetched per form session, never
//! cached across sessions.

use crate::models::{AssetCategory, AssetStatus};
use crate::{client, ApiError};

/// All asset categories.
pub async fn categories() -> Result<Vec<AssetCategory>, ApiError> {
    client().get("/categories").await
}

/// All asset statuses.
pub async fn statuses() -> Result<Vec<AssetStatus>, ApiError> {
    client().get("/statuses").await
}
