//! Asset CRUD endpoints. One function per round trip; no retries, no
//! caching. Results and classified errors pass straight back to the caller.

use crate::models::{Asset, AssetPayload, Page};
use crate::{client, ApiError};

/// Fetch one page of the signed-in user's assets.
pub async fn list(page: u32, size: u32) -> Result<Page<Asset>, ApiError> {
    client().get(&list_path(page, size)).await
}

/// Create an asset from a validated payload.
pub async fn create(payload: &AssetPayload) -> Result<Asset, ApiError> {
    tracing::info!(name = %payload.asset_name, "creating asset");
    client().post("/assets", payload).await
}

/// Update an asset by id. The id travels in the path; the backend ignores
/// any id in the body.
pub async fn update(id: i64, payload: &AssetPayload) -> Result<Asset, ApiError> {
    tracing::info!(id, "updating asset");
    client().put(&format!("/assets/{id}"), payload).await
}

/// Delete an asset by id. The backend returns an empty body.
pub async fn remove(id: i64) -> Result<(), ApiError> {
    tracing::info!(id, "deleting asset");
    client().delete(&format!("/assets/{id}")).await
}

fn list_path(page: u32, size: u32) -> String {
    format!("/assets?page={page}&size={size}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_path_carries_page_and_size() {
        assert_eq!(list_path(0, 9), "/assets?page=0&size=9");
        assert_eq!(list_path(1, 9), "/assets?page=1&size=9");
        assert_eq!(list_path(12, 50), "/assets?page=12&size=50");
    }
}
