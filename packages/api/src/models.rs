//! # Wire models for the asset backend
//!
//! Every struct mirrors the backend's JSON exactly: camelCase field names via
//! `rename_all`, optional fields that may be absent or null, and a pagination
//! envelope whose position fields are taken verbatim from the response —
//! the client never recomputes them.
//!
//! | Type | Used by |
//! |------|---------|
//! | [`LoginRequest`] / [`RegisterRequest`] / [`AuthResponse`] | [`crate::auth`] |
//! | [`Asset`] / [`AssetPayload`] / [`Page`] | [`crate::assets`] |
//! | [`AssetCategory`] / [`AssetStatus`] | [`crate::master_data`] and the form selects |
//!
//! [`AssetPayload::validate`] is the client-side required-field check, run
//! before any network call.

use serde::{Deserialize, Serialize};

use store::User;

/// Credentials for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful authentication response: the bearer token plus the user it
/// belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// An asset record as the backend returns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i64,
    pub user_id: i64,
    pub asset_name: String,
    pub category_id: i64,
    pub status_id: i64,
    /// ISO date, `YYYY-MM-DD`.
    pub purchase_date: String,
    #[serde(default)]
    pub warranty_expiry_date: Option<String>,
    #[serde(default)]
    pub asset_image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    /// Expanded lookup objects, present when the backend joins them in.
    #[serde(default)]
    pub category: Option<AssetCategory>,
    #[serde(default)]
    pub status: Option<AssetStatus>,
}

/// Lookup entity behind the category select.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCategory {
    pub id: i64,
    pub category_name: String,
}

/// Lookup entity behind the status select.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetStatus {
    pub id: i64,
    pub status_name: String,
}

/// One page of results in the backend's pagination envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub size: i64,
    pub number: i64,
    pub first: bool,
    pub last: bool,
}

/// Create/update request body for an asset.
///
/// `category_id` and `status_id` use 0 as the "nothing selected" sentinel,
/// matching the form's placeholder options; [`validate`](Self::validate)
/// rejects it. Empty optional fields are omitted from the JSON entirely.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPayload {
    pub asset_name: String,
    pub category_id: i64,
    pub status_id: i64,
    pub purchase_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_expiry_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_image_url: Option<String>,
}

impl AssetPayload {
    /// Prefill from an existing asset, for the edit form.
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            asset_name: asset.asset_name.clone(),
            category_id: asset.category_id,
            status_id: asset.status_id,
            purchase_date: asset.purchase_date.clone(),
            warranty_expiry_date: asset.warranty_expiry_date.clone(),
            asset_image_url: asset.asset_image_url.clone(),
        }
    }

    /// Required-field check, run client-side before any network call.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.asset_name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.category_id == 0 {
            return Err(ValidationError::MissingCategory);
        }
        if self.status_id == 0 {
            return Err(ValidationError::MissingStatus);
        }
        if self.purchase_date.is_empty() {
            return Err(ValidationError::MissingPurchaseDate);
        }
        Ok(())
    }
}

/// A required form field is missing. Raised client-side; no request is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Asset name is required")]
    MissingName,
    #[error("Please select a category")]
    MissingCategory,
    #[error("Please select a status")]
    MissingStatus,
    #[error("Purchase date is required")]
    MissingPurchaseDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_payload() -> AssetPayload {
        AssetPayload {
            asset_name: "MacBook Pro".to_string(),
            category_id: 1,
            status_id: 1,
            purchase_date: "2024-01-15".to_string(),
            warranty_expiry_date: None,
            asset_image_url: None,
        }
    }

    #[test]
    fn test_validate_accepts_filled_payload() {
        assert!(filled_payload().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_each_missing_field() {
        let mut p = filled_payload();
        p.asset_name = "   ".to_string();
        assert_eq!(p.validate(), Err(ValidationError::MissingName));
        assert_eq!(
            p.validate().unwrap_err().to_string(),
            "Asset name is required"
        );

        let mut p = filled_payload();
        p.category_id = 0;
        assert_eq!(p.validate(), Err(ValidationError::MissingCategory));
        assert_eq!(
            p.validate().unwrap_err().to_string(),
            "Please select a category"
        );

        let mut p = filled_payload();
        p.status_id = 0;
        assert_eq!(p.validate(), Err(ValidationError::MissingStatus));
        assert_eq!(
            p.validate().unwrap_err().to_string(),
            "Please select a status"
        );

        let mut p = filled_payload();
        p.purchase_date = String::new();
        assert_eq!(p.validate(), Err(ValidationError::MissingPurchaseDate));
        assert_eq!(
            p.validate().unwrap_err().to_string(),
            "Purchase date is required"
        );
    }

    #[test]
    fn test_payload_omits_empty_optionals() {
        let json = serde_json::to_value(filled_payload()).unwrap();
        assert_eq!(json["assetName"], "MacBook Pro");
        assert_eq!(json["purchaseDate"], "2024-01-15");
        assert!(json.get("warrantyExpiryDate").is_none());
        assert!(json.get("assetImageUrl").is_none());

        let mut p = filled_payload();
        p.warranty_expiry_date = Some("2026-01-15".to_string());
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(json["warrantyExpiryDate"], "2026-01-15");
    }

    #[test]
    fn test_payload_prefills_from_asset() {
        let asset = Asset {
            id: 7,
            user_id: 1,
            asset_name: "Commuter Bike".to_string(),
            category_id: 3,
            status_id: 1,
            purchase_date: "2023-06-01".to_string(),
            warranty_expiry_date: Some("2025-06-01".to_string()),
            asset_image_url: None,
            created_at: "2023-06-01T09:00:00".to_string(),
            updated_at: "2023-06-02T10:00:00".to_string(),
            category: None,
            status: None,
        };
        let payload = AssetPayload::from_asset(&asset);
        assert_eq!(payload.asset_name, "Commuter Bike");
        assert_eq!(payload.category_id, 3);
        assert_eq!(payload.status_id, 1);
        assert_eq!(payload.warranty_expiry_date.as_deref(), Some("2025-06-01"));
        assert!(payload.asset_image_url.is_none());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_asset_decodes_camel_case() {
        let raw = r#"{
            "id": 7,
            "userId": 1,
            "assetName": "Commuter Bike",
            "categoryId": 3,
            "statusId": 1,
            "purchaseDate": "2023-06-01",
            "warrantyExpiryDate": null,
            "assetImageUrl": "https://example.com/bike.jpg",
            "createdAt": "2023-06-01T09:00:00",
            "updatedAt": "2023-06-02T10:00:00",
            "category": {"id": 3, "categoryName": "Bike"},
            "status": {"id": 1, "statusName": "Active"}
        }"#;
        let asset: Asset = serde_json::from_str(raw).unwrap();
        assert_eq!(asset.asset_name, "Commuter Bike");
        assert_eq!(asset.warranty_expiry_date, None);
        assert_eq!(asset.category.as_ref().unwrap().category_name, "Bike");
        assert_eq!(asset.status.as_ref().unwrap().status_name, "Active");

        // Expanded objects may be absent entirely
        let raw = r#"{
            "id": 8,
            "userId": 1,
            "assetName": "Desk",
            "categoryId": 4,
            "statusId": 2,
            "purchaseDate": "2022-03-10",
            "createdAt": "2022-03-10T09:00:00",
            "updatedAt": "2022-03-10T09:00:00"
        }"#;
        let asset: Asset = serde_json::from_str(raw).unwrap();
        assert!(asset.category.is_none());
        assert!(asset.asset_image_url.is_none());
    }

    #[test]
    fn test_page_envelope_is_mirrored_verbatim() {
        let content: Vec<serde_json::Value> = (1..=9)
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "userId": 1,
                    "assetName": format!("Asset {id}"),
                    "categoryId": 1,
                    "statusId": 1,
                    "purchaseDate": "2024-01-15",
                    "createdAt": "2024-01-15T09:00:00",
                    "updatedAt": "2024-01-15T09:00:00"
                })
            })
            .collect();
        let raw = serde_json::json!({
            "content": content,
            "totalElements": 20,
            "totalPages": 3,
            "size": 9,
            "number": 0,
            "first": true,
            "last": false
        });

        let page: Page<Asset> = serde_json::from_value(raw).unwrap();
        assert_eq!(page.content.len(), 9);
        assert_eq!(page.total_elements, 20);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.size, 9);
        assert_eq!(page.number, 0);
        assert!(page.first);
        assert!(!page.last);
    }

    #[test]
    fn test_auth_response_decodes() {
        let raw = r#"{
            "token": "t1",
            "user": {
                "id": 1,
                "username": "alice",
                "email": "alice@example.com",
                "createdAt": "2024-01-01T00:00:00",
                "updatedAt": "2024-01-01T00:00:00"
            }
        }"#;
        let resp: AuthResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.token, "t1");
        assert_eq!(resp.user.username, "alice");
    }
}
