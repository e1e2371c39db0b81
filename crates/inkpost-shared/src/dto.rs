//! Data Transfer Objects - request/response types for the admin API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

impl AuthResponse {
    pub fn bearer(access_token: String, expires_in: u64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

/// A back-office account, without its password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Create or edit a user. On edit an absent password keeps the current one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Create or rename a permission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionRequest {
    pub name: Option<String>,
}

/// Query string of the post table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub author: Option<Uuid>,
    pub category: Option<Uuid>,
    pub status: Option<String>,
}

/// Bulk delete action payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDeleteResponse {
    pub deleted: u64,
}

/// Toggle column payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleRequest {
    pub value: bool,
}

/// Query string of the upload endpoint; the file itself is the raw body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadQuery {
    pub file_name: String,
    /// Files already attached to the form being edited.
    #[serde(default)]
    pub existing: usize,
}

/// A stored attachment, ready to be put into the post form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub path: String,
    pub original_name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlugQuery {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlugResponse {
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_fields_are_optional() {
        let query: PostListQuery = serde_json::from_str("{}").unwrap();
        assert!(query.page.is_none());
        assert!(query.status.is_none());
    }

    #[test]
    fn test_upload_query_defaults_existing() {
        let query: UploadQuery = serde_json::from_str(r#"{"file_name":"cover.png"}"#).unwrap();
        assert_eq!(query.existing, 0);
    }

    #[test]
    fn test_user_response_omits_live_tombstone() {
        let now = Utc::now();
        let json = serde_json::to_value(UserResponse {
            id: Uuid::new_v4(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
        .unwrap();
        assert!(json.get("deleted_at").is_none());
        assert!(json.get("password_hash").is_none());
    }
}
