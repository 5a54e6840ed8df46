//! Identity records

use crate::organizations::Organization;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tenant_runtime::{AdditionalProperties, MaybeUnset};

/// OAuth2 password-grant form
///
/// Sent url-encoded, so the wire keys keep their OAuth2 spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRequest {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Grant type, `password` when set
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub grant_type: MaybeUnset<String>,

    /// Account email or login
    pub username: String,

    /// Account password
    pub password: String,

    /// Space-separated scopes
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub scope: MaybeUnset<String>,
}

impl TokenRequest {
    /// Create a password-grant request
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            additional_properties: AdditionalProperties::new(),
            grant_type: MaybeUnset::Set("password".to_string()),
            username: username.into(),
            password: password.into(),
            scope: MaybeUnset::Unset,
        }
    }
}

/// Issued access token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Bearer credential for authenticated calls
    pub access_token: String,

    /// Always `bearer`
    pub token_type: String,

    /// Lifetime in seconds
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub expires_in: MaybeUnset<i64>,

    /// Refresh credential, `null` when refresh is disabled
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub refresh_token: MaybeUnset<Option<String>>,
}

/// The caller's account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// User ID
    pub id: String,

    /// Primary email
    pub email: String,

    /// Display name, `null` until the profile is completed
    #[serde(deserialize_with = "tenant_runtime::model::nullable")]
    pub full_name: Option<String>,

    /// Avatar location
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub avatar_url: MaybeUnset<Option<String>>,

    /// Account creation time
    pub created_at: DateTime<Utc>,

    /// Organizations the user belongs to
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub organizations: MaybeUnset<Vec<Organization>>,
}

impl_model!(TokenRequest, TokenResponse, User);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use tenant_runtime::Model;

    #[test]
    fn test_token_request_wire_shape() {
        let request = TokenRequest::password("alice@example.com", "hunter2");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"grant_type": "password", "username": "alice@example.com", "password": "hunter2"})
        );
    }

    #[test]
    fn test_token_response_parse() {
        let wire = json!({"access_token": "abc", "token_type": "bearer", "refresh_token": null});
        let token = TokenResponse::from_dict(wire.as_object().unwrap()).unwrap();
        assert_eq!(token.access_token, "abc");
        assert!(token.expires_in.is_unset());
        assert!(token.refresh_token.is_null());
        assert_eq!(token.to_dict().unwrap(), *wire.as_object().unwrap());
    }

    #[test]
    fn test_user_round_trip() {
        let wire = json!({
            "id": "u1",
            "email": "alice@example.com",
            "fullName": null,
            "createdAt": "2024-03-01T12:00:00Z",
            "organizations": [{"id": "o1", "slug": "acme", "name": "Acme"}]
        });
        let user = User::from_dict(wire.as_object().unwrap()).unwrap();

        assert_eq!(user.full_name, None);
        assert!(user.avatar_url.is_unset());
        assert_eq!(
            user.created_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
        );
        assert_eq!(user.organizations.as_option().unwrap()[0].slug, "acme");
        assert_eq!(user.to_dict().unwrap(), *wire.as_object().unwrap());
    }

    #[test]
    fn test_user_missing_nullable_key_fails() {
        let wire = json!({"id": "u1", "email": "e", "createdAt": "2024-03-01T12:00:00Z"});
        let err = User::from_dict(wire.as_object().unwrap()).unwrap_err();
        assert!(err.to_string().contains("fullName"));
    }

    #[test]
    fn test_user_bad_date_fails() {
        let wire = json!({"id": "u1", "email": "e", "fullName": "A", "createdAt": "yesterday"});
        assert!(User::from_dict(wire.as_object().unwrap()).is_err());
    }
}
