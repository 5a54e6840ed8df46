//! Organization API keys

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tenant_runtime::{AdditionalProperties, MaybeUnset};

/// An API key as listed; only the prefix of the key is visible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Key ID
    pub id: String,

    /// Label
    pub name: String,

    /// First characters of the key
    pub prefix: String,

    /// Creation time
    pub created_at: DateTime<Utc>,

    /// Expiry, `null` for keys that never expire
    #[serde(deserialize_with = "tenant_runtime::model::nullable")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Granted scopes
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub scopes: MaybeUnset<Vec<String>>,
}

/// Body of `create_api_key`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiKeyBody {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Label
    pub name: String,

    /// Expiry; `null` asks for a key that never expires
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub expires_at: MaybeUnset<Option<DateTime<Utc>>>,

    /// Requested scopes
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub scopes: MaybeUnset<Vec<String>>,
}

impl CreateApiKeyBody {
    /// Create a body with only a label
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            additional_properties: AdditionalProperties::new(),
            name: name.into(),
            expires_at: MaybeUnset::Unset,
            scopes: MaybeUnset::Unset,
        }
    }
}

/// A freshly created key; the only response that carries the full secret
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedApiKey {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Key ID
    pub id: String,

    /// Label
    pub name: String,

    /// Full key
    pub key: String,

    /// First characters of the key
    pub prefix: String,

    /// Creation time
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub created_at: MaybeUnset<DateTime<Utc>>,
}

impl_model!(ApiKey, CreateApiKeyBody, CreatedApiKey);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tenant_runtime::Model;

    #[test]
    fn test_create_api_key_null_expiry_sent() {
        let body = CreateApiKeyBody {
            expires_at: MaybeUnset::Set(None),
            ..CreateApiKeyBody::new("ci")
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"name": "ci", "expiresAt": null})
        );

        let unset = CreateApiKeyBody::new("ci");
        assert_eq!(serde_json::to_value(&unset).unwrap(), json!({"name": "ci"}));
    }

    #[test]
    fn test_api_key_declared_field_wins_over_side_map() {
        let wire = json!({
            "id": "ak1",
            "name": "ci",
            "prefix": "tk_live_",
            "createdAt": "2024-01-01T00:00:00Z",
            "expiresAt": null,
            "scopes": ["read"]
        });
        let mut key = ApiKey::from_dict(wire.as_object().unwrap()).unwrap();
        key.insert("name", json!("shadowed"));

        let out = key.to_dict().unwrap();
        assert_eq!(out.get("name"), Some(&json!("ci")));
    }

    #[test]
    fn test_created_api_key_parse() {
        let wire = json!({"id": "ak1", "name": "ci", "key": "tk_live_abc", "prefix": "tk_live_"});
        let created = CreatedApiKey::from_dict(wire.as_object().unwrap()).unwrap();
        assert_eq!(created.key, "tk_live_abc");
        assert!(created.created_at.is_unset());
    }
}
