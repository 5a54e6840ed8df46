//! Stored provider credentials

use crate::enums::CredentialProvider;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tenant_runtime::{AdditionalProperties, MaybeUnset};

/// A stored credential; the secret itself is never returned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Credential ID
    pub id: String,

    /// Label
    pub name: String,

    /// Provider the secret is for
    pub provider: CredentialProvider,

    /// Creation time
    pub created_at: DateTime<Utc>,

    /// Last time the credential was used, `null` if never
    #[serde(deserialize_with = "tenant_runtime::model::nullable")]
    pub last_used_at: Option<DateTime<Utc>>,
}

/// Body of `create_credential`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCredentialBody {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Label
    pub name: String,

    /// Provider the secret is for
    pub provider: CredentialProvider,

    /// Secret value
    pub secret: String,

    /// Provider-specific settings (region, project, ...)
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub metadata: MaybeUnset<Map<String, Value>>,
}

impl CreateCredentialBody {
    /// Create a body without metadata
    pub fn new(
        name: impl Into<String>,
        provider: CredentialProvider,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            additional_properties: AdditionalProperties::new(),
            name: name.into(),
            provider,
            secret: secret.into(),
            metadata: MaybeUnset::Unset,
        }
    }
}

impl_model!(Credential, CreateCredentialBody);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tenant_runtime::Model;

    #[test]
    fn test_credential_never_used() {
        let wire = json!({
            "id": "k1",
            "name": "prod",
            "provider": "anthropic",
            "createdAt": "2024-05-01T08:30:00Z",
            "lastUsedAt": null
        });
        let credential = Credential::from_dict(wire.as_object().unwrap()).unwrap();

        assert_eq!(credential.provider, CredentialProvider::Anthropic);
        assert_eq!(credential.last_used_at, None);
        assert_eq!(credential.to_dict().unwrap().get("lastUsedAt"), Some(&json!(null)));
    }

    #[test]
    fn test_credential_missing_last_used_fails() {
        let wire = json!({
            "id": "k1",
            "name": "prod",
            "provider": "aws",
            "createdAt": "2024-05-01T08:30:00Z"
        });
        assert!(Credential::from_dict(wire.as_object().unwrap()).is_err());
    }

    #[test]
    fn test_create_credential_metadata() {
        let mut metadata = Map::new();
        metadata.insert("region".to_string(), json!("eu-west-1"));
        let body = CreateCredentialBody {
            metadata: MaybeUnset::Set(metadata),
            ..CreateCredentialBody::new("prod", CredentialProvider::Aws, "s3cr3t")
        };

        assert_eq!(
            body.to_dict().unwrap(),
            *json!({
                "name": "prod",
                "provider": "aws",
                "secret": "s3cr3t",
                "metadata": {"region": "eu-west-1"}
            })
            .as_object()
            .unwrap()
        );
    }
}
