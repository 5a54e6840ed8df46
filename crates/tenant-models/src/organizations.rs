//! Organization and membership records

use crate::enums::{MemberRole, SubscriptionPlan};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tenant_runtime::{AdditionalProperties, MaybeUnset};

/// A tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Organization ID
    pub id: String,

    /// URL-safe handle used in tenant-scoped paths
    pub slug: String,

    /// Display name
    pub name: String,

    /// Current billing plan
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub plan: MaybeUnset<SubscriptionPlan>,

    /// Creation time
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub created_at: MaybeUnset<DateTime<Utc>>,
}

/// Body of `create_organization`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrganizationBody {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Display name
    pub name: String,

    /// Requested handle; derived from the name when unset
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub slug: MaybeUnset<String>,

    /// Initial plan
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub plan: MaybeUnset<SubscriptionPlan>,
}

impl CreateOrganizationBody {
    /// Create a body with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            additional_properties: AdditionalProperties::new(),
            name: name.into(),
            slug: MaybeUnset::Unset,
            plan: MaybeUnset::Unset,
        }
    }
}

/// A user's membership in an organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Member's user ID
    pub user_id: String,

    /// Member's email
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub email: MaybeUnset<String>,

    /// Role inside the organization
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub role: MaybeUnset<MemberRole>,

    /// Time the invitation was accepted
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub joined_at: MaybeUnset<DateTime<Utc>>,
}

impl Member {
    /// Create a member with only a user ID
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            additional_properties: AdditionalProperties::new(),
            user_id: user_id.into(),
            email: MaybeUnset::Unset,
            role: MaybeUnset::Unset,
            joined_at: MaybeUnset::Unset,
        }
    }
}

/// Body of `invite_member`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteMemberBody {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Invitee email
    pub email: String,

    /// Role granted on acceptance
    pub role: MemberRole,
}

impl InviteMemberBody {
    /// Create an invitation body
    pub fn new(email: impl Into<String>, role: MemberRole) -> Self {
        Self {
            additional_properties: AdditionalProperties::new(),
            email: email.into(),
            role,
        }
    }
}

impl_model!(Organization, CreateOrganizationBody, Member, InviteMemberBody);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tenant_runtime::Model;

    #[test]
    fn test_member_keeps_unknown_keys() {
        let wire = json!({"userId": "u", "extra": {"k": 1}});
        let member = Member::from_dict(wire.as_object().unwrap()).unwrap();

        assert_eq!(member.user_id, "u");
        assert_eq!(
            serde_json::Value::Object(member.additional_properties.clone()),
            json!({"extra": {"k": 1}})
        );
        assert_eq!(member.to_dict().unwrap(), *wire.as_object().unwrap());
    }

    #[test]
    fn test_member_from_dict_leaves_input_intact() {
        let wire = json!({"userId": "u", "role": "admin"});
        let dict = wire.as_object().unwrap().clone();
        let member = Member::from_dict(&dict).unwrap();

        assert_eq!(member.role, MaybeUnset::Set(MemberRole::Admin));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_member_bad_role_fails() {
        let wire = json!({"userId": "u", "role": "superuser"});
        assert!(Member::from_dict(wire.as_object().unwrap()).is_err());
    }

    #[test]
    fn test_create_organization_unset_fields_dropped() {
        let body = CreateOrganizationBody::new("Acme");
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"name": "Acme"}));

        let body = CreateOrganizationBody {
            plan: MaybeUnset::Set(SubscriptionPlan::Team),
            ..CreateOrganizationBody::new("Acme")
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"name": "Acme", "plan": "team"})
        );
    }

    #[test]
    fn test_organization_round_trip() {
        let org = Organization {
            additional_properties: AdditionalProperties::new(),
            id: "o1".to_string(),
            slug: "acme".to_string(),
            name: "Acme".to_string(),
            plan: MaybeUnset::Set(SubscriptionPlan::Pro),
            created_at: MaybeUnset::Unset,
        };
        let dict = org.to_dict().unwrap();
        assert!(!dict.contains_key("createdAt"));
        assert_eq!(Organization::from_dict(&dict).unwrap(), org);
    }
}
