//! Tenant API schema records
//!
//! One record per schema and one enum per string enum. Every record
//! implements [`tenant_runtime::Model`], so unknown wire keys survive a
//! `from_dict` / `to_dict` round trip.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use tenant_models::Member;
//! use tenant_runtime::Model;
//!
//! let wire = json!({"userId": "u", "extra": {"k": 1}});
//! let member = Member::from_dict(wire.as_object().unwrap()).unwrap();
//!
//! assert_eq!(member.user_id, "u");
//! assert_eq!(member.get("extra"), Some(&json!({"k": 1})));
//! assert_eq!(member.to_dict().unwrap(), *wire.as_object().unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

#[macro_use]
mod macros;

pub mod ai;
pub mod api_keys;
pub mod audio;
pub mod auth;
pub mod credentials;
pub mod enums;
pub mod errors;
pub mod organizations;
pub mod payments;
pub mod telemetry;

pub use ai::{Chat, ChatMessage, ContentPart, CreateChatBody, MessageContent, SendMessageBody};
pub use api_keys::{ApiKey, CreateApiKeyBody, CreatedApiKey};
pub use audio::UploadAudioBody;
pub use auth::{TokenRequest, TokenResponse, User};
pub use credentials::{CreateCredentialBody, Credential};
pub use enums::{
    ChatStatus, CredentialProvider, InvoiceStatus, MemberRole, MessageRole, SubscriptionPlan,
    WidgetKind,
};
pub use errors::{ErrorMessage, HttpValidationError, LocItem, ValidationErrorItem};
pub use organizations::{CreateOrganizationBody, InviteMemberBody, Member, Organization};
pub use payments::{CheckoutSession, CreateCheckoutBody, Invoice};
pub use telemetry::{Dashboard, IngestAccepted, Widget};

/// A string that is not a member of the enum it was parsed as
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{value:?} is not a valid {kind}")]
pub struct UnknownVariant {
    /// Enum type name
    pub kind: &'static str,
    /// Rejected input
    pub value: String,
}
