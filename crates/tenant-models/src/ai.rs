//! AI chat records

use crate::enums::{ChatStatus, MessageRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tenant_runtime::{AdditionalProperties, MaybeUnset};

/// A chat session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Chat ID
    pub id: String,

    /// Title, `null` until one is generated
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub title: MaybeUnset<Option<String>>,

    /// Owning organization
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub organization_id: MaybeUnset<String>,

    /// Lifecycle state
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub status: MaybeUnset<ChatStatus>,

    /// Creation time
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub created_at: MaybeUnset<DateTime<Utc>>,

    /// History, included only by `get_chat`
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub messages: MaybeUnset<Vec<ChatMessage>>,
}

impl Chat {
    /// Create a chat with only an ID
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            additional_properties: AdditionalProperties::new(),
            id: id.into(),
            title: MaybeUnset::Unset,
            organization_id: MaybeUnset::Unset,
            status: MaybeUnset::Unset,
            created_at: MaybeUnset::Unset,
            messages: MaybeUnset::Unset,
        }
    }
}

/// One structured piece of a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPart {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Part type, e.g. `text` or `image_url`
    #[serde(rename = "type")]
    pub part_type: String,

    /// Text payload
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub text: MaybeUnset<String>,

    /// Media location
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub url: MaybeUnset<String>,
}

impl ContentPart {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            additional_properties: AdditionalProperties::new(),
            part_type: "text".to_string(),
            text: MaybeUnset::Set(text.into()),
            url: MaybeUnset::Unset,
        }
    }
}

/// Message body: plain text or a list of parts
///
/// Alternates are tried in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text
    Text(String),
    /// Structured parts
    Parts(Vec<ContentPart>),
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::Text(text.to_string())
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::Text(text)
    }
}

/// A message in a chat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Message ID
    pub id: String,

    /// Author
    pub role: MessageRole,

    /// Body
    pub content: MessageContent,

    /// Creation time
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub created_at: MaybeUnset<DateTime<Utc>>,
}

/// Body of `create_chat`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatBody {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Initial title
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub title: MaybeUnset<String>,

    /// Owning organization; the caller's personal space when unset
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub organization_id: MaybeUnset<String>,

    /// Model identifier
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub model: MaybeUnset<String>,
}

/// Body of `send_message`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMessageBody {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Message body
    pub content: MessageContent,

    /// Author; the server assumes `user` when unset
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub role: MaybeUnset<MessageRole>,
}

impl SendMessageBody {
    /// Create a message body
    pub fn new(content: impl Into<MessageContent>) -> Self {
        Self {
            additional_properties: AdditionalProperties::new(),
            content: content.into(),
            role: MaybeUnset::Unset,
        }
    }
}

impl_model!(Chat, ContentPart, ChatMessage, CreateChatBody, SendMessageBody);
