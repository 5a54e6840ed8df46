//! Documented error bodies

use serde::{Deserialize, Serialize};
use tenant_runtime::{AdditionalProperties, MaybeUnset};

/// Generic error body returned by most 4xx statuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Human-readable description
    pub message: String,

    /// Machine-readable error code
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub code: MaybeUnset<String>,

    /// Extra context, may be `null`
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub detail: MaybeUnset<Option<String>>,
}

impl ErrorMessage {
    /// Create an error body with only a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            additional_properties: AdditionalProperties::new(),
            message: message.into(),
            code: MaybeUnset::Unset,
            detail: MaybeUnset::Unset,
        }
    }
}

/// Element of a validation error location: a field name or a list index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocItem {
    /// Field name
    Name(String),
    /// List index
    Index(i64),
}

/// One failed validation rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorItem {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Path to the offending value, e.g. `["body", "name"]`
    pub loc: Vec<LocItem>,

    /// Rule description
    pub msg: String,

    /// Rule identifier
    #[serde(rename = "type")]
    pub error_type: String,
}

/// Body of a 422 response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpValidationError {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Every failed rule
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub detail: MaybeUnset<Vec<ValidationErrorItem>>,
}

impl_model!(ErrorMessage, ValidationErrorItem, HttpValidationError);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tenant_runtime::Model;

    #[test]
    fn test_error_message_minimal() {
        let parsed: ErrorMessage = serde_json::from_value(json!({"message": "forbidden"})).unwrap();
        assert_eq!(parsed, ErrorMessage::new("forbidden"));
        assert_eq!(
            serde_json::to_value(&parsed).unwrap(),
            json!({"message": "forbidden"})
        );
    }

    #[test]
    fn test_error_message_null_detail_kept() {
        let wire = json!({"message": "m", "detail": null});
        let parsed: ErrorMessage = serde_json::from_value(wire.clone()).unwrap();
        assert!(parsed.detail.is_null());
        assert_eq!(serde_json::to_value(&parsed).unwrap(), wire);
    }

    #[test]
    fn test_validation_error_mixed_loc() {
        let wire = json!({
            "detail": [
                {"loc": ["body", "members", 2, "email"], "msg": "field required", "type": "value_error.missing"}
            ]
        });
        let parsed = HttpValidationError::from_dict(wire.as_object().unwrap()).unwrap();
        let items = parsed.detail.as_option().unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].loc,
            vec![
                LocItem::Name("body".to_string()),
                LocItem::Name("members".to_string()),
                LocItem::Index(2),
                LocItem::Name("email".to_string()),
            ]
        );
        assert_eq!(items[0].error_type, "value_error.missing");
        assert_eq!(parsed.to_dict().unwrap(), *wire.as_object().unwrap());
    }

    #[test]
    fn test_validation_error_bad_loc_fails() {
        let wire = json!({"detail": [{"loc": [true], "msg": "m", "type": "t"}]});
        assert!(HttpValidationError::from_dict(wire.as_object().unwrap()).is_err());
    }
}
