//! Model record discipline
//!
//! Every schema record is a serde struct that:
//! - declares `additional_properties: AdditionalProperties` **first**, marked
//!   `#[serde(flatten)]`, so unknown wire keys are captured on the way in and
//!   merged before the declared fields on the way out (declared fields win on
//!   key collisions);
//! - renames fields to their wire names with `#[serde(rename = "...")]`;
//! - marks optional fields `MaybeUnset<T>` with
//!   `#[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]`;
//! - marks required-nullable fields `Option<T>` with
//!   `#[serde(deserialize_with = "tenant_runtime::model::nullable")]`, so that
//!   a missing key fails while `null` round-trips.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Side map holding keys a record does not declare
pub type AdditionalProperties = Map<String, Value>;

/// Deserialize a required field that may be `null`
///
/// Plain `Option<T>` fields silently default to `None` when the key is missing;
/// routing them through this function makes the key mandatory.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// Wire-shape conversion shared by all schema records
pub trait Model: Serialize + DeserializeOwned {
    /// Unknown keys captured from the wire or set by the caller
    fn additional_properties(&self) -> &AdditionalProperties;

    /// Mutable access to the side map
    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties;

    /// Produce the wire-shape mapping
    fn to_dict(&self) -> serde_json::Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "record serialized to a non-object value: {other}"
            ))),
        }
    }

    /// Rebuild a record from a wire-shape mapping
    ///
    /// The input is left untouched; keys not declared by the record end up in
    /// its additional properties.
    fn from_dict(dict: &Map<String, Value>) -> serde_json::Result<Self> {
        serde_json::from_value(Value::Object(dict.clone()))
    }

    /// Read an additional property
    fn get(&self, key: &str) -> Option<&Value> {
        self.additional_properties().get(key)
    }

    /// Write an additional property, returning the previous value
    fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.additional_properties_mut().insert(key.into(), value)
    }

    /// Remove an additional property
    fn remove(&mut self, key: &str) -> Option<Value> {
        self.additional_properties_mut().remove(key)
    }

    /// Check for an additional property
    fn contains_key(&self, key: &str) -> bool {
        self.additional_properties().contains_key(key)
    }

    /// Names of all additional properties
    fn additional_keys(&self) -> Vec<String> {
        self.additional_properties().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MaybeUnset;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        #[serde(flatten)]
        additional_properties: AdditionalProperties,
        #[serde(rename = "userId")]
        user_id: String,
        #[serde(deserialize_with = "nullable")]
        nickname: Option<String>,
        #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
        score: MaybeUnset<i64>,
    }

    impl Model for Sample {
        fn additional_properties(&self) -> &AdditionalProperties {
            &self.additional_properties
        }

        fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
            &mut self.additional_properties
        }
    }

    fn dict(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_round_trip_with_unknown_keys() {
        let input = dict(json!({"userId": "u", "nickname": null, "extra": {"k": 1}}));
        let sample = Sample::from_dict(&input).unwrap();

        assert_eq!(sample.user_id, "u");
        assert_eq!(sample.nickname, None);
        assert!(sample.score.is_unset());
        assert_eq!(sample.get("extra"), Some(&json!({"k": 1})));
        assert_eq!(sample.to_dict().unwrap(), input);
    }

    #[test]
    fn test_missing_required_key_fails() {
        let err = Sample::from_dict(&dict(json!({"nickname": "n"}))).unwrap_err();
        assert!(err.to_string().contains("userId"));
    }

    #[test]
    fn test_missing_required_nullable_key_fails() {
        let err = Sample::from_dict(&dict(json!({"userId": "u"}))).unwrap_err();
        assert!(err.to_string().contains("nickname"));
    }

    #[test]
    fn test_declared_fields_win_on_collision() {
        let mut sample = Sample {
            additional_properties: AdditionalProperties::new(),
            user_id: "declared".to_string(),
            nickname: None,
            score: MaybeUnset::Set(1),
        };
        sample.insert("userId", json!("shadow"));
        sample.insert("color", json!("blue"));

        let out = sample.to_dict().unwrap();
        assert_eq!(out.get("userId"), Some(&json!("declared")));
        assert_eq!(out.get("color"), Some(&json!("blue")));
        assert_eq!(out.get("score"), Some(&json!(1)));
    }

    #[test]
    fn test_subscript_access_touches_side_map_only() {
        let mut sample = Sample::from_dict(&dict(json!({"userId": "u", "nickname": "n"}))).unwrap();
        assert!(!sample.contains_key("userId"));
        assert!(sample.additional_keys().is_empty());

        sample.insert("a", json!(true));
        assert_eq!(sample.additional_keys(), vec!["a".to_string()]);
        assert_eq!(sample.remove("a"), Some(json!(true)));
        assert!(!sample.contains_key("a"));
        assert_eq!(sample.user_id, "u");
    }

    #[test]
    fn test_additional_properties_participate_in_equality() {
        let a = Sample::from_dict(&dict(json!({"userId": "u", "nickname": null}))).unwrap();
        let b = Sample::from_dict(&dict(json!({"userId": "u", "nickname": null, "x": 1}))).unwrap();
        assert_ne!(a, b);
    }
}
