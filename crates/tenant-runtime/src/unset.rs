//! The "absent on the wire" sentinel
//!
//! `MaybeUnset<T>` distinguishes a field that is not sent at all from one that
//! is sent. Combined with `Option`, `MaybeUnset<Option<T>>` covers all three
//! states of a nullable optional field: absent, explicit `null`, and a value.
//!
//! Record fields use it together with
//! `#[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]`, so an
//! unset field never reaches the wire and a missing key deserializes to
//! [`MaybeUnset::Unset`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that may be absent from the wire
///
/// `Unset` never compares equal to any `Set` value, including `Set(None)`,
/// `Set("")`, `Set(false)` and `Set(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaybeUnset<T> {
    /// Not present on the wire
    Unset,
    /// Present, carrying a value (which may itself be `None` for nullable fields)
    Set(T),
}

impl<T> Default for MaybeUnset<T> {
    fn default() -> Self {
        MaybeUnset::Unset
    }
}

impl<T> From<T> for MaybeUnset<T> {
    fn from(value: T) -> Self {
        MaybeUnset::Set(value)
    }
}

impl<T> MaybeUnset<T> {
    /// Check if the value is absent
    pub fn is_unset(&self) -> bool {
        matches!(self, MaybeUnset::Unset)
    }

    /// Check if a value is present
    pub fn is_set(&self) -> bool {
        !self.is_unset()
    }

    /// `Unset` for `None`, `Set` otherwise
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => MaybeUnset::Set(value),
            None => MaybeUnset::Unset,
        }
    }

    /// Borrow the inner value
    pub fn as_ref(&self) -> MaybeUnset<&T> {
        match self {
            MaybeUnset::Set(value) => MaybeUnset::Set(value),
            MaybeUnset::Unset => MaybeUnset::Unset,
        }
    }

    /// Get the value, if present
    pub fn as_option(&self) -> Option<&T> {
        match self {
            MaybeUnset::Set(value) => Some(value),
            MaybeUnset::Unset => None,
        }
    }

    /// Convert into an `Option`, collapsing `Unset` to `None`
    pub fn into_option(self) -> Option<T> {
        match self {
            MaybeUnset::Set(value) => Some(value),
            MaybeUnset::Unset => None,
        }
    }

    /// Map the inner value, keeping `Unset` as is
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> MaybeUnset<U> {
        match self {
            MaybeUnset::Set(value) => MaybeUnset::Set(f(value)),
            MaybeUnset::Unset => MaybeUnset::Unset,
        }
    }

    /// Get the value or a fallback
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            MaybeUnset::Set(value) => value,
            MaybeUnset::Unset => default,
        }
    }
}

impl<T> MaybeUnset<Option<T>> {
    /// Whether the field is present and explicitly `null`
    pub fn is_null(&self) -> bool {
        matches!(self, MaybeUnset::Set(None))
    }

    /// The value when present and non-null
    pub fn value(&self) -> Option<&T> {
        match self {
            MaybeUnset::Set(Some(value)) => Some(value),
            _ => None,
        }
    }
}

impl<T: Serialize> Serialize for MaybeUnset<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MaybeUnset::Set(value) => value.serialize(serializer),
            // Only reachable when a field forgets `skip_serializing_if`
            MaybeUnset::Unset => Err(serde::ser::Error::custom(
                "unset value reached the serializer; mark the field with skip_serializing_if",
            )),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for MaybeUnset<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(MaybeUnset::Set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
        name: MaybeUnset<Option<String>>,
        #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
        count: MaybeUnset<i64>,
    }

    #[test]
    fn test_unset_differs_from_falsy_values() {
        assert_ne!(MaybeUnset::<Option<i32>>::Unset, MaybeUnset::Set(None));
        assert_ne!(MaybeUnset::Unset, MaybeUnset::Set(String::new()));
        assert_ne!(MaybeUnset::Unset, MaybeUnset::Set(false));
        assert_ne!(MaybeUnset::Unset, MaybeUnset::Set(0));
    }

    #[test]
    fn test_unset_is_skipped() {
        let record = Record {
            name: MaybeUnset::Unset,
            count: MaybeUnset::Unset,
        };
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({}));
    }

    #[test]
    fn test_explicit_null_is_emitted() {
        let record = Record {
            name: MaybeUnset::Set(None),
            count: MaybeUnset::Set(3),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"name": null, "count": 3})
        );
    }

    #[test]
    fn test_unset_without_skip_fails_to_serialize() {
        #[derive(Serialize)]
        struct Careless {
            count: MaybeUnset<i64>,
        }

        let err = serde_json::to_value(Careless {
            count: MaybeUnset::Unset,
        })
        .unwrap_err();
        assert!(err.to_string().contains("unset"));
        assert_eq!(
            serde_json::to_value(Careless {
                count: MaybeUnset::Set(1),
            })
            .unwrap(),
            json!({"count": 1})
        );
    }

    #[test]
    fn test_three_states_deserialize() {
        let absent: Record = serde_json::from_value(json!({})).unwrap();
        assert!(absent.name.is_unset());

        let null: Record = serde_json::from_value(json!({"name": null})).unwrap();
        assert!(null.name.is_null());

        let value: Record = serde_json::from_value(json!({"name": "x"})).unwrap();
        assert_eq!(value.name.value(), Some(&"x".to_string()));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(MaybeUnset::from_option(Some(1)), MaybeUnset::Set(1));
        assert_eq!(MaybeUnset::<i32>::from_option(None), MaybeUnset::Unset);
        assert_eq!(MaybeUnset::from(5).map(|v| v * 2).into_option(), Some(10));
        assert_eq!(MaybeUnset::Unset.unwrap_or(7), 7);
        assert_eq!(MaybeUnset::Set(2).as_option(), Some(&2));
        assert!(MaybeUnset::<u8>::default().is_unset());
    }
}
