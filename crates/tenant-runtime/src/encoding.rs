//! Path and query encoding
//!
//! Path parameters go through [`encode_path`] and nothing else. Query
//! parameters are flattened into `(key, value)` pairs by [`QueryValue`], which
//! is where `Unset` and `null` values are dropped.

use crate::unset::MaybeUnset;
use crate::{Error, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except RFC 3986 unreserved characters
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a value substituted into a path template
///
/// No reserved character is left as is: `/`, `?`, `#`, space and the rest
/// are all escaped. The dot segments `.` and `..` are rejected: URL
/// normalization drops them, escaped or not.
///
/// # Examples
/// ```
/// use tenant_runtime::encode_path;
///
/// assert_eq!(encode_path("acme/prod").unwrap(), "acme%2Fprod");
/// assert_eq!(encode_path("k 1").unwrap(), "k%201");
/// assert!(encode_path("..").is_err());
/// ```
pub fn encode_path(value: impl AsRef<str>) -> Result<String> {
    let value = value.as_ref();
    if value == "." || value == ".." {
        return Err(Error::InvalidPathParameter(value.to_string()));
    }
    Ok(utf8_percent_encode(value, PATH_SEGMENT).to_string())
}

/// A value that can be placed in the query string
///
/// Implementations append zero or more pairs under `key`.
pub trait QueryValue {
    /// Append this value's pairs
    fn append_pairs(&self, key: &str, pairs: &mut Vec<(String, String)>);
}

impl QueryValue for str {
    fn append_pairs(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        pairs.push((key.to_string(), self.to_string()));
    }
}

impl QueryValue for String {
    fn append_pairs(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        self.as_str().append_pairs(key, pairs);
    }
}

impl QueryValue for bool {
    fn append_pairs(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        let value = if *self { "true" } else { "false" };
        pairs.push((key.to_string(), value.to_string()));
    }
}

macro_rules! display_query_value {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn append_pairs(&self, key: &str, pairs: &mut Vec<(String, String)>) {
                    pairs.push((key.to_string(), self.to_string()));
                }
            }
        )*
    };
}

display_query_value!(i32, i64, u32, u64, f32, f64);

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn append_pairs(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        (**self).append_pairs(key, pairs);
    }
}

impl<T: QueryValue> QueryValue for Option<T> {
    fn append_pairs(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        if let Some(value) = self {
            value.append_pairs(key, pairs);
        }
    }
}

impl<T: QueryValue> QueryValue for MaybeUnset<T> {
    fn append_pairs(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        if let MaybeUnset::Set(value) = self {
            value.append_pairs(key, pairs);
        }
    }
}

impl<T: QueryValue> QueryValue for Vec<T> {
    fn append_pairs(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        for value in self {
            value.append_pairs(key, pairs);
        }
    }
}

impl<T: QueryValue> QueryValue for [T] {
    fn append_pairs(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        for value in self {
            value.append_pairs(key, pairs);
        }
    }
}
