//! Request description produced by operation builders
//!
//! An [`ApiRequest`] is plain data: method, relative URL, query pairs,
//! per-call headers and an optional body. The transport turns it into an
//! engine request; operation code never touches the engine.

use crate::encoding::QueryValue;
use crate::model::Model;
use crate::types::BinaryPart;
use crate::Result;
use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

/// Body of an outgoing request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// `application/json`
    Json(Value),
    /// `application/x-www-form-urlencoded`
    Form(Vec<(String, String)>),
    /// `multipart/form-data`
    Multipart(MultipartForm),
}

/// One field of a multipart body
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartPart {
    /// Plain text field
    Text(String),
    /// File field
    File(BinaryPart),
}

/// Ordered multipart fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    parts: Vec<(String, MultipartPart)>,
}

impl MultipartForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts
            .push((name.into(), MultipartPart::Text(value.into())));
        self
    }

    /// Add a file field
    pub fn file(mut self, name: impl Into<String>, part: BinaryPart) -> Self {
        self.parts.push((name.into(), MultipartPart::File(part)));
        self
    }

    /// Add every entry of a wire-shape mapping as text fields
    ///
    /// Strings are sent as is, `null` is skipped, other values as compact JSON.
    pub fn extend_from_dict(mut self, dict: Map<String, Value>) -> Self {
        for (key, value) in dict {
            if let Some(text) = form_text(value) {
                self.parts.push((key, MultipartPart::Text(text)));
            }
        }
        self
    }

    /// All fields in insertion order
    pub fn parts(&self) -> &[(String, MultipartPart)] {
        &self.parts
    }

    /// Look up the first field with the given name
    pub fn get(&self, name: &str) -> Option<&MultipartPart> {
        self.parts
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, part)| part)
    }
}

/// Render a JSON value as a form field
fn form_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    }
}

/// Everything needed to issue one call, relative to the client's base URL
///
/// # Examples
/// ```
/// use tenant_runtime::{ApiRequest, MaybeUnset, Method};
///
/// let request = ApiRequest::new(Method::GET, "/api/ai/chats")
///     .query("organizationId", MaybeUnset::<String>::Unset)
///     .query("limit", 10_i64);
///
/// assert_eq!(request.params, vec![("limit".to_string(), "10".to_string())]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path (already percent-encoded), without the base URL
    pub url: String,
    /// Query pairs, in order
    pub params: Vec<(String, String)>,
    /// Per-call headers; these win over client defaults
    pub headers: Vec<(String, String)>,
    /// Request body
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    /// Create a request with no query, headers or body
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            params: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Add a query parameter; `Unset` and `null` values add nothing
    pub fn query(mut self, key: &str, value: impl QueryValue) -> Self {
        value.append_pairs(key, &mut self.params);
        self
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Set a JSON body from any serializable value
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body)?;
        self.body = Some(RequestBody::Json(value));
        Ok(self.header("Content-Type", "application/json"))
    }

    /// Set a JSON body from a record
    pub fn json_model<M: Model>(self, body: &M) -> Result<Self> {
        let dict = body.to_dict()?;
        self.json(&Value::Object(dict))
    }

    /// Set a url-encoded body from a record
    pub fn form_model<M: Model>(mut self, body: &M) -> Result<Self> {
        let pairs = body
            .to_dict()?
            .into_iter()
            .filter_map(|(key, value)| form_text(value).map(|text| (key, text)))
            .collect();
        self.body = Some(RequestBody::Form(pairs));
        Ok(self)
    }

    /// Set a multipart body
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    /// Look up the first per-call header with the given name (case-insensitive)
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }
}
