//! Envelope and file-part types shared by every operation

use crate::Result;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;

// =============================================================================
// Response Envelope
// =============================================================================

/// Response envelope returned by every `*_detailed` entry point
///
/// Always built, including when the status was undocumented and the client
/// does not raise; `parsed` is `None` in that case while `status_code`,
/// `content` and `headers` stay faithful to the wire.
///
/// # Examples
/// ```
/// use tenant_runtime::{Bytes, HeaderMap, Response, StatusCode};
///
/// let response: Response<String> = Response::new(
///     StatusCode::OK,
///     Bytes::from_static(b"\"ok\""),
///     HeaderMap::new(),
///     Some("ok".to_string()),
/// );
/// assert!(response.is_success());
/// assert_eq!(response.into_parsed(), Some("ok".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    /// HTTP status code
    pub status_code: StatusCode,
    /// Raw response body
    pub content: Bytes,
    /// Response headers
    pub headers: HeaderMap,
    /// Typed body for the documented status, if any
    pub parsed: Option<T>,
}

impl<T> Response<T> {
    /// Create a new response
    pub fn new(
        status_code: StatusCode,
        content: Bytes,
        headers: HeaderMap,
        parsed: Option<T>,
    ) -> Self {
        Self {
            status_code,
            content,
            headers,
            parsed,
        }
    }

    /// Get a header value as a string
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).and_then(|value| value.to_str().ok())
    }

    /// Check if the response is successful (2xx status)
    pub fn is_success(&self) -> bool {
        self.status_code.is_success()
    }

    /// Drop the envelope and keep the typed body
    pub fn into_parsed(self) -> Option<T> {
        self.parsed
    }
}

// =============================================================================
// Binary Part
// =============================================================================

/// A file sent as one part of a multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryPart {
    /// File contents
    pub payload: Bytes,
    /// Filename announced in the part's `Content-Disposition`
    pub file_name: Option<String>,
    /// Media type of the part
    pub mime_type: Option<String>,
}

impl BinaryPart {
    /// Create a part from bytes, a filename and a media type
    pub fn new(
        payload: impl Into<Bytes>,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            payload: payload.into(),
            file_name: Some(file_name.into()),
            mime_type: Some(mime_type.into()),
        }
    }

    /// Create an anonymous part with neither filename nor media type
    pub fn from_bytes(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: payload.into(),
            file_name: None,
            mime_type: None,
        }
    }

    /// Read a file from disk, using its final path component as filename
    pub fn from_path(path: impl AsRef<Path>, mime_type: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        let payload = std::fs::read(path)?;
        Ok(Self {
            payload: Bytes::from(payload),
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            mime_type: Some(mime_type.into()),
        })
    }

    /// The `(filename, bytes, media type)` triple placed in the multipart field
    pub fn to_tuple(&self) -> (Option<&str>, &Bytes, Option<&str>) {
        (
            self.file_name.as_deref(),
            &self.payload,
            self.mime_type.as_deref(),
        )
    }
}

/// Wire-shape form is the `[filename, bytes, media type]` triple
impl Serialize for BinaryPart {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (
            self.file_name.as_deref(),
            self.payload.as_ref(),
            self.mime_type.as_deref(),
        )
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BinaryPart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let (file_name, payload, mime_type) =
            <(Option<String>, Vec<u8>, Option<String>)>::deserialize(deserializer)?;
        Ok(Self {
            payload: Bytes::from(payload),
            file_name,
            mime_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_TYPE};
    use std::io::Write;

    #[test]
    fn test_response_header_lookup() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let response: Response<()> =
            Response::new(StatusCode::NO_CONTENT, Bytes::new(), headers, None);

        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
        assert!(response.is_success());
        assert!(response.parsed.is_none());
    }

    #[test]
    fn test_response_not_success() {
        let response: Response<()> = Response::new(
            StatusCode::FORBIDDEN,
            Bytes::from_static(b"{}"),
            HeaderMap::new(),
            Some(()),
        );
        assert!(!response.is_success());
    }

    #[test]
    fn test_binary_part_tuple() {
        let part = BinaryPart::new(&b"RIFF"[..], "clip.wav", "audio/wav");
        let (name, payload, mime) = part.to_tuple();
        assert_eq!(name, Some("clip.wav"));
        assert_eq!(payload.as_ref(), b"RIFF");
        assert_eq!(mime, Some("audio/wav"));
    }

    #[test]
    fn test_binary_part_serde_triple() {
        let part = BinaryPart::new(&b"RI"[..], "clip.wav", "audio/wav");
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(value, serde_json::json!(["clip.wav", [82, 73], "audio/wav"]));

        let back: BinaryPart = serde_json::from_value(value).unwrap();
        assert_eq!(back, part);

        let anonymous: BinaryPart =
            serde_json::from_value(serde_json::json!([null, [1, 2], null])).unwrap();
        assert_eq!(anonymous, BinaryPart::from_bytes(vec![1u8, 2]));
    }

    #[test]
    fn test_binary_part_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"RIFF0000WAVE").unwrap();

        let part = BinaryPart::from_path(file.path(), "audio/wav").unwrap();
        assert_eq!(part.payload.as_ref(), b"RIFF0000WAVE");
        assert_eq!(
            part.file_name.as_deref(),
            file.path().file_name().and_then(|n| n.to_str())
        );
        assert_eq!(part.mime_type.as_deref(), Some("audio/wav"));
    }

    #[test]
    fn test_binary_part_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = BinaryPart::from_path(dir.path().join("absent.wav"), "audio/wav");
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
