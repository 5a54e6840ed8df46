//! Audio upload body

use serde::{Deserialize, Serialize};
use tenant_runtime::{AdditionalProperties, BinaryPart, MaybeUnset, MultipartForm};

const DECLARED_FIELDS: [&str; 4] = ["file", "traceId", "spanId", "audio_uuid"];

/// Body of `upload_audio`, sent as `multipart/form-data`
///
/// # Example
///
/// ```rust
/// use tenant_models::UploadAudioBody;
/// use tenant_runtime::{BinaryPart, MultipartPart};
///
/// let file = BinaryPart::new(&b"RIFF"[..], "clip.wav", "audio/wav");
/// let body = UploadAudioBody::new(file, "t1", "s1");
/// let form = body.to_multipart();
///
/// assert!(matches!(form.get("file"), Some(MultipartPart::File(_))));
/// assert_eq!(form.get("traceId"), Some(&MultipartPart::Text("t1".to_string())));
/// assert!(form.get("audio_uuid").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadAudioBody {
    /// Extra text fields
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Recording
    pub file: BinaryPart,

    /// Trace the recording belongs to
    #[serde(rename = "traceId")]
    pub trace_id: String,

    /// Span the recording belongs to
    #[serde(rename = "spanId")]
    pub span_id: String,

    /// Client-chosen recording ID
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub audio_uuid: MaybeUnset<String>,
}

impl UploadAudioBody {
    /// Create an upload body
    pub fn new(file: BinaryPart, trace_id: impl Into<String>, span_id: impl Into<String>) -> Self {
        Self {
            additional_properties: AdditionalProperties::new(),
            file,
            trace_id: trace_id.into(),
            span_id: span_id.into(),
            audio_uuid: MaybeUnset::Unset,
        }
    }

    /// Build the multipart form
    ///
    /// Additional properties come first; one whose name matches a declared
    /// field is not sent.
    pub fn to_multipart(&self) -> MultipartForm {
        let extra = self
            .additional_properties
            .iter()
            .filter(|(key, _)| !DECLARED_FIELDS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let mut form = MultipartForm::new()
            .extend_from_dict(extra)
            .file("file", self.file.clone())
            .text("traceId", self.trace_id.clone())
            .text("spanId", self.span_id.clone());
        if let MaybeUnset::Set(audio_uuid) = &self.audio_uuid {
            form = form.text("audio_uuid", audio_uuid.clone());
        }
        form
    }
}

impl_model!(UploadAudioBody);
