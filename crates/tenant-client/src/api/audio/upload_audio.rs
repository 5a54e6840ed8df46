//! `POST /api/v1/audio`

use tenant_models::{HttpValidationError, UploadAudioBody};
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    ApiRequest, AuthenticatedClient, ClientConfig, Method, Operation, RawResponse, Response,
    Result,
};

/// Attach an audio recording to a span
#[derive(Debug, Clone, PartialEq)]
pub struct UploadAudio {
    /// Recording and its trace coordinates
    pub body: UploadAudioBody,
}

/// Documented outcomes of [`UploadAudio`] that carry a body
///
/// A 201 leaves `parsed` empty.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadAudioResponse {
    /// 422
    UnprocessableEntity(HttpValidationError),
}

impl Operation for UploadAudio {
    type Output = UploadAudioResponse;

    fn build_request(&self) -> Result<ApiRequest> {
        Ok(ApiRequest::new(Method::POST, "/api/v1/audio").multipart(self.body.to_multipart()))
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<UploadAudioResponse>> {
        match response.status.as_u16() {
            201 => Ok(None),
            422 => Ok(Some(UploadAudioResponse::UnprocessableEntity(parse_json(
                &response.content,
            )?))),
            _ => unexpected_status(config, response),
        }
    }
}

/// Upload a recording, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    body: UploadAudioBody,
) -> Result<Response<UploadAudioResponse>> {
    operation::sync_detailed(client, &UploadAudio { body })
}

/// Upload a recording
pub fn sync(
    client: &AuthenticatedClient,
    body: UploadAudioBody,
) -> Result<Option<UploadAudioResponse>> {
    operation::sync(client, &UploadAudio { body })
}

/// Upload a recording, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    body: UploadAudioBody,
) -> Result<Response<UploadAudioResponse>> {
    operation::asyncio_detailed(client, &UploadAudio { body }).await
}

/// Upload a recording
pub async fn asyncio(
    client: &AuthenticatedClient,
    body: UploadAudioBody,
) -> Result<Option<UploadAudioResponse>> {
    operation::asyncio(client, &UploadAudio { body }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenant_runtime::{BinaryPart, MaybeUnset, MultipartPart, RequestBody, StatusCode};

    fn upload() -> UploadAudio {
        UploadAudio {
            body: UploadAudioBody {
                audio_uuid: MaybeUnset::Set("u1".to_string()),
                ..UploadAudioBody::new(
                    BinaryPart::new(&b"RIFF"[..], "clip.wav", "audio/wav"),
                    "t1",
                    "s1",
                )
            },
        }
    }

    #[test]
    fn test_build_request_multipart() {
        let request = upload().build_request().unwrap();
        assert_eq!(request.url, "/api/v1/audio");

        let form = match request.body {
            Some(RequestBody::Multipart(form)) => form,
            other => panic!("expected multipart body, got {other:?}"),
        };
        let names: Vec<&str> = form.parts().iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["file", "traceId", "spanId", "audio_uuid"]);
        assert_eq!(form.get("traceId"), Some(&MultipartPart::Text("t1".to_string())));
    }

    #[test]
    fn test_created_is_empty_success() {
        let config = ClientConfig::new("http://localhost").with_raise_on_unexpected_status(true);
        let parsed =
            UploadAudio::parse_response(&config, &RawResponse::new(StatusCode::CREATED, Vec::new()))
                .unwrap();
        assert!(parsed.is_none());
    }
}
