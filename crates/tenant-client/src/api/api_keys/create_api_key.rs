//! `POST /api/{organisation_slug}/api-keys`

use tenant_models::{CreateApiKeyBody, CreatedApiKey, ErrorMessage};
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    encode_path, ApiRequest, AuthenticatedClient, ClientConfig, Method, Operation, RawResponse,
    Response, Result,
};

/// Issue an API key for an organization
#[derive(Debug, Clone, PartialEq)]
pub struct CreateApiKey {
    /// Organization handle
    pub organisation_slug: String,
    /// Key settings
    pub body: CreateApiKeyBody,
}

/// Documented outcomes of [`CreateApiKey`]
#[derive(Debug, Clone, PartialEq)]
pub enum CreateApiKeyResponse {
    /// 201: the only time the full key is returned
    Created(CreatedApiKey),
    /// 403: caller lacks the admin role
    Forbidden(ErrorMessage),
}

impl Operation for CreateApiKey {
    type Output = CreateApiKeyResponse;

    fn build_request(&self) -> Result<ApiRequest> {
        let url = format!("/api/{}/api-keys", encode_path(&self.organisation_slug)?);
        ApiRequest::new(Method::POST, url).json_model(&self.body)
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<CreateApiKeyResponse>> {
        match response.status.as_u16() {
            201 => Ok(Some(CreateApiKeyResponse::Created(parse_json(&response.content)?))),
            403 => Ok(Some(CreateApiKeyResponse::Forbidden(parse_json(
                &response.content,
            )?))),
            _ => unexpected_status(config, response),
        }
    }
}

fn create(organisation_slug: &str, body: CreateApiKeyBody) -> CreateApiKey {
    CreateApiKey {
        organisation_slug: organisation_slug.to_string(),
        body,
    }
}

/// Issue a key, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    body: CreateApiKeyBody,
) -> Result<Response<CreateApiKeyResponse>> {
    operation::sync_detailed(client, &create(organisation_slug, body))
}

/// Issue a key
pub fn sync(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    body: CreateApiKeyBody,
) -> Result<Option<CreateApiKeyResponse>> {
    operation::sync(client, &create(organisation_slug, body))
}

/// Issue a key, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    body: CreateApiKeyBody,
) -> Result<Response<CreateApiKeyResponse>> {
    operation::asyncio_detailed(client, &create(organisation_slug, body)).await
}

/// Issue a key
pub async fn asyncio(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    body: CreateApiKeyBody,
) -> Result<Option<CreateApiKeyResponse>> {
    operation::asyncio(client, &create(organisation_slug, body)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenant_runtime::StatusCode;

    #[test]
    fn test_parse_forbidden_is_typed() {
        let config = ClientConfig::new("http://localhost").with_raise_on_unexpected_status(true);
        let parsed = CreateApiKey::parse_response(
            &config,
            &RawResponse::new(StatusCode::FORBIDDEN, &br#"{"message":"forbidden"}"#[..]),
        )
        .unwrap();
        assert_eq!(
            parsed,
            Some(CreateApiKeyResponse::Forbidden(ErrorMessage::new("forbidden")))
        );
    }

    #[test]
    fn test_parse_unexpected_status_raises() {
        let config = ClientConfig::new("http://localhost").with_raise_on_unexpected_status(true);
        let err = CreateApiKey::parse_response(
            &config,
            &RawResponse::new(StatusCode::BAD_GATEWAY, &b"upstream"[..]),
        )
        .unwrap_err();
        let unexpected = err.as_unexpected_status().unwrap();
        assert_eq!(unexpected.status_code, StatusCode::BAD_GATEWAY);
        assert_eq!(unexpected.content.as_ref(), b"upstream");
    }
}
