//! `POST /api/{organisation_slug}/credentials`

use tenant_models::{CreateCredentialBody, Credential, ErrorMessage};
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    encode_path, ApiRequest, AuthenticatedClient, ClientConfig, Method, Operation, RawResponse,
    Response, Result,
};

/// Store a provider secret for an organization
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCredential {
    /// Organization handle
    pub organisation_slug: String,
    /// Credential to store
    pub body: CreateCredentialBody,
}

/// Documented outcomes of [`CreateCredential`]
#[derive(Debug, Clone, PartialEq)]
pub enum CreateCredentialResponse {
    /// 201
    Created(Credential),
    /// 409: name already used
    Conflict(ErrorMessage),
}

impl Operation for CreateCredential {
    type Output = CreateCredentialResponse;

    fn build_request(&self) -> Result<ApiRequest> {
        let url = format!("/api/{}/credentials", encode_path(&self.organisation_slug)?);
        ApiRequest::new(Method::POST, url).json_model(&self.body)
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<CreateCredentialResponse>> {
        match response.status.as_u16() {
            201 => Ok(Some(CreateCredentialResponse::Created(parse_json(
                &response.content,
            )?))),
            409 => Ok(Some(CreateCredentialResponse::Conflict(parse_json(
                &response.content,
            )?))),
            _ => unexpected_status(config, response),
        }
    }
}

fn create(organisation_slug: &str, body: CreateCredentialBody) -> CreateCredential {
    CreateCredential {
        organisation_slug: organisation_slug.to_string(),
        body,
    }
}

/// Store a credential, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    body: CreateCredentialBody,
) -> Result<Response<CreateCredentialResponse>> {
    operation::sync_detailed(client, &create(organisation_slug, body))
}

/// Store a credential
pub fn sync(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    body: CreateCredentialBody,
) -> Result<Option<CreateCredentialResponse>> {
    operation::sync(client, &create(organisation_slug, body))
}

/// Store a credential, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    body: CreateCredentialBody,
) -> Result<Response<CreateCredentialResponse>> {
    operation::asyncio_detailed(client, &create(organisation_slug, body)).await
}

/// Store a credential
pub async fn asyncio(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    body: CreateCredentialBody,
) -> Result<Option<CreateCredentialResponse>> {
    operation::asyncio(client, &create(organisation_slug, body)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenant_models::CredentialProvider;
    use tenant_runtime::StatusCode;

    #[test]
    fn test_build_request() {
        let body = CreateCredentialBody::new("prod", CredentialProvider::Gcp, "key");
        let request = create("acme/prod", body).build_request().unwrap();
        assert_eq!(request.url, "/api/acme%2Fprod/credentials");
        assert_eq!(request.header_value("content-type"), Some("application/json"));
    }

    #[test]
    fn test_parse_conflict() {
        let config = ClientConfig::new("http://localhost");
        let parsed = CreateCredential::parse_response(
            &config,
            &RawResponse::new(
                StatusCode::CONFLICT,
                &br#"{"message":"exists","code":"duplicate_name"}"#[..],
            ),
        )
        .unwrap();
        match parsed {
            Some(CreateCredentialResponse::Conflict(error)) => {
                assert_eq!(error.code.as_option().map(String::as_str), Some("duplicate_name"));
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }
}
