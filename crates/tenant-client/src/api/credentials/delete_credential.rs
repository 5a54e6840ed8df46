//! `DELETE /api/{organisation_slug}/credentials/{id}`

use tenant_models::ErrorMessage;
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    encode_path, ApiRequest, AuthenticatedClient, ClientConfig, Method, Operation, RawResponse,
    Response, Result,
};

/// Delete a stored credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCredential {
    /// Organization handle
    pub organisation_slug: String,
    /// Credential ID
    pub id: String,
}

/// Documented outcomes of [`DeleteCredential`] that carry a body
///
/// A 204 leaves `parsed` empty.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteCredentialResponse {
    /// 404
    NotFound(ErrorMessage),
}

impl Operation for DeleteCredential {
    type Output = DeleteCredentialResponse;

    fn build_request(&self) -> Result<ApiRequest> {
        let url = format!(
            "/api/{}/credentials/{}",
            encode_path(&self.organisation_slug)?,
            encode_path(&self.id)?
        );
        Ok(ApiRequest::new(Method::DELETE, url))
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<DeleteCredentialResponse>> {
        match response.status.as_u16() {
            204 => Ok(None),
            404 => Ok(Some(DeleteCredentialResponse::NotFound(parse_json(
                &response.content,
            )?))),
            _ => unexpected_status(config, response),
        }
    }
}

fn delete(organisation_slug: &str, id: &str) -> DeleteCredential {
    DeleteCredential {
        organisation_slug: organisation_slug.to_string(),
        id: id.to_string(),
    }
}

/// Delete a credential, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    id: &str,
) -> Result<Response<DeleteCredentialResponse>> {
    operation::sync_detailed(client, &delete(organisation_slug, id))
}

/// Delete a credential
pub fn sync(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    id: &str,
) -> Result<Option<DeleteCredentialResponse>> {
    operation::sync(client, &delete(organisation_slug, id))
}

/// Delete a credential, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    id: &str,
) -> Result<Response<DeleteCredentialResponse>> {
    operation::asyncio_detailed(client, &delete(organisation_slug, id)).await
}

/// Delete a credential
pub async fn asyncio(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    id: &str,
) -> Result<Option<DeleteCredentialResponse>> {
    operation::asyncio(client, &delete(organisation_slug, id)).await
}
