//! `GET /api/{organisation_slug}/credentials`

use tenant_models::{Credential, CredentialProvider};
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    encode_path, ApiRequest, AuthenticatedClient, ClientConfig, MaybeUnset, Method, Operation,
    RawResponse, Response, Result,
};

/// List an organization's stored credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCredentials {
    /// Organization handle
    pub organisation_slug: String,
    /// Only credentials for this provider
    pub provider: MaybeUnset<CredentialProvider>,
}

impl Operation for ListCredentials {
    type Output = Vec<Credential>;

    fn build_request(&self) -> Result<ApiRequest> {
        let url = format!("/api/{}/credentials", encode_path(&self.organisation_slug)?);
        Ok(ApiRequest::new(Method::GET, url).query("provider", &self.provider))
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<Vec<Credential>>> {
        match response.status.as_u16() {
            200 => Ok(Some(parse_json(&response.content)?)),
            _ => unexpected_status(config, response),
        }
    }
}

fn list(organisation_slug: &str, provider: MaybeUnset<CredentialProvider>) -> ListCredentials {
    ListCredentials {
        organisation_slug: organisation_slug.to_string(),
        provider,
    }
}

/// List credentials, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    provider: MaybeUnset<CredentialProvider>,
) -> Result<Response<Vec<Credential>>> {
    operation::sync_detailed(client, &list(organisation_slug, provider))
}

/// List credentials
pub fn sync(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    provider: MaybeUnset<CredentialProvider>,
) -> Result<Option<Vec<Credential>>> {
    operation::sync(client, &list(organisation_slug, provider))
}

/// List credentials, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    provider: MaybeUnset<CredentialProvider>,
) -> Result<Response<Vec<Credential>>> {
    operation::asyncio_detailed(client, &list(organisation_slug, provider)).await
}

/// List credentials
pub async fn asyncio(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    provider: MaybeUnset<CredentialProvider>,
) -> Result<Option<Vec<Credential>>> {
    operation::asyncio(client, &list(organisation_slug, provider)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_query_uses_wire_value() {
        let request = list("acme", MaybeUnset::Set(CredentialProvider::OpenAi))
            .build_request()
            .unwrap();
        assert_eq!(request.url, "/api/acme/credentials");
        assert_eq!(
            request.params,
            vec![("provider".to_string(), "openai".to_string())]
        );
    }
}
