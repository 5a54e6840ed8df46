//! `GET /api/{organisation_slug}/api-keys`

use tenant_models::ApiKey;
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    encode_path, ApiRequest, AuthenticatedClient, ClientConfig, Method, Operation, RawResponse,
    Response, Result,
};

/// List an organization's API keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListApiKeys {
    /// Organization handle
    pub organisation_slug: String,
}

impl Operation for ListApiKeys {
    type Output = Vec<ApiKey>;

    fn build_request(&self) -> Result<ApiRequest> {
        let url = format!("/api/{}/api-keys", encode_path(&self.organisation_slug)?);
        Ok(ApiRequest::new(Method::GET, url))
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<Vec<ApiKey>>> {
        match response.status.as_u16() {
            200 => Ok(Some(parse_json(&response.content)?)),
            _ => unexpected_status(config, response),
        }
    }
}

/// List API keys, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
) -> Result<Response<Vec<ApiKey>>> {
    let operation = ListApiKeys {
        organisation_slug: organisation_slug.to_string(),
    };
    operation::sync_detailed(client, &operation)
}

/// List API keys
pub fn sync(client: &AuthenticatedClient, organisation_slug: &str) -> Result<Option<Vec<ApiKey>>> {
    Ok(sync_detailed(client, organisation_slug)?.parsed)
}

/// List API keys, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
) -> Result<Response<Vec<ApiKey>>> {
    let operation = ListApiKeys {
        organisation_slug: organisation_slug.to_string(),
    };
    operation::asyncio_detailed(client, &operation).await
}

/// List API keys
pub async fn asyncio(
    client: &AuthenticatedClient,
    organisation_slug: &str,
) -> Result<Option<Vec<ApiKey>>> {
    Ok(asyncio_detailed(client, organisation_slug).await?.parsed)
}
