//! `POST /api/v1/traces`

use serde_json::Value;
use tenant_models::IngestAccepted;
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    ApiRequest, AuthenticatedClient, ClientConfig, MaybeUnset, Method, Operation, RawResponse,
    Response, Result,
};

/// Push a batch of spans
///
/// The payload is forwarded as is; it is not validated against any record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestTraces {
    /// Trace batch; no body is sent when unset
    pub body: MaybeUnset<Value>,
}

impl Operation for IngestTraces {
    type Output = IngestAccepted;

    fn build_request(&self) -> Result<ApiRequest> {
        let request = ApiRequest::new(Method::POST, "/api/v1/traces");
        match &self.body {
            MaybeUnset::Set(body) => request.json(body),
            MaybeUnset::Unset => Ok(request),
        }
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<IngestAccepted>> {
        match response.status.as_u16() {
            202 => Ok(Some(parse_json(&response.content)?)),
            _ => unexpected_status(config, response),
        }
    }
}

/// Push spans, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    body: MaybeUnset<Value>,
) -> Result<Response<IngestAccepted>> {
    operation::sync_detailed(client, &IngestTraces { body })
}

/// Push spans
pub fn sync(
    client: &AuthenticatedClient,
    body: MaybeUnset<Value>,
) -> Result<Option<IngestAccepted>> {
    operation::sync(client, &IngestTraces { body })
}

/// Push spans, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    body: MaybeUnset<Value>,
) -> Result<Response<IngestAccepted>> {
    operation::asyncio_detailed(client, &IngestTraces { body }).await
}

/// Push spans
pub async fn asyncio(
    client: &AuthenticatedClient,
    body: MaybeUnset<Value>,
) -> Result<Option<IngestAccepted>> {
    operation::asyncio(client, &IngestTraces { body }).await
}
