//! `POST /api/{organisation_slug}/billing/checkout`

use tenant_models::{CheckoutSession, CreateCheckoutBody, ErrorMessage};
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    encode_path, ApiRequest, AuthenticatedClient, ClientConfig, Method, Operation, RawResponse,
    Response, Result,
};

/// Open a hosted checkout page for a plan change
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCheckoutSession {
    /// Organization handle
    pub organisation_slug: String,
    /// Plan and redirect targets
    pub body: CreateCheckoutBody,
}

/// Documented outcomes of [`CreateCheckoutSession`]
#[derive(Debug, Clone, PartialEq)]
pub enum CreateCheckoutSessionResponse {
    /// 201
    Created(CheckoutSession),
    /// 400: plan change not allowed
    BadRequest(ErrorMessage),
}

impl Operation for CreateCheckoutSession {
    type Output = CreateCheckoutSessionResponse;

    fn build_request(&self) -> Result<ApiRequest> {
        let url = format!(
            "/api/{}/billing/checkout",
            encode_path(&self.organisation_slug)?
        );
        ApiRequest::new(Method::POST, url).json_model(&self.body)
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<CreateCheckoutSessionResponse>> {
        let content = &response.content;
        match response.status.as_u16() {
            201 => Ok(Some(CreateCheckoutSessionResponse::Created(parse_json(content)?))),
            400 => Ok(Some(CreateCheckoutSessionResponse::BadRequest(parse_json(
                content,
            )?))),
            _ => unexpected_status(config, response),
        }
    }
}

fn checkout(organisation_slug: &str, body: CreateCheckoutBody) -> CreateCheckoutSession {
    CreateCheckoutSession {
        organisation_slug: organisation_slug.to_string(),
        body,
    }
}

/// Open a checkout page, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    body: CreateCheckoutBody,
) -> Result<Response<CreateCheckoutSessionResponse>> {
    operation::sync_detailed(client, &checkout(organisation_slug, body))
}

/// Open a checkout page
pub fn sync(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    body: CreateCheckoutBody,
) -> Result<Option<CreateCheckoutSessionResponse>> {
    operation::sync(client, &checkout(organisation_slug, body))
}

/// Open a checkout page, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    body: CreateCheckoutBody,
) -> Result<Response<CreateCheckoutSessionResponse>> {
    operation::asyncio_detailed(client, &checkout(organisation_slug, body)).await
}

/// Open a checkout page
pub async fn asyncio(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    body: CreateCheckoutBody,
) -> Result<Option<CreateCheckoutSessionResponse>> {
    operation::asyncio(client, &checkout(organisation_slug, body)).await
}
