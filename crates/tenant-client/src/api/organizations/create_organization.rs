//! `POST /api/organizations`

use tenant_models::{CreateOrganizationBody, ErrorMessage, HttpValidationError, Organization};
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    ApiRequest, AuthenticatedClient, ClientConfig, Method, Operation, RawResponse, Response,
    Result,
};

/// Create an organization owned by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrganization {
    /// New organization
    pub body: CreateOrganizationBody,
}

/// Documented outcomes of [`CreateOrganization`]
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOrganizationResponse {
    /// 201
    Created(Organization),
    /// 409: slug already taken
    Conflict(ErrorMessage),
    /// 422
    UnprocessableEntity(HttpValidationError),
}

impl Operation for CreateOrganization {
    type Output = CreateOrganizationResponse;

    fn build_request(&self) -> Result<ApiRequest> {
        ApiRequest::new(Method::POST, "/api/organizations").json_model(&self.body)
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<CreateOrganizationResponse>> {
        let content = &response.content;
        match response.status.as_u16() {
            201 => Ok(Some(CreateOrganizationResponse::Created(parse_json(content)?))),
            409 => Ok(Some(CreateOrganizationResponse::Conflict(parse_json(content)?))),
            422 => Ok(Some(CreateOrganizationResponse::UnprocessableEntity(
                parse_json(content)?,
            ))),
            _ => unexpected_status(config, response),
        }
    }
}

/// Create an organization, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    body: CreateOrganizationBody,
) -> Result<Response<CreateOrganizationResponse>> {
    operation::sync_detailed(client, &CreateOrganization { body })
}

/// Create an organization
pub fn sync(
    client: &AuthenticatedClient,
    body: CreateOrganizationBody,
) -> Result<Option<CreateOrganizationResponse>> {
    operation::sync(client, &CreateOrganization { body })
}

/// Create an organization, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    body: CreateOrganizationBody,
) -> Result<Response<CreateOrganizationResponse>> {
    operation::asyncio_detailed(client, &CreateOrganization { body }).await
}

/// Create an organization
pub async fn asyncio(
    client: &AuthenticatedClient,
    body: CreateOrganizationBody,
) -> Result<Option<CreateOrganizationResponse>> {
    operation::asyncio(client, &CreateOrganization { body }).await
}
