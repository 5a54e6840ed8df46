//! `GET /api/users/me`

use tenant_models::{ErrorMessage, User};
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    ApiRequest, AuthenticatedClient, ClientConfig, Method, Operation, RawResponse, Response,
    Result,
};

/// Fetch the account the token belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetCurrentUser;

/// Documented outcomes of [`GetCurrentUser`]
#[derive(Debug, Clone, PartialEq)]
pub enum GetCurrentUserResponse {
    /// 200
    Ok(User),
    /// 401: token missing, expired or revoked
    Unauthorized(ErrorMessage),
}

impl Operation for GetCurrentUser {
    type Output = GetCurrentUserResponse;

    fn build_request(&self) -> Result<ApiRequest> {
        Ok(ApiRequest::new(Method::GET, "/api/users/me"))
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<GetCurrentUserResponse>> {
        match response.status.as_u16() {
            200 => Ok(Some(GetCurrentUserResponse::Ok(parse_json(&response.content)?))),
            401 => Ok(Some(GetCurrentUserResponse::Unauthorized(parse_json(
                &response.content,
            )?))),
            _ => unexpected_status(config, response),
        }
    }
}

/// Fetch the caller's account, returning the full envelope
pub fn sync_detailed(client: &AuthenticatedClient) -> Result<Response<GetCurrentUserResponse>> {
    operation::sync_detailed(client, &GetCurrentUser)
}

/// Fetch the caller's account
pub fn sync(client: &AuthenticatedClient) -> Result<Option<GetCurrentUserResponse>> {
    operation::sync(client, &GetCurrentUser)
}

/// Fetch the caller's account, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
) -> Result<Response<GetCurrentUserResponse>> {
    operation::asyncio_detailed(client, &GetCurrentUser).await
}

/// Fetch the caller's account
pub async fn asyncio(client: &AuthenticatedClient) -> Result<Option<GetCurrentUserResponse>> {
    operation::asyncio(client, &GetCurrentUser).await
}
