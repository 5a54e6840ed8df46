//! `POST /api/ai/chats`

use tenant_models::{Chat, CreateChatBody, HttpValidationError};
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    ApiRequest, AuthenticatedClient, ClientConfig, Method, Operation, RawResponse, Response,
    Result,
};

/// Start a chat
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateChat {
    /// Chat settings
    pub body: CreateChatBody,
}

/// Documented outcomes of [`CreateChat`]
#[derive(Debug, Clone, PartialEq)]
pub enum CreateChatResponse {
    /// 201
    Created(Chat),
    /// 422
    UnprocessableEntity(HttpValidationError),
}

impl Operation for CreateChat {
    type Output = CreateChatResponse;

    fn build_request(&self) -> Result<ApiRequest> {
        ApiRequest::new(Method::POST, "/api/ai/chats").json_model(&self.body)
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<CreateChatResponse>> {
        match response.status.as_u16() {
            201 => Ok(Some(CreateChatResponse::Created(parse_json(&response.content)?))),
            422 => Ok(Some(CreateChatResponse::UnprocessableEntity(parse_json(
                &response.content,
            )?))),
            _ => unexpected_status(config, response),
        }
    }
}

/// Start a chat, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    body: CreateChatBody,
) -> Result<Response<CreateChatResponse>> {
    operation::sync_detailed(client, &CreateChat { body })
}

/// Start a chat
pub fn sync(
    client: &AuthenticatedClient,
    body: CreateChatBody,
) -> Result<Option<CreateChatResponse>> {
    operation::sync(client, &CreateChat { body })
}

/// Start a chat, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    body: CreateChatBody,
) -> Result<Response<CreateChatResponse>> {
    operation::asyncio_detailed(client, &CreateChat { body }).await
}

/// Start a chat
pub async fn asyncio(
    client: &AuthenticatedClient,
    body: CreateChatBody,
) -> Result<Option<CreateChatResponse>> {
    operation::asyncio(client, &CreateChat { body }).await
}
