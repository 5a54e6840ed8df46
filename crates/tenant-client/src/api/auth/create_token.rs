//! `POST /api/auth/token`

use tenant_models::{ErrorMessage, TokenRequest, TokenResponse};
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    ApiRequest, Client, ClientConfig, Method, Operation, RawResponse, Response, Result,
};

/// Exchange account credentials for a bearer token
#[derive(Debug, Clone, PartialEq)]
pub struct CreateToken {
    /// Password-grant form
    pub body: TokenRequest,
}

/// Documented outcomes of [`CreateToken`]
#[derive(Debug, Clone, PartialEq)]
pub enum CreateTokenResponse {
    /// 200: token issued
    Ok(TokenResponse),
    /// 401: bad credentials
    Unauthorized(ErrorMessage),
}

impl Operation for CreateToken {
    type Output = CreateTokenResponse;

    fn build_request(&self) -> Result<ApiRequest> {
        ApiRequest::new(Method::POST, "/api/auth/token").form_model(&self.body)
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<CreateTokenResponse>> {
        match response.status.as_u16() {
            200 => Ok(Some(CreateTokenResponse::Ok(parse_json(&response.content)?))),
            401 => Ok(Some(CreateTokenResponse::Unauthorized(parse_json(
                &response.content,
            )?))),
            _ => unexpected_status(config, response),
        }
    }
}

/// Log in, returning the full envelope
pub fn sync_detailed(client: &Client, body: TokenRequest) -> Result<Response<CreateTokenResponse>> {
    operation::sync_detailed(client, &CreateToken { body })
}

/// Log in
pub fn sync(client: &Client, body: TokenRequest) -> Result<Option<CreateTokenResponse>> {
    operation::sync(client, &CreateToken { body })
}

/// Log in, returning the full envelope
pub async fn asyncio_detailed(
    client: &Client,
    body: TokenRequest,
) -> Result<Response<CreateTokenResponse>> {
    operation::asyncio_detailed(client, &CreateToken { body }).await
}

/// Log in
pub async fn asyncio(client: &Client, body: TokenRequest) -> Result<Option<CreateTokenResponse>> {
    operation::asyncio(client, &CreateToken { body }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenant_runtime::{RequestBody, StatusCode};

    #[test]
    fn test_build_request_is_form() {
        let operation = CreateToken {
            body: TokenRequest::password("alice", "pw"),
        };
        let request = operation.build_request().unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "/api/auth/token");
        assert_eq!(
            request.body,
            Some(RequestBody::Form(vec![
                ("grant_type".to_string(), "password".to_string()),
                ("password".to_string(), "pw".to_string()),
                ("username".to_string(), "alice".to_string()),
            ]))
        );
    }

    #[test]
    fn test_parse_unauthorized() {
        let config = ClientConfig::new("http://localhost");
        let parsed = CreateToken::parse_response(
            &config,
            &RawResponse::new(StatusCode::UNAUTHORIZED, &br#"{"message":"bad credentials"}"#[..]),
        )
        .unwrap();
        assert_eq!(
            parsed,
            Some(CreateTokenResponse::Unauthorized(ErrorMessage::new(
                "bad credentials"
            )))
        );
    }
}
