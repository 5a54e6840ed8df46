//! `GET /api/health`

use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    ApiRequest, Client, ClientConfig, Method, Operation, RawResponse, Response, Result,
};

/// Liveness check; answers with a status string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetHealth;

impl Operation for GetHealth {
    type Output = String;

    fn build_request(&self) -> Result<ApiRequest> {
        Ok(ApiRequest::new(Method::GET, "/api/health"))
    }

    fn parse_response(config: &ClientConfig, response: &RawResponse) -> Result<Option<String>> {
        match response.status.as_u16() {
            200 => Ok(Some(parse_json(&response.content)?)),
            _ => unexpected_status(config, response),
        }
    }
}

/// Check liveness
pub fn sync_detailed(client: &Client) -> Result<Response<String>> {
    operation::sync_detailed(client, &GetHealth)
}

/// Check liveness
pub fn sync(client: &Client) -> Result<Option<String>> {
    operation::sync(client, &GetHealth)
}

/// Check liveness
pub async fn asyncio_detailed(client: &Client) -> Result<Response<String>> {
    operation::asyncio_detailed(client, &GetHealth).await
}

/// Check liveness
pub async fn asyncio(client: &Client) -> Result<Option<String>> {
    operation::asyncio(client, &GetHealth).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenant_runtime::StatusCode;

    #[test]
    fn test_build_request() {
        let request = GetHealth.build_request().unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "/api/health");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_parse_string_body() {
        let config = ClientConfig::new("http://localhost");
        let parsed =
            GetHealth::parse_response(&config, &RawResponse::new(StatusCode::OK, &b"\"ok\""[..]))
                .unwrap();
        assert_eq!(parsed, Some("ok".to_string()));
    }
}
