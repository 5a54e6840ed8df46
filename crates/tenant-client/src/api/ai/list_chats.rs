//! `GET /api/ai/chats`

use tenant_models::Chat;
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    ApiRequest, AuthenticatedClient, ClientConfig, MaybeUnset, Method, Operation, RawResponse,
    Response, Result,
};

/// List the caller's chats
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListChats {
    /// Only chats owned by this organization; every chat when unset
    pub organization_id: MaybeUnset<String>,
}

impl Operation for ListChats {
    type Output = Vec<Chat>;

    fn build_request(&self) -> Result<ApiRequest> {
        Ok(ApiRequest::new(Method::GET, "/api/ai/chats")
            .query("organizationId", &self.organization_id))
    }

    fn parse_response(config: &ClientConfig, response: &RawResponse) -> Result<Option<Vec<Chat>>> {
        match response.status.as_u16() {
            200 => Ok(Some(parse_json(&response.content)?)),
            _ => unexpected_status(config, response),
        }
    }
}

/// List chats, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    organization_id: MaybeUnset<String>,
) -> Result<Response<Vec<Chat>>> {
    operation::sync_detailed(client, &ListChats { organization_id })
}

/// List chats
pub fn sync(
    client: &AuthenticatedClient,
    organization_id: MaybeUnset<String>,
) -> Result<Option<Vec<Chat>>> {
    operation::sync(client, &ListChats { organization_id })
}

/// List chats, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    organization_id: MaybeUnset<String>,
) -> Result<Response<Vec<Chat>>> {
    operation::asyncio_detailed(client, &ListChats { organization_id }).await
}

/// List chats
pub async fn asyncio(
    client: &AuthenticatedClient,
    organization_id: MaybeUnset<String>,
) -> Result<Option<Vec<Chat>>> {
    operation::asyncio(client, &ListChats { organization_id }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenant_runtime::StatusCode;

    #[test]
    fn test_unset_organization_not_sent() {
        let request = ListChats::default().build_request().unwrap();
        assert_eq!(request.url, "/api/ai/chats");
        assert!(request.params.is_empty());
    }

    #[test]
    fn test_organization_sent_when_set() {
        let operation = ListChats {
            organization_id: MaybeUnset::Set("o1".to_string()),
        };
        let request = operation.build_request().unwrap();
        assert_eq!(
            request.params,
            vec![("organizationId".to_string(), "o1".to_string())]
        );
    }

    #[test]
    fn test_undocumented_status_collapses_to_none() {
        let config = ClientConfig::new("http://localhost");
        let parsed = ListChats::parse_response(
            &config,
            &RawResponse::new(StatusCode::INTERNAL_SERVER_ERROR, &b"boom"[..]),
        )
        .unwrap();
        assert!(parsed.is_none());
    }
}
