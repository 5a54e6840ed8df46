//! `GET /api/ai/chats/{chat_id}`

use tenant_models::{Chat, ErrorMessage};
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    encode_path, ApiRequest, AuthenticatedClient, ClientConfig, Method, Operation, RawResponse,
    Response, Result,
};

/// Fetch one chat with its history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetChat {
    /// Chat ID
    pub chat_id: String,
}

/// Documented outcomes of [`GetChat`]
#[derive(Debug, Clone, PartialEq)]
pub enum GetChatResponse {
    /// 200
    Ok(Chat),
    /// 404
    NotFound(ErrorMessage),
}

impl Operation for GetChat {
    type Output = GetChatResponse;

    fn build_request(&self) -> Result<ApiRequest> {
        let url = format!("/api/ai/chats/{}", encode_path(&self.chat_id)?);
        Ok(ApiRequest::new(Method::GET, url))
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<GetChatResponse>> {
        match response.status.as_u16() {
            200 => Ok(Some(GetChatResponse::Ok(parse_json(&response.content)?))),
            404 => Ok(Some(GetChatResponse::NotFound(parse_json(&response.content)?))),
            _ => unexpected_status(config, response),
        }
    }
}

/// Fetch a chat, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    chat_id: &str,
) -> Result<Response<GetChatResponse>> {
    operation::sync_detailed(
        client,
        &GetChat {
            chat_id: chat_id.to_string(),
        },
    )
}

/// Fetch a chat
pub fn sync(client: &AuthenticatedClient, chat_id: &str) -> Result<Option<GetChatResponse>> {
    Ok(sync_detailed(client, chat_id)?.parsed)
}

/// Fetch a chat, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    chat_id: &str,
) -> Result<Response<GetChatResponse>> {
    operation::asyncio_detailed(
        client,
        &GetChat {
            chat_id: chat_id.to_string(),
        },
    )
    .await
}

/// Fetch a chat
pub async fn asyncio(
    client: &AuthenticatedClient,
    chat_id: &str,
) -> Result<Option<GetChatResponse>> {
    Ok(asyncio_detailed(client, chat_id).await?.parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenant_models::MessageContent;
    use tenant_runtime::StatusCode;

    #[test]
    fn test_build_request() {
        let request = GetChat {
            chat_id: "c/1?x".to_string(),
        }
        .build_request()
        .unwrap();
        assert_eq!(request.url, "/api/ai/chats/c%2F1%3Fx");
    }

    #[test]
    fn test_parse_chat_with_history() {
        let config = ClientConfig::new("http://localhost");
        let body = br#"{
            "id": "c1",
            "title": null,
            "messages": [
                {"id": "m1", "role": "user", "content": "hi"},
                {"id": "m2", "role": "assistant", "content": [{"type": "text", "text": "hello"}]}
            ]
        }"#;
        let parsed =
            GetChat::parse_response(&config, &RawResponse::new(StatusCode::OK, &body[..])).unwrap();

        let chat = match parsed {
            Some(GetChatResponse::Ok(chat)) => chat,
            other => panic!("expected chat, got {other:?}"),
        };
        assert!(chat.title.is_null());
        let messages = chat.messages.as_option().unwrap();
        assert_eq!(messages[0].content, MessageContent::Text("hi".to_string()));
        assert!(matches!(messages[1].content, MessageContent::Parts(_)));
    }

    #[test]
    fn test_parse_not_found() {
        let config = ClientConfig::new("http://localhost");
        let parsed = GetChat::parse_response(
            &config,
            &RawResponse::new(StatusCode::NOT_FOUND, &br#"{"message":"no such chat"}"#[..]),
        )
        .unwrap();
        assert_eq!(
            parsed,
            Some(GetChatResponse::NotFound(ErrorMessage::new("no such chat")))
        );
    }
}
