//! `POST /api/ai/chats/{chat_id}/messages`

use tenant_models::{ChatMessage, SendMessageBody};
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    encode_path, ApiRequest, AuthenticatedClient, ClientConfig, Method, Operation, RawResponse,
    Response, Result,
};

/// Post a message and wait for the assistant's reply
#[derive(Debug, Clone, PartialEq)]
pub struct SendMessage {
    /// Chat ID
    pub chat_id: String,
    /// Message
    pub body: SendMessageBody,
}

impl Operation for SendMessage {
    type Output = ChatMessage;

    fn build_request(&self) -> Result<ApiRequest> {
        let url = format!("/api/ai/chats/{}/messages", encode_path(&self.chat_id)?);
        ApiRequest::new(Method::POST, url).json_model(&self.body)
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<ChatMessage>> {
        match response.status.as_u16() {
            200 => Ok(Some(parse_json(&response.content)?)),
            _ => unexpected_status(config, response),
        }
    }
}

fn send(chat_id: &str, body: SendMessageBody) -> SendMessage {
    SendMessage {
        chat_id: chat_id.to_string(),
        body,
    }
}

/// Send a message, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    chat_id: &str,
    body: SendMessageBody,
) -> Result<Response<ChatMessage>> {
    operation::sync_detailed(client, &send(chat_id, body))
}

/// Send a message
pub fn sync(
    client: &AuthenticatedClient,
    chat_id: &str,
    body: SendMessageBody,
) -> Result<Option<ChatMessage>> {
    operation::sync(client, &send(chat_id, body))
}

/// Send a message, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    chat_id: &str,
    body: SendMessageBody,
) -> Result<Response<ChatMessage>> {
    operation::asyncio_detailed(client, &send(chat_id, body)).await
}

/// Send a message
pub async fn asyncio(
    client: &AuthenticatedClient,
    chat_id: &str,
    body: SendMessageBody,
) -> Result<Option<ChatMessage>> {
    operation::asyncio(client, &send(chat_id, body)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tenant_models::{ContentPart, MessageContent, MessageRole};
    use tenant_runtime::{RequestBody, StatusCode};

    #[test]
    fn test_build_request_with_parts() {
        let body = SendMessageBody::new(MessageContent::Parts(vec![ContentPart::text("hi")]));
        let request = send("c1", body).build_request().unwrap();

        assert_eq!(request.url, "/api/ai/chats/c1/messages");
        assert_eq!(
            request.body,
            Some(RequestBody::Json(
                json!({"content": [{"type": "text", "text": "hi"}]})
            ))
        );
    }

    #[test]
    fn test_parse_reply() {
        let config = ClientConfig::new("http://localhost");
        let parsed = SendMessage::parse_response(
            &config,
            &RawResponse::new(
                StatusCode::OK,
                &br#"{"id":"m2","role":"assistant","content":"hello","tokens":7}"#[..],
            ),
        )
        .unwrap()
        .unwrap();

        assert_eq!(parsed.role, MessageRole::Assistant);
        assert_eq!(parsed.additional_properties.get("tokens"), Some(&json!(7)));
    }
}
