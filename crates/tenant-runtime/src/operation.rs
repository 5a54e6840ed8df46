//! The operation dispatch contract
//!
//! Each endpoint module defines a type implementing [`Operation`]: one
//! request builder and one status-code parser. Everything else, including
//! the blocking and async entry points, is shared here so both call styles
//! run the exact same build and parse code and only the engine differs.
//!
//! # Example
//!
//! ```
//! use tenant_runtime::operation::{parse_json, unexpected_status};
//! use tenant_runtime::{ApiRequest, ClientConfig, Method, Operation, RawResponse, Result};
//!
//! struct GetVersion;
//!
//! impl Operation for GetVersion {
//!     type Output = String;
//!
//!     fn build_request(&self) -> Result<ApiRequest> {
//!         Ok(ApiRequest::new(Method::GET, "/api/version"))
//!     }
//!
//!     fn parse_response(config: &ClientConfig, response: &RawResponse) -> Result<Option<String>> {
//!         match response.status.as_u16() {
//!             200 => Ok(Some(parse_json(&response.content)?)),
//!             _ => unexpected_status(config, response),
//!         }
//!     }
//! }
//! ```

use crate::client::{ApiClient, ClientConfig};
use crate::request::ApiRequest;
use crate::transport::{self, RawResponse};
use crate::types::Response;
use crate::{Result, UnexpectedStatus};
use serde::de::DeserializeOwned;

/// One endpoint: request builder plus status-code dispatch
pub trait Operation {
    /// Typed body for the documented statuses
    type Output;

    /// Describe the request (relative URL, query, headers, body)
    fn build_request(&self) -> Result<ApiRequest>;

    /// Dispatch on status code
    ///
    /// Returns `Ok(None)` for documented no-content statuses and, on
    /// non-raising clients, for undocumented ones.
    fn parse_response(config: &ClientConfig, response: &RawResponse)
        -> Result<Option<Self::Output>>;
}

/// Decode a JSON body into the type declared for a status
///
/// An empty body is a shape failure, never a default value.
pub fn parse_json<T: DeserializeOwned>(content: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(content)?)
}

/// Fallback arm for statuses an operation does not document
pub fn unexpected_status<T>(config: &ClientConfig, response: &RawResponse) -> Result<Option<T>> {
    if config.raise_on_unexpected_status {
        return Err(UnexpectedStatus {
            status_code: response.status,
            content: response.content.clone(),
        }
        .into());
    }
    tracing::warn!(
        "undocumented status {} collapsed to an empty result",
        response.status
    );
    Ok(None)
}

/// Bridge a raw transport response into the typed envelope
pub fn build_response<O: Operation>(
    config: &ClientConfig,
    response: RawResponse,
) -> Result<Response<O::Output>> {
    let parsed = O::parse_response(config, &response)?;
    Ok(Response::new(
        response.status,
        response.content,
        response.headers,
        parsed,
    ))
}

/// Blocking call returning the envelope
pub fn sync_detailed<C, O>(client: &C, operation: &O) -> Result<Response<O::Output>>
where
    C: ApiClient,
    O: Operation,
{
    let request = operation.build_request()?;
    let response = transport::execute_blocking(client, &request)?;
    build_response::<O>(client.config(), response)
}

/// Blocking call returning only the typed body
pub fn sync<C, O>(client: &C, operation: &O) -> Result<Option<O::Output>>
where
    C: ApiClient,
    O: Operation,
{
    Ok(sync_detailed(client, operation)?.parsed)
}

/// Async call returning the envelope
pub async fn asyncio_detailed<C, O>(client: &C, operation: &O) -> Result<Response<O::Output>>
where
    C: ApiClient,
    O: Operation,
{
    let request = operation.build_request()?;
    let response = transport::execute_async(client, &request).await?;
    build_response::<O>(client.config(), response)
}

/// Async call returning only the typed body
pub async fn asyncio<C, O>(client: &C, operation: &O) -> Result<Option<O::Output>>
where
    C: ApiClient,
    O: Operation,
{
    Ok(asyncio_detailed(client, operation).await?.parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Method, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: String,
    }

    #[derive(Debug, PartialEq)]
    enum GetItemResponse {
        Ok(Item),
        NotFound(String),
    }

    struct GetItem;

    impl Operation for GetItem {
        type Output = GetItemResponse;

        fn build_request(&self) -> Result<ApiRequest> {
            Ok(ApiRequest::new(Method::GET, "/items/1"))
        }

        fn parse_response(
            config: &ClientConfig,
            response: &RawResponse,
        ) -> Result<Option<Self::Output>> {
            match response.status.as_u16() {
                200 => Ok(Some(GetItemResponse::Ok(parse_json(&response.content)?))),
                204 => Ok(None),
                404 => Ok(Some(GetItemResponse::NotFound(parse_json(
                    &response.content,
                )?))),
                _ => unexpected_status(config, response),
            }
        }
    }

    fn config(raise: bool) -> ClientConfig {
        ClientConfig::new("http://localhost").with_raise_on_unexpected_status(raise)
    }

    #[test]
    fn test_documented_status_dispatch() {
        let ok = build_response::<GetItem>(
            &config(false),
            RawResponse::new(StatusCode::OK, &br#"{"id":"1"}"#[..]),
        )
        .unwrap();
        assert_eq!(
            ok.parsed,
            Some(GetItemResponse::Ok(Item { id: "1".to_string() }))
        );

        let missing = build_response::<GetItem>(
            &config(false),
            RawResponse::new(StatusCode::NOT_FOUND, &br#""gone""#[..]),
        )
        .unwrap();
        assert_eq!(
            missing.parsed,
            Some(GetItemResponse::NotFound("gone".to_string()))
        );
    }

    #[test]
    fn test_no_content_is_empty_success() {
        let response = build_response::<GetItem>(
            &config(true),
            RawResponse::new(StatusCode::NO_CONTENT, Vec::new()),
        )
        .unwrap();
        assert_eq!(response.status_code, 204);
        assert!(response.parsed.is_none());
    }

    #[test]
    fn test_unexpected_status_raises() {
        let err = build_response::<GetItem>(
            &config(true),
            RawResponse::new(StatusCode::IM_A_TEAPOT, &b"teapot"[..]),
        )
        .unwrap_err();
        let inner = err.as_unexpected_status().unwrap();
        assert_eq!(inner.status_code, 418);
        assert_eq!(inner.content.as_ref(), b"teapot");
    }

    #[test]
    fn test_unexpected_status_collapses() {
        let response = build_response::<GetItem>(
            &config(false),
            RawResponse::new(StatusCode::IM_A_TEAPOT, &b"teapot"[..]),
        )
        .unwrap();
        assert_eq!(response.status_code, 418);
        assert_eq!(response.content.as_ref(), b"teapot");
        assert!(response.parsed.is_none());
    }

    #[test]
    fn test_empty_body_is_shape_error() {
        let err = build_response::<GetItem>(
            &config(false),
            RawResponse::new(StatusCode::OK, Vec::new()),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
    }

    #[test]
    fn test_missing_required_key_is_shape_error() {
        let err = build_response::<GetItem>(
            &config(false),
            RawResponse::new(StatusCode::OK, &b"{}"[..]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
    }
}
