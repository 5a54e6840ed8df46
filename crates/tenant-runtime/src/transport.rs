//! Executing an [`ApiRequest`] on either engine
//!
//! Both paths build the same engine request (base URL prefixed verbatim, query
//! pairs, per-call headers, body) and buffer the whole response body. Engine
//! failures are returned unchanged inside [`Error::Transport`](crate::Error).

use crate::client::ApiClient;
use crate::request::{ApiRequest, MultipartForm, MultipartPart, RequestBody};
use crate::Result;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

/// A fully buffered transport response
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Whole response body
    pub content: Bytes,
}

impl RawResponse {
    /// Create a raw response (mainly for parser tests)
    pub fn new(status: StatusCode, content: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            content: content.into(),
        }
    }
}

fn full_url(client: &impl ApiClient, request: &ApiRequest) -> String {
    format!("{}{}", client.config().base_url, request.url)
}

/// Issue a request on the blocking engine
pub fn execute_blocking(client: &impl ApiClient, request: &ApiRequest) -> Result<RawResponse> {
    let engine = client.sync_engine()?;
    let url = full_url(client, request);
    tracing::debug!("{} {}", request.method, url);

    let mut builder = engine.request(request.method.clone(), &url);
    if !request.params.is_empty() {
        builder = builder.query(&request.params);
    }
    for (key, value) in &request.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    builder = match &request.body {
        Some(RequestBody::Json(value)) => builder.body(serde_json::to_vec(value)?),
        Some(RequestBody::Form(pairs)) => builder.form(pairs),
        Some(RequestBody::Multipart(form)) => builder.multipart(blocking_form(form)?),
        None => builder,
    };

    let response = builder.send()?;
    let status = response.status();
    let headers = response.headers().clone();
    let content = response.bytes()?;
    tracing::debug!("{} {} -> {} ({} bytes)", request.method, url, status, content.len());

    Ok(RawResponse {
        status,
        headers,
        content,
    })
}

/// Issue a request on the async engine
pub async fn execute_async(client: &impl ApiClient, request: &ApiRequest) -> Result<RawResponse> {
    let engine = client.async_engine()?;
    let url = full_url(client, request);
    tracing::debug!("{} {}", request.method, url);

    let mut builder = engine.request(request.method.clone(), &url);
    if !request.params.is_empty() {
        builder = builder.query(&request.params);
    }
    for (key, value) in &request.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    builder = match &request.body {
        Some(RequestBody::Json(value)) => builder.body(serde_json::to_vec(value)?),
        Some(RequestBody::Form(pairs)) => builder.form(pairs),
        Some(RequestBody::Multipart(form)) => builder.multipart(async_form(form)?),
        None => builder,
    };

    let response = builder.send().await?;
    let status = response.status();
    let headers = response.headers().clone();
    let content = response.bytes().await?;
    tracing::debug!("{} {} -> {} ({} bytes)", request.method, url, status, content.len());

    Ok(RawResponse {
        status,
        headers,
        content,
    })
}

fn async_form(form: &MultipartForm) -> Result<reqwest::multipart::Form> {
    use reqwest::multipart::{Form, Part};

    let mut out = Form::new();
    for (name, part) in form.parts() {
        out = match part {
            MultipartPart::Text(text) => out.text(name.clone(), text.clone()),
            MultipartPart::File(file) => {
                let mut engine_part = Part::bytes(file.payload.to_vec());
                if let Some(file_name) = &file.file_name {
                    engine_part = engine_part.file_name(file_name.clone());
                }
                if let Some(mime) = &file.mime_type {
                    engine_part = engine_part.mime_str(mime)?;
                }
                out.part(name.clone(), engine_part)
            }
        };
    }
    Ok(out)
}

fn blocking_form(form: &MultipartForm) -> Result<reqwest::blocking::multipart::Form> {
    use reqwest::blocking::multipart::{Form, Part};

    let mut out = Form::new();
    for (name, part) in form.parts() {
        out = match part {
            MultipartPart::Text(text) => out.text(name.clone(), text.clone()),
            MultipartPart::File(file) => {
                let mut engine_part = Part::bytes(file.payload.to_vec());
                if let Some(file_name) = &file.file_name {
                    engine_part = engine_part.file_name(file_name.clone());
                }
                if let Some(mime) = &file.mime_type {
                    engine_part = engine_part.mime_str(mime)?;
                }
                out.part(name.clone(), engine_part)
            }
        };
    }
    Ok(out)
}
