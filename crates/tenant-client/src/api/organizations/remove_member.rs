//! `DELETE /api/{organisation_slug}/members/{user_id}`

use tenant_models::ErrorMessage;
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    encode_path, ApiRequest, AuthenticatedClient, ClientConfig, Method, Operation, RawResponse,
    Response, Result,
};

/// Remove a user from an organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveMember {
    /// Organization handle
    pub organisation_slug: String,
    /// Member's user ID
    pub user_id: String,
}

/// Documented outcomes of [`RemoveMember`] that carry a body
///
/// A 204 leaves `parsed` empty.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveMemberResponse {
    /// 404: no such member
    NotFound(ErrorMessage),
}

impl Operation for RemoveMember {
    type Output = RemoveMemberResponse;

    fn build_request(&self) -> Result<ApiRequest> {
        let url = format!(
            "/api/{}/members/{}",
            encode_path(&self.organisation_slug)?,
            encode_path(&self.user_id)?
        );
        Ok(ApiRequest::new(Method::DELETE, url))
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<RemoveMemberResponse>> {
        match response.status.as_u16() {
            204 => Ok(None),
            404 => Ok(Some(RemoveMemberResponse::NotFound(parse_json(
                &response.content,
            )?))),
            _ => unexpected_status(config, response),
        }
    }
}

fn remove(organisation_slug: &str, user_id: &str) -> RemoveMember {
    RemoveMember {
        organisation_slug: organisation_slug.to_string(),
        user_id: user_id.to_string(),
    }
}

/// Remove a member, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    user_id: &str,
) -> Result<Response<RemoveMemberResponse>> {
    operation::sync_detailed(client, &remove(organisation_slug, user_id))
}

/// Remove a member
pub fn sync(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    user_id: &str,
) -> Result<Option<RemoveMemberResponse>> {
    operation::sync(client, &remove(organisation_slug, user_id))
}

/// Remove a member, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    user_id: &str,
) -> Result<Response<RemoveMemberResponse>> {
    operation::asyncio_detailed(client, &remove(organisation_slug, user_id)).await
}

/// Remove a member
pub async fn asyncio(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    user_id: &str,
) -> Result<Option<RemoveMemberResponse>> {
    operation::asyncio(client, &remove(organisation_slug, user_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenant_runtime::StatusCode;

    #[test]
    fn test_build_request_encodes_both_segments() {
        let request = remove("acme corp", "user#7").build_request().unwrap();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.url, "/api/acme%20corp/members/user%237");
    }

    #[test]
    fn test_parse_no_content() {
        let config = ClientConfig::new("http://localhost").with_raise_on_unexpected_status(true);
        let parsed = RemoveMember::parse_response(
            &config,
            &RawResponse::new(StatusCode::NO_CONTENT, Vec::new()),
        )
        .unwrap();
        assert!(parsed.is_none());
    }
}
