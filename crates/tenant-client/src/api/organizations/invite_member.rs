//! `POST /api/{organisation_slug}/members`

use tenant_models::{ErrorMessage, InviteMemberBody, Member};
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    encode_path, ApiRequest, AuthenticatedClient, ClientConfig, Method, Operation, RawResponse,
    Response, Result,
};

/// Invite someone into an organization
#[derive(Debug, Clone, PartialEq)]
pub struct InviteMember {
    /// Organization handle
    pub organisation_slug: String,
    /// Invitation
    pub body: InviteMemberBody,
}

/// Documented outcomes of [`InviteMember`]
#[derive(Debug, Clone, PartialEq)]
pub enum InviteMemberResponse {
    /// 201: pending membership
    Created(Member),
    /// 403: caller may not invite with this role
    Forbidden(ErrorMessage),
}

impl Operation for InviteMember {
    type Output = InviteMemberResponse;

    fn build_request(&self) -> Result<ApiRequest> {
        let url = format!("/api/{}/members", encode_path(&self.organisation_slug)?);
        ApiRequest::new(Method::POST, url).json_model(&self.body)
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<InviteMemberResponse>> {
        match response.status.as_u16() {
            201 => Ok(Some(InviteMemberResponse::Created(parse_json(&response.content)?))),
            403 => Ok(Some(InviteMemberResponse::Forbidden(parse_json(
                &response.content,
            )?))),
            _ => unexpected_status(config, response),
        }
    }
}

fn invite(organisation_slug: &str, body: InviteMemberBody) -> InviteMember {
    InviteMember {
        organisation_slug: organisation_slug.to_string(),
        body,
    }
}

/// Invite a member, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    body: InviteMemberBody,
) -> Result<Response<InviteMemberResponse>> {
    operation::sync_detailed(client, &invite(organisation_slug, body))
}

/// Invite a member
pub fn sync(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    body: InviteMemberBody,
) -> Result<Option<InviteMemberResponse>> {
    operation::sync(client, &invite(organisation_slug, body))
}

/// Invite a member, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    body: InviteMemberBody,
) -> Result<Response<InviteMemberResponse>> {
    operation::asyncio_detailed(client, &invite(organisation_slug, body)).await
}

/// Invite a member
pub async fn asyncio(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    body: InviteMemberBody,
) -> Result<Option<InviteMemberResponse>> {
    operation::asyncio(client, &invite(organisation_slug, body)).await
}
