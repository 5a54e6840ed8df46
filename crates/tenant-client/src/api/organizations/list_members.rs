//! `GET /api/{organisation_slug}/members`

use tenant_models::{Member, MemberRole};
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    encode_path, ApiRequest, AuthenticatedClient, ClientConfig, MaybeUnset, Method, Operation,
    RawResponse, Response, Result,
};

/// List the members of an organization
#[derive(Debug, Clone, PartialEq)]
pub struct ListMembers {
    /// Organization handle
    pub organisation_slug: String,
    /// Only members with this role
    pub role: MaybeUnset<MemberRole>,
    /// Page size
    pub limit: MaybeUnset<i64>,
}

impl Operation for ListMembers {
    type Output = Vec<Member>;

    fn build_request(&self) -> Result<ApiRequest> {
        let url = format!("/api/{}/members", encode_path(&self.organisation_slug)?);
        Ok(ApiRequest::new(Method::GET, url)
            .query("role", &self.role)
            .query("limit", &self.limit))
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<Vec<Member>>> {
        match response.status.as_u16() {
            200 => Ok(Some(parse_json(&response.content)?)),
            _ => unexpected_status(config, response),
        }
    }
}

/// List members, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    role: MaybeUnset<MemberRole>,
    limit: MaybeUnset<i64>,
) -> Result<Response<Vec<Member>>> {
    let operation = ListMembers {
        organisation_slug: organisation_slug.to_string(),
        role,
        limit,
    };
    operation::sync_detailed(client, &operation)
}

/// List members
pub fn sync(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    role: MaybeUnset<MemberRole>,
    limit: MaybeUnset<i64>,
) -> Result<Option<Vec<Member>>> {
    Ok(sync_detailed(client, organisation_slug, role, limit)?.parsed)
}

/// List members, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    role: MaybeUnset<MemberRole>,
    limit: MaybeUnset<i64>,
) -> Result<Response<Vec<Member>>> {
    let operation = ListMembers {
        organisation_slug: organisation_slug.to_string(),
        role,
        limit,
    };
    operation::asyncio_detailed(client, &operation).await
}

/// List members
pub async fn asyncio(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    role: MaybeUnset<MemberRole>,
    limit: MaybeUnset<i64>,
) -> Result<Option<Vec<Member>>> {
    Ok(asyncio_detailed(client, organisation_slug, role, limit)
        .await?
        .parsed)
}
