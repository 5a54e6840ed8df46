//! `GET /api/v1/dashboards`

use tenant_models::Dashboard;
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    ApiRequest, AuthenticatedClient, ClientConfig, MaybeUnset, Method, Operation, RawResponse,
    Response, Result,
};

/// List dashboards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDashboards {
    /// Only dashboards carrying every one of these tags
    pub tag: MaybeUnset<Vec<String>>,
}

impl Operation for ListDashboards {
    type Output = Vec<Dashboard>;

    fn build_request(&self) -> Result<ApiRequest> {
        Ok(ApiRequest::new(Method::GET, "/api/v1/dashboards").query("tag", &self.tag))
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<Vec<Dashboard>>> {
        match response.status.as_u16() {
            200 => Ok(Some(parse_json(&response.content)?)),
            _ => unexpected_status(config, response),
        }
    }
}

/// List dashboards, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    tag: MaybeUnset<Vec<String>>,
) -> Result<Response<Vec<Dashboard>>> {
    operation::sync_detailed(client, &ListDashboards { tag })
}

/// List dashboards
pub fn sync(
    client: &AuthenticatedClient,
    tag: MaybeUnset<Vec<String>>,
) -> Result<Option<Vec<Dashboard>>> {
    operation::sync(client, &ListDashboards { tag })
}

/// List dashboards, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    tag: MaybeUnset<Vec<String>>,
) -> Result<Response<Vec<Dashboard>>> {
    operation::asyncio_detailed(client, &ListDashboards { tag }).await
}

/// List dashboards
pub async fn asyncio(
    client: &AuthenticatedClient,
    tag: MaybeUnset<Vec<String>>,
) -> Result<Option<Vec<Dashboard>>> {
    operation::asyncio(client, &ListDashboards { tag }).await
}
