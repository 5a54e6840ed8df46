//! `GET /api/v1/dashboards/{dashboard_id}`

use tenant_models::{Dashboard, ErrorMessage};
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    encode_path, ApiRequest, AuthenticatedClient, ClientConfig, Method, Operation, RawResponse,
    Response, Result,
};

/// Fetch one dashboard with its widgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDashboard {
    /// Dashboard ID
    pub dashboard_id: String,
}

/// Documented outcomes of [`GetDashboard`]
#[derive(Debug, Clone, PartialEq)]
pub enum GetDashboardResponse {
    /// 200
    Ok(Dashboard),
    /// 404
    NotFound(ErrorMessage),
}

impl Operation for GetDashboard {
    type Output = GetDashboardResponse;

    fn build_request(&self) -> Result<ApiRequest> {
        let url = format!("/api/v1/dashboards/{}", encode_path(&self.dashboard_id)?);
        Ok(ApiRequest::new(Method::GET, url))
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<GetDashboardResponse>> {
        match response.status.as_u16() {
            200 => Ok(Some(GetDashboardResponse::Ok(parse_json(&response.content)?))),
            404 => Ok(Some(GetDashboardResponse::NotFound(parse_json(
                &response.content,
            )?))),
            _ => unexpected_status(config, response),
        }
    }
}

fn get(dashboard_id: &str) -> GetDashboard {
    GetDashboard {
        dashboard_id: dashboard_id.to_string(),
    }
}

/// Fetch a dashboard, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    dashboard_id: &str,
) -> Result<Response<GetDashboardResponse>> {
    operation::sync_detailed(client, &get(dashboard_id))
}

/// Fetch a dashboard
pub fn sync(
    client: &AuthenticatedClient,
    dashboard_id: &str,
) -> Result<Option<GetDashboardResponse>> {
    operation::sync(client, &get(dashboard_id))
}

/// Fetch a dashboard, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    dashboard_id: &str,
) -> Result<Response<GetDashboardResponse>> {
    operation::asyncio_detailed(client, &get(dashboard_id)).await
}

/// Fetch a dashboard
pub async fn asyncio(
    client: &AuthenticatedClient,
    dashboard_id: &str,
) -> Result<Option<GetDashboardResponse>> {
    operation::asyncio(client, &get(dashboard_id)).await
}
