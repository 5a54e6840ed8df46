//! `GET /api/{organisation_slug}/billing/invoices`

use tenant_models::{Invoice, InvoiceStatus};
use tenant_runtime::operation::{self, parse_json, unexpected_status};
use tenant_runtime::{
    encode_path, ApiRequest, AuthenticatedClient, ClientConfig, MaybeUnset, Method, Operation,
    RawResponse, Response, Result,
};

/// List an organization's invoices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListInvoices {
    /// Organization handle
    pub organisation_slug: String,
    /// Only invoices in this state
    pub status: MaybeUnset<InvoiceStatus>,
    /// Include voided invoices
    pub include_void: MaybeUnset<bool>,
}

impl Operation for ListInvoices {
    type Output = Vec<Invoice>;

    fn build_request(&self) -> Result<ApiRequest> {
        let url = format!(
            "/api/{}/billing/invoices",
            encode_path(&self.organisation_slug)?
        );
        Ok(ApiRequest::new(Method::GET, url)
            .query("status", &self.status)
            .query("includeVoid", &self.include_void))
    }

    fn parse_response(
        config: &ClientConfig,
        response: &RawResponse,
    ) -> Result<Option<Vec<Invoice>>> {
        match response.status.as_u16() {
            200 => Ok(Some(parse_json(&response.content)?)),
            _ => unexpected_status(config, response),
        }
    }
}

/// List invoices, returning the full envelope
pub fn sync_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    status: MaybeUnset<InvoiceStatus>,
    include_void: MaybeUnset<bool>,
) -> Result<Response<Vec<Invoice>>> {
    let operation = ListInvoices {
        organisation_slug: organisation_slug.to_string(),
        status,
        include_void,
    };
    operation::sync_detailed(client, &operation)
}

/// List invoices
pub fn sync(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    status: MaybeUnset<InvoiceStatus>,
    include_void: MaybeUnset<bool>,
) -> Result<Option<Vec<Invoice>>> {
    Ok(sync_detailed(client, organisation_slug, status, include_void)?.parsed)
}

/// List invoices, returning the full envelope
pub async fn asyncio_detailed(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    status: MaybeUnset<InvoiceStatus>,
    include_void: MaybeUnset<bool>,
) -> Result<Response<Vec<Invoice>>> {
    let operation = ListInvoices {
        organisation_slug: organisation_slug.to_string(),
        status,
        include_void,
    };
    operation::asyncio_detailed(client, &operation).await
}

/// List invoices
pub async fn asyncio(
    client: &AuthenticatedClient,
    organisation_slug: &str,
    status: MaybeUnset<InvoiceStatus>,
    include_void: MaybeUnset<bool>,
) -> Result<Option<Vec<Invoice>>> {
    Ok(
        asyncio_detailed(client, organisation_slug, status, include_void)
            .await?
            .parsed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_enum_and_bool() {
        let operation = ListInvoices {
            organisation_slug: "acme".to_string(),
            status: MaybeUnset::Set(InvoiceStatus::Open),
            include_void: MaybeUnset::Set(false),
        };
        let request = operation.build_request().unwrap();
        assert_eq!(
            request.params,
            vec![
                ("status".to_string(), "open".to_string()),
                ("includeVoid".to_string(), "false".to_string()),
            ]
        );
    }
}
