//! Billing records

use crate::enums::{InvoiceStatus, SubscriptionPlan};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tenant_runtime::{AdditionalProperties, MaybeUnset};

/// Body of `create_checkout_session`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutBody {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Plan to subscribe to
    pub plan: SubscriptionPlan,

    /// Redirect target after payment
    pub success_url: String,

    /// Redirect target on abandon
    pub cancel_url: String,

    /// Seat count for per-seat plans
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub seats: MaybeUnset<i64>,
}

impl CreateCheckoutBody {
    /// Create a checkout body
    pub fn new(
        plan: SubscriptionPlan,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        Self {
            additional_properties: AdditionalProperties::new(),
            plan,
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
            seats: MaybeUnset::Unset,
        }
    }
}

/// Hosted payment page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Session ID
    pub id: String,

    /// Page to redirect the user to
    pub url: String,

    /// Time the page stops accepting payment
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub expires_at: MaybeUnset<DateTime<Utc>>,
}

/// A billing-period invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Invoice ID
    pub id: String,

    /// Invoice number, `null` while in draft
    #[serde(deserialize_with = "tenant_runtime::model::nullable")]
    pub number: Option<String>,

    /// Settlement state
    pub status: InvoiceStatus,

    /// Amount due in the currency's minor unit
    pub amount_due: i64,

    /// ISO 4217 code
    pub currency: String,

    /// First day of the billed period
    pub period_start: NaiveDate,

    /// Last day of the billed period
    pub period_end: NaiveDate,

    /// Hosted invoice page
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub hosted_invoice_url: MaybeUnset<Option<String>>,
}

impl_model!(CreateCheckoutBody, CheckoutSession, Invoice);
