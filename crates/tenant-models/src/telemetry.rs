//! Trace ingestion and dashboard records

use crate::enums::WidgetKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tenant_runtime::{AdditionalProperties, MaybeUnset};

/// Acknowledgement of a trace batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestAccepted {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Spans queued for storage
    pub accepted_spans: i64,

    /// Spans dropped during validation
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub rejected_spans: MaybeUnset<i64>,
}

/// One panel of a dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Widget ID
    pub id: String,

    /// Visualization
    #[serde(rename = "type")]
    pub kind: WidgetKind,

    /// Panel title
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub title: MaybeUnset<String>,

    /// Query feeding the panel
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub query: MaybeUnset<String>,
}

/// A saved telemetry dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Unknown wire keys
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Dashboard ID
    pub id: String,

    /// Title
    pub title: String,

    /// Free-form tags used for filtering
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub tags: MaybeUnset<Vec<String>>,

    /// Panels, in layout order
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub widgets: MaybeUnset<Vec<Widget>>,

    /// Last edit time
    #[serde(default, skip_serializing_if = "MaybeUnset::is_unset")]
    pub updated_at: MaybeUnset<DateTime<Utc>>,
}

impl_model!(IngestAccepted, Widget, Dashboard);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tenant_runtime::Model;

    #[test]
    fn test_dashboard_nested_widgets() {
        let wire = json!({
            "id": "d1",
            "title": "Latency",
            "tags": ["prod", "api"],
            "widgets": [
                {"id": "w1", "type": "timeseries", "query": "p99(duration)", "unit": "ms"}
            ],
            "updatedAt": "2024-06-01T10:15:30Z"
        });
        let dashboard = Dashboard::from_dict(wire.as_object().unwrap()).unwrap();
        let widgets = dashboard.widgets.as_option().unwrap();

        assert_eq!(widgets[0].kind, WidgetKind::Timeseries);
        assert_eq!(widgets[0].get("unit"), Some(&json!("ms")));
        assert!(dashboard.additional_keys().is_empty());
        assert_eq!(dashboard.to_dict().unwrap(), *wire.as_object().unwrap());
    }

    #[test]
    fn test_ingest_accepted() {
        let wire = json!({"acceptedSpans": 12});
        let accepted = IngestAccepted::from_dict(wire.as_object().unwrap()).unwrap();
        assert_eq!(accepted.accepted_spans, 12);
        assert!(accepted.rejected_spans.is_unset());
    }
}
