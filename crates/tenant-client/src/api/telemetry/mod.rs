//! Trace ingestion and dashboards

pub mod get_dashboard;
pub mod ingest_traces;
pub mod list_dashboards;
