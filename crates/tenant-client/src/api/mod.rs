//! One module per endpoint, grouped by tag

pub mod ai;
pub mod api_keys;
pub mod audio;
pub mod auth;
pub mod credentials;
pub mod health;
pub mod organizations;
pub mod payments;
pub mod telemetry;
pub mod users;
