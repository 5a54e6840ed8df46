//! Organization API keys

pub mod create_api_key;
pub mod list_api_keys;
