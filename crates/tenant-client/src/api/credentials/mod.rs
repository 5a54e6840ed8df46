//! Provider credentials stored per organization

pub mod create_credential;
pub mod delete_credential;
pub mod list_credentials;
