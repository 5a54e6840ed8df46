//! Token issuance

pub mod create_token;
