//! Organizations and their members

pub mod create_organization;
pub mod invite_member;
pub mod list_members;
pub mod remove_member;
