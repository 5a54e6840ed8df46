//! The calling user

pub mod get_current_user;
