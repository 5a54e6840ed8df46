//! Liveness

pub mod get_health;
