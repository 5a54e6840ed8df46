//! Checkout and invoices

pub mod create_checkout_session;
pub mod list_invoices;
