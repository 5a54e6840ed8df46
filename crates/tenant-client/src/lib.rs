//! Tenant API client
//!
//! Typed bindings for every endpoint of the Tenant API. Each endpoint lives in
//! `api::<tag>::<operation>` and exposes four entry points:
//!
//! - `sync_detailed`: blocking, returns the full [`Response`] envelope
//! - `sync`: blocking, returns only the parsed body
//! - `asyncio_detailed`: async, returns the full envelope
//! - `asyncio`: async, returns only the parsed body
//!
//! # Example
//!
//! ```rust,no_run
//! use tenant_client::api::ai::list_chats;
//! use tenant_client::{AuthenticatedClient, MaybeUnset};
//!
//! # async fn example() -> tenant_client::Result<()> {
//! let client = AuthenticatedClient::new("https://api.example.com", "token");
//!
//! let response = list_chats::asyncio_detailed(&client, MaybeUnset::Unset).await?;
//! if let Some(chats) = response.parsed {
//!     for chat in chats {
//!         println!("{}", chat.id);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;

pub use tenant_models as models;
pub use tenant_runtime as runtime;

pub use tenant_runtime::{
    AuthenticatedClient, BinaryPart, Client, ClientConfig, Error, MaybeUnset, Response, Result,
    TlsVerify, UnexpectedStatus,
};
