//! Azure management-plane domain.
//!
//! The Rust ecosystem has no supported Azure Resource Manager
//! management-plane SDK, so this module carries its own thin layer:
//!
//! - `auth` - credential chain (service principal env vars, then Azure CLI)
//! - `client` - typed reqwest client with paging and long-running-operation
//!   polling
//! - `clients` - per-resource-type client set, rebuilt every tool call
//! - `models` - serde projections of the ARM ML response shapes
//! - `helpers` - nil-safe accessors over the sparse ARM JSON

pub mod auth;
pub mod client;
pub mod clients;
mod error;
pub mod helpers;
pub mod models;

pub use client::ArmClient;
pub use clients::ClientSet;
pub use error::AzureError;
