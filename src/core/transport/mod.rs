//! Transport layer for the MCP server.
//!
//! Two transports are available, selected by feature flag and runtime
//! configuration:
//! - **STDIO**: standard input/output (default for MCP) - feature: `stdio`
//! - **TCP**: MCP served over raw TCP sockets - feature: `tcp`
//!
//! Each transport handles the connection lifecycle and delegates message
//! processing to the MCP server handler through rmcp.

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;
