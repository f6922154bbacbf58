//! Azure ML Management MCP Server
//!
//! This crate exposes the Azure Machine Learning management plane
//! (workspaces, compute, quotas, usage, networking) as a set of tools
//! behind a Model Context Protocol (MCP) server.
//!
//! # Architecture
//!
//! - **core**: Infrastructure - configuration, error handling, the MCP
//!   server handler, and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **azure**: Credential chain, ARM client set, response models, and
//!     nil-safe field helpers
//!   - **tools**: The MCP tool definitions and router
//!
//! Every tool invocation is stateless: validate parameters, build a
//! freshly authenticated client set, perform one management API call (or
//! a paged list, or a polled long-running operation), and format the
//! result as text.
//!
//! # Example
//!
//! ```rust,no_run
//! use aml_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
