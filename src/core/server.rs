//! MCP Server implementation and lifecycle management.
//!
//! The server handler implements the MCP protocol by delegating tool
//! calls to the dynamically built [`ToolRouter`].
//!
//! Tools live in `domains/tools/definitions/`, one file per tool. Each
//! tool defines its parameters struct, an `execute()` method, and a
//! `create_route()` used by `domains/tools/router.rs` to assemble the
//! router. Adding a tool does not require modifying this file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp and routes tool calls
/// to the Azure ML tool definitions. The server itself is stateless; each
/// tool invocation authenticates and builds its own client set.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        Self {
            tool_router: build_tool_router::<Self>(config.clone()),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration (for tool access).
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Azure Machine Learning management server. Provides tools to list, \
                 inspect, and manage Azure ML workspaces, compute resources, quotas, \
                 usage, VM sizes, and workspace networking."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
