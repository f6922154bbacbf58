//! STDIO transport.
//!
//! The default MCP mode: the client launches the binary and speaks
//! JSON-RPC over stdin/stdout. All logging goes to stderr so the
//! protocol stream stays clean.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve the Azure ML management server over stdin/stdout until the
    /// client closes the stream.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Azure ML management server ready on stdio");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("stdio stream closed, shutting down");
        Ok(())
    }
}
