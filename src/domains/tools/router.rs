//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool definition knows how to create its own route; this module
//! only assembles them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{
    CreateWorkspaceTool, GetComputeTool, GetWorkspaceTool, ListComputeTool,
    ListPrivateEndpointsTool, ListQuotasTool, ListUsageTool, ListVmSizesTool,
    ListWorkspaceConnectionsTool, ListWorkspaceFeaturesTool, ListWorkspacesTool,
    StartComputeTool, StopComputeTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListWorkspacesTool::create_route(config.clone()))
        .with_route(GetWorkspaceTool::create_route(config.clone()))
        .with_route(CreateWorkspaceTool::create_route(config.clone()))
        .with_route(ListComputeTool::create_route(config.clone()))
        .with_route(GetComputeTool::create_route(config.clone()))
        .with_route(StartComputeTool::create_route(config.clone()))
        .with_route(StopComputeTool::create_route(config.clone()))
        .with_route(ListQuotasTool::create_route(config.clone()))
        .with_route(ListUsageTool::create_route(config.clone()))
        .with_route(ListVmSizesTool::create_route(config.clone()))
        .with_route(ListPrivateEndpointsTool::create_route(config.clone()))
        .with_route(ListWorkspaceConnectionsTool::create_route(config.clone()))
        .with_route(ListWorkspaceFeaturesTool::create_route(config))
}
