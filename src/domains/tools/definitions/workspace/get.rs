//! Workspace details tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::core::config::Config;
use crate::domains::azure::{ClientSet, helpers, models::Workspace};

use super::super::common::{error_result, success_result};

/// Parameters for fetching one workspace.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetWorkspaceParams {
    /// Azure subscription ID.
    #[schemars(description = "Azure subscription ID")]
    pub subscription_id: String,

    /// Resource group name.
    #[schemars(description = "Resource group name")]
    pub resource_group_name: String,

    /// Workspace name.
    #[schemars(description = "Workspace name")]
    pub workspace_name: String,
}

/// Workspace details tool implementation.
#[derive(Debug, Clone)]
pub struct GetWorkspaceTool;

impl GetWorkspaceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_workspace";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get details of a specific Azure ML workspace";

    /// Execute the tool logic.
    pub async fn execute(params: &GetWorkspaceParams, config: &Config) -> CallToolResult {
        info!("Fetching workspace {}", params.workspace_name);

        let clients = match ClientSet::new(&config.azure, &params.subscription_id).await {
            Ok(clients) => clients,
            Err(e) => return error_result(&e.to_string()),
        };

        match clients
            .workspaces
            .get(&params.resource_group_name, &params.workspace_name)
            .await
        {
            Ok(workspace) => success_result(format_workspace_details(
                &workspace,
                &params.resource_group_name,
            )),
            Err(e) => error_result(&format!("Failed to get workspace: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetWorkspaceParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the router.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: GetWorkspaceParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

/// Multi-line workspace details block.
fn format_workspace_details(workspace: &Workspace, resource_group: &str) -> String {
    format!(
        "Workspace Details:\n\
         Name: {}\n\
         Location: {}\n\
         Resource Group: {}\n\
         ID: {}\n\
         Type: {}\n\
         SKU: {}\n\
         Description: {}\n\
         Friendly Name: {}\n\
         Discovery URL: {}\n\
         ML Flow Tracking URI: {}",
        helpers::opt_str(&workspace.name),
        helpers::opt_str(&workspace.location),
        resource_group,
        helpers::opt_str(&workspace.id),
        helpers::opt_str(&workspace.resource_type),
        helpers::sku_name(&workspace.sku),
        helpers::workspace_property(&workspace.properties, |p| &p.description),
        helpers::workspace_property(&workspace.properties, |p| &p.friendly_name),
        helpers::workspace_property(&workspace.properties, |p| &p.discovery_url),
        helpers::workspace_property(&workspace.properties, |p| &p.ml_flow_tracking_uri),
    )
}
