//! Workspace listing tool.
//!
//! Lists every Azure ML workspace in a subscription, draining the paged
//! ARM collection before formatting.

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

use super::super::common::{error_result, format_listing, success_result};

/// Parameters for listing workspaces.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListWorkspacesParams {
    /// Azure subscription ID.
    #[schemars(description = "Azure subscription ID")]
    pub subscription_id: String,
}

/// Workspace listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListWorkspacesTool;

impl ListWorkspacesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_workspaces_by_subscription";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all Azure ML workspaces in a subscription";

    /// Execute the tool logic.
    pub async fn execute(params: &ListWorkspacesParams, config: &Config) -> CallToolResult {
        info!(
            "Listing workspaces in subscription {}",
            params.subscription_id
        );

        let clients = match ClientSet::new(&config.azure, &params.subscription_id).await {
            Ok(clients) => clients,
            Err(e) => return error_result(&e.to_string()),
        };

        match clients.workspaces.list_by_subscription().await {
            Ok(workspaces) => success_result(format_workspace_list(&workspaces)),
            Err(e) => error_result(&format!("Failed to get workspaces: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListWorkspacesParams>(),
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
                let params: ListWorkspacesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

/// One line per workspace; entries without a name are skipped.
fn format_workspace_list(workspaces: &[Workspace]) -> String {
    let lines: Vec<String> = workspaces
        .iter()
        .filter_map(|ws| {
            let name = ws.name.as_deref()?;
            Some(format!(
                "Name: {}, Location: {}, Resource Group: {}",
                name,
                helpers::opt_str(&ws.location),
                helpers::extract_resource_group(helpers::opt_str(&ws.id)),
            ))
        })
        .collect();

    format_listing(
        format!("Found {} Azure ML workspaces:", lines.len()),
        lines,
        "No Azure ML workspaces found in the subscription.",
    )
}
