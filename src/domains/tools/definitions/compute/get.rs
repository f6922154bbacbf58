//! Compute details tool.

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
use crate::domains::azure::{ClientSet, helpers, models::ComputeResource};

use super::super::common::{error_result, success_result};

/// Parameters for fetching one compute resource.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetComputeParams {
    /// Azure subscription ID.
    #[schemars(description = "Azure subscription ID")]
    pub subscription_id: String,

    /// Resource group name.
    #[schemars(description = "Resource group name")]
    pub resource_group_name: String,

    /// Workspace name.
    #[schemars(description = "Workspace name")]
    pub workspace_name: String,

    /// Compute resource name.
    #[schemars(description = "Compute resource name")]
    pub compute_name: String,
}

/// Compute details tool implementation.
#[derive(Debug, Clone)]
pub struct GetComputeTool;

impl GetComputeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_compute";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get details of a specific compute resource";

    /// Execute the tool logic.
    pub async fn execute(params: &GetComputeParams, config: &Config) -> CallToolResult {
        info!("Fetching compute resource {}", params.compute_name);

        let clients = match ClientSet::new(&config.azure, &params.subscription_id).await {
            Ok(clients) => clients,
            Err(e) => return error_result(&e.to_string()),
        };

        match clients
            .compute
            .get(
                &params.resource_group_name,
                &params.workspace_name,
                &params.compute_name,
            )
            .await
        {
            Ok(compute) => success_result(format_compute_details(&compute)),
            Err(e) => error_result(&format!("Failed to get compute resource: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetComputeParams>(),
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
                let params: GetComputeParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

/// Multi-line compute details block.
fn format_compute_details(compute: &ComputeResource) -> String {
    format!(
        "Compute Resource Details:\n\
         Name: {}\n\
         Type: {}\n\
         Location: {}\n\
         Description: {}\n\
         Resource ID: {}\n\
         Provisioning State: {}\n\
         Created On: {}\n\
         Modified On: {}\n\
         Is Attached: {}",
        helpers::opt_str(&compute.name),
        helpers::compute_type(&compute.properties),
        helpers::opt_str(&compute.location),
        helpers::compute_description(&compute.properties),
        helpers::opt_str(&compute.id),
        helpers::compute_provisioning_state(&compute.properties),
        helpers::compute_created_on(&compute.properties),
        helpers::compute_modified_on(&compute.properties),
        helpers::compute_is_attached(&compute.properties),
    )
}
