//! VM size catalog tool.

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
use crate::domains::azure::{ClientSet, models::VirtualMachineSize};

use super::super::common::{error_result, format_listing, success_result};

/// Parameters for listing VM sizes.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListVmSizesParams {
    /// Azure subscription ID.
    #[schemars(description = "Azure subscription ID")]
    pub subscription_id: String,

    /// Azure region location.
    #[schemars(description = "Azure region location (e.g., eastus, westus2)")]
    pub location: String,
}

/// VM size listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListVmSizesTool;

impl ListVmSizesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_vm_sizes";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List available virtual machine sizes for Azure ML compute";

    /// Execute the tool logic.
    pub async fn execute(params: &ListVmSizesParams, config: &Config) -> CallToolResult {
        info!("Listing VM sizes for location {}", params.location);

        let clients = match ClientSet::new(&config.azure, &params.subscription_id).await {
            Ok(clients) => clients,
            Err(e) => return error_result(&e.to_string()),
        };

        match clients.vm_sizes.list(&params.location).await {
            Ok(sizes) => success_result(format_vm_size_list(&sizes, &params.location)),
            Err(e) => error_result(&format!("Failed to get VM sizes: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListVmSizesParams>(),
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
                let params: ListVmSizesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

/// One line per VM size with a name.
fn format_vm_size_list(sizes: &[VirtualMachineSize], location: &str) -> String {
    let lines: Vec<String> = sizes
        .iter()
        .filter_map(|size| {
            let name = size.name.as_ref()?;
            Some(format!(
                "Name: {}, vCPUs: {}, Memory: {:.1} GB",
                name,
                size.v_cpus.unwrap_or(0),
                size.memory_gb.unwrap_or(0.0),
            ))
        })
        .collect();

    format_listing(
        format!("Found {} VM sizes for location '{}':", lines.len(), location),
        lines,
        &format!("No VM sizes found for location '{}'.", location),
    )
}
