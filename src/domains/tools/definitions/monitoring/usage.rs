//! Regional usage listing tool.

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
use crate::domains::azure::{ClientSet, helpers, models::Usage};

use super::super::common::{error_result, format_listing, success_result};

/// Parameters for listing usage.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListUsageParams {
    /// Azure subscription ID.
    #[schemars(description = "Azure subscription ID")]
    pub subscription_id: String,

    /// Azure region location.
    #[schemars(description = "Azure region location (e.g., eastus, westus2)")]
    pub location: String,
}

/// Usage listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListUsageTool;

impl ListUsageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_usage";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List current usage for Azure ML resources in a location";

    /// Execute the tool logic.
    pub async fn execute(params: &ListUsageParams, config: &Config) -> CallToolResult {
        info!("Listing usage for location {}", params.location);

        let clients = match ClientSet::new(&config.azure, &params.subscription_id).await {
            Ok(clients) => clients,
            Err(e) => return error_result(&e.to_string()),
        };

        match clients.usages.list(&params.location).await {
            Ok(usages) => success_result(format_usage_list(&usages, &params.location)),
            Err(e) => error_result(&format!("Failed to get usage: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListUsageParams>(),
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
                let params: ListUsageParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

/// One line per usage entry; entries need a name, a current value, and a limit.
fn format_usage_list(usages: &[Usage], location: &str) -> String {
    let lines: Vec<String> = usages
        .iter()
        .filter_map(|usage| {
            let name = usage.name.as_ref()?;
            let current = usage.current_value?;
            let limit = usage.limit?;
            Some(format!(
                "Resource: {}, Current: {}, Limit: {}, Unit: {}",
                helpers::opt_str(&name.value),
                current,
                limit,
                helpers::opt_str(&usage.unit),
            ))
        })
        .collect();

    format_listing(
        format!(
            "Found {} usage entries for location '{}':",
            lines.len(),
            location
        ),
        lines,
        &format!("No usage data found for location '{}'.", location),
    )
}
