//! Compute start tool.
//!
//! Issues the ARM start action and blocks until the long-running
//! operation completes.

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
use crate::domains::azure::ClientSet;

use super::super::common::{error_result, success_result};

/// Parameters for starting a compute resource.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StartComputeParams {
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

/// Compute start tool implementation.
#[derive(Debug, Clone)]
pub struct StartComputeTool;

impl StartComputeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "start_compute";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Start a compute resource";

    /// Execute the tool logic.
    pub async fn execute(params: &StartComputeParams, config: &Config) -> CallToolResult {
        info!("Starting compute resource {}", params.compute_name);

        let clients = match ClientSet::new(&config.azure, &params.subscription_id).await {
            Ok(clients) => clients,
            Err(e) => return error_result(&e.to_string()),
        };

        match clients
            .compute
            .begin_start(
                &params.resource_group_name,
                &params.workspace_name,
                &params.compute_name,
            )
            .await
        {
            Ok(()) => success_result(format!(
                "Successfully started compute resource '{}'",
                params.compute_name
            )),
            Err(e) => error_result(&format!("Failed to start compute: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<StartComputeParams>(),
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
                let params: StartComputeParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_parse() {
        let params: StartComputeParams = serde_json::from_str(
            r#"{
                "subscription_id": "s",
                "resource_group_name": "rg",
                "workspace_name": "ws",
                "compute_name": "gpu"
            }"#,
        )
        .unwrap();
        assert_eq!(params.compute_name, "gpu");
    }

    #[test]
    fn test_params_reject_missing_workspace() {
        let result: Result<StartComputeParams, _> = serde_json::from_str(
            r#"{"subscription_id": "s", "resource_group_name": "rg", "compute_name": "gpu"}"#,
        );
        assert!(result.is_err());
    }
}
