//! Compute listing tool.

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

use super::super::common::{error_result, format_listing, success_result};

/// Parameters for listing compute resources.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListComputeParams {
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

/// Compute listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListComputeTool;

impl ListComputeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_compute";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List all compute resources in an Azure ML workspace";

    /// Execute the tool logic.
    pub async fn execute(params: &ListComputeParams, config: &Config) -> CallToolResult {
        info!(
            "Listing compute resources in workspace {}",
            params.workspace_name
        );

        let clients = match ClientSet::new(&config.azure, &params.subscription_id).await {
            Ok(clients) => clients,
            Err(e) => return error_result(&e.to_string()),
        };

        match clients
            .compute
            .list(&params.resource_group_name, &params.workspace_name)
            .await
        {
            Ok(computes) => success_result(format_compute_list(&computes)),
            Err(e) => error_result(&format!("Failed to get compute resources: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListComputeParams>(),
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
                let params: ListComputeParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

/// One line per compute; entries need both a name and properties.
fn format_compute_list(computes: &[ComputeResource]) -> String {
    let lines: Vec<String> = computes
        .iter()
        .filter_map(|compute| {
            let name = compute.name.as_deref()?;
            compute.properties.as_ref()?;
            Some(format!(
                "Name: {}, Type: {}, Location: {}, State: {}",
                name,
                helpers::compute_type(&compute.properties),
                helpers::opt_str(&compute.location),
                helpers::compute_provisioning_state(&compute.properties),
            ))
        })
        .collect();

    format_listing(
        format!("Found {} compute resources:", lines.len()),
        lines,
        "No compute resources found in the workspace.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::azure::models::ComputeProperties;

    fn compute(name: Option<&str>, with_props: bool) -> ComputeResource {
        ComputeResource {
            id: None,
            name: name.map(|n| n.to_string()),
            location: Some("eastus".to_string()),
            properties: with_props.then(|| ComputeProperties {
                compute_type: Some("AmlCompute".to_string()),
                description: None,
                resource_id: None,
                provisioning_state: Some("Succeeded".to_string()),
                created_on: None,
                modified_on: None,
                is_attached_compute: None,
            }),
        }
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(
            format_compute_list(&[]),
            "No compute resources found in the workspace."
        );
    }

    #[test]
    fn test_format_requires_name_and_properties() {
        let computes = vec![
            compute(Some("cpu-cluster"), true),
            compute(None, true),
            compute(Some("orphan"), false),
        ];
        let out = format_compute_list(&computes);
        assert_eq!(
            out,
            "Found 1 compute resources:\nName: cpu-cluster, Type: AmlCompute, Location: eastus, State: Succeeded"
        );
    }
}
