//! Workspace creation tool.
//!
//! Issues the ARM PUT and blocks on the long-running operation until the
//! workspace finishes provisioning.

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
use crate::domains::azure::models::{WorkspaceCreate, WorkspaceCreateProperties};
use crate::domains::azure::{ClientSet, helpers};

use super::super::common::{error_result, success_result};

/// Parameters for creating a workspace.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateWorkspaceParams {
    /// Azure subscription ID.
    #[schemars(description = "Azure subscription ID")]
    pub subscription_id: String,

    /// Resource group name.
    #[schemars(description = "Resource group name")]
    pub resource_group_name: String,

    /// Workspace name.
    #[schemars(description = "Workspace name")]
    pub workspace_name: String,

    /// Azure region location.
    #[schemars(description = "Azure region location (e.g., eastus, westus2)")]
    pub location: String,

    /// Workspace description.
    #[serde(default)]
    #[schemars(description = "Workspace description")]
    pub description: String,

    /// Friendly name for the workspace.
    #[serde(default)]
    #[schemars(description = "Friendly name for the workspace")]
    pub friendly_name: String,
}

/// Workspace creation tool implementation.
#[derive(Debug, Clone)]
pub struct CreateWorkspaceTool;

impl CreateWorkspaceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_workspace";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new Azure ML workspace";

    /// Execute the tool logic.
    pub async fn execute(params: &CreateWorkspaceParams, config: &Config) -> CallToolResult {
        info!(
            "Creating workspace {} in {} ({})",
            params.workspace_name, params.resource_group_name, params.location
        );

        let clients = match ClientSet::new(&config.azure, &params.subscription_id).await {
            Ok(clients) => clients,
            Err(e) => return error_result(&e.to_string()),
        };

        let workspace = WorkspaceCreate {
            location: params.location.clone(),
            properties: WorkspaceCreateProperties {
                description: params.description.clone(),
                friendly_name: params.friendly_name.clone(),
            },
        };

        match clients
            .workspaces
            .begin_create_or_update(
                &params.resource_group_name,
                &params.workspace_name,
                &workspace,
            )
            .await
        {
            Ok(created) => success_result(format!(
                "Successfully created workspace '{}' in resource group '{}' at location '{}'. Workspace ID: {}",
                params.workspace_name,
                params.resource_group_name,
                params.location,
                helpers::opt_str(&created.id),
            )),
            Err(e) => error_result(&format!("Failed to create workspace: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateWorkspaceParams>(),
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
                let params: CreateWorkspaceParams =
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
    fn test_optional_fields_default_empty() {
        let params: CreateWorkspaceParams = serde_json::from_str(
            r#"{
                "subscription_id": "s",
                "resource_group_name": "rg",
                "workspace_name": "ws",
                "location": "eastus"
            }"#,
        )
        .unwrap();
        assert_eq!(params.description, "");
        assert_eq!(params.friendly_name, "");
    }

    #[test]
    fn test_location_is_required() {
        let result: Result<CreateWorkspaceParams, _> = serde_json::from_str(
            r#"{"subscription_id": "s", "resource_group_name": "rg", "workspace_name": "ws"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_create_body_serializes_camel_case() {
        let body = WorkspaceCreate {
            location: "eastus".to_string(),
            properties: WorkspaceCreateProperties {
                description: "d".to_string(),
                friendly_name: "f".to_string(),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["location"], "eastus");
        assert_eq!(json["properties"]["friendlyName"], "f");
    }
}
