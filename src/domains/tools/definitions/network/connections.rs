//! Workspace connection listing tool.

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
use crate::domains::azure::{ClientSet, helpers, models::WorkspaceConnection};

use super::super::common::{error_result, format_listing, success_result};

/// Parameters for listing workspace connections.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListWorkspaceConnectionsParams {
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

/// Workspace connection listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListWorkspaceConnectionsTool;

impl ListWorkspaceConnectionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_workspace_connections";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List connections for a workspace";

    /// Execute the tool logic.
    pub async fn execute(
        params: &ListWorkspaceConnectionsParams,
        config: &Config,
    ) -> CallToolResult {
        info!(
            "Listing connections for workspace {}",
            params.workspace_name
        );

        let clients = match ClientSet::new(&config.azure, &params.subscription_id).await {
            Ok(clients) => clients,
            Err(e) => return error_result(&e.to_string()),
        };

        match clients
            .connections
            .list(&params.resource_group_name, &params.workspace_name)
            .await
        {
            Ok(connections) => success_result(format_connection_list(&connections)),
            Err(e) => error_result(&format!("Failed to get workspace connections: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListWorkspaceConnectionsParams>(),
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
                let params: ListWorkspaceConnectionsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

/// One line per named connection. Category and auth type fall back to
/// "Unknown" when the properties block is missing entirely.
fn format_connection_list(connections: &[WorkspaceConnection]) -> String {
    let lines: Vec<String> = connections
        .iter()
        .filter_map(|conn| {
            let name = conn.name.as_ref()?;
            let (category, auth_type) = match &conn.properties {
                Some(props) => (
                    helpers::opt_str(&props.category),
                    helpers::opt_str(&props.auth_type),
                ),
                None => ("Unknown", "Unknown"),
            };
            Some(format!(
                "Name: {}, Category: {}, Auth Type: {}, ID: {}",
                name,
                category,
                auth_type,
                helpers::opt_str(&conn.id),
            ))
        })
        .collect();

    format_listing(
        format!("Found {} workspace connections:", lines.len()),
        lines,
        "No workspace connections found.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::azure::models::WorkspaceConnectionProperties;

    #[test]
    fn test_params_require_workspace() {
        let result: Result<ListWorkspaceConnectionsParams, _> =
            serde_json::from_str(r#"{"subscription_id": "s", "resource_group_name": "rg"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_connection_list(&[]), "No workspace connections found.");
    }

    #[test]
    fn test_format_property_fallbacks() {
        let connections = vec![
            WorkspaceConnection {
                id: Some("/subscriptions/s/conn/git".to_string()),
                name: Some("git".to_string()),
                properties: Some(WorkspaceConnectionProperties {
                    auth_type: Some("PAT".to_string()),
                    category: Some("Git".to_string()),
                    target: Some("https://github.com/org/repo".to_string()),
                }),
            },
            WorkspaceConnection {
                id: None,
                name: Some("partial".to_string()),
                properties: Some(WorkspaceConnectionProperties {
                    auth_type: None,
                    category: Some("ContainerRegistry".to_string()),
                    target: None,
                }),
            },
            WorkspaceConnection {
                id: None,
                name: Some("bare".to_string()),
                properties: None,
            },
        ];

        let out = format_connection_list(&connections);
        assert_eq!(
            out,
            "Found 3 workspace connections:\n\
             Name: git, Category: Git, Auth Type: PAT, ID: /subscriptions/s/conn/git\n\
             Name: partial, Category: ContainerRegistry, Auth Type: N/A, ID: N/A\n\
             Name: bare, Category: Unknown, Auth Type: Unknown, ID: N/A"
        );
    }
}
