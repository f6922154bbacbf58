//! Private endpoint connection listing tool.

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
use crate::domains::azure::{ClientSet, helpers, models::PrivateEndpointConnection};

use super::super::common::{error_result, format_listing, success_result};

/// Parameters for listing private endpoint connections.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListPrivateEndpointsParams {
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

/// Private endpoint listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListPrivateEndpointsTool;

impl ListPrivateEndpointsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_private_endpoints";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List private endpoint connections for a workspace";

    /// Execute the tool logic.
    pub async fn execute(params: &ListPrivateEndpointsParams, config: &Config) -> CallToolResult {
        info!(
            "Listing private endpoint connections for workspace {}",
            params.workspace_name
        );

        let clients = match ClientSet::new(&config.azure, &params.subscription_id).await {
            Ok(clients) => clients,
            Err(e) => return error_result(&e.to_string()),
        };

        match clients
            .private_endpoints
            .list(&params.resource_group_name, &params.workspace_name)
            .await
        {
            Ok(connections) => success_result(format_endpoint_list(&connections)),
            Err(e) => error_result(&format!("Failed to get private endpoints: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListPrivateEndpointsParams>(),
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
                let params: ListPrivateEndpointsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

/// One line per named connection with its link approval status.
fn format_endpoint_list(connections: &[PrivateEndpointConnection]) -> String {
    let lines: Vec<String> = connections
        .iter()
        .filter_map(|conn| {
            let name = conn.name.as_ref()?;
            let status = conn
                .properties
                .as_ref()
                .and_then(|p| p.private_link_service_connection_state.as_ref())
                .and_then(|s| s.status.as_deref())
                .unwrap_or("Unknown");
            Some(format!(
                "Name: {}, Status: {}, ID: {}",
                name,
                status,
                helpers::opt_str(&conn.id),
            ))
        })
        .collect();

    format_listing(
        format!("Found {} private endpoint connections:", lines.len()),
        lines,
        "No private endpoint connections found.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::azure::models::{
        PrivateEndpointConnectionProperties, PrivateLinkServiceConnectionState,
    };

    #[test]
    fn test_params_require_workspace() {
        let result: Result<ListPrivateEndpointsParams, _> =
            serde_json::from_str(r#"{"subscription_id": "s", "resource_group_name": "rg"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(
            format_endpoint_list(&[]),
            "No private endpoint connections found."
        );
    }

    #[test]
    fn test_format_defaults_unknown_status() {
        let connections = vec![
            PrivateEndpointConnection {
                id: Some("/subscriptions/s/pe/approved".to_string()),
                name: Some("approved".to_string()),
                properties: Some(PrivateEndpointConnectionProperties {
                    private_link_service_connection_state: Some(
                        PrivateLinkServiceConnectionState {
                            status: Some("Approved".to_string()),
                            description: None,
                            actions_required: None,
                        },
                    ),
                    provisioning_state: Some("Succeeded".to_string()),
                }),
            },
            PrivateEndpointConnection {
                id: None,
                name: Some("bare".to_string()),
                properties: None,
            },
        ];

        let out = format_endpoint_list(&connections);
        assert_eq!(
            out,
            "Found 2 private endpoint connections:\n\
             Name: approved, Status: Approved, ID: /subscriptions/s/pe/approved\n\
             Name: bare, Status: Unknown, ID: N/A"
        );
    }
}
