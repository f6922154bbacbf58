//! Workspace feature flag listing tool.

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
use crate::domains::azure::{ClientSet, helpers, models::AmlUserFeature};

use super::super::common::{error_result, format_listing, success_result};

/// Parameters for listing workspace features.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListWorkspaceFeaturesParams {
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

/// Workspace feature listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListWorkspaceFeaturesTool;

impl ListWorkspaceFeaturesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_workspace_features";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List available features for a workspace";

    /// Execute the tool logic.
    pub async fn execute(
        params: &ListWorkspaceFeaturesParams,
        config: &Config,
    ) -> CallToolResult {
        info!("Listing features for workspace {}", params.workspace_name);

        let clients = match ClientSet::new(&config.azure, &params.subscription_id).await {
            Ok(clients) => clients,
            Err(e) => return error_result(&e.to_string()),
        };

        match clients
            .features
            .list(&params.resource_group_name, &params.workspace_name)
            .await
        {
            Ok(features) => success_result(format_feature_list(&features)),
            Err(e) => error_result(&format!("Failed to get workspace features: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListWorkspaceFeaturesParams>(),
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
                let params: ListWorkspaceFeaturesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

/// One line per feature with an ID.
fn format_feature_list(features: &[AmlUserFeature]) -> String {
    let lines: Vec<String> = features
        .iter()
        .filter_map(|feature| {
            let id = feature.id.as_ref()?;
            Some(format!(
                "ID: {}, Name: {}, Description: {}",
                id,
                helpers::opt_str(&feature.display_name),
                helpers::opt_str(&feature.description),
            ))
        })
        .collect();

    format_listing(
        format!("Found {} workspace features:", lines.len()),
        lines,
        "No workspace features found.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_parse() {
        let params: ListWorkspaceFeaturesParams = serde_json::from_str(
            r#"{"subscription_id": "s", "resource_group_name": "rg", "workspace_name": "ws"}"#,
        )
        .unwrap();
        assert_eq!(params.workspace_name, "ws");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_feature_list(&[]), "No workspace features found.");
    }

    #[test]
    fn test_format_skips_entries_without_id() {
        let features = vec![
            AmlUserFeature {
                id: Some("automl".to_string()),
                display_name: Some("Automated ML".to_string()),
                description: None,
            },
            AmlUserFeature {
                id: None,
                display_name: Some("orphan".to_string()),
                description: None,
            },
        ];

        let out = format_feature_list(&features);
        assert_eq!(
            out,
            "Found 1 workspace features:\nID: automl, Name: Automated ML, Description: N/A"
        );
    }
}
