//! Regional quota listing tool.

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
use crate::domains::azure::{ClientSet, helpers, models::ResourceQuota};

use super::super::common::{error_result, format_listing, success_result};

/// Parameters for listing quotas.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListQuotasParams {
    /// Azure subscription ID.
    #[schemars(description = "Azure subscription ID")]
    pub subscription_id: String,

    /// Azure region location.
    #[schemars(description = "Azure region location (e.g., eastus, westus2)")]
    pub location: String,
}

/// Quota listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListQuotasTool;

impl ListQuotasTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_quotas";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List quotas for Azure ML resources in a location";

    /// Execute the tool logic.
    pub async fn execute(params: &ListQuotasParams, config: &Config) -> CallToolResult {
        info!("Listing quotas for location {}", params.location);

        let clients = match ClientSet::new(&config.azure, &params.subscription_id).await {
            Ok(clients) => clients,
            Err(e) => return error_result(&e.to_string()),
        };

        match clients.quotas.list(&params.location).await {
            Ok(quotas) => success_result(format_quota_list(&quotas, &params.location)),
            Err(e) => error_result(&format!("Failed to get quotas: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListQuotasParams>(),
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
                let params: ListQuotasParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

/// One line per quota; entries need a name and a limit.
fn format_quota_list(quotas: &[ResourceQuota], location: &str) -> String {
    let lines: Vec<String> = quotas
        .iter()
        .filter_map(|quota| {
            let name = quota.name.as_ref()?;
            let limit = quota.limit?;
            Some(format!(
                "Resource: {}, Limit: {}, Unit: {}, Type: {}",
                helpers::opt_str(&name.value),
                limit,
                helpers::opt_str(&quota.unit),
                helpers::opt_str(&quota.resource_type),
            ))
        })
        .collect();

    format_listing(
        format!("Found {} quotas for location '{}':", lines.len(), location),
        lines,
        &format!("No quotas found for location '{}'.", location),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::azure::models::QuotaName;

    #[test]
    fn test_params_require_location() {
        let result: Result<ListQuotasParams, _> =
            serde_json::from_str(r#"{"subscription_id": "s"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(
            format_quota_list(&[], "eastus"),
            "No quotas found for location 'eastus'."
        );
    }

    #[test]
    fn test_format_skips_entries_without_limit() {
        let quotas = vec![
            ResourceQuota {
                id: None,
                resource_type: Some("Microsoft.MachineLearningServices/locations/quotas".to_string()),
                name: Some(QuotaName {
                    value: Some("standardNCFamily".to_string()),
                    localized_value: None,
                }),
                limit: Some(24),
                unit: Some("Count".to_string()),
            },
            ResourceQuota {
                id: None,
                resource_type: None,
                name: Some(QuotaName {
                    value: Some("no-limit".to_string()),
                    localized_value: None,
                }),
                limit: None,
                unit: None,
            },
        ];

        let out = format_quota_list(&quotas, "eastus");
        assert_eq!(
            out,
            "Found 1 quotas for location 'eastus':\nResource: standardNCFamily, Limit: 24, Unit: Count, Type: Microsoft.MachineLearningServices/locations/quotas"
        );
    }
}
