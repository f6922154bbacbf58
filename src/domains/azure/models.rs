//! Serde projections of the ARM Machine Learning response shapes.
//!
//! ARM JSON is sparse - any field may be absent - so every field here is
//! optional and the formatting layer goes through `helpers` for safe
//! defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page of an ARM collection response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedList<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,

    /// Absolute URL of the next page, if any.
    pub next_link: Option<String>,
}

/// ARM error envelope: `{"error": {"code": ..., "message": ...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CloudError {
    pub error: Option<CloudErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloudErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Status document polled for long-running operations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationStatus {
    pub status: Option<String>,
    pub error: Option<CloudErrorBody>,
}

// ============================================================================
// Workspaces
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub sku: Option<Sku>,
    pub properties: Option<WorkspaceProperties>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sku {
    pub name: Option<String>,
    pub tier: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceProperties {
    pub description: Option<String>,
    pub friendly_name: Option<String>,
    pub discovery_url: Option<String>,
    pub ml_flow_tracking_uri: Option<String>,
    pub provisioning_state: Option<String>,
}

/// Request body for workspace creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceCreate {
    pub location: String,
    pub properties: WorkspaceCreateProperties,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceCreateProperties {
    pub description: String,
    pub friendly_name: String,
}

// ============================================================================
// Compute
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeResource {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub properties: Option<ComputeProperties>,
}

/// Common envelope of the polymorphic ARM compute payload.
///
/// ARM discriminates compute kinds via `computeType`; the fields shared
/// by every kind are all the tools need, so the variant-specific payload
/// is not modeled.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeProperties {
    pub compute_type: Option<String>,
    pub description: Option<String>,
    pub resource_id: Option<String>,
    pub provisioning_state: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
    pub modified_on: Option<DateTime<Utc>>,
    pub is_attached_compute: Option<bool>,
}

// ============================================================================
// Quotas, usage, VM sizes
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceQuota {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub name: Option<QuotaName>,
    pub limit: Option<i64>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaName {
    pub value: Option<String>,
    pub localized_value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub name: Option<UsageName>,
    pub current_value: Option<i64>,
    pub limit: Option<i64>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageName {
    pub value: Option<String>,
    pub localized_value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VirtualMachineSize {
    pub name: Option<String>,
    pub family: Option<String>,
    #[serde(rename = "vCPUs")]
    pub v_cpus: Option<i32>,
    pub gpus: Option<i32>,
    #[serde(rename = "memoryGB")]
    pub memory_gb: Option<f64>,
    #[serde(rename = "maxResourceVolumeMB")]
    pub max_resource_volume_mb: Option<i32>,
    #[serde(rename = "lowPriorityCapable")]
    pub low_priority_capable: Option<bool>,
}

// ============================================================================
// Networking
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateEndpointConnection {
    pub id: Option<String>,
    pub name: Option<String>,
    pub properties: Option<PrivateEndpointConnectionProperties>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateEndpointConnectionProperties {
    pub private_link_service_connection_state: Option<PrivateLinkServiceConnectionState>,
    pub provisioning_state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateLinkServiceConnectionState {
    pub status: Option<String>,
    pub description: Option<String>,
    pub actions_required: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceConnection {
    pub id: Option<String>,
    pub name: Option<String>,
    pub properties: Option<WorkspaceConnectionProperties>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceConnectionProperties {
    pub auth_type: Option<String>,
    pub category: Option<String>,
    pub target: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmlUserFeature {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_deserializes_arm_shape() {
        let json = r#"{
            "id": "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.MachineLearningServices/workspaces/ws",
            "name": "ws",
            "type": "Microsoft.MachineLearningServices/workspaces",
            "location": "eastus",
            "sku": {"name": "Basic", "tier": "Basic"},
            "properties": {
                "friendlyName": "My Workspace",
                "description": "test",
                "discoveryUrl": "https://eastus.api.azureml.ms/discovery",
                "mlFlowTrackingUri": "azureml://eastus.api.azureml.ms/mlflow/v1.0",
                "provisioningState": "Succeeded"
            }
        }"#;
        let ws: Workspace = serde_json::from_str(json).unwrap();
        assert_eq!(ws.name.as_deref(), Some("ws"));
        let props = ws.properties.unwrap();
        assert_eq!(props.friendly_name.as_deref(), Some("My Workspace"));
        assert_eq!(
            props.ml_flow_tracking_uri.as_deref(),
            Some("azureml://eastus.api.azureml.ms/mlflow/v1.0")
        );
    }

    #[test]
    fn test_paged_list_defaults_value() {
        let page: PagedList<Workspace> = serde_json::from_str("{}").unwrap();
        assert!(page.value.is_empty());
        assert!(page.next_link.is_none());
    }

    #[test]
    fn test_compute_resource_common_envelope() {
        let json = r#"{
            "id": "/subscriptions/s/resourceGroups/rg/providers/Microsoft.MachineLearningServices/workspaces/ws/computes/gpu-cluster",
            "name": "gpu-cluster",
            "location": "westus2",
            "properties": {
                "computeType": "AmlCompute",
                "provisioningState": "Succeeded",
                "createdOn": "2024-01-15T08:30:00.000Z",
                "modifiedOn": "2024-02-01T12:00:00.000Z",
                "isAttachedCompute": false,
                "properties": {"vmSize": "STANDARD_NC6"}
            }
        }"#;
        let compute: ComputeResource = serde_json::from_str(json).unwrap();
        let props = compute.properties.unwrap();
        assert_eq!(props.compute_type.as_deref(), Some("AmlCompute"));
        assert_eq!(props.is_attached_compute, Some(false));
        assert!(props.created_on.is_some());
    }

    #[test]
    fn test_vm_size_field_renames() {
        let json = r#"{
            "name": "Standard_NC6",
            "family": "standardNCFamily",
            "vCPUs": 6,
            "gpus": 1,
            "memoryGB": 56.0,
            "maxResourceVolumeMB": 389120,
            "lowPriorityCapable": true
        }"#;
        let size: VirtualMachineSize = serde_json::from_str(json).unwrap();
        assert_eq!(size.v_cpus, Some(6));
        assert_eq!(size.memory_gb, Some(56.0));
        assert_eq!(size.low_priority_capable, Some(true));
    }

    #[test]
    fn test_quota_name_nested() {
        let json = r#"{
            "id": "/subscriptions/s/providers/Microsoft.MachineLearningServices/locations/eastus/quotas/standardNCFamily",
            "type": "Microsoft.MachineLearningServices/locations/quotas",
            "name": {"value": "standardNCFamily", "localizedValue": "Standard NC Family"},
            "limit": 24,
            "unit": "Count"
        }"#;
        let quota: ResourceQuota = serde_json::from_str(json).unwrap();
        assert_eq!(
            quota.name.unwrap().value.as_deref(),
            Some("standardNCFamily")
        );
        assert_eq!(quota.limit, Some(24));
    }

    #[test]
    fn test_cloud_error_envelope() {
        let json = r#"{"error": {"code": "ResourceNotFound", "message": "not found"}}"#;
        let err: CloudError = serde_json::from_str(json).unwrap();
        let body = err.error.unwrap();
        assert_eq!(body.code.as_deref(), Some("ResourceNotFound"));
    }
}
