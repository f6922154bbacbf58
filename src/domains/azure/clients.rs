//! Per-resource-type clients over the ARM Machine Learning provider.
//!
//! [`ClientSet`] bundles one thin client per collection the tools touch.
//! It is rebuilt - and re-authenticated - on every tool invocation; no
//! state survives across calls.

use std::sync::Arc;

use super::auth;
use super::client::ArmClient;
use super::error::AzureError;
use super::models::{
    AmlUserFeature, ComputeResource, PagedList, PrivateEndpointConnection, ResourceQuota, Usage,
    VirtualMachineSize, Workspace, WorkspaceConnection, WorkspaceCreate,
};
use crate::core::config::AzureConfig;

const PROVIDER: &str = "providers/Microsoft.MachineLearningServices";

fn workspace_path(resource_group: &str, workspace: &str) -> String {
    format!(
        "/resourceGroups/{}/{}/workspaces/{}",
        resource_group, PROVIDER, workspace
    )
}

fn location_path(location: &str, collection: &str) -> String {
    format!("/{}/locations/{}/{}", PROVIDER, location, collection)
}

/// All Azure ML service clients used by the tools.
pub struct ClientSet {
    pub workspaces: WorkspacesClient,
    pub compute: ComputeClient,
    pub quotas: QuotasClient,
    pub usages: UsagesClient,
    pub vm_sizes: VirtualMachineSizesClient,
    pub private_endpoints: PrivateEndpointConnectionsClient,
    pub connections: WorkspaceConnectionsClient,
    pub features: WorkspaceFeaturesClient,
}

impl ClientSet {
    /// Authenticate and build the full client set for one subscription.
    pub async fn new(config: &AzureConfig, subscription_id: &str) -> Result<Self, AzureError> {
        let token = auth::acquire_token(config).await?;
        let arm = Arc::new(ArmClient::new(config, subscription_id, token.token)?);

        Ok(Self {
            workspaces: WorkspacesClient { arm: arm.clone() },
            compute: ComputeClient { arm: arm.clone() },
            quotas: QuotasClient { arm: arm.clone() },
            usages: UsagesClient { arm: arm.clone() },
            vm_sizes: VirtualMachineSizesClient { arm: arm.clone() },
            private_endpoints: PrivateEndpointConnectionsClient { arm: arm.clone() },
            connections: WorkspaceConnectionsClient { arm: arm.clone() },
            features: WorkspaceFeaturesClient { arm },
        })
    }
}

/// Workspace CRUD operations.
pub struct WorkspacesClient {
    arm: Arc<ArmClient>,
}

impl WorkspacesClient {
    /// List every workspace in the subscription.
    pub async fn list_by_subscription(&self) -> Result<Vec<Workspace>, AzureError> {
        self.arm.get_paged(&format!("/{}/workspaces", PROVIDER)).await
    }

    /// Get one workspace.
    pub async fn get(&self, resource_group: &str, name: &str) -> Result<Workspace, AzureError> {
        self.arm.get(&workspace_path(resource_group, name)).await
    }

    /// Create or update a workspace, polling until provisioning finishes.
    pub async fn begin_create_or_update(
        &self,
        resource_group: &str,
        name: &str,
        workspace: &WorkspaceCreate,
    ) -> Result<Workspace, AzureError> {
        self.arm
            .put_poll(&workspace_path(resource_group, name), workspace)
            .await
    }
}

/// Compute resource operations within a workspace.
pub struct ComputeClient {
    arm: Arc<ArmClient>,
}

impl ComputeClient {
    pub async fn list(
        &self,
        resource_group: &str,
        workspace: &str,
    ) -> Result<Vec<ComputeResource>, AzureError> {
        let path = format!("{}/computes", workspace_path(resource_group, workspace));
        self.arm.get_paged(&path).await
    }

    pub async fn get(
        &self,
        resource_group: &str,
        workspace: &str,
        name: &str,
    ) -> Result<ComputeResource, AzureError> {
        let path = format!("{}/computes/{}", workspace_path(resource_group, workspace), name);
        self.arm.get(&path).await
    }

    /// Start a compute resource, polling until the operation finishes.
    pub async fn begin_start(
        &self,
        resource_group: &str,
        workspace: &str,
        name: &str,
    ) -> Result<(), AzureError> {
        let path = format!(
            "{}/computes/{}/start",
            workspace_path(resource_group, workspace),
            name
        );
        self.arm.post_poll(&path).await
    }

    /// Stop a compute resource, polling until the operation finishes.
    pub async fn begin_stop(
        &self,
        resource_group: &str,
        workspace: &str,
        name: &str,
    ) -> Result<(), AzureError> {
        let path = format!(
            "{}/computes/{}/stop",
            workspace_path(resource_group, workspace),
            name
        );
        self.arm.post_poll(&path).await
    }
}

/// Regional quota listings.
pub struct QuotasClient {
    arm: Arc<ArmClient>,
}

impl QuotasClient {
    pub async fn list(&self, location: &str) -> Result<Vec<ResourceQuota>, AzureError> {
        self.arm.get_paged(&location_path(location, "quotas")).await
    }
}

/// Regional usage listings.
pub struct UsagesClient {
    arm: Arc<ArmClient>,
}

impl UsagesClient {
    pub async fn list(&self, location: &str) -> Result<Vec<Usage>, AzureError> {
        self.arm.get_paged(&location_path(location, "usages")).await
    }
}

/// Regional VM size catalog.
pub struct VirtualMachineSizesClient {
    arm: Arc<ArmClient>,
}

impl VirtualMachineSizesClient {
    /// The vmSizes endpoint is not paged; it returns one `value` array.
    pub async fn list(&self, location: &str) -> Result<Vec<VirtualMachineSize>, AzureError> {
        let page: PagedList<VirtualMachineSize> =
            self.arm.get(&location_path(location, "vmSizes")).await?;
        Ok(page.value)
    }
}

/// Private endpoint connections of a workspace.
pub struct PrivateEndpointConnectionsClient {
    arm: Arc<ArmClient>,
}

impl PrivateEndpointConnectionsClient {
    pub async fn list(
        &self,
        resource_group: &str,
        workspace: &str,
    ) -> Result<Vec<PrivateEndpointConnection>, AzureError> {
        let path = format!(
            "{}/privateEndpointConnections",
            workspace_path(resource_group, workspace)
        );
        self.arm.get_paged(&path).await
    }
}

/// Workspace connections (linked services).
pub struct WorkspaceConnectionsClient {
    arm: Arc<ArmClient>,
}

impl WorkspaceConnectionsClient {
    pub async fn list(
        &self,
        resource_group: &str,
        workspace: &str,
    ) -> Result<Vec<WorkspaceConnection>, AzureError> {
        let path = format!("{}/connections", workspace_path(resource_group, workspace));
        self.arm.get_paged(&path).await
    }
}

/// Feature availability for a workspace.
pub struct WorkspaceFeaturesClient {
    arm: Arc<ArmClient>,
}

impl WorkspaceFeaturesClient {
    pub async fn list(
        &self,
        resource_group: &str,
        workspace: &str,
    ) -> Result<Vec<AmlUserFeature>, AzureError> {
        let path = format!("{}/features", workspace_path(resource_group, workspace));
        self.arm.get_paged(&path).await
    }
}
