//! Networking tools: private endpoints, connections, and feature flags.

mod connections;
mod features;
mod private_endpoints;

pub use connections::{ListWorkspaceConnectionsParams, ListWorkspaceConnectionsTool};
pub use features::{ListWorkspaceFeaturesParams, ListWorkspaceFeaturesTool};
pub use private_endpoints::{ListPrivateEndpointsParams, ListPrivateEndpointsTool};
