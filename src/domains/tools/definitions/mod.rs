//! Tool definitions module.
//!
//! Exports all available tool definitions, grouped by resource area.
//! Each tool is defined in its own file.

pub mod common;
pub mod compute;
pub mod monitoring;
pub mod network;
pub mod workspace;

pub use compute::{GetComputeTool, ListComputeTool, StartComputeTool, StopComputeTool};
pub use monitoring::{ListQuotasTool, ListUsageTool, ListVmSizesTool};
pub use network::{
    ListPrivateEndpointsTool, ListWorkspaceConnectionsTool, ListWorkspaceFeaturesTool,
};
pub use workspace::{CreateWorkspaceTool, GetWorkspaceTool, ListWorkspacesTool};
