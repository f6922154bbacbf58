//! Workspace management tools.

mod create;
mod get;
mod list;

pub use create::{CreateWorkspaceParams, CreateWorkspaceTool};
pub use get::{GetWorkspaceParams, GetWorkspaceTool};
pub use list::{ListWorkspacesParams, ListWorkspacesTool};
