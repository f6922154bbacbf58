//! Compute resource management tools.

mod get;
mod list;
mod start;
mod stop;

pub use get::{GetComputeParams, GetComputeTool};
pub use list::{ListComputeParams, ListComputeTool};
pub use start::{StartComputeParams, StartComputeTool};
pub use stop::{StopComputeParams, StopComputeTool};
