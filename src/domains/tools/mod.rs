//! Tools domain module.
//!
//! All MCP tools exposed by the server live here, one file per tool under
//! `definitions/`, grouped by resource area (workspace, compute,
//! monitoring, network).
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in the matching `definitions/` group
//! 2. Define the params struct, `execute()`, `to_tool()`, and
//!    `create_route()`
//! 3. Export it in the group's `mod.rs`
//! 4. Add a route in `router.rs` using `with_route()`
//!
//! The router is built dynamically; `core/server.rs` never changes.

pub mod definitions;
mod error;
pub mod router;

pub use error::ToolError;
pub use router::build_tool_router;
