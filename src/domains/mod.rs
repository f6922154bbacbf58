//! Domain modules containing the business logic of the server.
//!
//! - **azure**: credential chain, ARM client set, response models, and
//!   nil-safe field helpers
//! - **tools**: MCP tool definitions and the tool router

pub mod azure;
pub mod tools;
