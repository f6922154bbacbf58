//! Monitoring tools: quotas, usage, and VM size catalog.

mod quotas;
mod usage;
mod vm_sizes;

pub use quotas::{ListQuotasParams, ListQuotasTool};
pub use usage::{ListUsageParams, ListUsageTool};
pub use vm_sizes::{ListVmSizesParams, ListVmSizesTool};
