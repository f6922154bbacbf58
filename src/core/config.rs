//! Configuration management for the MCP server.
//!
//! Provides a centralized configuration structure populated from
//! environment variables or defaults. Server and transport settings use
//! the `MCP_` prefix; Azure credentials use the conventional `AZURE_`
//! variables so existing service-principal setups work unchanged.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Default ARM machine learning API version used for every request.
const DEFAULT_API_VERSION: &str = "2024-04-01";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Azure management-plane configuration and credentials.
    pub azure: AzureConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the Azure management plane.
///
/// Endpoints are overridable so tests can point the client at a local
/// mock server; production deployments never need to set them.
#[derive(Clone, Serialize, Deserialize)]
pub struct AzureConfig {
    /// OAuth2 authority host used for service-principal token requests.
    pub authority_host: String,

    /// Azure Resource Manager endpoint.
    pub management_endpoint: String,

    /// ARM API version sent with every management request.
    pub api_version: String,

    /// Service-principal tenant (AZURE_TENANT_ID).
    pub tenant_id: Option<String>,

    /// Service-principal application id (AZURE_CLIENT_ID).
    pub client_id: Option<String>,

    /// Service-principal secret (AZURE_CLIENT_SECRET).
    pub client_secret: Option<String>,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Default delay between long-running-operation polls, in
    /// milliseconds. A `Retry-After` header from the service wins.
    pub poll_interval_ms: u64,
}

impl AzureConfig {
    /// Whether a complete service principal is configured.
    pub fn has_service_principal(&self) -> bool {
        self.tenant_id.is_some() && self.client_id.is_some() && self.client_secret.is_some()
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for AzureConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureConfig")
            .field("authority_host", &self.authority_host)
            .field("management_endpoint", &self.management_endpoint)
            .field("api_version", &self.api_version)
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .finish()
    }
}

impl Default for AzureConfig {
    fn default() -> Self {
        Self {
            authority_host: "https://login.microsoftonline.com".to_string(),
            management_endpoint: "https://management.azure.com".to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            tenant_id: None,
            client_id: None,
            client_secret: None,
            request_timeout_secs: 30,
            poll_interval_ms: 5000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "azure-ml-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            azure: AzureConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings are prefixed with `MCP_` (e.g. `MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`); Azure credentials use the standard `AZURE_*`
    /// variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(host) = std::env::var("AZURE_AUTHORITY_HOST") {
            config.azure.authority_host = host.trim_end_matches('/').to_string();
        }

        if let Ok(endpoint) = std::env::var("AZURE_RESOURCE_MANAGER_ENDPOINT") {
            config.azure.management_endpoint = endpoint.trim_end_matches('/').to_string();
        }

        config.azure.tenant_id = std::env::var("AZURE_TENANT_ID").ok();
        config.azure.client_id = std::env::var("AZURE_CLIENT_ID").ok();
        config.azure.client_secret = std::env::var("AZURE_CLIENT_SECRET").ok();

        if config.azure.has_service_principal() {
            info!("Service principal credentials loaded from environment");
        } else {
            info!(
                "No service principal in environment; tool calls will \
                 authenticate through the Azure CLI (az login)"
            );
        }

        config
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "azure-ml-mcp-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
