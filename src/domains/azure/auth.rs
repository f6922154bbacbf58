//! Management-plane credential chain.
//!
//! Tokens are acquired from scratch on every tool invocation - nothing is
//! cached. The chain tries, in order:
//!
//! 1. Service principal from the standard `AZURE_TENANT_ID` /
//!    `AZURE_CLIENT_ID` / `AZURE_CLIENT_SECRET` environment variables
//!    (OAuth2 client-credentials grant).
//! 2. The Azure CLI (`az account get-access-token`), covering the local
//!    `az login` developer setup.

use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use tracing::{debug, info};

use super::error::AzureError;
use crate::core::config::AzureConfig;

/// A bearer token for the management endpoint.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_on: Option<DateTime<Utc>>,
}

/// Response from the OAuth2 token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

/// Response from `az account get-access-token --output json`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CliTokenResponse {
    access_token: String,
    expires_on: Option<String>,
}

/// Acquire a management-plane token using the credential chain.
pub async fn acquire_token(config: &AzureConfig) -> Result<AccessToken, AzureError> {
    if let (Some(tenant), Some(client), Some(secret)) = (
        config.tenant_id.as_deref(),
        config.client_id.as_deref(),
        config.client_secret.as_deref(),
    ) {
        info!("Authenticating with service principal from environment");
        return service_principal_token(config, tenant, client, secret).await;
    }

    info!("No service principal configured; requesting token from the Azure CLI");
    azure_cli_token(&config.management_endpoint).await
}

/// OAuth2 client-credentials grant against the configured authority.
async fn service_principal_token(
    config: &AzureConfig,
    tenant_id: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<AccessToken, AzureError> {
    let url = format!(
        "{}/{}/oauth2/v2.0/token",
        config.authority_host.trim_end_matches('/'),
        tenant_id
    );
    let scope = format!("{}/.default", config.management_endpoint);

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;

    let response = http
        .post(&url)
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("scope", &scope),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AzureError::credential(format!(
            "token endpoint returned {}: {}",
            status, body
        )));
    }

    let token: TokenResponse = response.json().await?;
    let expires_on = Utc::now() + chrono::Duration::seconds(token.expires_in);
    debug!("Service principal token acquired, expires {}", expires_on);

    Ok(AccessToken {
        token: token.access_token,
        expires_on: Some(expires_on),
    })
}

/// Shell out to the Azure CLI for a token.
async fn azure_cli_token(management_endpoint: &str) -> Result<AccessToken, AzureError> {
    let output = tokio::process::Command::new("az")
        .args([
            "account",
            "get-access-token",
            "--resource",
            management_endpoint,
            "--output",
            "json",
        ])
        .output()
        .await
        .map_err(|e| {
            AzureError::credential(format!(
                "Azure CLI not available ({}); run 'az login' or set \
                 AZURE_TENANT_ID/AZURE_CLIENT_ID/AZURE_CLIENT_SECRET",
                e
            ))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AzureError::credential(format!(
            "az account get-access-token failed: {}",
            stderr.trim()
        )));
    }

    let token: CliTokenResponse = serde_json::from_slice(&output.stdout)?;
    let expires_on = token.expires_on.as_deref().and_then(parse_cli_expiry);
    match expires_on {
        Some(ts) => debug!("Azure CLI token acquired, expires {}", ts),
        None => debug!("Azure CLI token acquired"),
    }

    Ok(AccessToken {
        token: token.access_token,
        expires_on,
    })
}

/// Parse the CLI's `expiresOn` timestamp (`YYYY-MM-DD HH:MM:SS.ffffff`).
///
/// The CLI prints local time without an offset; since tokens are
/// re-acquired on every call the expiry is informational only.
fn parse_cli_expiry(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}
