//! Typed HTTP client for the Azure Resource Manager API.
//!
//! `ArmClient` is scoped to one subscription and one bearer token. It
//! covers the three request shapes the tools need:
//!
//! - plain GET of a single resource
//! - paged GET, draining `nextLink` until the collection is exhausted
//! - long-running PUT/POST, polling the `Azure-AsyncOperation` (or
//!   `Location`) monitor URL until the operation reaches a terminal state
//!
//! Non-2xx responses are decoded from the ARM error envelope into
//! [`AzureError::Api`].

use std::time::Duration;

use reqwest::{Response, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::AzureError;
use super::models::{CloudError, OperationStatus, PagedList};
use crate::core::config::AzureConfig;

/// Operation status values that end polling.
const STATUS_SUCCEEDED: &str = "Succeeded";
const STATUS_FAILED: &str = "Failed";
const STATUS_CANCELED: &str = "Canceled";

/// A subscription-scoped ARM client.
pub struct ArmClient {
    http: reqwest::Client,
    endpoint: String,
    api_version: String,
    token: String,
    subscription_id: String,
    poll_interval: Duration,
}

impl ArmClient {
    /// Create a client for one subscription with an already-acquired token.
    pub fn new(
        config: &AzureConfig,
        subscription_id: &str,
        token: String,
    ) -> Result<Self, AzureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.management_endpoint.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            token,
            subscription_id: subscription_id.to_string(),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        })
    }

    /// Build the full URL for a subscription-relative resource path.
    fn url(&self, path: &str) -> String {
        format!(
            "{}/subscriptions/{}{}?api-version={}",
            self.endpoint, self.subscription_id, path, self.api_version
        )
    }

    /// GET a single resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AzureError> {
        let response = self
            .send_checked(self.http.get(self.url(path)).bearer_auth(&self.token))
            .await?;
        Ok(response.json().await?)
    }

    /// GET a collection, following `nextLink` until all pages are drained.
    pub async fn get_paged<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, AzureError> {
        let mut items = Vec::new();
        let mut next = Some(self.url(path));

        while let Some(url) = next {
            debug!("Fetching page: {}", url);
            let response = self
                .send_checked(self.http.get(&url).bearer_auth(&self.token))
                .await?;
            let page: PagedList<T> = response.json().await?;
            items.extend(page.value);
            next = page.next_link.filter(|link| !link.is_empty());
        }

        Ok(items)
    }

    /// PUT a resource and poll the long-running operation to completion,
    /// then return the final state of the resource.
    pub async fn put_poll<B, T>(&self, path: &str, body: &B) -> Result<T, AzureError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send_checked(self.http.put(self.url(path)).bearer_auth(&self.token).json(body))
            .await?;

        match monitor_url(&response) {
            Some((monitor, kind)) => {
                let delay = retry_after(&response);
                self.poll_operation(&monitor, kind, delay).await?;
                self.get(path).await
            }
            // Completed synchronously; the body is the resource.
            None => Ok(response.json().await?),
        }
    }

    /// POST an action (no body) and poll the long-running operation to
    /// completion.
    pub async fn post_poll(&self, path: &str) -> Result<(), AzureError> {
        let response = self
            .send_checked(self.http.post(self.url(path)).bearer_auth(&self.token))
            .await?;

        if let Some((monitor, kind)) = monitor_url(&response) {
            let delay = retry_after(&response);
            self.poll_operation(&monitor, kind, delay).await?;
        }

        Ok(())
    }

    /// Poll the monitor URL until the operation reaches a terminal state.
    ///
    /// The two monitor headers carry different completion semantics: an
    /// `Azure-AsyncOperation` URL serves a status document, while a
    /// `Location` URL keeps returning 202 until the operation is done and
    /// then answers with the resource (or action result) itself.
    async fn poll_operation(
        &self,
        monitor: &str,
        kind: MonitorKind,
        mut delay: Option<Duration>,
    ) -> Result<(), AzureError> {
        loop {
            tokio::time::sleep(delay.unwrap_or(self.poll_interval)).await;

            let response = self
                .send_checked(self.http.get(monitor).bearer_auth(&self.token))
                .await?;
            delay = retry_after(&response);

            if response.status() == StatusCode::ACCEPTED {
                continue;
            }

            // A Location monitor's non-202 success body is not a status
            // document; reaching it means the operation finished.
            if kind == MonitorKind::Location {
                return Ok(());
            }

            let status: OperationStatus = response.json().await?;
            match status.status.as_deref() {
                Some(STATUS_SUCCEEDED) => return Ok(()),
                Some(terminal @ (STATUS_FAILED | STATUS_CANCELED)) => {
                    let message = status
                        .error
                        .and_then(|e| e.message)
                        .unwrap_or_else(|| "no error details".to_string());
                    return Err(AzureError::operation(terminal, message));
                }
                // InProgress or provider-specific intermediate state.
                _ => continue,
            }
        }
    }

    /// Send a request and decode ARM error envelopes on non-2xx status.
    async fn send_checked(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Response, AzureError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let (code, message) = match serde_json::from_str::<CloudError>(&body) {
            Ok(CloudError { error: Some(e) }) => (
                e.code.unwrap_or_else(|| "Unknown".to_string()),
                e.message.unwrap_or_default(),
            ),
            _ => ("Unknown".to_string(), body),
        };

        Err(AzureError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }
}

/// Which response header named the monitor URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MonitorKind {
    AsyncOperation,
    Location,
}

/// The monitor URL for a long-running operation, if the response names one.
/// `Azure-AsyncOperation` wins when both headers are present.
fn monitor_url(response: &Response) -> Option<(String, MonitorKind)> {
    [
        ("azure-asyncoperation", MonitorKind::AsyncOperation),
        ("location", MonitorKind::Location),
    ]
    .iter()
    .find_map(|(name, kind)| response.headers().get(*name).map(|value| (value, *kind)))
    .and_then(|(value, kind)| value.to_str().ok().map(|url| (url.to_string(), kind)))
}

/// Parse a `Retry-After` header (seconds) if present.
fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::azure::models::Workspace;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(endpoint: &str) -> ArmClient {
        let config = AzureConfig {
            management_endpoint: endpoint.to_string(),
            poll_interval_ms: 10,
            ..Default::default()
        };
        ArmClient::new(&config, "sub-1", "test-token".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_get_paged_follows_next_link() {
        let mock_server = MockServer::start().await;

        let page2_url = format!("{}/page2", mock_server.uri());
        Mock::given(method("GET"))
            .and(path(
                "/subscriptions/sub-1/providers/Microsoft.MachineLearningServices/workspaces",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": [{"name": "ws-1"}, {"name": "ws-2"}],
                "nextLink": page2_url
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/page2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": [{"name": "ws-3"}]
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let workspaces: Vec<Workspace> = client
            .get_paged("/providers/Microsoft.MachineLearningServices/workspaces")
            .await
            .unwrap();

        assert_eq!(workspaces.len(), 3);
        assert_eq!(workspaces[2].name.as_deref(), Some("ws-3"));
    }

    #[tokio::test]
    async fn test_get_decodes_arm_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": {"code": "ResourceNotFound", "message": "workspace 'ws' was not found"}
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client
            .get::<Workspace>("/resourceGroups/rg/providers/Microsoft.MachineLearningServices/workspaces/ws")
            .await
            .unwrap_err();

        match err {
            AzureError::Api { status, code, message } => {
                assert_eq!(status, 404);
                assert_eq!(code, "ResourceNotFound");
                assert!(message.contains("was not found"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_post_poll_follows_async_operation() {
        let mock_server = MockServer::start().await;

        let monitor = format!("{}/operations/op-1", mock_server.uri());
        Mock::given(method("POST"))
            .and(path(
                "/subscriptions/sub-1/resourceGroups/rg/providers/Microsoft.MachineLearningServices/workspaces/ws/computes/cpu/start",
            ))
            .respond_with(
                ResponseTemplate::new(202)
                    .insert_header("azure-asyncoperation", monitor.as_str())
                    .insert_header("retry-after", "0"),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/operations/op-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"status": "Succeeded"})),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        client
            .post_poll("/resourceGroups/rg/providers/Microsoft.MachineLearningServices/workspaces/ws/computes/cpu/start")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_post_poll_location_monitor_resource_body_is_success() {
        let mock_server = MockServer::start().await;

        // No Azure-AsyncOperation header; the Location URL answers with
        // the resource itself once the operation is done.
        let monitor = format!("{}/locationResults/op-loc", mock_server.uri());
        Mock::given(method("POST"))
            .and(path(
                "/subscriptions/sub-1/resourceGroups/rg/providers/Microsoft.MachineLearningServices/workspaces/ws/computes/cpu/stop",
            ))
            .respond_with(
                ResponseTemplate::new(202)
                    .insert_header("location", monitor.as_str())
                    .insert_header("retry-after", "0"),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/locationResults/op-loc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "/subscriptions/sub-1/resourceGroups/rg/providers/Microsoft.MachineLearningServices/workspaces/ws/computes/cpu",
                "name": "cpu",
                "properties": {"computeType": "AmlCompute", "provisioningState": "Succeeded"}
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        client
            .post_poll("/resourceGroups/rg/providers/Microsoft.MachineLearningServices/workspaces/ws/computes/cpu/stop")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_poll_surfaces_operation_failure() {
        let mock_server = MockServer::start().await;

        let monitor = format!("{}/operations/op-2", mock_server.uri());
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(202)
                    .insert_header("azure-asyncoperation", monitor.as_str())
                    .insert_header("retry-after", "0"),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/operations/op-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "Failed",
                "error": {"code": "VmStartFailed", "message": "allocation failure"}
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client
            .post_poll("/resourceGroups/rg/providers/Microsoft.MachineLearningServices/workspaces/ws/computes/cpu/start")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed"));
        assert!(err.to_string().contains("allocation failure"));
    }

    #[tokio::test]
    async fn test_put_poll_returns_final_resource() {
        let mock_server = MockServer::start().await;
        let ws_path =
            "/subscriptions/sub-1/resourceGroups/rg/providers/Microsoft.MachineLearningServices/workspaces/ws";

        let monitor = format!("{}/operations/op-3", mock_server.uri());
        Mock::given(method("PUT"))
            .and(path(ws_path))
            .respond_with(
                ResponseTemplate::new(201)
                    .insert_header("azure-asyncoperation", monitor.as_str())
                    .insert_header("retry-after", "0")
                    .set_body_json(serde_json::json!({"name": "ws"})),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/operations/op-3"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"status": "Succeeded"})),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path(ws_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": format!("{}", ws_path),
                "name": "ws",
                "location": "eastus",
                "properties": {"provisioningState": "Succeeded"}
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let body = serde_json::json!({"location": "eastus", "properties": {}});
        let workspace: Workspace = client
            .put_poll(
                "/resourceGroups/rg/providers/Microsoft.MachineLearningServices/workspaces/ws",
                &body,
            )
            .await
            .unwrap();

        assert_eq!(workspace.name.as_deref(), Some("ws"));
        assert_eq!(workspace.location.as_deref(), Some("eastus"));
    }

    #[tokio::test]
    async fn test_put_without_monitor_completes_synchronously() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "ws",
                "location": "eastus"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let body = serde_json::json!({"location": "eastus"});
        let workspace: Workspace = client
            .put_poll(
                "/resourceGroups/rg/providers/Microsoft.MachineLearningServices/workspaces/ws",
                &body,
            )
            .await
            .unwrap();

        assert_eq!(workspace.name.as_deref(), Some("ws"));
    }
}
