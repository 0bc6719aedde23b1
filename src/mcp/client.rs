//! HTTP JSON-RPC client for MCP tool calls
//!
//! [`McpClient`] performs exactly one synchronous tool invocation per call:
//! it builds the `tools/call` envelope, POSTs it to the MCP endpoint with
//! `Content-Type: application/json`, waits up to the configured timeout,
//! and returns the response body parsed as JSON. There is no retry, no
//! connection state, and no interpretation of the response beyond parsing;
//! every failure propagates unchanged to the caller.

use std::time::Duration;

use crate::config::Config;
use crate::error::{BridgeError, Result};
use crate::mcp::types::JsonRpcRequest;
use crate::tools::ToolArguments;

/// Client for issuing `tools/call` requests against an MCP server.
///
/// Each call is independent; the client holds no state beyond the reqwest
/// connection pool and its configured endpoint.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use nightshade_bridge::mcp::client::McpClient;
///
/// # #[tokio::main]
/// # async fn main() -> anyhow::Result<()> {
/// let client = McpClient::new(
///     url::Url::parse("http://localhost:8787/mcp")?,
///     Duration::from_secs(30),
/// );
/// let response = client
///     .call_tool("prefab_audit", serde_json::json!({"target": "WeaponAssets"}))
///     .await?;
/// println!("{}", serde_json::to_string_pretty(&response)?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct McpClient {
    /// Underlying reqwest HTTP client, built with the request timeout.
    http_client: reqwest::Client,
    /// MCP endpoint URL (POST target).
    endpoint: url::Url,
}

impl McpClient {
    /// Construct a new client targeting `endpoint`.
    ///
    /// The `timeout` bounds each individual request; an elapsed timeout
    /// surfaces as [`BridgeError::Http`]. No network I/O is performed at
    /// construction time.
    pub fn new(endpoint: url::Url, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            // Client construction fails only if the TLS backend cannot
            // initialise, which is fatal at startup anyway.
            .expect("failed to build reqwest client");

        Self {
            http_client,
            endpoint,
        }
    }

    /// Construct a client from a validated [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.endpoint.clone(), config.timeout())
    }

    /// The endpoint this client POSTs to.
    pub fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    /// Invoke a named tool against the configured endpoint.
    ///
    /// # Arguments
    ///
    /// * `tool_name` - The tool to invoke; must match a tool the server
    ///   recognizes (the client does not validate this).
    /// * `arguments` - JSON mapping passed through to the tool unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Http`] if the connection cannot be
    /// established, the server returns a non-success status, or the timeout
    /// elapses; [`BridgeError::Serialization`] if the envelope cannot be
    /// serialized or the response body is not valid JSON.
    pub async fn call_tool(
        &self,
        tool_name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value> {
        self.call_tool_at(&self.endpoint, tool_name, arguments).await
    }

    /// Invoke a named tool against a caller-supplied endpoint.
    ///
    /// Identical to [`McpClient::call_tool`] except the POST target is
    /// `endpoint` instead of the configured URL. Exactly one network round
    /// trip is performed per call.
    pub async fn call_tool_at(
        &self,
        endpoint: &url::Url,
        tool_name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let request = JsonRpcRequest::call_tool(tool_name, arguments);
        let body = serde_json::to_vec(&request).map_err(BridgeError::Serialization)?;

        tracing::debug!(tool = tool_name, endpoint = %endpoint, "sending tools/call request");

        let response = self
            .http_client
            .post(endpoint.as_str())
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(BridgeError::Http)?
            .error_for_status()
            .map_err(BridgeError::Http)?;

        let text = response.text().await.map_err(BridgeError::Http)?;
        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(BridgeError::Serialization)?;

        tracing::debug!(tool = tool_name, "received tools/call response");

        Ok(value)
    }

    /// Run the prefab audit tool against an asset group.
    ///
    /// # Errors
    ///
    /// Propagates any [`McpClient::call_tool`] failure unchanged.
    pub async fn run_prefab_audit(&self, target: &str) -> Result<serde_json::Value> {
        self.invoke(ToolArguments::prefab_audit(target)).await
    }

    /// Run the scene refactor tool on a scene.
    ///
    /// # Errors
    ///
    /// Propagates any [`McpClient::call_tool`] failure unchanged.
    pub async fn run_scene_refactor(
        &self,
        scene: &str,
        dry_run: bool,
    ) -> Result<serde_json::Value> {
        self.invoke(ToolArguments::scene_refactor(scene, dry_run))
            .await
    }

    /// Run the bulk-edit tool against an asset group (always a dry run).
    ///
    /// # Errors
    ///
    /// Propagates any [`McpClient::call_tool`] failure unchanged.
    pub async fn run_bulk_edit(&self, target: &str) -> Result<serde_json::Value> {
        self.invoke(ToolArguments::bulk_edit(target)).await
    }

    /// Serialize a typed argument payload and dispatch it to its tool.
    async fn invoke(&self, arguments: ToolArguments) -> Result<serde_json::Value> {
        let name = arguments.tool_name();
        let arguments = serde_json::to_value(&arguments).map_err(BridgeError::Serialization)?;
        self.call_tool(name, arguments).await
    }
}
