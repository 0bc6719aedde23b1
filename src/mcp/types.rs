//! JSON-RPC 2.0 wire types for the MCP tool-call protocol
//!
//! This module defines the request and response envelopes exchanged with an
//! MCP server over HTTP, as explicit structured records. All types derive
//! `Debug`, `Clone`, `Serialize`, and `Deserialize`; `Option<>` fields omit
//! their key from JSON when `None` via
//! `#[serde(skip_serializing_if = "Option::is_none")]`.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Protocol constants
// ---------------------------------------------------------------------------

/// JSON-RPC protocol version; always `"2.0"`.
pub const JSONRPC_VERSION: &str = "2.0";

/// The only method this client issues: invoke a named tool.
pub const METHOD_TOOLS_CALL: &str = "tools/call";

/// Fixed correlation id sent on every request.
///
/// The bridge issues one request at a time, so a constant id never collides.
/// A client extended to issue concurrent requests would need per-request ids.
pub const REQUEST_ID: &str = "nightshade-ue5";

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 wire types
// ---------------------------------------------------------------------------

/// A JSON-RPC 2.0 request object.
///
/// `jsonrpc` MUST always be `"2.0"`.
///
/// # Examples
///
/// ```
/// use nightshade_bridge::mcp::types::JsonRpcRequest;
///
/// let req = JsonRpcRequest::call_tool("prefab_audit", serde_json::json!({"target": "Foo"}));
/// assert_eq!(req.jsonrpc, "2.0");
/// assert_eq!(req.method, "tools/call");
/// assert_eq!(req.params.name, "prefab_audit");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version identifier; always `"2.0"`.
    pub jsonrpc: String,
    /// Request correlation identifier.
    pub id: serde_json::Value,
    /// The method name to invoke.
    pub method: String,
    /// Tool-call parameters.
    pub params: CallToolParams,
}

impl JsonRpcRequest {
    /// Build a `tools/call` request envelope for the named tool.
    ///
    /// # Arguments
    ///
    /// * `tool_name` - The tool to invoke; must match a tool the server
    ///   recognizes (the client does not validate this).
    /// * `arguments` - Arbitrary JSON mapping passed through to the tool.
    pub fn call_tool(tool_name: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: serde_json::Value::String(REQUEST_ID.to_string()),
            method: METHOD_TOOLS_CALL.to_string(),
            params: CallToolParams {
                name: tool_name.into(),
                arguments,
            },
        }
    }
}

/// Parameters for a `tools/call` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolParams {
    /// Name of the tool to invoke.
    pub name: String,
    /// Arguments to pass to the tool.
    pub arguments: serde_json::Value,
}

/// A JSON-RPC 2.0 response object.
///
/// Exactly one of `result` or `error` is present in a valid response. The
/// client does not enforce this shape; `call_tool` returns the raw JSON
/// value and this record exists for callers that want to interpret it.
///
/// # Examples
///
/// ```
/// use nightshade_bridge::mcp::types::JsonRpcResponse;
///
/// let resp: JsonRpcResponse = serde_json::from_str(
///     r#"{"jsonrpc":"2.0","id":"nightshade-ue5","result":{"ok":true}}"#,
/// ).unwrap();
/// assert!(resp.result.is_some());
/// assert!(resp.error.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version identifier; always `"2.0"`.
    pub jsonrpc: String,
    /// Mirrors the `id` from the corresponding request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    /// Successful result value; mutually exclusive with `error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Error object; mutually exclusive with `result`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// A JSON-RPC 2.0 error object.
///
/// Implements `Display` as `"JSON-RPC error {code}: {message}"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Numeric error code as defined by JSON-RPC 2.0.
    pub code: i64,
    /// Human-readable error description.
    pub message: String,
    /// Optional additional error context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JSON-RPC error {}: {}", self.code, self.message)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
