//! MCP tool-call support
//!
//! JSON-RPC 2.0 wire types and the HTTP client that speaks `tools/call`
//! to an MCP server.

pub mod client;
pub mod types;

pub use client::McpClient;
