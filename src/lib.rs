//! Nightshade bridge - MCP tool-call client library
//!
//! This library provides the pieces behind the `nightshade-bridge` binary:
//! a JSON-RPC 2.0 client for MCP `tools/call` requests and typed argument
//! payloads for the editor maintenance tools it drives.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `mcp`: JSON-RPC wire types and the HTTP tool-call client
//! - `tools`: typed argument payloads for the editor tools
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use nightshade_bridge::{Config, McpClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     config.validate()?;
//!
//!     let client = McpClient::from_config(&config);
//!     let response = client.run_prefab_audit("WeaponAssets").await?;
//!     println!("{}", serde_json::to_string_pretty(&response)?);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod tools;

// Re-export commonly used types
pub use config::Config;
pub use error::{BridgeError, Result};
pub use mcp::client::McpClient;
pub use tools::{BulkModifications, ToolArguments};
