//! Command-line interface definition for the Nightshade bridge
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for the three editor maintenance operations.

use clap::{Parser, Subcommand};

/// Asset group audited or edited when none is named.
pub const DEFAULT_TARGET: &str = "WeaponAssets";

/// Scene refactored when none is named.
pub const DEFAULT_SCENE: &str = "Arena";

/// Nightshade bridge - MCP tool-call client for a game-engine editor
///
/// Issues JSON-RPC `tools/call` requests against a locally running MCP
/// server. Running without a subcommand performs a prefab audit against
/// the default target.
#[derive(Parser, Debug, Clone)]
#[command(name = "nightshade-bridge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the MCP endpoint URL from config
    #[arg(short, long)]
    pub endpoint: Option<url::Url>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute; defaults to `audit` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the bridge
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Audit prefabs for naming, collision, and performance issues
    Audit {
        /// Asset group to audit
        #[arg(short, long, default_value = DEFAULT_TARGET)]
        target: String,
    },

    /// Refactor a scene (remove empty groups, rebuild navigation)
    Refactor {
        /// Scene to refactor
        #[arg(short, long, default_value = DEFAULT_SCENE)]
        scene: String,

        /// Apply the changes instead of the default dry run
        #[arg(long)]
        apply: bool,
    },

    /// Bulk-edit asset properties (always a dry run)
    BulkEdit {
        /// Asset group to edit
        #[arg(short, long, default_value = DEFAULT_TARGET)]
        target: String,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["nightshade-bridge"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.endpoint.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_audit_defaults_target() {
        let cli = Cli::try_parse_from(["nightshade-bridge", "audit"]).unwrap();
        match cli.command {
            Some(Commands::Audit { target }) => assert_eq!(target, "WeaponAssets"),
            other => panic!("expected Audit, got {:?}", other),
        }
    }

    #[test]
    fn test_audit_explicit_target() {
        let cli = Cli::try_parse_from(["nightshade-bridge", "audit", "--target", "Props"]).unwrap();
        match cli.command {
            Some(Commands::Audit { target }) => assert_eq!(target, "Props"),
            other => panic!("expected Audit, got {:?}", other),
        }
    }

    #[test]
    fn test_refactor_defaults_to_dry_run() {
        let cli = Cli::try_parse_from(["nightshade-bridge", "refactor"]).unwrap();
        match cli.command {
            Some(Commands::Refactor { scene, apply }) => {
                assert_eq!(scene, "Arena");
                assert!(!apply);
            }
            other => panic!("expected Refactor, got {:?}", other),
        }
    }

    #[test]
    fn test_refactor_apply_flag() {
        let cli =
            Cli::try_parse_from(["nightshade-bridge", "refactor", "--scene", "Lobby", "--apply"])
                .unwrap();
        match cli.command {
            Some(Commands::Refactor { scene, apply }) => {
                assert_eq!(scene, "Lobby");
                assert!(apply);
            }
            other => panic!("expected Refactor, got {:?}", other),
        }
    }

    #[test]
    fn test_bulk_edit_parses() {
        let cli = Cli::try_parse_from(["nightshade-bridge", "bulk-edit"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::BulkEdit { ref target }) if target == "WeaponAssets"
        ));
    }

    #[test]
    fn test_endpoint_flag_parses_as_url() {
        let cli = Cli::try_parse_from([
            "nightshade-bridge",
            "--endpoint",
            "http://editor-host:9000/mcp",
            "audit",
        ])
        .unwrap();
        assert_eq!(
            cli.endpoint.unwrap().as_str(),
            "http://editor-host:9000/mcp"
        );
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let result = Cli::try_parse_from(["nightshade-bridge", "--endpoint", "not a url"]);
        assert!(result.is_err());
    }
}
