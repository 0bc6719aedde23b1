//! Nightshade bridge - MCP tool-call CLI
//!
//! Main entry point. Running without a subcommand performs a prefab audit
//! against the default target and prints the pretty-printed response.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nightshade_bridge::cli::{Cli, Commands, DEFAULT_TARGET};
use nightshade_bridge::config::Config;
use nightshade_bridge::mcp::client::McpClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/bridge.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    let client = McpClient::from_config(&config);

    // Bare invocation audits the default target.
    let command = cli.command.unwrap_or(Commands::Audit {
        target: DEFAULT_TARGET.to_string(),
    });

    match command {
        Commands::Audit { target } => {
            tracing::info!("Auditing prefabs in target: {}", target);
            println!("Running prefab audit...");
            let response = client.run_prefab_audit(&target).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Commands::Refactor { scene, apply } => {
            tracing::info!("Refactoring scene: {} (apply: {})", scene, apply);
            if apply {
                tracing::warn!("Dry run disabled; changes will be persisted");
            }
            println!("Running scene refactor...");
            let response = client.run_scene_refactor(&scene, !apply).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Commands::BulkEdit { target } => {
            tracing::info!("Bulk-editing assets in target: {}", target);
            println!("Running bulk edit...");
            let response = client.run_bulk_edit(&target).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "nightshade_bridge=debug"
    } else {
        "nightshade_bridge=info"
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
