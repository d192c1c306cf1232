use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, WriteLogger};

use mcp_hub::core::config::{self, CliOverrides};
use mcp_hub::core::inventory::{InventoryStore, JsonFileStore, open_session};
use mcp_hub::tui;

#[derive(Parser)]
#[command(name = "mcp-hub", about = "Browse and toggle your MCP server inventory")]
struct Args {
    /// Inventory file to use instead of ~/.mcp-hub/inventory.json
    #[arg(long, value_name = "PATH")]
    inventory: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Do not write the built-in MCP set into an empty inventory
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Config problems are reported once the logger is up.
    let (hub_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (Default::default(), Some(e)),
    };
    let resolved = config::resolve(
        &hub_config,
        &CliOverrides {
            inventory: args.inventory,
            log_level: args.log_level,
            no_seed: args.no_seed,
        },
    );

    // File logger: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    match open_log_file(&resolved.log_path) {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(resolved.log_level, log_config, log_file) {
                eprintln!("mcp-hub: logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!(
            "mcp-hub: logging disabled, cannot open {}: {}",
            resolved.log_path.display(),
            e
        ),
    }

    info!("MCP Hub starting up, inventory at {}", resolved.inventory_path.display());
    if let Some(e) = config_error {
        warn!("Ignoring config file: {}", e);
    }

    let store: Arc<dyn InventoryStore> = Arc::new(JsonFileStore::new(&resolved.inventory_path));
    let session = open_session(store.as_ref(), resolved.seed_defaults).await;

    tui::run(session, store)
}

/// Create the log file, making its directory first.
fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}
