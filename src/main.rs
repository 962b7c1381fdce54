//! kgdrive CLI
//!
//! Usage:
//!   kgdrive                               → ingest the default sentence, cognify, log results
//!   kgdrive --endpoint http://kg:8000     → same, against another service
//!   kgdrive --dry-run                     → print the resolved plan and exit

use clap::Parser;
use kgdrive::cli::{execute, Cli, Execution};
use kgdrive::telemetry::init_tracing;
use kgdrive_driver::TracingSink;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    if cli.dry_run {
        if let Execution::Planned(plan) = execute(&config, true, Arc::new(TracingSink)).await? {
            println!("{}", plan);
        }
        return Ok(());
    }

    let _guard = init_tracing(&config.logging)?;
    let config_path = cli.config_path();
    tracing::info!(
        config = %config_path.display(),
        found = config_path.exists(),
        endpoint = %config.graph.base_url,
        dataset = %config.graph.dataset,
        "starting"
    );

    execute(&config, false, Arc::new(TracingSink)).await?;
    Ok(())
}
