use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use httpfs::config::Cli;
use httpfs::files::FileServer;
use httpfs::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = cli.into_config()?;

    logging::init(cfg.verbose);

    tracing::debug!(port = cfg.port, root = %cfg.root_dir.display(), "Configuration loaded");

    if cfg.is_well_known_port() {
        tracing::warn!(port = cfg.port, "The selected port is a well-known port");
    }
    cfg.validate()?;

    let handler = FileServer::new(&cfg.root_dir)
        .with_context(|| format!("opening root directory {}", cfg.root_dir.display()))?;
    tracing::info!("Serving files from {}", handler.root().display());

    tokio::select! {
        res = server::listener::run(&cfg, Arc::new(handler)) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
