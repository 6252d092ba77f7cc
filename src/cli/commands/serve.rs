//! Serve command implementation
//!
//! This module implements the `serve` command, which builds the anonymizer
//! and runs the HTTP shell until a shutdown signal arrives.

use crate::anonymization::PiiAnonymizer;
use crate::config::load_config_or_default;
use crate::server::{self, AppState};
use clap::Args;
use std::sync::Arc;
use tokio::sync::watch;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override listen host
    #[arg(long)]
    pub host: Option<String>,

    /// Override listen port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Execute the serve command
    pub async fn execute(
        &self,
        config_path: &str,
        mut shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting serve command");

        let (mut config, from_file) = match load_config_or_default(config_path) {
            Ok(loaded) => loaded,
            Err(e) => {
                tracing::error!(error = %e, "Configuration loading failed");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        if !from_file {
            tracing::info!(config_path = %config_path, "Configuration file not found, using defaults");
        }

        if let Some(ref host) = self.host {
            tracing::info!(host = %host, "Overriding host from CLI");
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            tracing::info!(port, "Overriding port from CLI");
            config.server.port = port;
        }

        if let Err(e) = config.server.validate() {
            tracing::error!(error = %e, "Server configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        // A failed build still serves, so /ping can report not_ready
        let state = match PiiAnonymizer::new(config.anonymization.clone()) {
            Ok(anonymizer) => AppState::ready(Arc::new(anonymizer), config.server.max_batch_size),
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize anonymizer");
                AppState::not_ready(config.server.max_batch_size)
            }
        };

        let shutdown = async move {
            // A dropped sender also ends the wait
            let _ = shutdown_signal.wait_for(|stop| *stop).await;
            tracing::info!("Shutdown requested, draining in-flight requests");
        };

        server::serve(&config.server.bind_address(), state, shutdown).await?;
        Ok(0)
    }
}
