//! Serve command
//!
//! Runs the TCP game server on a tokio runtime until interrupted.

use crate::server::{ServerConfig, run_server};
use crate::service::GameService;
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// Start the server and block until Ctrl-C or a listener failure
///
/// # Errors
///
/// Returns an error if the runtime cannot start or the server fails.
pub fn run_serve(config: ServerConfig, dictionary: Dictionary) -> Result<()> {
    let service = Arc::new(GameService::new(dictionary, config.service_config()));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;

    runtime.block_on(async move {
        tokio::select! {
            result = run_server(config, service, None) => result,
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                Ok(())
            }
        }
    })
}
